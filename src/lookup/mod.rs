//! Date → captured image resolution backing the "View Image" action.

use crate::models::{StressRecord, StressSeries};

/// Outcome of a lookup. A miss is an ordinary answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLookup<'a> {
    Found(&'a str),
    NotFound,
}

impl<'a> ImageLookup<'a> {
    pub fn image_ref(self) -> Option<&'a str> {
        match self {
            ImageLookup::Found(image_ref) => Some(image_ref),
            ImageLookup::NotFound => None,
        }
    }
}

/// Index of the first record whose `YYYY-MM-DD` date equals `formatted_date`.
pub fn position_of(formatted_date: &str, series: &StressSeries) -> Option<usize> {
    series
        .iter()
        .position(|record| record.formatted_date() == formatted_date)
}

/// Image reference for the first record dated `formatted_date`.
pub fn lookup<'a>(formatted_date: &str, series: &'a StressSeries) -> ImageLookup<'a> {
    match position_of(formatted_date, series).and_then(|index| series.get(index)) {
        Some(StressRecord { image_ref, .. }) => ImageLookup::Found(image_ref.as_str()),
        None => ImageLookup::NotFound,
    }
}
