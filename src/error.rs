//! Error kinds for the fetch → series → chart → viewer pipeline.

use thiserror::Error;

/// Raised while shaping the backend payload into a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error(
        "field length mismatch: dates={dates}, stress_levels={stress_levels}, emotions={emotions}, image_data={image_data}"
    )]
    LengthMismatch {
        dates: usize,
        stress_levels: usize,
        emotions: usize,
        image_data: usize,
    },

    #[error("invalid date '{value}' at index {index}")]
    InvalidDate { index: usize, value: String },

    #[error("invalid stress level '{value}' at index {index}")]
    InvalidStressLevel { index: usize, value: String },
}

/// Every way the remote fetch can fail. The fetcher converts all of these
/// into "no data" before they reach the caller.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend answered with status {0}")]
    Status(u16),

    #[error("malformed JSON body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed response: {0}")]
    Malformed(#[from] SeriesError),
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no data to chart")]
    NoData,

    #[error("chart rendering failed: {0}")]
    Render(String),
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("viewer I/O error: {0}")]
    Io(#[from] std::io::Error),
}
