use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::SeriesError;
use crate::models::{Emotion, StressPayload, StressRecord, StressSeries};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Zip the four parallel payload fields into a series.
///
/// Lengths are checked up front so a short field surfaces as
/// [`SeriesError::LengthMismatch`] instead of a silently truncated series.
/// Stress levels must be finite; `inf`/`NaN` rows are rejected.
pub fn build_series(payload: StressPayload) -> Result<StressSeries, SeriesError> {
    let StressPayload {
        dates,
        stress_levels,
        emotions,
        image_data,
    } = payload;

    let expected = dates.len();
    if stress_levels.len() != expected || emotions.len() != expected || image_data.len() != expected
    {
        return Err(SeriesError::LengthMismatch {
            dates: dates.len(),
            stress_levels: stress_levels.len(),
            emotions: emotions.len(),
            image_data: image_data.len(),
        });
    }

    let mut records = Vec::with_capacity(expected);
    let fields = dates
        .into_iter()
        .zip(stress_levels)
        .zip(emotions)
        .zip(image_data)
        .enumerate();

    for (index, (((date, level), emotion), image_ref)) in fields {
        let date = parse_date(&date).ok_or(SeriesError::InvalidDate { index, value: date })?;
        let stress_level = level
            .as_f64()
            .filter(|value| value.is_finite())
            .ok_or_else(|| SeriesError::InvalidStressLevel {
                index,
                value: level.raw(),
            })?;

        records.push(StressRecord {
            date,
            stress_level,
            emotion: Emotion::from(emotion),
            image_ref,
        });
    }

    Ok(StressSeries::new(records))
}

/// Parse a backend date into a calendar date.
///
/// Plain `YYYY-MM-DD` is the normal form; timestamps (space or `T`
/// separated, or RFC 3339) are truncated to their date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, crate::models::DATE_FORMAT) {
        return Some(date);
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.date_naive())
}
