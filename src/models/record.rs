use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pattern used for sidebar entries and image lookups.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Emotion detected alongside a stress measurement.
///
/// The backend emits a closed set of labels; anything else is kept verbatim
/// in `Other` so it can still be charted and legended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Emotion {
    Happy,
    Neutral,
    Surprise,
    Sad,
    Disgust,
    Angry,
    Fear,
    Other(String),
}

impl Emotion {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Happy" => Emotion::Happy,
            "Neutral" => Emotion::Neutral,
            "Surprise" => Emotion::Surprise,
            "Sad" => Emotion::Sad,
            "Disgust" => Emotion::Disgust,
            "Angry" => Emotion::Angry,
            "Fear" => Emotion::Fear,
            other => Emotion::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Neutral => "Neutral",
            Emotion::Surprise => "Surprise",
            Emotion::Sad => "Sad",
            Emotion::Disgust => "Disgust",
            Emotion::Angry => "Angry",
            Emotion::Fear => "Fear",
            Emotion::Other(label) => label.as_str(),
        }
    }
}

impl From<String> for Emotion {
    fn from(label: String) -> Self {
        Emotion::from_label(&label)
    }
}

impl From<Emotion> for String {
    fn from(emotion: Emotion) -> Self {
        emotion.as_str().to_string()
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measurement point for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressRecord {
    pub date: NaiveDate,
    pub stress_level: f64,
    pub emotion: Emotion,
    /// Opaque reference to the captured image, usually a filesystem path.
    pub image_ref: String,
}

impl StressRecord {
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Measurements in backend order (ascending by date as supplied).
///
/// Built once per fetch and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressSeries {
    records: Vec<StressRecord>,
}

impl StressSeries {
    pub fn new(records: Vec<StressRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StressRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StressRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StressRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dates rendered with [`DATE_FORMAT`], in series order.
    pub fn formatted_dates(&self) -> Vec<String> {
        self.records.iter().map(StressRecord::formatted_date).collect()
    }

    /// `(min, max)` stress level, or `None` for an empty series.
    pub fn stress_range(&self) -> Option<(f64, f64)> {
        let mut levels = self.records.iter().map(|r| r.stress_level);
        let first = levels.next()?;
        Some(levels.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl<'a> IntoIterator for &'a StressSeries {
    type Item = &'a StressRecord;
    type IntoIter = std::slice::Iter<'a, StressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
