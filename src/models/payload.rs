//! Wire shape of the stress-level endpoint's JSON body.

use serde::{Deserialize, Serialize};

/// Four parallel arrays; index `i` across all of them describes one
/// measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressPayload {
    pub dates: Vec<String>,
    pub stress_levels: Vec<StressValue>,
    pub emotions: Vec<String>,
    pub image_data: Vec<String>,
}

/// The backend sends stress levels either as JSON numbers or as numeric
/// strings (`"0.2"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StressValue {
    Number(f64),
    Text(String),
}

impl StressValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StressValue::Number(value) => Some(*value),
            StressValue::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }

    pub fn raw(&self) -> String {
        match self {
            StressValue::Number(value) => value.to_string(),
            StressValue::Text(text) => text.clone(),
        }
    }
}
