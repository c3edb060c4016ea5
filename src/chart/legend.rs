use std::collections::HashSet;

use super::palette::{color_for, ChartColor};
use crate::models::Emotion;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub emotion: Emotion,
    pub color: ChartColor,
}

/// Emotions already shown in the legend for one chart build.
#[derive(Debug, Default)]
pub struct LegendState {
    seen: HashSet<Emotion>,
    entries: Vec<LegendEntry>,
}

impl LegendState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `emotion` unless it is already legended. Returns true on insert.
    pub fn record(&mut self, emotion: &Emotion) -> bool {
        if self.seen.contains(emotion) {
            return false;
        }
        self.seen.insert(emotion.clone());
        self.entries.push(LegendEntry {
            emotion: emotion.clone(),
            color: color_for(emotion),
        });
        true
    }

    /// Entries in first-occurrence order.
    pub fn into_entries(self) -> Vec<LegendEntry> {
        self.entries
    }
}
