//! Emotion → colour table.

use crate::models::Emotion;

/// A named display colour. Names follow the CSS/matplotlib colour names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartColor {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

pub const GREEN: ChartColor = ChartColor { name: "green", rgb: (0, 128, 0) };
pub const ORANGE: ChartColor = ChartColor { name: "orange", rgb: (255, 165, 0) };
pub const RED: ChartColor = ChartColor { name: "red", rgb: (255, 0, 0) };
pub const PURPLE: ChartColor = ChartColor { name: "purple", rgb: (128, 0, 128) };
pub const BLACK: ChartColor = ChartColor { name: "black", rgb: (0, 0, 0) };

/// Colour for emotions missing from [`EMOTION_COLORS`].
pub const FALLBACK_COLOR: ChartColor = PURPLE;

pub const EMOTION_COLORS: [(&str, ChartColor); 7] = [
    ("Happy", GREEN),
    ("Neutral", GREEN),
    ("Surprise", ORANGE),
    ("Sad", ORANGE),
    ("Disgust", ORANGE),
    ("Angry", RED),
    ("Fear", RED),
];

pub fn color_for(emotion: &Emotion) -> ChartColor {
    let label = emotion.as_str();
    EMOTION_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}
