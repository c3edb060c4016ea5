use chrono::NaiveDate;

use super::legend::{LegendEntry, LegendState};
use super::palette::{color_for, ChartColor, BLACK};
use crate::error::ChartError;
use crate::models::{StressSeries, DATE_FORMAT};

pub const WINDOW_TITLE: &str = "Stress Level Chart";
pub const CHART_TITLE: &str = "User Stress Level Change Over 30 Days";
pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "Stress Level";
pub const LINE_LABEL: &str = "Stress Level";

/// Headroom added below the lowest and above the highest stress level.
pub const Y_PADDING: f64 = 0.1;
/// Vertical distance between a point and its text labels.
pub const LABEL_OFFSET: f64 = 0.05;
pub const TICK_ROTATION_DEGREES: f64 = 45.0;
pub const MARKER_SIZE: u32 = 5;
pub const MARKER_SHAPE: MarkerShape = MarkerShape::Circle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub date: NaiveDate,
    pub stress_level: f64,
    pub color: ChartColor,
    pub shape: MarkerShape,
    pub size: u32,
}

/// Which side of its anchor point a label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub date: NaiveDate,
    pub y: f64,
    pub text: String,
    pub color: ChartColor,
    pub placement: LabelPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

/// Everything a renderer needs to draw one stress chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StressChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub line_label: &'static str,
    /// Line vertices in series order, drawn without markers.
    pub line: Vec<(NaiveDate, f64)>,
    pub markers: Vec<Marker>,
    pub annotations: Vec<Annotation>,
    pub legend: Vec<LegendEntry>,
    pub x_ticks: Vec<NaiveDate>,
    pub tick_rotation_degrees: f64,
    pub y_bounds: AxisBounds,
    pub grid: bool,
}

impl StressChart {
    pub fn tick_labels(&self) -> Vec<String> {
        self.x_ticks
            .iter()
            .map(|date| date.format(DATE_FORMAT).to_string())
            .collect()
    }
}

/// Y range that keeps every point and its labels visible.
///
/// A flat series (min == max) still gets the padding and renders as a
/// flat line.
pub fn y_bounds(series: &StressSeries) -> Option<AxisBounds> {
    series.stress_range().map(|(lo, hi)| AxisBounds {
        min: lo - Y_PADDING,
        max: hi + Y_PADDING,
    })
}

/// Lay out the emotion-annotated chart for `series`.
pub fn annotate(series: &StressSeries) -> Result<StressChart, ChartError> {
    let y_bounds = y_bounds(series).ok_or(ChartError::NoData)?;

    let mut legend = LegendState::new();
    let mut markers = Vec::with_capacity(series.len());
    let mut annotations = Vec::with_capacity(series.len() * 2);

    for record in series {
        legend.record(&record.emotion);
        let color = color_for(&record.emotion);

        markers.push(Marker {
            date: record.date,
            stress_level: record.stress_level,
            color,
            shape: MARKER_SHAPE,
            size: MARKER_SIZE,
        });
        annotations.push(Annotation {
            date: record.date,
            y: record.stress_level + LABEL_OFFSET,
            text: record.emotion.to_string(),
            color,
            placement: LabelPlacement::Above,
        });
        annotations.push(Annotation {
            date: record.date,
            y: record.stress_level - LABEL_OFFSET,
            text: format!("{:.4}", record.stress_level),
            color: BLACK,
            placement: LabelPlacement::Below,
        });
    }

    Ok(StressChart {
        title: CHART_TITLE,
        x_label: X_LABEL,
        y_label: Y_LABEL,
        line_label: LINE_LABEL,
        line: series.iter().map(|r| (r.date, r.stress_level)).collect(),
        markers,
        annotations,
        legend: legend.into_entries(),
        x_ticks: series.iter().map(|r| r.date).collect(),
        tick_rotation_degrees: TICK_ROTATION_DEGREES,
        y_bounds,
        grid: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::palette::{FALLBACK_COLOR, GREEN, RED};
    use crate::models::{Emotion, StressRecord};

    fn series(points: &[(u32, f64, &str)]) -> StressSeries {
        StressSeries::new(
            points
                .iter()
                .map(|(day, level, emotion)| StressRecord {
                    date: NaiveDate::from_ymd_opt(2024, 1, *day).unwrap(),
                    stress_level: *level,
                    emotion: Emotion::from_label(emotion),
                    image_ref: format!("/{day}.png"),
                })
                .collect(),
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn two_points_pad_bounds_and_legend_each_emotion() {
        let chart = annotate(&series(&[(1, 0.2, "Happy"), (2, 0.8, "Angry")])).unwrap();

        assert!(close(chart.y_bounds.min, 0.1));
        assert!(close(chart.y_bounds.max, 0.9));
        assert_eq!(chart.legend.len(), 2);
        assert_eq!(chart.legend[0].emotion, Emotion::Happy);
        assert_eq!(chart.legend[0].color, GREEN);
        assert_eq!(chart.legend[1].emotion, Emotion::Angry);
        assert_eq!(chart.legend[1].color, RED);
        assert_eq!(chart.tick_labels(), vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(chart.tick_rotation_degrees, 45.0);
        assert!(chart.grid);
    }

    #[test]
    fn legend_never_repeats_a_category() {
        let chart = annotate(&series(&[
            (1, 0.3, "Sad"),
            (2, 0.4, "Happy"),
            (3, 0.5, "Sad"),
            (4, 0.6, "Happy"),
            (5, 0.2, "Fear"),
        ]))
        .unwrap();
        let names: Vec<String> = chart.legend.iter().map(|e| e.emotion.to_string()).collect();
        assert_eq!(names, vec!["Sad", "Happy", "Fear"]);
        assert_eq!(chart.markers.len(), 5);
    }

    #[test]
    fn unknown_emotion_uses_fallback_and_is_legended_once() {
        let chart = annotate(&series(&[(1, 0.3, "Unknown"), (2, 0.4, "Unknown")])).unwrap();
        assert_eq!(chart.legend.len(), 1);
        assert_eq!(chart.legend[0].color, FALLBACK_COLOR);
        assert!(chart.markers.iter().all(|m| m.color == FALLBACK_COLOR));
        assert_eq!(chart.annotations[0].text, "Unknown");
    }

    #[test]
    fn markers_share_size_and_shape() {
        let chart = annotate(&series(&[(1, 0.3, "Sad"), (2, 0.9, "Angry"), (3, 0.1, "Other")])).unwrap();
        assert!(chart
            .markers
            .iter()
            .all(|m| m.size == MARKER_SIZE && m.shape == MarkerShape::Circle));
    }

    #[test]
    fn labels_sit_above_and_below_each_point() {
        let chart = annotate(&series(&[(1, 0.123456, "Happy")])).unwrap();
        let above = &chart.annotations[0];
        let below = &chart.annotations[1];

        assert_eq!(above.placement, LabelPlacement::Above);
        assert_eq!(above.text, "Happy");
        assert_eq!(above.color, GREEN);
        assert!(close(above.y, 0.123456 + LABEL_OFFSET));

        assert_eq!(below.placement, LabelPlacement::Below);
        assert_eq!(below.text, "0.1235");
        assert!(close(below.y, 0.123456 - LABEL_OFFSET));
    }

    #[test]
    fn bounds_follow_each_series() {
        let low = annotate(&series(&[(1, 0.0, "Happy"), (2, 0.25, "Sad")])).unwrap();
        let high = annotate(&series(&[(1, 0.75, "Happy"), (2, 1.0, "Sad")])).unwrap();
        assert!(close(low.y_bounds.min, -0.1));
        assert!(close(low.y_bounds.max, 0.35));
        assert!(close(high.y_bounds.min, 0.65));
        assert!(close(high.y_bounds.max, 1.1));
    }

    #[test]
    fn flat_series_keeps_padding() {
        let chart = annotate(&series(&[(1, 0.5, "Neutral"), (2, 0.5, "Neutral")])).unwrap();
        assert!(close(chart.y_bounds.min, 0.4));
        assert!(close(chart.y_bounds.max, 0.6));
        assert!(chart.line.iter().all(|(_, y)| *y == 0.5));
    }

    #[test]
    fn empty_series_is_no_data() {
        assert!(matches!(annotate(&StressSeries::default()), Err(ChartError::NoData)));
        assert!(y_bounds(&StressSeries::default()).is_none());
    }
}
