//! Draws a [`StressChart`] to disk with plotters.

use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use super::annotate::{LabelPlacement, MarkerShape, StressChart};
use super::palette::ChartColor;
use crate::error::ChartError;

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const FONT: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    /// SVG for `.svg` paths, PNG for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartFormat::Svg,
            _ => ChartFormat::Png,
        }
    }
}

pub fn render_to_file(chart: &StressChart, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
    let drawn = match ChartFormat::from_path(path) {
        ChartFormat::Png => draw_chart(BitMapBackend::new(path, size).into_drawing_area(), chart),
        ChartFormat::Svg => draw_chart(SVGBackend::new(path, size).into_drawing_area(), chart),
    };
    drawn.map_err(|err| ChartError::Render(format!("{err:#}")))
}

fn rgb(color: ChartColor) -> RGBColor {
    let (r, g, b) = color.rgb;
    RGBColor(r, g, b)
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// plotters only rotates text in quarter turns; snap to the nearest one.
fn tick_transform(degrees: f64) -> FontTransform {
    match ((degrees / 90.0).round() as i64).rem_euclid(4) {
        1 => FontTransform::Rotate90,
        2 => FontTransform::Rotate180,
        3 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

fn draw_chart<DB>(root: DrawingArea<DB, plotters::coord::Shift>, chart: &StressChart) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let ticks: Vec<f64> = chart.x_ticks.iter().copied().map(day_number).collect();
    let first = ticks.iter().copied().fold(f64::INFINITY, f64::min);
    let last = ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((last - first) * 0.05).max(0.5);
    let (y_min, y_max) = (chart.y_bounds.min, chart.y_bounds.max);

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title, (FONT, 22))
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d((first - pad)..(last + pad), y_min..y_max)?;

    // Date ticks are drawn by hand below so they land exactly on each record.
    let blank_x = |_: &f64| String::new();
    let y_fmt = |v: &f64| format!("{v:.2}");
    let mut mesh = ctx.configure_mesh();
    mesh.disable_x_mesh()
        .x_label_formatter(&blank_x)
        .y_label_formatter(&y_fmt)
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .axis_desc_style((FONT, 16));
    if !chart.grid {
        mesh.disable_y_mesh();
    }
    mesh.draw()?;

    if chart.grid {
        for x in &ticks {
            ctx.draw_series(LineSeries::new(vec![(*x, y_min), (*x, y_max)], &BLACK.mix(0.1)))?;
        }
    }

    ctx.draw_series(LineSeries::new(
        chart.line.iter().map(|(date, y)| (day_number(*date), *y)),
        &LINE_COLOR,
    ))?
    .label(chart.line_label)
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR));

    for entry in &chart.legend {
        let color = rgb(entry.color);
        ctx.draw_series(std::iter::empty::<Circle<(f64, f64), u32>>())?
            .label(entry.emotion.to_string())
            .legend(move |(x, y)| Circle::new((x + 10, y), 5u32, color.filled()));
    }

    ctx.draw_series(chart.markers.iter().map(|marker| match marker.shape {
        MarkerShape::Circle => Circle::new(
            (day_number(marker.date), marker.stress_level),
            marker.size,
            rgb(marker.color).filled(),
        ),
    }))?;

    for annotation in &chart.annotations {
        let anchor = match annotation.placement {
            LabelPlacement::Above => Pos::new(HPos::Center, VPos::Bottom),
            LabelPlacement::Below => Pos::new(HPos::Center, VPos::Top),
        };
        let style = (FONT, 13)
            .into_font()
            .color(&rgb(annotation.color))
            .pos(anchor);
        ctx.draw_series(std::iter::once(Text::new(
            annotation.text.clone(),
            (day_number(annotation.date), annotation.y),
            style,
        )))?;
    }

    let rotation = tick_transform(chart.tick_rotation_degrees);
    let tick_anchor = match rotation {
        FontTransform::None => Pos::new(HPos::Center, VPos::Top),
        _ => Pos::new(HPos::Left, VPos::Center),
    };
    let tick_style = (FONT, 12)
        .into_font()
        .transform(rotation)
        .color(&BLACK)
        .pos(tick_anchor);
    for (x, label) in ticks.iter().zip(chart.tick_labels()) {
        let (px, py) = ctx.backend_coord(&(*x, y_min));
        root.draw(&Text::new(label, (px, py + 6), tick_style.clone()))?;
    }

    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}
