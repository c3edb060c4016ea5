pub mod annotate;
pub mod legend;
pub mod palette;
pub mod render;

pub use annotate::{annotate, y_bounds, AxisBounds, StressChart, WINDOW_TITLE};
pub use legend::{LegendEntry, LegendState};
pub use palette::{color_for, ChartColor, FALLBACK_COLOR};
pub use render::{render_to_file, ChartFormat};
