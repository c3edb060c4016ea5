//! Sidebar, image window and notices around a fetched series.
//!
//! The chart itself is produced by [`crate::chart`]; this module owns the
//! interactive part: listing the dates, turning user input into
//! [`ViewerCommand`]s and handing lookup hits to an [`ImageDisplay`].

pub mod commands;
pub mod display;
pub mod session;

pub use commands::{parse_selection, ViewerCommand};
pub use display::{ImageDisplay, OpenImage, TerminalDisplay};
pub use session::{SessionState, Sidebar, ViewerSession};

pub const NO_DATA_TITLE: &str = "No Data";
pub const NO_DATA_MESSAGE: &str = "No data available. User is not login.";
pub const NO_IMAGE_TITLE: &str = "No Image";
pub const NO_IMAGE_MESSAGE: &str = "No image available for the selected date.";
pub const SIDEBAR_HEADING: &str = "Select Image by Date";
pub const VIEW_ACTION_LABEL: &str = "View Image";
pub const IMAGE_WINDOW_TITLE: &str = "Selected Image";
