use std::io::{BufRead, Write};

use super::commands::{parse_selection, ViewerCommand};
use super::display::ImageDisplay;
use super::{NO_IMAGE_MESSAGE, NO_IMAGE_TITLE, SIDEBAR_HEADING, VIEW_ACTION_LABEL};
use crate::error::ViewerError;
use crate::lookup::{lookup, ImageLookup};
use crate::models::StressSeries;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

/// Contents of the date-selection sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub heading: &'static str,
    pub dates: Vec<String>,
    pub action_label: &'static str,
}

/// One chart session for one user's series.
pub struct ViewerSession {
    series: StressSeries,
}

impl ViewerSession {
    pub fn new(series: StressSeries) -> Self {
        Self { series }
    }

    pub fn series(&self) -> &StressSeries {
        &self.series
    }

    pub fn sidebar(&self) -> Sidebar {
        Sidebar {
            heading: SIDEBAR_HEADING,
            dates: self.series.formatted_dates(),
            action_label: VIEW_ACTION_LABEL,
        }
    }

    /// Apply one command. Lookup misses and unreadable images become
    /// notices; the session stays open for both.
    pub fn dispatch<D: ImageDisplay>(&self, command: ViewerCommand, display: &mut D) -> SessionState {
        let selected = match command {
            ViewerCommand::Close => {
                display.close_image();
                return SessionState::Closed;
            }
            ViewerCommand::ViewImage(date) => Some(date),
            ViewerCommand::ViewEntry(entry) => entry
                .checked_sub(1)
                .and_then(|index| self.series.get(index))
                .map(|record| record.formatted_date()),
        };

        let hit = selected
            .as_deref()
            .map(|date| lookup(date, &self.series))
            .unwrap_or(ImageLookup::NotFound);

        match hit {
            ImageLookup::Found(image_ref) => {
                if let Err(err) = display.show_image(image_ref) {
                    log_error!("Failed to show image {}: {err}", image_ref);
                    display.show_notice(NO_IMAGE_TITLE, &err.to_string());
                }
            }
            ImageLookup::NotFound => {
                log_info!("No image for selection {:?}", selected);
                display.show_notice(NO_IMAGE_TITLE, NO_IMAGE_MESSAGE);
            }
        }
        SessionState::Open
    }

    /// Print the sidebar to `out`, then read selections from `input` until
    /// the user closes the session or input ends.
    pub fn run_interactive<R, W, D>(&self, input: R, out: &mut W, display: &mut D) -> Result<(), ViewerError>
    where
        R: BufRead,
        W: Write,
        D: ImageDisplay,
    {
        let sidebar = self.sidebar();
        writeln!(out, "{}", sidebar.heading)?;
        for (index, date) in sidebar.dates.iter().enumerate() {
            writeln!(out, "  {:>2}. {date}", index + 1)?;
        }
        writeln!(
            out,
            "{}: enter a date or entry number, 'q' to close",
            sidebar.action_label
        )?;
        out.flush()?;

        for line in input.lines() {
            let Some(command) = parse_selection(&line?) else {
                continue;
            };
            if self.dispatch(command, display) == SessionState::Closed {
                return Ok(());
            }
        }

        display.close_image();
        Ok(())
    }
}
