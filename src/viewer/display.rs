use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, GenericImageView};

use super::IMAGE_WINDOW_TITLE;
use crate::error::ViewerError;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Capability to put images and notices in front of the user.
pub trait ImageDisplay {
    fn show_image(&mut self, image_ref: &str) -> Result<(), ViewerError>;

    fn show_notice(&mut self, title: &str, message: &str);

    /// Release whatever the currently shown image holds.
    fn close_image(&mut self) {}
}

/// A decoded image held for as long as its window is open.
#[derive(Debug)]
pub struct OpenImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl OpenImage {
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let image = image::open(path).map_err(|source| ViewerError::ImageLoad {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Text-mode display: notices and image details go to `out`, and the image
/// file is optionally handed to the platform viewer.
pub struct TerminalDisplay<W: Write> {
    out: W,
    launch_viewer: bool,
    current: Option<OpenImage>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, launch_viewer: bool) -> Self {
        Self {
            out,
            launch_viewer,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&OpenImage> {
        self.current.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ImageDisplay for TerminalDisplay<W> {
    fn show_image(&mut self, image_ref: &str) -> Result<(), ViewerError> {
        let opened = OpenImage::load(Path::new(image_ref))?;
        let (width, height) = opened.dimensions();
        writeln!(
            self.out,
            "[{IMAGE_WINDOW_TITLE}] {} ({width}x{height})",
            opened.path.display()
        )?;

        if self.launch_viewer {
            if let Err(err) = open_externally(&opened.path) {
                log_warn!("Could not launch image viewer for {}: {err}", opened.path.display());
            }
        }

        // Replacing drops the previously open image.
        self.current = Some(opened);
        log_info!("Showing image {}", image_ref);
        Ok(())
    }

    fn show_notice(&mut self, title: &str, message: &str) {
        if writeln!(self.out, "[{title}] {message}").is_err() {
            log_warn!("Failed to write notice '{}'", title);
        }
    }

    fn close_image(&mut self) {
        self.current = None;
    }
}

fn open_externally(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    command.arg(path).spawn().map(|_| ())
}
