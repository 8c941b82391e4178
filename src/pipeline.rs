use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::DEFAULT_WINDOW_TITLE;
use crate::engine::ImageBackend;
use crate::error::{DisplayError, LoadError};
use crate::state::ImageState;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub grayscale: bool,
    pub window_title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grayscale: false,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct ImageOutcome {
    pub path: PathBuf,
    pub state: ImageState,
    pub error: Option<LoadError>,
}

/// One outcome per input path, in input order.
#[derive(Debug, Default)]
pub struct DisplayReport {
    pub outcomes: Vec<ImageOutcome>,
}

impl DisplayReport {
    pub fn displayed(&self) -> usize {
        self.count(ImageState::Displayed)
    }

    pub fn skipped(&self) -> usize {
        self.count(ImageState::Skipped)
    }

    pub fn is_complete_success(&self) -> bool {
        self.skipped() == 0
    }

    /// Skipped paths with the error that caused each skip.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &LoadError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error.as_ref().map(|e| (o.path.as_path(), e)))
    }

    fn count(&self, state: ImageState) -> usize {
        self.outcomes.iter().filter(|o| o.state == state).count()
    }
}

/// Loads, optionally converts, and shows each image in order.
///
/// A path that fails to load is logged and skipped. Each buffer is dropped
/// before the next path is touched. A display failure ends the run.
pub fn display_images<B: ImageBackend>(
    backend: &mut B,
    paths: &[PathBuf],
    config: &DisplayConfig,
) -> Result<DisplayReport, DisplayError> {
    let mut report = DisplayReport::default();

    for (index, path) in paths.iter().enumerate() {
        let outcome = display_one(backend, path, config)?;
        debug!(index, path = %path.display(), state = ?outcome.state, "image finished");
        report.outcomes.push(outcome);
    }

    info!(
        total = paths.len(),
        displayed = report.displayed(),
        skipped = report.skipped(),
        "all images attempted"
    );
    Ok(report)
}

fn display_one<B: ImageBackend>(
    backend: &mut B,
    path: &Path,
    config: &DisplayConfig,
) -> Result<ImageOutcome, DisplayError> {
    let mut state = ImageState::Pending;

    let mut buffer = match backend.load(path) {
        Ok(buffer) => buffer,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = &e as &(dyn std::error::Error + 'static),
                "Failed to load image, skipping"
            );
            return Ok(ImageOutcome {
                path: path.to_path_buf(),
                state: ImageState::Skipped,
                error: Some(e),
            });
        }
    };
    state = advance(state, ImageState::Loaded);

    if config.grayscale {
        backend.to_grayscale(&mut buffer);
        state = advance(state, ImageState::Converted);
    }

    backend.show(&buffer, &config.window_title)?;
    state = advance(state, ImageState::Displayed);
    drop(buffer);

    Ok(ImageOutcome {
        path: path.to_path_buf(),
        state,
        error: None,
    })
}

fn advance(from: ImageState, to: ImageState) -> ImageState {
    debug_assert!(!from.is_terminal(), "{:?} is terminal", from);
    to
}
