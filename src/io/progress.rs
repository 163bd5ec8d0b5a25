//! Progress display for long-running grid operations

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks cells processed by a single operation
///
/// A hidden tracker accepts the same calls and draws nothing, so callers do not
/// need to branch on `--quiet`.
pub struct CellProgress {
    bar: ProgressBar,
}

impl CellProgress {
    /// Create a visible progress bar for `total` cells
    pub fn new(total: usize, message: &str) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(CELL_STYLE.clone());
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Create a tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the number of cells processed so far
    pub fn set_position(&self, processed: u64) {
        self.bar.set_position(processed);
    }

    /// Cells reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total cells expected
    pub fn length(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
