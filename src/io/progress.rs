//! Progress display and warnings for a collage run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many component images have been placed
///
/// Warnings are printed above the bar so they do not break its rendering.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar over `file_count` component images
    pub fn new(file_count: usize) -> Self {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Show the component currently being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one component as finished
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Print a warning line above the bar
    pub fn warn(&self, message: &str) {
        self.bar.println(format!("warning: {message}"));
    }

    /// Print the run summary and remove the bar
    pub fn finish(&self, summary: &str) {
        self.bar.println(summary);
        self.bar.finish_and_clear();
    }

    /// Number of components counted as finished
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
