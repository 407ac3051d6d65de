//! Step progress reporting for a single generation run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Steps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the fixed step count of one generation run
///
/// A run over an n-cell grid takes exactly `2n - 1` steps, so the bar length
/// is known up front.
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a bar spanning the given total step count
    pub fn new(total_steps: usize) -> Self {
        let bar = ProgressBar::new(total_steps as u64);
        bar.set_style(STEP_STYLE.clone());
        Self { bar }
    }

    /// Report one completed step
    pub fn step(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
