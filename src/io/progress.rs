//! Progress display for floor reports

use crate::io::configuration::{MIN_PAIRS_FOR_PROGRESS, PROGRESS_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PAIR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one progress bar per floor while its pattern pairs are summarized
///
/// Disabled managers accept every call and draw nothing.
pub struct ProgressManager {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager; `enabled = false` suppresses all output
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Whether bars will be drawn
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begin tracking `pairs` summaries for `floor`
    ///
    /// Floors with too few pairs to be worth a bar are tracked silently.
    pub fn start_floor(&mut self, floor: &str, pairs: usize) {
        self.finish_floor();
        if !self.enabled || pairs < MIN_PAIRS_FOR_PROGRESS {
            return;
        }

        let bar = ProgressBar::new(pairs as u64);
        bar.set_style(PAIR_STYLE.clone());
        bar.set_message(floor.to_string());
        self.bar = Some(bar);
    }

    /// Report `completed` summaries for the current floor
    pub fn update(&self, completed: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(completed as u64);
        }
    }

    /// Position of the current bar, if one is shown
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Remove the current floor's bar
    pub fn finish_floor(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
