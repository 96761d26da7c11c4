//! Progress bar management for generation and merging

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Drives one progress bar per pipeline phase
///
/// The generation phase additionally surfaces the collision count in the bar
/// prefix so long retry stretches are visible rather than silent.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active phase
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Begin a phase with a fixed number of steps
    pub fn start_phase(&mut self, label: &str, total: u64) {
        self.finish_phase();
        let bar = ProgressBar::new(total);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    /// Advance the active phase by one step
    pub fn advance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Surface the running collision count during generation
    pub fn note_collisions(&self, collisions: u64) {
        if collisions == 0 {
            return;
        }
        if let Some(ref bar) = self.bar {
            bar.set_prefix(format!("({collisions} collisions)"));
        }
    }

    /// Complete and clear the active phase bar
    pub fn finish_phase(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
