//! Progress bar display for batch installations

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a batch install run
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with the total capability count
    pub fn new(total: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total);
        bar.set_style(style);

        Self { bar }
    }

    /// Update to show the capability currently being installed
    pub fn update(&self, display_name: &str) {
        self.bar.set_message(truncate_name(display_name));
    }

    /// Increment after an attempt completes
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar so the report prints cleanly below it
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Truncate long names for display, counting chars rather than bytes so
/// multibyte names never split mid-character.
fn truncate_name(display_name: &str) -> String {
    if display_name.chars().count() > 50 {
        let truncated: String = display_name.chars().take(47).collect();
        format!("{truncated}...")
    } else {
        display_name.to_string()
    }
}
