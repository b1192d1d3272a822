//! Progress reporting for downloads.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use relget_core::ProgressReporter;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal progress for a single download.
///
/// Starts as an idle spinner; once the response arrives it becomes a byte bar
/// when the size is known, or a byte counter otherwise.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    pub fn new(enabled: bool, message: &str) -> Self {
        let bar = if enabled {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(message.to_string());
        Self { bar }
    }
}

impl ProgressReporter for DownloadProgress {
    fn begin(&self, total: Option<u64>) {
        match total {
            Some(total) => {
                self.bar.set_length(total);
                self.bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                        .unwrap()
                        .progress_chars("#>-"),
                );
            }
            None => {
                self.bar.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {msg} {bytes} ({bytes_per_sec})")
                        .unwrap(),
                );
            }
        }
        self.bar.enable_steady_tick(TICK_INTERVAL);
    }

    fn advance(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Helper to format bytes for display
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
