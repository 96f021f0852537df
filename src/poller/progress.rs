// file: src/poller/progress.rs
// description: terminal progress bar rendering for a polled processing job
// reference: uses indicatif for progress bars

use super::JobProgress;
use crate::models::ProcessingStatus;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Renders the 0-100 progress of one processing job as a terminal bar.
pub struct ProgressRenderer {
    bar: ProgressBar,
}

impl ProgressRenderer {
    pub fn new(colored: bool) -> Self {
        let bar = ProgressBar::new(100);
        if colored {
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                    .expect("Failed to create progress bar template")
                    .progress_chars("█▓▒░"),
            );
        } else {
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}% {msg}")
                    .expect("Failed to create progress bar template")
                    .progress_chars("=>-"),
            );
        }
        Self { bar }
    }

    pub fn update(&self, progress: &JobProgress) {
        self.bar.set_position(progress.progress_percent as u64);
        self.bar.set_message(progress.status.label());
    }

    /// Final render once a terminal status lands.
    pub fn finish(&self, progress: &JobProgress) {
        self.update(progress);
        match progress.status {
            ProcessingStatus::Complete => {
                self.bar.finish_with_message("Analysis complete".to_string());
            }
            ProcessingStatus::Error => {
                let detail = progress
                    .error_detail
                    .clone()
                    .unwrap_or_else(|| "processing failed".to_string());
                self.bar.abandon_with_message(format!("{}", detail.red()));
            }
            _ => self.bar.finish_and_clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(status: ProcessingStatus, percent: u8) -> JobProgress {
        JobProgress {
            status,
            progress_percent: percent,
            is_processing: !status.is_terminal(),
            error_detail: None,
        }
    }

    #[test]
    fn test_renderer_tracks_percent() {
        let renderer = ProgressRenderer::new(false);
        renderer.update(&progress(ProcessingStatus::Analyzing, 50));
        assert_eq!(renderer.bar.position(), 50);
    }

    #[test]
    fn test_finish_on_complete() {
        let renderer = ProgressRenderer::new(true);
        renderer.finish(&progress(ProcessingStatus::Complete, 100));
        assert!(renderer.bar.is_finished());
    }
}
