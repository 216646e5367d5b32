use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

pub struct ProgressReporter {
    multi_progress: Arc<MultiProgress>,
    check_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: Arc::new(MultiProgress::new()),
            check_progress: None,
            enabled,
        }
    }

    pub fn start_checks(&mut self, total_targets: usize) {
        if !self.enabled {
            return;
        }

        let pb = self
            .multi_progress
            .add(ProgressBar::new(total_targets as u64));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} sites checked ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Checking sites");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.check_progress = Some(pb);
    }

    pub fn update_check_progress(&self, current: usize) {
        if let Some(ref pb) = self.check_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_checks(&self, success_count: usize, total_count: usize) {
        if let Some(ref pb) = self.check_progress {
            let message = if success_count == total_count {
                "✓ All sites reachable".to_string()
            } else {
                format!("✓ Checks complete ({success_count}/{total_count} reachable)")
            };
            pb.finish_with_message(message);
        }
    }

    pub fn finish_and_clear(&self) {
        if self.enabled {
            // Clear the progress bars and add a blank line
            self.multi_progress.clear().unwrap_or(());
            println!();
        }
    }

    pub fn log_warning(&self, message: &str) {
        if self.enabled {
            self.multi_progress
                .println(format!("⚠ {message}"))
                .unwrap_or(());
        }
    }
}
