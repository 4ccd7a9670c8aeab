//! Optional progress bar on stderr.

use crate::prober::CheckResult;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress indicator for long runs; a no-op when disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a progress bar for `total` checks.
    ///
    /// Nothing is drawn unless `enabled` and stderr is a terminal.
    pub fn new(total: usize, enabled: bool) -> Self {
        if !enabled || !console::Term::stderr().is_term() {
            return Self::disabled();
        }

        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr())
            .with_style(style);
        Self { bar: Some(bar) }
    }

    pub fn disabled() -> Self {
        Self { bar: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Run `f` with the bar hidden so its output isn't overdrawn.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.bar {
            Some(bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// Advance by one completed check.
    pub fn record(&self, result: &CheckResult) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            if !result.available {
                bar.set_message(format!("{} unavailable", result.address));
            }
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_progress_is_transparent() {
        let progress = Progress::new(3, false);
        assert!(!progress.is_enabled());
        assert_eq!(progress.suspend(|| 7), 7);
        progress.finish();
    }
}
