// src/progress.rs
/// Lightweight progress reporting for the page-by-page crawls.
/// The CLI draws a bar; tests and library callers pass nothing.
pub trait Progress {
    /// Called at the start with the total number of pages (if known).
    fn begin(&mut self, _total: usize) {}

    /// One page fetched and extracted.
    fn item_done(&mut self, _url: &str) {}

    /// One page skipped (transport failure).
    fn item_failed(&mut self, _url: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

#[cfg(feature = "cli")]
pub use console::ConsoleProgress;

#[cfg(feature = "cli")]
mod console {
    use indicatif::{ProgressBar, ProgressStyle};

    use super::Progress;

    const TEMPLATE: &str = "[{bar:40.green/dim}] {pos}/{len} {msg}";

    /// Progress bar on stderr: `[████░░] 12/694 1 failed`.
    pub struct ConsoleProgress {
        bar: ProgressBar,
        failed: usize,
    }

    impl ConsoleProgress {
        pub fn new() -> Self {
            let bar = ProgressBar::new(0);
            let style = ProgressStyle::with_template(TEMPLATE)
                .map(|s| s.progress_chars("█▓░"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style);
            Self { bar, failed: 0 }
        }
    }

    impl Default for ConsoleProgress {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Progress for ConsoleProgress {
        fn begin(&mut self, total: usize) {
            self.failed = 0;
            self.bar.reset();
            self.bar.set_message("");
            self.bar.set_length(total as u64);
        }
        fn item_done(&mut self, _url: &str) {
            self.bar.inc(1);
        }
        fn item_failed(&mut self, _url: &str) {
            self.failed += 1;
            self.bar.set_message(format!("{} failed", self.failed));
            self.bar.inc(1);
        }
        fn finish(&mut self) {
            self.bar.finish_and_clear();
        }
    }

}
