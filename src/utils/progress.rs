//! Spinner shown while a corpus is fetched and indexed.
//! Becomes a no-op when the `progress` feature is disabled.

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

/// A status spinner on stderr; silent spinners draw nothing
pub struct Spinner {
    #[cfg(feature = "progress")]
    bar: Option<ProgressBar>,
}

#[cfg(feature = "progress")]
impl Spinner {
    pub fn start(message: &str, silent: bool) -> Self {
        if silent {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    pub fn finish(self, message: &str) {
        if let Some(bar) = self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    /// Remove the spinner line without leaving a message
    pub fn clear(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(not(feature = "progress"))]
impl Spinner {
    pub fn start(_message: &str, _silent: bool) -> Self {
        Spinner {}
    }

    pub fn set_message(&self, _message: &str) {}
    pub fn finish(self, _message: &str) {}
    pub fn clear(self) {}
}
