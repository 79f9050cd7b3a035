//! Operator-facing console output
//!
//! The workflow narrates progress through this trait so tests can capture
//! output instead of scraping stdout.

pub mod display;

pub use display::{ConsoleInteraction, RecordingInteraction};

/// Trait for operator-facing messages.
pub trait UserInteraction: Send + Sync {
    /// Plain informational message.
    fn info(&self, message: &str);

    /// Success message (green on a terminal).
    fn success(&self, message: &str);

    /// Error message (red, stderr on a terminal).
    fn error(&self, message: &str);
}
