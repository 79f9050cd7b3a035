//! Console and recording implementations of [`UserInteraction`].

use super::UserInteraction;
use std::sync::{Arc, Mutex};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Real console output: plain info on stdout, green successes on stdout,
/// red errors on stderr.
#[derive(Default)]
pub struct ConsoleInteraction;

impl ConsoleInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl UserInteraction for ConsoleInteraction {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn success(&self, message: &str) {
        println!("{GREEN}{message}{RESET}");
    }

    fn error(&self, message: &str) {
        eprintln!("{RED}{message}{RESET}");
    }
}

/// Capturing double for tests: messages are recorded with a level prefix.
#[derive(Default)]
pub struct RecordingInteraction {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl UserInteraction for RecordingInteraction {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("INFO: {message}"));
    }

    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("SUCCESS: {message}"));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("ERROR: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_interaction_captures_levels_in_order() {
        let ui = RecordingInteraction::new();

        ui.info("fetching");
        ui.success("done");
        ui.error("boom");

        let messages = ui.messages();
        assert_eq!(
            messages,
            vec![
                "INFO: fetching".to_string(),
                "SUCCESS: done".to_string(),
                "ERROR: boom".to_string(),
            ]
        );
    }
}
