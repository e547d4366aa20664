use tracing::{error, info};

/// User-facing message sink. One analysis action produces at most one
/// success or one error notification; log lines are separate.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

#[cfg(test)]
pub struct RecordingNotifier {
    pub successes: std::cell::RefCell<Vec<String>>,
    pub errors: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            successes: std::cell::RefCell::new(Vec::new()),
            errors: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
