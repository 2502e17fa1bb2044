//! Spinner shown in the footer while a request is in flight

const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    message: String,
    frame: usize,
}

impl LoadingIndicator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            frame: 0,
        }
    }

    pub fn current_frame(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the message, keeping the animation position
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }
}
