//! User-facing message sinks.

/// Receives formatted messages meant for the user. Fire-and-forget.
pub trait Feedback {
    /// Print a normal message.
    fn print(&mut self, message: &str);

    /// Print a message without any decoration the sink would normally add.
    fn print_raw(&mut self, message: &str) {
        self.print(message);
    }
}

/// Captures messages, mostly for tests and scripted replays.
impl Feedback for Vec<String> {
    fn print(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Routes messages to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn print(&mut self, message: &str) {
        log::info!("{}", message);
    }
}
