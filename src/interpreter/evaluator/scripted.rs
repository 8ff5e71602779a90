use std::collections::VecDeque;

use crate::interpreter::evaluator::core::{Notifier, ValueSource};

/// A [`ValueSource`] that replays pre-recorded answers.
///
/// Each answer is `Some(text)` for typed text or `None` for a cancelled
/// prompt. Once the answers run out every further request is cancelled.
/// The names asked for are recorded in order.
///
/// # Example
/// ```
/// use cplx::interpreter::evaluator::{core::ValueSource, scripted::ScriptedSource};
///
/// let mut source = ScriptedSource::new(["3", "1+i"]);
/// assert_eq!(source.request_value("x").as_deref(), Some("3"));
/// assert_eq!(source.request_value("y").as_deref(), Some("1+i"));
/// assert_eq!(source.request_value("z"), None);
/// assert_eq!(source.requested(), ["x", "y", "z"]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedSource {
    answers:   VecDeque<Option<String>>,
    requested: Vec<String>,
}

impl ScriptedSource {
    /// Creates a source that answers with each text in turn.
    pub fn new<I, S>(answers: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { answers:   answers.into_iter().map(|a| Some(a.into())).collect(),
               requested: Vec::new(), }
    }

    /// Appends a cancelled prompt to the remaining answers.
    #[must_use]
    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Names requested so far, in order.
    #[must_use]
    pub fn requested(&self) -> &[String] {
        &self.requested
    }
}

impl ValueSource for ScriptedSource {
    fn request_value(&mut self, name: &str) -> Option<String> {
        self.requested.push(name.to_string());
        self.answers.pop_front().flatten()
    }
}

/// A [`Notifier`] that keeps every message it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// Messages received so far, with their error flag.
    pub messages: Vec<(String, bool)>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, without their error flag.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|(text, _)| text.as_str())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, is_error: bool) {
        self.messages.push((message.to_string(), is_error));
    }
}
