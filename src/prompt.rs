//! Asking the user for a line of text.

use std::collections::VecDeque;

/// Source of text entered by the user.
pub trait TextPrompt {
    /// Ask for a string, pre-filled with `initial`.
    ///
    /// Returns `None` if the user cancelled.
    fn prompt_for_text(&mut self, initial: &str) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn prompt_for_text(&mut self, initial: &str) -> Option<String> {
        self(initial)
    }
}

/// Replays queued answers. Once the queue is empty every prompt is cancelled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer; `None` simulates a cancelled prompt.
    pub fn answer(mut self, text: Option<&str>) -> Self {
        self.answers.push_back(text.map(str::to_string));
        self
    }

    /// The initial values of every prompt shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl TextPrompt for ScriptedPrompt {
    fn prompt_for_text(&mut self, initial: &str) -> Option<String> {
        self.asked.push(initial.to_string());
        self.answers.pop_front().flatten()
    }
}
