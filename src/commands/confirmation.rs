//! Yes/no gate placed in front of destructive actions.
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub text: String,
}

impl Prompt {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn delete_line() -> Self {
        Self::new(
            "Deleting an input line",
            "The line already contains data. Are you sure you want to delete this input line?",
        )
    }

    pub fn delete_all() -> Self {
        Self::new(
            "Deleting all input lines",
            "Are you sure you want to delete all input lines?",
        )
    }
}

/// Blocking modal choice: `true` confirms, `false` cancels.
pub trait ConfirmationGate {
    fn request(&mut self, prompt: &Prompt) -> bool;
}

/// Runs `action` exactly once if the gate confirms; on cancel nothing runs.
pub fn confirm_then<T>(
    gate: &mut dyn ConfirmationGate,
    prompt: &Prompt,
    action: impl FnOnce() -> T,
) -> Option<T> {
    if gate.request(prompt) {
        Some(action())
    } else {
        debug!("`{}` cancelled", prompt.title);
        None
    }
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmationGate for FixedAnswer {
    fn request(&mut self, _prompt: &Prompt) -> bool {
        self.0
    }
}

/// Answers from a queue and remembers what it was asked. An exhausted queue cancels.
#[derive(Debug, Default)]
pub struct ScriptedGate {
    answers: VecDeque<bool>,
    pub prompts: Vec<Prompt>,
}

impl ScriptedGate {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn push(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }
}

impl ConfirmationGate for ScriptedGate {
    fn request(&mut self, prompt: &Prompt) -> bool {
        self.prompts.push(prompt.clone());
        self.answers.pop_front().unwrap_or(false)
    }
}
