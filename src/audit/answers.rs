use std::fmt;

use super::questions::{self, Question, QUESTIONS, QUESTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub const OPTIONS: [Answer; 2] = [Answer::Yes, Answer::No];

    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One slot per audit question, in [`QUESTIONS`] order. `None` means the
/// question has not been answered yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerSet {
    slots: [Option<Answer>; QUESTION_COUNT],
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the answer for `id`. Returns false for an unknown id.
    pub fn set(&mut self, id: &str, answer: Answer) -> bool {
        match questions::position(id) {
            Some(index) => {
                self.slots[index] = Some(answer);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<Answer> {
        questions::position(id).and_then(|index| self.slots[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static Question, Option<Answer>)> + '_ {
        QUESTIONS.iter().zip(self.slots.iter().copied())
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == QUESTION_COUNT
    }

    /// Share of answered questions, rounded to the nearest whole percent.
    pub fn progress_percent(&self) -> u32 {
        let answered = self.answered_count() as u32;
        let total = QUESTION_COUNT as u32;
        (answered * 100 + total / 2) / total
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
