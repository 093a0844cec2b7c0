use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four option slots of a generated question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 4] = [
        AnswerLetter::A,
        AnswerLetter::B,
        AnswerLetter::C,
        AnswerLetter::D,
    ];

    /// Case-folded single character lookup.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(AnswerLetter::A),
            'B' => Some(AnswerLetter::B),
            'C' => Some(AnswerLetter::C),
            'D' => Some(AnswerLetter::D),
            _ => None,
        }
    }

    /// Parses a submitted answer. Only an exact uppercase letter maps to a slot.
    pub fn parse(answer: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|letter| letter.as_str() == answer)
    }

    pub fn index(self) -> usize {
        match self {
            AnswerLetter::A => 0,
            AnswerLetter::B => 1,
            AnswerLetter::C => 2,
            AnswerLetter::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerLetter::A => "A",
            AnswerLetter::B => "B",
            AnswerLetter::C => "C",
            AnswerLetter::D => "D",
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: AnswerLetter,
}

impl QuizQuestion {
    pub fn new(text: &str, options: [&str; 4], correct_answer: AnswerLetter) -> Self {
        QuizQuestion {
            text: text.to_string(),
            options: options.map(str::to_string),
            correct_answer,
        }
    }

    pub fn option_text(&self, letter: AnswerLetter) -> &str {
        &self.options[letter.index()]
    }

    pub fn correct_option_text(&self) -> &str {
        self.option_text(self.correct_answer)
    }

    /// Exact letter comparison, the same rule grading uses.
    pub fn is_answered_by(&self, selected: &str) -> bool {
        selected == self.correct_answer.as_str()
    }
}
