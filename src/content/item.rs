//! Static content units consumed by the games.
//!
//! All content is immutable once loaded. Option lists are fixed-size
//! arrays, so "exactly four options" holds by construction; the remaining
//! invariants (answer present, ids unique) are checked by `ContentPool`.

use serde::{Deserialize, Serialize};

use crate::core::{ItemId, PairId, QuestionId};

/// Number of options on every multiple-choice prompt.
pub const OPTION_COUNT: usize = 4;

/// A term and its definition. Used by matching and memory games.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentPair {
    pub id: PairId,
    pub term: String,
    pub definition: String,
}

impl ContentPair {
    /// Create a new pair.
    pub fn new(id: u32, term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id: PairId::new(id),
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// A four-option multiple-choice question for the speed quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct_index: usize,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_index: usize,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.into(),
            options: options.map(String::from),
            correct_index,
        }
    }

    /// Check whether `index` is the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// A sentence with one gap and four candidate words.
///
/// The gap is written as `___` in `sentence`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blank {
    pub sentence: String,
    pub correct_answer: String,
    pub options: [String; OPTION_COUNT],
}

impl Blank {
    /// Placeholder marking the gap in `sentence`.
    pub const GAP: &'static str = "___";

    /// Create a new blank.
    pub fn new(
        sentence: impl Into<String>,
        correct_answer: impl Into<String>,
        options: [&str; OPTION_COUNT],
    ) -> Self {
        Self {
            sentence: sentence.into(),
            correct_answer: correct_answer.into(),
            options: options.map(String::from),
        }
    }

    /// The sentence with the gap filled by `answer`.
    #[must_use]
    pub fn filled(&self, answer: &str) -> String {
        self.sentence.replacen(Self::GAP, answer, 1)
    }
}

/// One entry of a sorting set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortItem {
    pub id: ItemId,
    pub text: String,
    /// 0-based position in the solved ordering.
    pub correct_order: usize,
}

/// A curated list whose items have one correct ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingSet {
    pub title: String,
    /// Items listed in their correct order.
    pub items: Vec<SortItem>,
}

impl SortingSet {
    /// Build a set from texts already in correct order.
    pub fn ordered(title: impl Into<String>, texts: &[&str]) -> Self {
        let items = texts
            .iter()
            .enumerate()
            .map(|(i, text)| SortItem {
                id: ItemId::new(i as u32),
                text: (*text).to_string(),
                correct_order: i,
            })
            .collect();

        Self {
            title: title.into(),
            items,
        }
    }
}
