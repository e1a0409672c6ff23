//! Typed identifiers.
//!
//! Content ids come from the content pool and are only unique within it.
//! `CardId` is allocated per memory game. `SessionId` increases every time
//! the controller starts a session and is what timers are checked against.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty), $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub $inner);

        impl $name {
            /// Create a new id.
            #[must_use]
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the raw id value.
            #[must_use]
            pub const fn raw(self) -> $inner {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a term/definition pair.
    PairId(u32),
    "Pair"
);

id_type!(
    /// Identifier of a face-down card in a memory game.
    CardId(u32),
    "Card"
);

id_type!(
    /// Identifier of an orderable item in a sorting set.
    ItemId(u32),
    "Item"
);

id_type!(
    /// Identifier of a multiple-choice question.
    QuestionId(u32),
    "Question"
);

id_type!(
    /// Identifier of one play-through. Never reused by a controller.
    SessionId(u64),
    "Session"
);

impl SessionId {
    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
