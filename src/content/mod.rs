//! Static educational content.
//!
//! - `item`: content units (pairs, questions, blanks, sorting sets)
//! - `pool`: the validated bundle a session samples from
//! - `library`: built-in chemistry content

pub mod item;
pub mod pool;
mod library;

pub use item::{Blank, ContentPair, Question, SortItem, SortingSet, OPTION_COUNT};
pub use pool::ContentPool;
