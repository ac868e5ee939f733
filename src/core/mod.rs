//! Core domain types
//!
//! Words, constraints over words, and the feedback matcher that turns a
//! key/guess comparison into a constraint. Everything here is immutable and
//! safe to share across threads.

mod constraint;
mod feedback;
mod matcher;
mod word;

pub use constraint::Constraint;
pub use feedback::{Feedback, Mark};
pub use matcher::Matcher;
pub use word::{IndexedChar, NULL_CHAR, Positions, Word, WordError};
