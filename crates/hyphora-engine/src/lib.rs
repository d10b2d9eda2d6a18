//! Break-point computation engine for pattern-based hyphenation.
//!
//! Given an immutable dictionary (a chain of pattern levels), the engine
//! produces the ranked list of positions where a word may be split,
//! optionally rewriting the spelling on each side of a chosen split.
//!
//! # Architecture
//!
//! - `matcher` -- per-offset highest-priority rule resolution over the
//!   padded word
//! - `compound` -- recursive compound segmentation, descending the
//!   dictionary level chain with offset-correct merging
//! - `filter` -- no-hyphen zones, edge minima and digit runs
//! - [`hyphenator`] -- the word-level operations: compute the break list,
//!   apply a break, continue into the remainder
//! - [`cursor`] -- the stateful per-word iterator with an urgency
//!   threshold
//!
//! Dictionaries are shared read-only (`Arc`); cursors are cheap,
//! single-threaded, and meant to be created per word or task.

mod compound;
mod filter;
mod matcher;

pub mod cursor;
pub mod hyphenator;

pub use cursor::HyphenationCursor;
pub use hyphenator::{apply_break, further_hyphenations, hyphenate};

pub use hyphora_core::{BreakRule, HyphenationError, PotentialBreak, Replacement};
pub use hyphora_dict::{DictLevel, HyphenDict};
