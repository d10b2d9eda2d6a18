//! Shared types for the hyphora hyphenation workspace.
//!
//! This crate holds the value types passed between the dictionary crate and
//! the break-point engine:
//!
//! - [`rule`] -- break rules and their optional replacement payload
//! - [`breaks`] -- the `PotentialBreak` handle returned to callers
//! - [`error`] -- the engine error taxonomy
//! - [`word`] -- word-boundary and digit-run character helpers

pub mod breaks;
pub mod error;
pub mod rule;
pub mod word;

pub use breaks::PotentialBreak;
pub use error::HyphenationError;
pub use rule::{BreakRule, Replacement};
