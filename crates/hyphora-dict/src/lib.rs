//! Hyphenation dictionaries: model, source parser and locale registry.
//!
//! A dictionary is a chain of levels, each holding pattern-keyed break
//! rules and edge-minimum parameters. Dictionaries are built once (from
//! the line-oriented source format or programmatically), validated, and
//! then shared read-only behind `Arc` for the lifetime of the process.
//!
//! - [`model`] -- `HyphenDict` and `DictLevel`
//! - [`parser`] -- the line-oriented dictionary source format
//! - [`registry`] -- locale-to-dictionary mapping loaded from a JSON index

pub mod model;
pub mod parser;
pub mod registry;

pub use model::{DictLevel, HyphenDict};
pub use parser::parse;
pub use registry::{DictionaryEntry, Registry};

/// Error type for dictionary parsing and registry loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// The source declares an encoding other than UTF-8. Encoding
    /// conversion is external tooling; the parser refuses rather than
    /// guessing.
    #[error("unsupported dictionary encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("malformed dictionary at line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("invalid dictionary index: {0}")]
    BadIndex(#[from] serde_json::Error),

    #[error("dictionary has no levels")]
    EmptyDictionary,
}
