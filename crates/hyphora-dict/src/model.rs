// In-memory dictionary model consumed by the break-point engine.

use hashbrown::HashMap;
use hyphora_core::rule::BreakRule;

use crate::DictError;

/// One level of a hyphenation dictionary chain.
///
/// The pattern table is keyed by the pattern's characters with priorities
/// stripped; each key maps to the `(offset, rule)` entries the pattern
/// carries. Keys are `Vec<char>` so the matcher can probe with `&[char]`
/// slices of the padded word without allocating per substring.
#[derive(Debug, Clone)]
pub struct DictLevel {
    pub rules: HashMap<Vec<char>, Vec<(usize, BreakRule)>>,

    /// Substrings inside which no break may occur.
    pub no_hyphens: Vec<String>,

    /// Minimum characters that must remain unbroken at the true word start.
    pub left_hyphen_min: usize,

    /// Minimum characters that must remain unbroken at the true word end.
    pub right_hyphen_min: usize,

    /// As `left_hyphen_min`, but at the left edge of an interior compound
    /// segment.
    pub left_compound_min: usize,

    /// As `right_hyphen_min`, but at the right edge of an interior compound
    /// segment.
    pub right_compound_min: usize,
}

impl DictLevel {
    /// An empty level with the conventional typesetting minima (2 at the
    /// start, 3 at the end) and no compound minima. Dictionary sources
    /// override these via directives.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            no_hyphens: Vec::new(),
            left_hyphen_min: 2,
            right_hyphen_min: 3,
            left_compound_min: 0,
            right_compound_min: 0,
        }
    }

    /// Register a rule at `offset` characters into `pattern`. The pattern
    /// is given without priority digits.
    pub fn add_rule(&mut self, pattern: &str, offset: usize, rule: BreakRule) {
        let key: Vec<char> = pattern.chars().collect();
        self.rules.entry(key).or_default().push((offset, rule));
    }

    /// Length in characters of the longest pattern key, bounding how far
    /// the matcher needs to probe from any start offset.
    pub fn max_pattern_len(&self) -> usize {
        self.rules.keys().map(Vec::len).max().unwrap_or(0)
    }
}

impl Default for DictLevel {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable hyphenation dictionary: a non-empty chain of levels.
///
/// Level 0 is the outermost (compound-aware) level; the last level holds
/// the plain language rules. A single-level dictionary disables compound
/// recursion entirely. Once constructed a dictionary is never mutated and
/// may be read concurrently from any number of threads.
#[derive(Debug, Clone)]
pub struct HyphenDict {
    levels: Vec<DictLevel>,
}

impl HyphenDict {
    pub fn new(levels: Vec<DictLevel>) -> Result<Self, DictError> {
        if levels.is_empty() {
            return Err(DictError::EmptyDictionary);
        }
        Ok(Self { levels })
    }

    /// Parse a dictionary from its line-oriented source text.
    pub fn from_source(source: &str) -> Result<Self, DictError> {
        crate::parser::parse(source)
    }

    pub fn levels(&self) -> &[DictLevel] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> &DictLevel {
        &self.levels[index]
    }

    /// The outermost level, whose minima and no-hyphen list govern
    /// word-level filtering.
    pub fn top(&self) -> &DictLevel {
        &self.levels[0]
    }
}
