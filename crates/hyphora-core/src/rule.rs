// Break rules: the per-offset payload attached to a matched pattern.

use crate::error::HyphenationError;

/// Spelling change applied when a break is taken at a rule's position.
///
/// The replacement text has the form `<left>=<right>`: the characters that
/// end the left fragment, the split marker, then the characters that start
/// the right fragment. `index` is the 1-based offset, relative to the break
/// position, where the replaced window of the original word starts (zero or
/// negative when the window begins left of the break); `count` is how many
/// original characters the window consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    text: String,
    index: isize,
    count: usize,
}

impl Replacement {
    /// Build a replacement, validating the `=` split marker.
    pub fn new(
        text: impl Into<String>,
        index: isize,
        count: usize,
    ) -> Result<Self, HyphenationError> {
        let text = text.into();
        if !text.contains('=') {
            return Err(HyphenationError::MalformedRule(format!(
                "replacement {text:?} has no '=' split marker"
            )));
        }
        Ok(Self { text, index, count })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> isize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Characters that end the left fragment (everything before the first `=`).
    pub fn left(&self) -> &str {
        let eq = self.text.find('=').unwrap_or(self.text.len());
        &self.text[..eq]
    }

    /// Characters that start the right fragment (everything after the first `=`).
    pub fn right(&self) -> &str {
        match self.text.find('=') {
            Some(eq) => &self.text[eq + 1..],
            None => "",
        }
    }
}

/// Immutable rule payload attached to a pattern at one offset.
///
/// Odd priorities mark a permissible break; even priorities mark an explicit
/// suppression that overrides any lower-priority break resolved at the same
/// offset by another pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakRule {
    priority: u8,
    replacement: Option<Replacement>,
}

impl BreakRule {
    /// An ordinary rule: split the word as-is at the break position.
    pub fn new(priority: u8) -> Self {
        Self {
            priority,
            replacement: None,
        }
    }

    /// A rule that rewrites the spelling around the break when applied.
    pub fn with_replacement(priority: u8, replacement: Replacement) -> Self {
        Self {
            priority,
            replacement: Some(replacement),
        }
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn replacement(&self) -> Option<&Replacement> {
        self.replacement.as_ref()
    }

    /// Whether this rule permits a break (odd priority) rather than
    /// suppressing one (even priority).
    pub fn is_break(&self) -> bool {
        self.priority % 2 == 1
    }
}
