// Stateful single-word cursor over ranked break points.

use std::sync::Arc;

use hyphora_core::breaks::PotentialBreak;
use hyphora_core::error::HyphenationError;
use hyphora_dict::HyphenDict;

use crate::hyphenator::{apply_break, further_hyphenations, hyphenate};

/// Default priority threshold: every odd-priority break is visible.
const DEFAULT_PRIORITY_FILTER: u8 = 1;

/// Iterator over the break points of one word, in position order, filtered
/// by an urgency threshold.
///
/// A cursor is bound to a word with [`set_word`](Self::set_word), walked
/// with [`first`](Self::first) and [`next`](Self::next), and can spawn a
/// follow-up cursor scoped to the remainder after a break has been taken.
/// Cursors are cheap; create one per word or task. They hold private
/// mutable state and are not meant to be shared across threads.
pub struct HyphenationCursor {
    dict: Arc<HyphenDict>,
    word: Option<String>,
    breaks: Vec<PotentialBreak>,
    priority_filter: u8,
    index: Option<usize>,
}

impl HyphenationCursor {
    pub fn new(dict: Arc<HyphenDict>) -> Self {
        Self {
            dict,
            word: None,
            breaks: Vec::new(),
            priority_filter: DEFAULT_PRIORITY_FILTER,
            index: None,
        }
    }

    /// Bind a word: recomputes the full break list and rewinds the cursor.
    pub fn set_word(&mut self, word: &str) {
        self.breaks = hyphenate(&self.dict, word);
        self.word = Some(word.to_string());
        self.index = None;
    }

    /// Set the urgency and rewind without recomputing breaks. The internal
    /// threshold is `10 - urgency` (saturating at zero): higher urgency
    /// exposes more, lower-quality breaks.
    pub fn set_urgency(&mut self, urgency: u8) {
        self.priority_filter = 10u8.saturating_sub(urgency);
        self.index = None;
    }

    /// The currently bound word, if any.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// The full break list of the bound word, unfiltered by urgency.
    pub fn breaks(&self) -> &[PotentialBreak] {
        &self.breaks
    }

    /// First break at or above the urgency threshold, or `Ok(None)` when
    /// no break qualifies.
    pub fn first(&mut self) -> Result<Option<PotentialBreak>, HyphenationError> {
        if self.word.is_none() {
            return Err(HyphenationError::IllegalState("no word has been set"));
        }
        Ok(self.scan_from(0))
    }

    /// Next qualifying break after the last one returned, or `Ok(None)` at
    /// the end. Requires a prior [`first`](Self::first).
    pub fn next(&mut self) -> Result<Option<PotentialBreak>, HyphenationError> {
        if self.word.is_none() {
            return Err(HyphenationError::IllegalState("no word has been set"));
        }
        let Some(last) = self.index else {
            return Err(HyphenationError::IllegalState(
                "cursor not initialized with first()",
            ));
        };
        Ok(self.scan_from(last + 1))
    }

    fn scan_from(&mut self, mut i: usize) -> Option<PotentialBreak> {
        while i < self.breaks.len() && self.breaks[i].priority() < self.priority_filter {
            i += 1;
        }
        self.index = Some(i);
        if i < self.breaks.len() {
            Some(self.breaks[i].clone())
        } else {
            None
        }
    }

    /// Split the bound word at a break.
    pub fn apply_break(
        &self,
        chosen: &PotentialBreak,
    ) -> Result<(String, String), HyphenationError> {
        let Some(word) = self.word.as_deref() else {
            return Err(HyphenationError::IllegalState("no word has been set"));
        };
        apply_break(word, chosen)
    }

    /// Apply a break and return a new cursor bound to the right-hand
    /// fragment: same urgency, break list derived from the current one,
    /// not yet iterated. This continues break discovery past a point a
    /// line-filling caller has already consumed, without restarting from
    /// the word start.
    pub fn spawn_on_right_part(
        &self,
        chosen: &PotentialBreak,
    ) -> Result<HyphenationCursor, HyphenationError> {
        let Some(word) = self.word.as_deref() else {
            return Err(HyphenationError::IllegalState("no word has been set"));
        };
        let (_, right) = apply_break(word, chosen)?;
        let breaks = further_hyphenations(&self.dict, &self.breaks, chosen, &right);
        Ok(HyphenationCursor {
            dict: Arc::clone(&self.dict),
            word: Some(right),
            breaks,
            priority_filter: self.priority_filter,
            index: None,
        })
    }
}
