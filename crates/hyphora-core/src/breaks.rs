// The break handle returned to callers.

use crate::rule::BreakRule;

/// One legal place to split a word.
///
/// `position` is a 0-based character offset in the unpadded word: the index
/// of the first character of the right-hand fragment. `priority` is the
/// resolved (always odd) priority at that offset. The rule is carried by
/// value so the handle stays valid independently of the dictionary it was
/// derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialBreak {
    position: usize,
    priority: u8,
    rule: Option<BreakRule>,
}

impl PotentialBreak {
    pub fn new(position: usize, priority: u8, rule: Option<BreakRule>) -> Self {
        Self {
            position,
            priority,
            rule,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn rule(&self) -> Option<&BreakRule> {
        self.rule.as_ref()
    }
}
