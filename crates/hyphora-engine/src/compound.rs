// Compound recursion over the dictionary level chain.
//
// A segment is matched against one level; every odd-priority slot cuts it
// into sub-segments, each refined recursively at the same level. A segment
// with no interior cut is not compound: it descends to the next level
// instead. Each recursion returns an owned break list; the caller merges it
// into its own slot array with an explicit signed offset, which carries the
// width delta introduced by replacement rewriting.

use hyphora_core::breaks::PotentialBreak;
use hyphora_core::rule::BreakRule;
use hyphora_dict::{DictLevel, HyphenDict};

use crate::matcher::{Slot, match_rules, normalize};

/// Compute the raw break list for a segment against one dictionary level.
///
/// `segment` is the unpadded segment content (already sentinel-normalized
/// on recursive calls). Positions in the result are relative to the
/// unpadded segment. The edge flags mark whether the segment's edges are
/// true word boundaries; they narrow on recursion and decide whether
/// compound minima apply at an edge.
pub(crate) fn standard_breaks(
    dict: &HyphenDict,
    level: usize,
    segment: &[char],
    left_word_end: bool,
    right_word_end: bool,
) -> Vec<PotentialBreak> {
    let padded = normalize(segment);
    let n = padded.len();
    let mut slots: Vec<Slot> = vec![Slot::default(); n];
    match_rules(dict.level(level), &padded, &mut slots);

    if level + 1 < dict.levels().len() {
        // Walk the resolved slots left to right; every odd priority (and
        // the final slot) closes the current run.
        let mut last_cut = 1usize;
        for i in 2..n {
            if i == n - 1 && last_cut == 1 {
                // No interior cut: the segment is not compound at this
                // level. Refine the whole content one level down, then trim
                // compound minima at any edge that is interior to the word.
                let inner =
                    standard_breaks(dict, level + 1, &padded[1..n - 1], left_word_end, right_word_end);
                merge_breaks(&mut slots, &inner, 1);
                trim_compound_edges(&mut slots, dict.level(level), left_word_end, right_word_end);
            } else if slots[i].is_break() || i == n - 1 {
                let left_rule = slots[last_cut].rule.clone();
                let right_rule = slots[i].rule.clone();
                // The recursive match must see the post-replacement
                // spelling of the sub-segment.
                let sub = rewrite_segment(&padded[last_cut..i], left_rule.as_ref(), right_rule.as_ref());
                let shift = rewrite_shift(left_rule.as_ref());
                let inner = standard_breaks(
                    dict,
                    level,
                    &sub,
                    last_cut == 1 && left_word_end,
                    i == n - 1 && right_word_end,
                );
                merge_breaks(&mut slots, &inner, last_cut as isize + shift);
                last_cut = i;
            }
        }
    }

    let mut breaks = Vec::new();
    for (i, slot) in slots.iter().enumerate().skip(1) {
        if slot.is_break() {
            breaks.push(PotentialBreak::new(i - 1, slot.priority, slot.rule.clone()));
        }
    }
    breaks
}

/// Write recursively found breaks into the caller's slots, translating
/// positions from sub-segment to parent coordinates.
fn merge_breaks(slots: &mut [Slot], inner: &[PotentialBreak], offset: isize) {
    for b in inner {
        let slot = b.position() as isize + offset;
        let Ok(slot) = usize::try_from(slot) else {
            panic!(
                "malformed dictionary: recursive break at {} maps before the segment start",
                b.position()
            );
        };
        if slot >= slots.len() {
            panic!(
                "malformed dictionary: recursive break at {} escapes the segment",
                b.position()
            );
        }
        slots[slot].priority = b.priority();
        slots[slot].rule = b.rule().cloned();
    }
}

/// Rebuild a sub-segment's text, applying the pending replacement of the
/// rule at each boundary: the right half of the left boundary's replacement
/// opens the segment, the left half of the right boundary's replacement
/// closes it.
fn rewrite_segment(
    segment: &[char],
    left: Option<&BreakRule>,
    right: Option<&BreakRule>,
) -> Vec<char> {
    let mut seg: Vec<char> = segment.to_vec();

    if let Some(rep) = left.and_then(BreakRule::replacement) {
        let consumed = rep.index() + rep.count() as isize - 1;
        let Ok(consumed) = usize::try_from(consumed) else {
            panic!(
                "malformed dictionary: replacement window of {:?} starts before the segment",
                rep.text()
            );
        };
        if consumed > seg.len() {
            panic!(
                "malformed dictionary: replacement window of {:?} escapes the segment",
                rep.text()
            );
        }
        let mut rewritten: Vec<char> = rep.right().chars().collect();
        rewritten.extend_from_slice(&seg[consumed..]);
        seg = rewritten;
    }

    if let Some(rep) = right.and_then(BreakRule::replacement) {
        let keep = seg.len() as isize - 1 + rep.index();
        let Ok(keep) = usize::try_from(keep) else {
            panic!(
                "malformed dictionary: replacement window of {:?} starts before the segment",
                rep.text()
            );
        };
        if keep > seg.len() {
            panic!(
                "malformed dictionary: replacement window of {:?} escapes the segment",
                rep.text()
            );
        }
        seg.truncate(keep);
        seg.extend(rep.left().chars());
    }

    seg
}

/// Position delta between a rewritten sub-segment and the original text:
/// breaks found in the rewritten segment are translated by this much when
/// merged back into pre-rewrite coordinates.
fn rewrite_shift(left: Option<&BreakRule>) -> isize {
    match left.and_then(BreakRule::replacement) {
        Some(rep) => {
            rep.index() + rep.count() as isize - 1 - rep.right().chars().count() as isize
        }
        None => 0,
    }
}

/// Clear break slots inside the compound-minimum zones at any segment edge
/// that is not a true word boundary.
fn trim_compound_edges(
    slots: &mut [Slot],
    level: &DictLevel,
    left_word_end: bool,
    right_word_end: bool,
) {
    if !left_word_end {
        for slot in slots.iter_mut().take(level.left_compound_min + 1) {
            slot.clear();
        }
    }
    if !right_word_end {
        let n = slots.len();
        for slot in slots.iter_mut().skip(n.saturating_sub(level.right_compound_min)) {
            slot.clear();
        }
    }
}
