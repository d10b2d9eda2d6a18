// Word-level hyphenation operations: compute, apply, continue.

use hyphora_core::breaks::PotentialBreak;
use hyphora_core::error::HyphenationError;
use hyphora_core::rule::BreakRule;
use hyphora_dict::HyphenDict;

use crate::compound::standard_breaks;
use crate::filter::{strip_no_hyphen_zones, trim_word_edges};

/// Compute the ordered break list for a word.
///
/// Runs the compound recursion from the outermost level with both edges
/// marked as true word boundaries, then filters no-hyphen zones and the
/// digit-widened edge minima of the outermost level. The result is in
/// position order and deterministic for a given dictionary and word.
pub fn hyphenate(dict: &HyphenDict, word: &str) -> Vec<PotentialBreak> {
    let chars: Vec<char> = word.chars().collect();
    let mut breaks = standard_breaks(dict, 0, &chars, true, true);
    strip_no_hyphen_zones(dict.top(), &chars, &mut breaks);
    trim_word_edges(dict.top(), &chars, &mut breaks);
    breaks
}

/// Split `word` at a break, producing the left and right fragments.
///
/// A break without a replacement splits the word as-is at its position.
/// A break with a replacement substitutes the rule's window first and
/// splits at the `=` marker the replacement carries. Fails with
/// [`HyphenationError::InvalidBreak`] when the handle was not derived from
/// this word (position or window outside the text).
pub fn apply_break(
    word: &str,
    chosen: &PotentialBreak,
) -> Result<(String, String), HyphenationError> {
    let chars: Vec<char> = word.chars().collect();

    let Some(rep) = chosen.rule().and_then(BreakRule::replacement) else {
        if chosen.position() > chars.len() {
            return Err(HyphenationError::InvalidBreak(format!(
                "position {} is out of range for a {}-character word",
                chosen.position(),
                chars.len()
            )));
        }
        let (left, right) = chars.split_at(chosen.position());
        return Ok((left.iter().collect(), right.iter().collect()));
    };

    let start = chosen.position() as isize + rep.index() - 1;
    let Ok(start) = usize::try_from(start) else {
        return Err(HyphenationError::InvalidBreak(format!(
            "replacement window of {:?} starts before the word",
            rep.text()
        )));
    };
    let end = start + rep.count();
    if end > chars.len() {
        return Err(HyphenationError::InvalidBreak(format!(
            "replacement window {}..{} is out of range for a {}-character word",
            start,
            end,
            chars.len()
        )));
    }

    let mut substituted: Vec<char> = chars[..start].to_vec();
    substituted.extend(rep.text().chars());
    substituted.extend_from_slice(&chars[end..]);

    // The substituted text carries the split marker from the replacement.
    let Some(eq) = substituted.iter().position(|&c| c == '=') else {
        return Err(HyphenationError::InvalidBreak(
            "replacement text lost its '=' marker".to_string(),
        ));
    };
    let left: String = substituted[..eq].iter().collect();
    let right: String = substituted[eq + 1..].iter().collect();
    Ok((left, right))
}

/// Derive the break list for the right-hand fragment of an applied break.
///
/// Breaks whose window lies entirely within the fragment and is unaffected
/// by replacement are carried over with their positions re-based, then
/// re-filtered against the fragment's edges (new minima zone, new digit
/// runs, new no-hyphen occurrences). When the chosen break rewrote the
/// spelling -- or a carried window would escape the fragment -- the
/// fragment is recomputed from scratch instead.
pub fn further_hyphenations(
    dict: &HyphenDict,
    current_breaks: &[PotentialBreak],
    chosen: &PotentialBreak,
    right_part: &str,
) -> Vec<PotentialBreak> {
    if chosen.rule().and_then(BreakRule::replacement).is_some() {
        return hyphenate(dict, right_part);
    }

    let frag: Vec<char> = right_part.chars().collect();
    let mut carried = Vec::new();
    for b in current_breaks {
        if b.position() <= chosen.position() {
            continue;
        }
        let position = b.position() - chosen.position();
        if let Some(rep) = b.rule().and_then(BreakRule::replacement) {
            let start = position as isize + rep.index() - 1;
            if start < 0 || start as usize + rep.count() > frag.len() {
                return hyphenate(dict, right_part);
            }
        }
        carried.push(PotentialBreak::new(position, b.priority(), b.rule().cloned()));
    }

    strip_no_hyphen_zones(dict.top(), &frag, &mut carried);
    trim_word_edges(dict.top(), &frag, &mut carried);
    carried
}
