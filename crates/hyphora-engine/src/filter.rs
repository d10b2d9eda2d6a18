// No-hyphen zones and word-edge trimming.

use hyphora_core::breaks::PotentialBreak;
use hyphora_core::word::{find_chars, leading_digits, trailing_digits};
use hyphora_dict::DictLevel;

/// Remove breaks that coincide with the start or end offset of any
/// no-hyphen occurrence in the word. Occurrences may overlap; the search
/// resumes one character past each occurrence start.
pub(crate) fn strip_no_hyphen_zones(
    level: &DictLevel,
    word: &[char],
    breaks: &mut Vec<PotentialBreak>,
) {
    for no_hyphen in &level.no_hyphens {
        let needle: Vec<char> = no_hyphen.chars().collect();
        if needle.is_empty() {
            continue;
        }
        let mut from = 0usize;
        while let Some(start) = find_chars(word, &needle, from) {
            let end = start + needle.len();
            breaks.retain(|b| b.position() != start && b.position() != end);
            from = start + 1;
        }
    }
}

/// Remove breaks inside the edge-minimum zones, widened by any digit run
/// at the word edges: digits at a word's edge are never split through or
/// immediately adjacent to. The right bound is signed so a word shorter
/// than its minima simply loses every break.
pub(crate) fn trim_word_edges(
    level: &DictLevel,
    word: &[char],
    breaks: &mut Vec<PotentialBreak>,
) {
    let lo = (level.left_hyphen_min + leading_digits(word)) as isize;
    let hi =
        word.len() as isize - level.right_hyphen_min as isize - trailing_digits(word) as isize;
    breaks.retain(|b| {
        let pos = b.position() as isize;
        pos >= lo && pos <= hi
    });
}

#[cfg(test)]
mod tests {
    use hyphora_core::rule::BreakRule;
    use hyphora_dict::{DictLevel, HyphenDict};

    use crate::hyphenator::hyphenate;

    fn positions(breaks: &[hyphora_core::breaks::PotentialBreak]) -> Vec<usize> {
        breaks.iter().map(|b| b.position()).collect()
    }

    fn dict_with(
        rules: &[(&str, usize, u8)],
        no_hyphens: &[&str],
        left: usize,
        right: usize,
    ) -> HyphenDict {
        let mut level = DictLevel::new();
        for &(pattern, offset, priority) in rules {
            level.add_rule(pattern, offset, BreakRule::new(priority));
        }
        level.no_hyphens = no_hyphens.iter().map(|s| s.to_string()).collect();
        level.left_hyphen_min = left;
        level.right_hyphen_min = right;
        HyphenDict::new(vec![level]).unwrap()
    }

    #[test]
    fn no_hyphen_occurrence_start_removes_break() {
        // "b" occurs at offset 2 of "xaby"; the break at 2 hits the
        // occurrence start.
        let dict = dict_with(&[("ab", 1, 1)], &["b"], 2, 2);
        assert!(hyphenate(&dict, "xaby").is_empty());
    }

    #[test]
    fn no_hyphen_occurrence_end_removes_break() {
        // "a" occupies offsets 1..2; the break at 2 hits the occurrence
        // end.
        let dict = dict_with(&[("ab", 1, 1)], &["a"], 2, 2);
        assert!(hyphenate(&dict, "xaby").is_empty());
    }

    #[test]
    fn break_away_from_no_hyphen_zone_survives() {
        let dict = dict_with(&[("ab", 1, 1)], &["y"], 2, 2);
        assert_eq!(positions(&hyphenate(&dict, "xaby")), vec![2]);
    }

    #[test]
    fn leading_digits_widen_the_left_minimum() {
        // Candidates land at 2 (after the digit run) and 3. With one
        // character of left minimum plus two leading digits, everything
        // below position 3 goes.
        let dict = dict_with(&[(".a", 1, 1), ("ab", 1, 1)], &[], 1, 0);
        assert_eq!(positions(&hyphenate(&dict, "12ab")), vec![3]);
    }

    #[test]
    fn trailing_digits_widen_the_right_minimum() {
        // "ab12": the candidate at 1 must satisfy pos <= 4 - 0 - 2 = 2.
        let dict = dict_with(&[("ab", 1, 1)], &[], 0, 0);
        assert_eq!(positions(&hyphenate(&dict, "ab12")), vec![1]);

        // Two more characters of right minimum push the bound below it.
        let dict = dict_with(&[("ab", 1, 1)], &[], 0, 2);
        assert!(hyphenate(&dict, "ab12").is_empty());
    }

    #[test]
    fn all_digit_word_keeps_no_breaks() {
        let dict = dict_with(&[("..", 1, 1)], &[], 0, 0);
        assert!(hyphenate(&dict, "1234").is_empty());
    }

    #[test]
    fn minima_window() {
        let dict = dict_with(&[("ab", 1, 1)], &[], 2, 2);
        // "xaby": position 2 sits exactly on both bounds (2 <= 2 <= 4-2).
        assert_eq!(positions(&hyphenate(&dict, "xaby")), vec![2]);
        // One more character of right minimum excludes it.
        let dict = dict_with(&[("ab", 1, 1)], &[], 2, 3);
        assert!(hyphenate(&dict, "xaby").is_empty());
    }
}
