// Line-oriented dictionary source parser.
//
// Format:
//   - first non-blank line declares the character encoding (UTF-8 only)
//   - '%' starts a comment line
//   - LEFTHYPHENMIN / RIGHTHYPHENMIN / COMPOUNDLEFTHYPHENMIN /
//     COMPOUNDRIGHTHYPHENMIN <n> set the current level's minima
//   - NOHYPHEN <s1>,<s2>,... adds forbidden substrings
//   - NEXTLEVEL starts the next level of the chain
//   - anything else is a pattern: characters ('.' anchors a word edge)
//     interleaved with single priority digits, optionally followed by
//     /<replacement>[,<index>[,<count>]]

use hyphora_core::rule::{BreakRule, Replacement};

use crate::model::{DictLevel, HyphenDict};
use crate::DictError;

/// Parse a dictionary from its source text.
pub fn parse(source: &str) -> Result<HyphenDict, DictError> {
    let mut levels = vec![DictLevel::new()];
    let mut saw_encoding = false;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if !saw_encoding {
            saw_encoding = true;
            let enc = line.to_ascii_uppercase();
            if enc == "UTF-8" || enc == "UTF8" {
                continue;
            }
            return Err(DictError::UnsupportedEncoding(line.to_string()));
        }

        let cur = levels.len() - 1;
        if let Some(rest) = line.strip_prefix("LEFTHYPHENMIN") {
            levels[cur].left_hyphen_min = parse_number(rest, line_no)?;
        } else if let Some(rest) = line.strip_prefix("RIGHTHYPHENMIN") {
            levels[cur].right_hyphen_min = parse_number(rest, line_no)?;
        } else if let Some(rest) = line.strip_prefix("COMPOUNDLEFTHYPHENMIN") {
            levels[cur].left_compound_min = parse_number(rest, line_no)?;
        } else if let Some(rest) = line.strip_prefix("COMPOUNDRIGHTHYPHENMIN") {
            levels[cur].right_compound_min = parse_number(rest, line_no)?;
        } else if let Some(rest) = line.strip_prefix("NOHYPHEN") {
            for part in rest.split(',') {
                let part = part.trim();
                if !part.is_empty() {
                    levels[cur].no_hyphens.push(part.to_string());
                }
            }
        } else if line == "NEXTLEVEL" {
            levels.push(DictLevel::new());
        } else {
            parse_pattern(line, line_no, &mut levels[cur])?;
        }
    }

    if !saw_encoding {
        return Err(DictError::UnsupportedEncoding("<missing>".to_string()));
    }
    HyphenDict::new(levels)
}

fn malformed(line: usize, message: String) -> DictError {
    DictError::Malformed { line, message }
}

fn parse_number(text: &str, line_no: usize) -> Result<usize, DictError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| malformed(line_no, format!("expected a number, got {:?}", text.trim())))
}

/// Parse one pattern line into the current level's rule table.
fn parse_pattern(line: &str, line_no: usize, level: &mut DictLevel) -> Result<(), DictError> {
    let (pattern, replacement_spec) = match line.split_once('/') {
        Some((p, r)) => (p, Some(r)),
        None => (line, None),
    };

    let mut key: Vec<char> = Vec::new();
    let mut entries: Vec<(usize, u8)> = Vec::new();
    for c in pattern.chars() {
        if let Some(d) = c.to_digit(10) {
            entries.push((key.len(), d as u8));
        } else {
            key.push(c);
        }
    }
    if key.is_empty() {
        return Err(malformed(line_no, format!("pattern {line:?} has no characters")));
    }

    let replacement = match replacement_spec {
        Some(spec) => Some(parse_replacement(spec, key.len(), line_no)?),
        None => None,
    };

    if entries.is_empty() {
        // A pattern with no priority digits resolves nothing; the line is
        // harmless and produces no rules.
        return Ok(());
    }

    // The replacement attaches to the pattern's highest-priority entry
    // (first such entry when priorities tie).
    let mut target = 0usize;
    for (i, entry) in entries.iter().enumerate() {
        if entry.1 > entries[target].1 {
            target = i;
        }
    }

    let pattern_key: String = key.iter().collect();
    for (i, (offset, priority)) in entries.into_iter().enumerate() {
        let rule = match (&replacement, i == target) {
            (Some(r), true) => BreakRule::with_replacement(priority, r.clone()),
            _ => BreakRule::new(priority),
        };
        level.add_rule(&pattern_key, offset, rule);
    }
    Ok(())
}

/// Parse `<text>[,<index>[,<count>]]` after the `/` of a pattern line.
fn parse_replacement(
    spec: &str,
    key_len: usize,
    line_no: usize,
) -> Result<Replacement, DictError> {
    let mut parts = spec.split(',');
    let text = parts.next().unwrap_or("").trim();
    let index = match parts.next() {
        Some(s) => s
            .trim()
            .parse::<isize>()
            .map_err(|_| malformed(line_no, format!("bad replacement index {:?}", s.trim())))?,
        None => 1,
    };
    let count = match parts.next() {
        Some(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| malformed(line_no, format!("bad replacement count {:?}", s.trim())))?,
        None => key_len,
    };
    if parts.next().is_some() {
        return Err(malformed(
            line_no,
            format!("too many fields in replacement {spec:?}"),
        ));
    }
    Replacement::new(text, index, count).map_err(|e| malformed(line_no, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn parses_directives_and_patterns() {
        let source = "\
UTF-8
% a comment
LEFTHYPHENMIN 2
RIGHTHYPHENMIN 3
COMPOUNDLEFTHYPHENMIN 1
COMPOUNDRIGHTHYPHENMIN 1
NOHYPHEN -,'

a1b
.x2a
";
        let dict = parse(source).unwrap();
        assert_eq!(dict.levels().len(), 1);

        let level = dict.top();
        assert_eq!(level.left_hyphen_min, 2);
        assert_eq!(level.right_hyphen_min, 3);
        assert_eq!(level.left_compound_min, 1);
        assert_eq!(level.right_compound_min, 1);
        assert_eq!(level.no_hyphens, vec!["-".to_string(), "'".to_string()]);

        let rules = &level.rules[&key("ab")];
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].0, 1);
        assert_eq!(rules[0].1.priority(), 1);
        assert!(rules[0].1.replacement().is_none());

        let rules = &level.rules[&key(".xa")];
        assert_eq!(rules[0], (2, BreakRule::new(2)));
    }

    #[test]
    fn parses_next_level() {
        let source = "\
UTF-8
a1b
NEXTLEVEL
RIGHTHYPHENMIN 2
k1d
";
        let dict = parse(source).unwrap();
        assert_eq!(dict.levels().len(), 2);
        assert!(dict.level(0).rules.contains_key(&key("ab")));
        assert!(dict.level(1).rules.contains_key(&key("kd")));
        // The directive after NEXTLEVEL applies to the new level only.
        assert_eq!(dict.level(0).right_hyphen_min, 3);
        assert_eq!(dict.level(1).right_hyphen_min, 2);
    }

    #[test]
    fn parses_replacement_rule() {
        let source = "\
UTF-8
c1k/k=k,0,2
";
        let dict = parse(source).unwrap();
        let rules = &dict.top().rules[&key("ck")];
        assert_eq!(rules[0].0, 1);
        let rule = &rules[0].1;
        assert_eq!(rule.priority(), 1);
        let rep = rule.replacement().unwrap();
        assert_eq!(rep.text(), "k=k");
        assert_eq!(rep.index(), 0);
        assert_eq!(rep.count(), 2);
    }

    #[test]
    fn replacement_defaults() {
        // Without index and count, the window is 1-based at the break and
        // spans the digit-stripped pattern.
        let source = "\
UTF-8
s1sz/sz=sz
";
        let dict = parse(source).unwrap();
        let rules = &dict.top().rules[&key("ssz")];
        let rep = rules[0].1.replacement().unwrap();
        assert_eq!(rep.index(), 1);
        assert_eq!(rep.count(), 3);
    }

    #[test]
    fn replacement_attaches_to_highest_priority() {
        let source = "\
UTF-8
a2b1c/b=b,1,1
";
        let dict = parse(source).unwrap();
        let rules = &dict.top().rules[&key("abc")];
        assert_eq!(rules.len(), 2);
        let with_rep: Vec<_> = rules
            .iter()
            .filter(|(_, r)| r.replacement().is_some())
            .collect();
        assert_eq!(with_rep.len(), 1);
        assert_eq!(with_rep[0].0, 1);
        assert_eq!(with_rep[0].1.priority(), 2);
    }

    #[test]
    fn multiple_digits_in_one_pattern() {
        let source = "\
UTF-8
1a2b3
";
        let dict = parse(source).unwrap();
        let rules = &dict.top().rules[&key("ab")];
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0], (0, BreakRule::new(1)));
        assert_eq!(rules[1], (1, BreakRule::new(2)));
        assert_eq!(rules[2], (2, BreakRule::new(3)));
    }

    #[test]
    fn rejects_non_utf8_encoding() {
        let err = parse("ISO8859-1\na1b\n").unwrap_err();
        assert!(matches!(err, DictError::UnsupportedEncoding(e) if e == "ISO8859-1"));
    }

    #[test]
    fn rejects_empty_source() {
        assert!(matches!(
            parse(""),
            Err(DictError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn rejects_bad_directive_number() {
        let err = parse("UTF-8\nLEFTHYPHENMIN x\n").unwrap_err();
        assert!(matches!(err, DictError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_replacement_without_marker() {
        let err = parse("UTF-8\nc1k/kk,0,2\n").unwrap_err();
        assert!(matches!(err, DictError::Malformed { line: 2, .. }));
    }

    #[test]
    fn digit_only_pattern_is_rejected() {
        let err = parse("UTF-8\n12\n").unwrap_err();
        assert!(matches!(err, DictError::Malformed { line: 2, .. }));
    }

    #[test]
    fn pattern_without_digits_is_ignored() {
        let dict = parse("UTF-8\nabc\n").unwrap();
        assert!(dict.top().rules.is_empty());
    }
}
