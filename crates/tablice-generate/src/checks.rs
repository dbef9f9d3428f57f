//! Grammar checks for rendered plates.

use std::sync::LazyLock;

use regex::Regex;

use crate::plate::Plate;

const PLATE_PATTERN: &str = concat!(
    r"^(?:(?P<short>[A-PR-Z]{2}) (?P<long_suffix>[A-PR-Z0-9]{5})",
    r"|(?P<long>[A-PR-Z]{3}) (?P<suffix>[A-PR-Z0-9]{4,5}))$",
);

static PLATE_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLATE_PATTERN).expect("plate grammar regex"));

/// True when `value` matches the national grammar: a two-letter prefix with
/// five suffix characters, or a three-letter prefix with four or five.
pub fn is_valid_plate(value: &str) -> bool {
    PLATE_GRAMMAR.is_match(value)
}

/// True when `value` is a valid plate whose prefix starts with `letter`.
pub fn matches_prefix_family(value: &str, letter: char) -> bool {
    is_valid_plate(value) && value.starts_with(letter)
}

/// Split a valid plate back into prefix and suffix.
pub fn parse_plate(value: &str) -> Option<Plate> {
    let captures = PLATE_GRAMMAR.captures(value)?;
    let (prefix, suffix) = match (captures.name("short"), captures.name("long")) {
        (Some(prefix), _) => (prefix, captures.name("long_suffix")?),
        (None, Some(prefix)) => (prefix, captures.name("suffix")?),
        (None, None) => return None,
    };
    Some(Plate {
        prefix: prefix.as_str().to_string(),
        suffix: suffix.as_str().to_string(),
    })
}
