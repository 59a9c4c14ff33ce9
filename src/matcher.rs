//! Fuzzy string matching
//!
//! Nearly every filter in this crate goes through [`is_close`], a tolerant
//! string-equality test. Two strings are "close enough" when either
//!
//! - their character-level similarity ratio is at least [`MIN_RATIO`], or
//! - they share a contiguous run of at least [`MIN_CLOSE_SIZE`] characters.
//!
//! The ratio test tolerates "mostly the same string with minor edits",
//! while the longest-block test lets a short target be found inside a
//! longer, more verbose one (a 5+ character overlap such as `souls`
//! inside `soulslike` passes even when the ratio does not). Comparison is
//! case-insensitive.
//!
//! The ratio is the matching-blocks definition (2 * matched characters /
//! total characters across both strings), computed with the `similar`
//! crate. The metric is symmetric in its arguments.

use similar::{DiffOp, TextDiff};

/// Minimum similarity ratio for two strings to be considered close
pub const MIN_RATIO: f32 = 0.6;

/// Minimum length of a single common substring for two strings to be
/// considered close
pub const MIN_CLOSE_SIZE: usize = 5;

/// Determine whether two strings are "close enough" to count as a match
///
/// Case-insensitive and symmetric. Empty strings are equal to each other
/// (the ratio of two empty sequences is defined as 1.0).
///
/// # Examples
/// ```
/// use backlogr::matcher::is_close;
///
/// assert!(is_close("Hollow Knight", "hollow knight"));
/// assert!(is_close("rpg", "RPG"));
/// assert!(!is_close("rpg", "puzzle"));
/// ```
#[must_use]
pub fn is_close(one: &str, two: &str) -> bool {
    let one = one.to_lowercase();
    let two = two.to_lowercase();
    let diff = TextDiff::from_chars(one.as_str(), two.as_str());
    if diff.ratio() >= MIN_RATIO {
        return true;
    }
    let longest_block = diff
        .ops()
        .iter()
        .filter_map(|op| match op {
            DiffOp::Equal { len, .. } => Some(*len),
            _ => None,
        })
        .max()
        .unwrap_or(0);
    longest_block >= MIN_CLOSE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_are_close() {
        for s in ["a", "rpg", "The Name of the Wind", "x y z"] {
            assert!(is_close(s, s), "{s} should be close to itself");
        }
    }

    #[test]
    fn test_empty_strings_are_close() {
        assert!(is_close("", ""));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_close("RPG", "rpg"));
        assert!(is_close("Brandon Sanderson", "brandon sanderson"));
    }

    #[test]
    fn test_minor_edits_pass_ratio() {
        assert!(is_close("metroidvania", "metroidvenia"));
        assert!(is_close("read", "reads"));
    }

    #[test]
    fn test_short_target_in_longer_string() {
        // Fails the 0.6 ratio but shares a 5+ character block
        assert!(is_close("souls", "soulslike action"));
    }

    #[test]
    fn test_unrelated_strings_are_not_close() {
        assert!(!is_close("rpg", "puzzle"));
        assert!(!is_close("abc", "xyz"));
    }

    #[test]
    fn test_symmetry() {
        let samples = [
            ("rpg", "RPG"),
            ("souls", "soulslike action"),
            ("abc", "xyz"),
            ("", "nonempty"),
            ("metroidvania", "metroidvenia"),
            ("a quiet place", "a  quiet  place"),
        ];
        for (a, b) in samples {
            assert_eq!(is_close(a, b), is_close(b, a), "asymmetric for {a:?}/{b:?}");
        }
    }
}
