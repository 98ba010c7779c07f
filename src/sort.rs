//! Numeric-aware filename ordering.
//!
//! Gallery content is typically numbered (`1.jpg`, `2.jpg`, `10.jpg`) and a
//! plain lexicographic sort puts `10` before `2`. [`natural_cmp`] compares
//! the first run of digits numerically when both names contain one.

use std::cmp::Ordering;

/// Compare two filenames with numeric awareness.
///
/// The first run of ASCII digits in each name is compared by integer value;
/// a name containing digits sorts before a digitless one; equal numeric
/// values and digitless pairs fall back to case-insensitive lexicographic
/// order with a case-sensitive tiebreak, so the order is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (first_digit_run(a), first_digit_run(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| lexicographic(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => lexicographic(a, b),
    }
}

/// Integer value of the first run of ASCII digits in `s`, or `None` if the
/// name contains no digit. Saturates instead of overflowing on absurdly
/// long runs.
fn first_digit_run(s: &str) -> Option<u64> {
    let mut value: Option<u64> = None;
    for c in s.chars() {
        match c.to_digit(10) {
            Some(d) => {
                value = Some(
                    value
                        .unwrap_or(0)
                        .saturating_mul(10)
                        .saturating_add(u64::from(d)),
                );
            }
            None if value.is_some() => break,
            None => {}
        }
    }
    value
}

fn lexicographic(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_beats_lexicographic() {
        assert_eq!(natural_cmp("2.jpg", "10.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("10.jpg", "2.jpg"), Ordering::Greater);
    }

    #[test]
    fn test_sorts_sample_ascending() {
        let mut names = vec!["2.jpg", "10.jpg", "1.jpg"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["1.jpg", "2.jpg", "10.jpg"]);
    }

    #[test]
    fn test_numeric_sorts_before_digitless() {
        assert_eq!(natural_cmp("3.jpg", "cover.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("cover.jpg", "3.jpg"), Ordering::Greater);
    }

    #[test]
    fn test_digitless_falls_back_to_lexicographic() {
        assert_eq!(natural_cmp("apple.png", "banana.png"), Ordering::Less);
        assert_eq!(natural_cmp("Apple.png", "apple.png"), Ordering::Less);
    }

    #[test]
    fn test_first_digit_run_wins() {
        // First run is 1 vs 2; the trailing numbers are ignored
        assert_eq!(natural_cmp("1-99.jpg", "2-01.jpg"), Ordering::Less);
    }

    #[test]
    fn test_equal_numbers_break_ties_lexicographically() {
        assert_eq!(natural_cmp("02.jpg", "2.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("2.jpg", "2.jpg"), Ordering::Equal);
    }

    #[test]
    fn test_prefixed_numbers() {
        let mut names = vec!["IMG_10.jpg", "IMG_9.jpg", "IMG_100.jpg"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["IMG_9.jpg", "IMG_10.jpg", "IMG_100.jpg"]);
    }

    #[test]
    fn test_order_is_antisymmetric() {
        let pairs = [("2.jpg", "10.jpg"), ("a.png", "b.png"), ("5.gif", "x.gif")];
        for (a, b) in pairs {
            assert_eq!(natural_cmp(a, b), natural_cmp(b, a).reverse());
        }
    }

    #[test]
    fn test_long_digit_run_saturates() {
        // Does not panic, still orders after small numbers
        assert_eq!(
            natural_cmp("1.jpg", "99999999999999999999999999.jpg"),
            Ordering::Less
        );
    }
}
