//! Letter frequency counting.

use std::collections::BTreeMap;

/// Occurrences of each ASCII letter, keyed by the lowercase letter.
///
/// Only letters that occur are present; iteration is alphabetical.
pub type LetterCounts = BTreeMap<char, u32>;

/// Counts the ASCII letters in `input`, ignoring case.
///
/// Digits, punctuation, whitespace and non-ASCII characters are ignored.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::count_letters;
///
/// let counts = count_letters("Hello, World!");
/// assert_eq!(counts.get(&'l'), Some(&3));
/// assert_eq!(counts.get(&'h'), Some(&1));
/// assert_eq!(counts.get(&'z'), None);
/// ```
pub fn count_letters(input: &str) -> LetterCounts {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .fold(LetterCounts::new(), |mut counts, c| {
            *counts.entry(c).or_insert(0) += 1;
            counts
        })
}
