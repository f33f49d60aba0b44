//! Locale-aware string ordering for name sorting.
//!
//! Strings are compared in three passes, the way a default collator does:
//! base letters first (accents and case ignored), then accents, then case
//! with lower case ahead of upper case.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two display strings in dictionary order.
pub fn compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lower-cased text with diacritics stripped.
fn base_key(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = values.iter().map(|v| (*v).to_string()).collect();
        out.sort_by(|a, b| compare(a, b));
        out
    }

    #[test]
    fn case_does_not_split_the_alphabet() {
        assert_eq!(sorted(&["cherry", "Banana", "apple"]), ["apple", "Banana", "cherry"]);
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        assert_eq!(sorted(&["f", "é", "e", "d"]), ["d", "e", "é", "f"]);
    }

    #[test]
    fn lower_case_first_on_ties() {
        assert_eq!(compare("a", "A"), Ordering::Less);
        assert_eq!(compare("Paint", "Paint"), Ordering::Equal);
    }
}
