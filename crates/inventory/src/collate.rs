//! Locale-aware string ordering for display sorting.

use core::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Script class of a base character. Whitespace sorts before punctuation and
/// symbols, which sort before digits, which sort before letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Punctuation
    }
}

/// Sort key compared level by level, like a multi-strength collator.
///
/// - primary: base letters without accents or case, grouped by class
/// - secondary: the accents attached to each base letter
/// - tertiary: case of each base letter (lowercase first)
/// - finally the raw string, so the order is total
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        // (base, combining marks) pairs after canonical decomposition.
        let mut units: Vec<(char, Vec<char>)> = Vec::new();
        for c in s.nfd() {
            match units.last_mut() {
                Some((_, marks)) if is_combining_mark(c) => marks.push(c),
                _ => units.push((c, Vec::new())),
            }
        }

        Self {
            primary: units
                .iter()
                .flat_map(|(base, _)| base.to_lowercase())
                .map(|c| (char_class(c), c))
                .collect(),
            secondary: units.iter().map(|(_, marks)| marks.clone()).collect(),
            tertiary: units.iter().map(|(base, _)| base.is_uppercase()).collect(),
            raw: s.to_string(),
        }
    }
}

/// Compare two strings the way a user expects a name list to be ordered.
///
/// Accents and case only decide when the base letters are equal, so
/// `"Éclair" < "Zebra"`, `"resume" < "résumé"` and `"a" < "A"`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        // Plain byte order would put "Zebra" first.
        assert!("Zebra" < "apple");
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Mouse", "mouse"), Ordering::Greater);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn accents_only_break_ties() {
        assert_eq!(locale_cmp("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(locale_cmp("éa", "eb"), Ordering::Less);
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("résumé", "Resume"), Ordering::Greater);
        assert_eq!(locale_cmp("Ångström", "Angstrom"), Ordering::Greater);
        assert_eq!(locale_cmp("Ångström", "Anh"), Ordering::Less);
    }

    #[test]
    fn precomposed_and_decomposed_forms_agree_on_base_letters() {
        // "é" as one code point vs "e" + U+0301.
        assert_eq!(locale_cmp("caf\u{e9}", "cafe\u{301}x"), Ordering::Less);
        assert_eq!(
            CollationKey::new("caf\u{e9}").primary,
            CollationKey::new("cafe\u{301}").primary
        );
    }

    #[test]
    fn punctuation_before_digits_before_letters() {
        assert_eq!(locale_cmp("a{", "aa"), Ordering::Less);
        assert_eq!(locale_cmp("a-b", "a1"), Ordering::Less);
        assert_eq!(locale_cmp("a1", "ab"), Ordering::Less);
        assert_eq!(locale_cmp("a b", "a-b"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("Monitor", "Monitor 27\""), Ordering::Less);
    }

    #[test]
    fn sorts_mixed_names() {
        let mut names = vec![
            "Zebra Stand",
            "éclair Lamp",
            "USB-C Hub",
            "Eclair Lamp",
            "eclair lamp",
            "Über Dock",
            "antivirus Software",
            "Laptop Pro 15\"",
            "Laptop-Pro",
            "Laptop Pro",
        ];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(
            names,
            vec![
                "antivirus Software",
                "eclair lamp",
                "Eclair Lamp",
                "éclair Lamp",
                "Laptop Pro",
                "Laptop Pro 15\"",
                "Laptop-Pro",
                "Über Dock",
                "USB-C Hub",
                "Zebra Stand",
            ]
        );
    }
}
