//! Finalizer — last-mile fixups that turn pipeline text into a canonical token.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Delimiters that mark a multi-valued or path-like field, checked in order.
const SEGMENT_DELIMITERS: &[char] = &['/', ';'];

pub fn finalize(text: &str) -> String {
    // Drops the suffix the pattern rules attach, so "nodejs" canonicalises to "node".
    let mut text = text.strip_suffix("js").unwrap_or(text);

    for delimiter in SEGMENT_DELIMITERS {
        if let Some((head, _)) = text.split_once(*delimiter) {
            text = head;
        }
    }

    let token = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    if is_numeric(&token) {
        return String::new();
    }
    token
}

/// Characters with Numeric_Type=Digit: digits that are not decimal (Nd) but
/// still count as digits, e.g. superscripts and circled numbers.
const NON_DECIMAL_DIGITS: &[(char, char)] = &[
    ('\u{b2}', '\u{b3}'),
    ('\u{b9}', '\u{b9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19da}', '\u{19da}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247c}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24ea}', '\u{24ea}'),
    ('\u{24f5}', '\u{24fd}'),
    ('\u{24ff}', '\u{24ff}'),
    ('\u{2776}', '\u{277e}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278a}', '\u{2792}'),
    ('\u{10a40}', '\u{10a43}'),
    ('\u{10e60}', '\u{10e68}'),
    ('\u{11052}', '\u{1105a}'),
    ('\u{1f100}', '\u{1f10a}'),
];

fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
        || NON_DECIMAL_DIGITS
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_js_stripped_once() {
        assert_eq!(finalize("nodejs"), "node");
        assert_eq!(finalize("angularjs"), "angular");
        assert_eq!(finalize("jsjs"), "js");
    }

    #[test]
    fn test_inner_js_is_kept() {
        assert_eq!(finalize("jsx"), "jsx");
        assert_eq!(finalize("javascript"), "javascript");
    }

    #[test]
    fn test_keeps_first_segment() {
        assert_eq!(finalize("python/django"), "python");
        assert_eq!(finalize("c;c++"), "c");
        assert_eq!(finalize("html;css/sass"), "html");
        assert_eq!(finalize("/leading"), "");
    }

    #[test]
    fn test_whitespace_becomes_single_underscores() {
        assert_eq!(finalize("  machine   learning "), "machine_learning");
        assert_eq!(finalize("Web Design"), "web_design");
    }

    #[test]
    fn test_numeric_rejected() {
        assert_eq!(finalize("12345"), "");
        assert_eq!(finalize("2012 "), "");
        assert_eq!(finalize("2012js"), "");
    }

    #[test]
    fn test_unicode_digits_rejected() {
        assert_eq!(finalize("١٢٣"), "");
        assert_eq!(finalize("²³"), "");
        assert_eq!(finalize("①"), "");
        assert_eq!(finalize("१२"), "");
    }

    #[test]
    fn test_other_numeric_chars_kept() {
        assert_eq!(finalize("½"), "½");
        assert_eq!(finalize("ⅻ"), "ⅻ");
    }

    #[test]
    fn test_alphanumeric_kept() {
        assert_eq!(finalize("html5"), "html5");
        assert_eq!(finalize("3d modeling"), "3d_modeling");
    }

    #[test]
    fn test_uppercase_alias_roots_are_lowered() {
        assert_eq!(finalize("OOP"), "oop");
    }

    #[test]
    fn test_empty() {
        assert_eq!(finalize(""), "");
    }
}
