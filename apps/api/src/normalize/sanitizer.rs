//! Sanitizer — first stage of the skill pipeline.
//!
//! Turns raw user/scraped text into a lowercase, single-spaced string with
//! entity noise, parentheticals and punctuation removed.

use regex::Regex;

use crate::normalize::{compile, NormalizerError};

/// Characters (and one mojibake sequence) deleted outright.
const STRIPPED: &[&str] = &["-", "(", ".", ",", ":", ")", "รฅรก"];

/// Spacing/hyphenation variants of the "js" suffix. Applied before
/// lowercasing, so these are case-sensitive.
const JS_VARIANTS: &[(&str, &str)] = &[
    (" js", "js"),
    ("-js", "js"),
    ("_js", "js"),
    ("java script", "js"),
];

#[derive(Debug, Clone)]
pub struct Sanitizer {
    parenthetical: Regex,
}

impl Sanitizer {
    pub fn new() -> Result<Self, NormalizerError> {
        Ok(Self {
            // Greedy and non-nested: "a (b) c (d)" loses everything from the first "(" to the last ")".
            parenthetical: compile(r"\(.*\)")?,
        })
    }

    pub fn sanitize(&self, raw: &str) -> String {
        // HTML5 character-reference rules: legacy names without ';', U+FFFD for
        // invalid code points, windows-1252 for the C1 range.
        let decoded = htmlize::unescape(raw);

        let collapsed = decoded
            .replace('_', " ")
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let mut text = self.parenthetical.replace_all(&collapsed, "").into_owned();

        for noise in STRIPPED {
            text = text.replace(noise, "");
        }
        text = text.replace('&', "and");
        for (variant, suffix) in JS_VARIANTS {
            text = text.replace(variant, suffix);
        }

        text.to_lowercase()
    }
}

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
