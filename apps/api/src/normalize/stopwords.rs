use std::collections::HashSet;

/// Words dropped from a skill when they stand alone as a token.
/// `designdeveloper` is a single entry in this table version.
pub const BUILTIN_STOPWORDS: &[&str] = &[
    "app",
    "touch",
    "the",
    "application",
    "programming",
    "program",
    "designdeveloper",
    "framework",
    "development",
    "programmer",
    "technologies",
    "advance",
    "core",
    "include",
];

#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_STOPWORDS)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

/// Drops whole space-delimited tokens found in `stopwords`. Identity when
/// `enabled` is false.
pub fn filter_stopwords(text: &str, stopwords: &StopwordSet, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    text.split(' ')
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
