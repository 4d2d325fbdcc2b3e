// Skill normalization pipeline.
// Stages run strictly in order: sanitize → alias → pattern → stopwords → finalize.
// Every stage is total over its input; the only fallible step is building the tables.

pub mod alias;
pub mod finalizer;
pub mod handlers;
pub mod pattern;
pub mod sanitizer;
pub mod stopwords;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::normalize::alias::{resolve_alias, AliasTable};
use crate::normalize::finalizer::finalize;
use crate::normalize::pattern::{resolve_pattern, PatternRuleSet};
use crate::normalize::sanitizer::Sanitizer;
use crate::normalize::stopwords::{filter_stopwords, StopwordSet};

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("alias variant '{variant}' is registered under both '{first}' and '{second}'")]
    ConflictingAlias {
        variant: String,
        first: String,
        second: String,
    },
}

pub(crate) fn compile(pattern: &str) -> Result<Regex, NormalizerError> {
    Regex::new(pattern).map_err(|source| NormalizerError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// The full pipeline with its rule tables. Build once, share by reference.
#[derive(Debug, Clone)]
pub struct SkillNormalizer {
    sanitizer: Sanitizer,
    aliases: AliasTable,
    patterns: PatternRuleSet,
    stopwords: StopwordSet,
}

impl SkillNormalizer {
    pub fn new(
        aliases: AliasTable,
        patterns: PatternRuleSet,
        stopwords: StopwordSet,
    ) -> Result<Self, NormalizerError> {
        Ok(Self {
            sanitizer: Sanitizer::new()?,
            aliases,
            patterns,
            stopwords,
        })
    }

    /// Pipeline loaded with the built-in alias, pattern and stopword tables.
    pub fn builtin() -> Result<Self, NormalizerError> {
        Self::new(
            AliasTable::builtin()?,
            PatternRuleSet::builtin()?,
            StopwordSet::builtin(),
        )
    }

    /// Maps free text to a canonical skill token. Empty string means the input
    /// is not a usable skill name.
    pub fn normalize(&self, raw: &str, remove_stopwords: bool) -> String {
        let text = self.sanitizer.sanitize(raw);
        let text = resolve_alias(&text, &self.aliases);
        let text = resolve_pattern(&text, &self.patterns);
        let text = filter_stopwords(&text, &self.stopwords, remove_stopwords);
        finalize(&text)
    }
}

static BUILTIN: LazyLock<SkillNormalizer> = LazyLock::new(|| {
    SkillNormalizer::builtin().expect("built-in skill tables must compile")
});

/// Normalizes with the process-wide built-in tables.
pub fn normalize_skill(raw: &str, remove_stopwords: bool) -> String {
    BUILTIN.normalize(raw, remove_stopwords)
}
