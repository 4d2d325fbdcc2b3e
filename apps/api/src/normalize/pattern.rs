//! PatternResolver — ordered regex rewrites, first change wins.

use regex::Regex;

use crate::normalize::{compile, NormalizerError};

/// Built-in rewrite rules. Order is part of the contract.
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    (r"^angular.*$", "angularjs"),
    (r"^node.*$", "nodejs"),
    (r"^(.*)[_\s]js$", "${1}js"),
    (r"^(.*) js$", "${1}js"),
    // Greedy: keeps everything before the last " and"/" or".
    (r"^(.*) (and|or).*$", "${1}"),
];

#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    replacement: String,
}

impl PatternRule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, NormalizerError> {
        Ok(Self {
            pattern: compile(pattern)?,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Ordered rule list. Evaluation stops at the first rule whose substitution
/// changes the text.
#[derive(Debug, Clone, Default)]
pub struct PatternRuleSet {
    rules: Vec<PatternRule>,
}

impl PatternRuleSet {
    pub fn new<'a, I>(rules: I) -> Result<Self, NormalizerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = rules
            .into_iter()
            .map(|(pattern, replacement)| PatternRule::new(pattern, replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn builtin() -> Result<Self, NormalizerError> {
        Self::new(BUILTIN_PATTERNS.iter().copied())
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }
}

pub fn resolve_pattern(text: &str, rules: &PatternRuleSet) -> String {
    for rule in &rules.rules {
        let rewritten = rule.pattern.replace(text, rule.replacement.as_str());
        if rewritten != text {
            return rewritten.into_owned();
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> String {
        resolve_pattern(text, &PatternRuleSet::builtin().unwrap())
    }

    #[test]
    fn test_builtin_rules_compile_in_order() {
        let rules = PatternRuleSet::builtin().unwrap();
        assert_eq!(rules.rules().len(), BUILTIN_PATTERNS.len());
        assert_eq!(rules.rules()[0].pattern(), r"^angular.*$");
    }

    #[test]
    fn test_angular_family_collapses() {
        assert_eq!(resolve("angular 2"), "angularjs");
        assert_eq!(resolve("angular material"), "angularjs");
    }

    #[test]
    fn test_node_family_collapses() {
        assert_eq!(resolve("node"), "nodejs");
        assert_eq!(resolve("node express"), "nodejs");
    }

    #[test]
    fn test_unchanged_rule_falls_through() {
        // "^node.*$" matches but produces the same text; no later rule applies either.
        assert_eq!(resolve("nodejs"), "nodejs");
    }

    #[test]
    fn test_separated_js_suffix_attaches() {
        assert_eq!(resolve("vue js"), "vuejs");
        assert_eq!(resolve("ember_js"), "emberjs");
    }

    #[test]
    fn test_conjunction_keeps_leading_skill() {
        assert_eq!(resolve("research and development"), "research");
        assert_eq!(resolve("python or ruby"), "python");
        assert_eq!(resolve("design and build and test"), "design and build");
    }

    #[test]
    fn test_conjunction_match_is_not_word_bounded() {
        assert_eq!(resolve("sql oracle"), "sql");
    }

    #[test]
    fn test_first_change_wins() {
        assert_eq!(resolve("angular and react"), "angularjs");
    }

    #[test]
    fn test_no_match_is_passthrough() {
        assert_eq!(resolve("python"), "python");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_custom_rules_stop_after_first_change() {
        let rules = PatternRuleSet::new([("^a$", "b"), ("^b$", "c")]).unwrap();
        assert_eq!(resolve_pattern("a", &rules), "b");
        assert_eq!(resolve_pattern("b", &rules), "c");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = PatternRuleSet::new([("(unclosed", "x")]).unwrap_err();
        assert!(matches!(err, NormalizerError::InvalidPattern { .. }));
    }
}
