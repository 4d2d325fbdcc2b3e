//! AliasResolver — whole-string synonym substitution.

use std::collections::HashMap;

use crate::normalize::NormalizerError;

/// Built-in synonym groups, in declaration order. The first element of each
/// group is the canonical root; the rest are exact-match variants of
/// already-sanitized text.
pub const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("javascript", &["js", "java script", "javascripts", "java scrip"]),
    (
        "wireframe",
        &[
            "wireframes",
            "wire frame",
            "wire frames",
            "wire-frame",
            "wirefram",
            "wire fram",
            "wireframing",
        ],
    ),
    ("aws", &["amazon web service"]),
    ("OOP", &["object oriented", "object oriented programming"]),
    ("osx", &["mac os x", "os x"]),
    ("OOD", &["object oriented design"]),
    ("OLAP", &["online analytical processing"]),
    ("Ecommerce", &["e commerce"]),
    ("consultant", &["consulting"]),
    (
        "ux",
        &[
            "user experience",
            "web user experience design",
            "user experience design",
            "ux designer",
            "user experience/ux",
        ],
    ),
    ("html5", &["html 5"]),
    ("bigdata", &["big data"]),
    ("j2ee", &["jee"]),
    ("senior", &["sr"]),
    ("qa", &["quality"]),
    ("nlp", &["natural language process", "natural language", "nltk"]),
    ("webservice", &["webservices", "website", "webapps"]),
    ("xml", &["xml file", "xml schemas", "xml/json", "xml web service"]),
];

/// Immutable variant → root lookup. Roots are case-sensitive and emitted as
/// declared; the finalizer lowercases them later.
#[derive(Debug, Clone)]
pub struct AliasTable {
    roots: HashMap<String, String>,
}

impl AliasTable {
    /// Builds a table from `(root, variants)` groups.
    ///
    /// A variant registered under two different roots is rejected.
    pub fn new<'a, I>(groups: I) -> Result<Self, NormalizerError>
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut roots = HashMap::new();
        for (root, variants) in groups {
            for &variant in variants {
                if let Some(existing) = roots.insert(variant.to_string(), root.to_string()) {
                    if existing != root {
                        return Err(NormalizerError::ConflictingAlias {
                            variant: variant.to_string(),
                            first: existing,
                            second: root.to_string(),
                        });
                    }
                }
            }
        }
        Ok(Self { roots })
    }

    pub fn builtin() -> Result<Self, NormalizerError> {
        Self::new(BUILTIN_ALIASES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Replaces the whole string with its canonical root when it exactly equals a
/// registered variant. Anything else passes through.
pub fn resolve_alias(sanitized: &str, table: &AliasTable) -> String {
    table
        .roots
        .get(sanitized)
        .cloned()
        .unwrap_or_else(|| sanitized.to_string())
}
