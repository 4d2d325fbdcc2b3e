use std::sync::Arc;

use crate::config::Config;
use crate::normalize::SkillNormalizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; read-only afterwards.
    pub normalizer: Arc<SkillNormalizer>,
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState {
        config: Config {
            max_skill_len: 32,
            max_batch_size: 3,
            ..Config::default()
        },
        normalizer: Arc::new(SkillNormalizer::builtin().unwrap()),
    }
}
