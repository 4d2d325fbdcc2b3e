//! Skill normalization service.
//!
//! The core is [`normalize::normalize_skill`]: a deterministic pipeline that
//! maps free-text technology/skill names to canonical tokens. The HTTP layer in
//! [`routes`] exposes it alongside a small date-string cleaner.

pub mod config;
pub mod dates;
pub mod errors;
pub mod normalize;
pub mod routes;
pub mod state;
