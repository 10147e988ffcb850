//! Configuration management
//!
//! Process-wide settings seeded from environment variables.

pub mod settings;

pub use settings::{Config, DEFAULT_DIFFICULTY, GLOBAL_CONFIG};
