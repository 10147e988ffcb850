use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

/// Number of leading zero hex characters a valid proof digest must carry.
/// The reference behavior requires 3; raising it increases mining effort
/// by a factor of 16 per character.
pub const DEFAULT_DIFFICULTY: usize = 3;

const DIFFICULTY_KEY: &str = "DIFFICULTY";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut map = HashMap::new();

        if let Ok(difficulty) = env::var(DIFFICULTY_KEY) {
            map.insert(String::from(DIFFICULTY_KEY), difficulty);
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    /// Difficulty for the proof-of-work predicate, falling back to
    /// [`DEFAULT_DIFFICULTY`] when unset or unparseable.
    pub fn get_difficulty(&self) -> usize {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(DIFFICULTY_KEY)
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(DEFAULT_DIFFICULTY)
    }

    pub fn set_difficulty(&self, difficulty: usize) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(DIFFICULTY_KEY), difficulty.to_string());
    }

}
