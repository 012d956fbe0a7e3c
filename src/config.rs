//! Game configuration
//!
//! Palette size and code length are fixed; the number of attempts and the
//! RNG seed are the only knobs.

use derive_more::{Display, Error};

/// Attempts per game unless overridden
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Largest attempt count a game accepts
pub const MAX_ATTEMPTS_LIMIT: usize = 99;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("a game needs at least one attempt")]
    NoAttempts,
    #[display("a game allows at most 99 attempts, got {_0}")]
    TooManyAttempts(#[error(not(source))] usize),
}

/// Settings for a single game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
    seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with the given number of attempts
    ///
    /// # Errors
    /// Returns `ConfigError::NoAttempts` if `max_attempts` is zero and
    /// `ConfigError::TooManyAttempts` if it is above [`MAX_ATTEMPTS_LIMIT`].
    pub const fn new(max_attempts: usize) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::TooManyAttempts(max_attempts));
        }
        Ok(Self {
            max_attempts,
            seed: None,
        })
    }

    /// Use a fixed seed so secrets are reproducible
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_ten_attempts() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts(), 10);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn zero_attempts_rejected() {
        assert_eq!(GameConfig::new(0), Err(ConfigError::NoAttempts));
    }

    #[test]
    fn attempt_count_is_capped() {
        assert!(GameConfig::new(MAX_ATTEMPTS_LIMIT).is_ok());
        assert_eq!(
            GameConfig::new(MAX_ATTEMPTS_LIMIT + 1),
            Err(ConfigError::TooManyAttempts(100))
        );
        let err = GameConfig::new(usize::MAX).unwrap_err();
        assert_eq!(err, ConfigError::TooManyAttempts(usize::MAX));
        assert!(err.to_string().contains("at most 99"));
    }

    #[test]
    fn seed_is_kept() {
        let config = GameConfig::new(3).unwrap().with_seed(42);
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.seed(), Some(42));
    }
}
