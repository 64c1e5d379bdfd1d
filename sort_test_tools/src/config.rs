//! Environment driven settings for the test suite and benchmarks.
//!
//! - `OVERRIDE_SEED=<u64>` fixes the seed used by all random patterns.
//! - `WRITE_LARGE_FAILURE` writes large failing inputs to files instead of stderr.
//! - `EXTRA_PATTERNS` makes the benchmarks include the worst case oriented patterns.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

pub const OVERRIDE_SEED: &str = "OVERRIDE_SEED";
pub const WRITE_LARGE_FAILURE: &str = "WRITE_LARGE_FAILURE";
pub const EXTRA_PATTERNS: &str = "EXTRA_PATTERNS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{OVERRIDE_SEED} must be an unsigned 64-bit integer, got '{value}'")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestConfig {
    pub override_seed: Option<u64>,
    pub write_large_failure: bool,
    pub extra_patterns: bool,
}

impl TestConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`TestConfig::from_env`] but reads the variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let override_seed = match lookup(OVERRIDE_SEED) {
            Some(value) => {
                let seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed { value, source })?;
                Some(seed)
            }
            None => None,
        };

        Ok(Self {
            override_seed,
            write_large_failure: lookup(WRITE_LARGE_FAILURE).is_some(),
            extra_patterns: lookup(EXTRA_PATTERNS).is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn empty_env_is_default() {
        let config = TestConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn reads_all_vars() {
        let config = TestConfig::from_lookup(lookup_from(&[
            (OVERRIDE_SEED, " 360013155987181959 "),
            (WRITE_LARGE_FAILURE, ""),
            (EXTRA_PATTERNS, "1"),
        ]))
        .unwrap();

        assert_eq!(config.override_seed, Some(360013155987181959));
        assert!(config.write_large_failure);
        assert!(config.extra_patterns);
    }

    #[test]
    fn rejects_bad_seed() {
        let err = TestConfig::from_lookup(lookup_from(&[(OVERRIDE_SEED, "-3")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidSeed { ref value, .. } if value == "-3"));
        assert!(err.to_string().contains("OVERRIDE_SEED"));
    }
}
