use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::error::ConfigError;

pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub questions_per_page: usize,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self {
            port: try_load("TRIVIA_PORT", "5000")?,
            database_path: try_load("TRIVIA_DATABASE", "trivia.db")?,
            questions_per_page: try_load("QUESTIONS_PER_PAGE", "10")?,
        };

        if config.questions_per_page == 0 {
            return Err(ConfigError::Invalid {
                key: "QUESTIONS_PER_PAGE",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            database_path: "trivia.db".to_string(),
            questions_per_page: 10,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_used_when_unset() {
        let port: u16 = try_load("TRIVIA_TEST_UNSET_PORT", "5000").unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_invalid_default_reported() {
        let result: Result<u16, _> = try_load("TRIVIA_TEST_UNSET_PAGE", "ten");

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "TRIVIA_TEST_UNSET_PAGE",
                ..
            })
        ));
    }
}
