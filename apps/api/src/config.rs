use std::str::FromStr;

use anyhow::{Context, Result};

use crate::scoring::scorer::ScoringPolicy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scoring: ScoringPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            scoring: ScoringPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let policy = defaults.scoring;

        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            scoring: ScoringPolicy {
                risk_penalty: env_or("SCORING_RISK_PENALTY", policy.risk_penalty)?,
                salary_tolerance: env_or("SCORING_SALARY_TOLERANCE", policy.salary_tolerance)?,
                job_hop_limit: env_or("SCORING_JOB_HOP_LIMIT", policy.job_hop_limit)?,
                ..policy
            },
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_default() {
        assert_eq!(parse_or::<u16>("PORT", None, 8080).unwrap(), 8080);
    }

    #[test]
    fn test_value_is_parsed() {
        assert_eq!(parse_or::<u16>("PORT", Some("3000".into()), 8080).unwrap(), 3000);
        assert_eq!(
            parse_or::<f64>("SCORING_SALARY_TOLERANCE", Some(" 1.5 ".into()), 1.2).unwrap(),
            1.5
        );
    }

    #[test]
    fn test_invalid_value_names_the_variable() {
        let err = parse_or::<u32>("SCORING_RISK_PENALTY", Some("ten".into()), 10).unwrap_err();
        assert!(err.to_string().contains("SCORING_RISK_PENALTY"));
    }

    #[test]
    fn test_default_config_uses_published_rubric() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.scoring, ScoringPolicy::default());
    }
}
