//! Engine configuration
//!
//! Configuration is loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Required Keys
//! - `BIOGUIDE_PHOTO_ROOT`: base URL that portrait references are appended to
//! - `VOTE_SNAPSHOT_PATH`: JSON vote snapshot backing the vote store
//!
//! ## Optional Keys
//! - `CURRENT_CONGRESS`: congress number analyses are scoped to (default 119)
//! - `MIN_VOTE_THRESHOLD`: shared votes a pair must exceed to be reported (default 20)
//! - `STORE_TIMEOUT_SECS`: bound on every vote store fetch (default 10)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use shared::Congress;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Runtime configuration consumed by the engine and the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub current_congress: Congress,
    pub min_vote_threshold: u32,
    pub photo_base_url: String,
    pub snapshot_path: PathBuf,
    pub fetch_timeout: Duration,
}

impl AnalyticsConfig {
    pub const DEFAULT_CONGRESS: u32 = 119;
    pub const DEFAULT_MIN_VOTE_THRESHOLD: u32 = 20;
    pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

    const REQUIRED_KEYS: &'static [&'static str] = &["BIOGUIDE_PHOTO_ROOT", "VOTE_SNAPSHOT_PATH"];

    /// Create a configuration with defaults for every optional key
    pub fn new(photo_base_url: impl Into<String>, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            current_congress: Congress(Self::DEFAULT_CONGRESS),
            min_vote_threshold: Self::DEFAULT_MIN_VOTE_THRESHOLD,
            photo_base_url: photo_base_url.into(),
            snapshot_path: snapshot_path.into(),
            fetch_timeout: Self::DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_congress(mut self, congress: Congress) -> Self {
        self.current_congress = congress;
        self
    }

    pub fn with_min_vote_threshold(mut self, threshold: u32) -> Self {
        self.min_vote_threshold = threshold;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Load configuration from `.env` and the process environment
    ///
    /// `overrides` is consulted first, so command-line values win over the
    /// environment.
    pub fn from_env_with<F>(overrides: F) -> AnalyticsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Silently ignored when no .env file exists
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| overrides(key).or_else(|| std::env::var(key).ok()))
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AnalyticsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&str> = Self::REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| lookup(key).map_or(true, |value| value.trim().is_empty()))
            .collect();
        if !missing.is_empty() {
            return Err(AnalyticsError::config(
                missing.join(", "),
                "required configuration must be set as environment variables",
            ));
        }

        let photo_base_url = lookup("BIOGUIDE_PHOTO_ROOT").unwrap_or_default();
        let snapshot_path = lookup("VOTE_SNAPSHOT_PATH").unwrap_or_default();

        let congress = parse_optional(&lookup, "CURRENT_CONGRESS", Self::DEFAULT_CONGRESS)?;
        let threshold = parse_optional(&lookup, "MIN_VOTE_THRESHOLD", Self::DEFAULT_MIN_VOTE_THRESHOLD)?;
        let timeout_secs = parse_optional(
            &lookup,
            "STORE_TIMEOUT_SECS",
            Self::DEFAULT_FETCH_TIMEOUT.as_secs(),
        )?;
        if timeout_secs == 0 {
            return Err(AnalyticsError::config("STORE_TIMEOUT_SECS", "must be greater than zero"));
        }

        Ok(Self::new(photo_base_url.trim(), snapshot_path.trim())
            .with_congress(Congress(congress))
            .with_min_vote_threshold(threshold)
            .with_fetch_timeout(Duration::from_secs(timeout_secs)))
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str, default: T) -> AnalyticsResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AnalyticsError::config(key, format!("invalid value {raw:?}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AnalyticsConfig::from_lookup(lookup_from(&[
            ("BIOGUIDE_PHOTO_ROOT", "https://photos.example/"),
            ("VOTE_SNAPSHOT_PATH", "votes.json"),
        ]))
        .unwrap();

        assert_eq!(config.current_congress, Congress(119));
        assert_eq!(config.min_vote_threshold, 20);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.photo_base_url, "https://photos.example/");
        assert_eq!(config.snapshot_path, PathBuf::from("votes.json"));
    }

    #[test]
    fn test_optional_overrides() {
        let config = AnalyticsConfig::from_lookup(lookup_from(&[
            ("BIOGUIDE_PHOTO_ROOT", "https://photos.example/"),
            ("VOTE_SNAPSHOT_PATH", "votes.json"),
            ("CURRENT_CONGRESS", "118"),
            ("MIN_VOTE_THRESHOLD", " 5 "),
            ("STORE_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.current_congress, Congress(118));
        assert_eq!(config.min_vote_threshold, 5);
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_required_keys_fail_fast() {
        let err = AnalyticsConfig::from_lookup(lookup_from(&[("VOTE_SNAPSHOT_PATH", "votes.json")]))
            .unwrap_err();
        match err {
            AnalyticsError::ConfigurationError { field, .. } => assert_eq!(field, "BIOGUIDE_PHOTO_ROOT"),
            other => panic!("unexpected error: {other}"),
        }

        let err = AnalyticsConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(!err.is_data_store_failure());
    }

    #[test]
    fn test_unparsable_values_rejected() {
        let err = AnalyticsConfig::from_lookup(lookup_from(&[
            ("BIOGUIDE_PHOTO_ROOT", "https://photos.example/"),
            ("VOTE_SNAPSHOT_PATH", "votes.json"),
            ("MIN_VOTE_THRESHOLD", "twenty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::ConfigurationError { ref field, .. } if field == "MIN_VOTE_THRESHOLD"));

        let err = AnalyticsConfig::from_lookup(lookup_from(&[
            ("BIOGUIDE_PHOTO_ROOT", "https://photos.example/"),
            ("VOTE_SNAPSHOT_PATH", "votes.json"),
            ("STORE_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::ConfigurationError { .. }));
    }
}
