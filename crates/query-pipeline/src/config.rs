//! Pipeline settings: locales, bullet count, chunk size, bullet translation concurrency.
//! Loaded from env: WORKING_LOCALE, OUTPUT_LOCALE, SUMMARY_BULLET_COUNT, TRANSLATE_CONCURRENCY.

use anyhow::Result;
use std::env;

use crate::chunk::TELEGRAM_MAX_MESSAGE_CHARS;

pub const DEFAULT_WORKING_LOCALE: &str = "en";
pub const DEFAULT_OUTPUT_LOCALE: &str = "hi";
pub const DEFAULT_BULLET_COUNT: usize = 50;
pub const DEFAULT_TRANSLATE_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Locale the query is translated into before summarization.
    pub working_locale: String,
    /// Locale the bullets are translated into before delivery.
    pub output_locale: String,
    /// Number of bullet points requested from the model.
    pub bullet_count: usize,
    /// Max characters per outbound message.
    pub max_chunk_size: usize,
    /// Max bullet translations in flight at once; 1 translates strictly one after another.
    pub translate_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            working_locale: DEFAULT_WORKING_LOCALE.to_string(),
            output_locale: DEFAULT_OUTPUT_LOCALE.to_string(),
            bullet_count: DEFAULT_BULLET_COUNT,
            max_chunk_size: TELEGRAM_MAX_MESSAGE_CHARS,
            translate_concurrency: DEFAULT_TRANSLATE_CONCURRENCY,
        }
    }
}

impl PipelineConfig {
    /// Loads from env; unset or unparsable values keep their defaults. The chunk size is
    /// fixed by Telegram and not configurable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let working_locale = env::var("WORKING_LOCALE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.working_locale);
        let output_locale = env::var("OUTPUT_LOCALE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.output_locale);
        let bullet_count = env::var("SUMMARY_BULLET_COUNT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.bullet_count);
        let translate_concurrency = env::var("TRANSLATE_CONCURRENCY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.translate_concurrency);
        Self {
            working_locale,
            output_locale,
            bullet_count,
            max_chunk_size: defaults.max_chunk_size,
            translate_concurrency,
        }
    }

    /// Rejects settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.bullet_count == 0 {
            anyhow::bail!("SUMMARY_BULLET_COUNT must be greater than 0");
        }
        if self.max_chunk_size == 0 || self.max_chunk_size > TELEGRAM_MAX_MESSAGE_CHARS {
            anyhow::bail!(
                "max_chunk_size must be between 1 and {}, got {}",
                TELEGRAM_MAX_MESSAGE_CHARS,
                self.max_chunk_size
            );
        }
        if self.translate_concurrency == 0 {
            anyhow::bail!("TRANSLATE_CONCURRENCY must be greater than 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "WORKING_LOCALE",
            "OUTPUT_LOCALE",
            "SUMMARY_BULLET_COUNT",
            "TRANSLATE_CONCURRENCY",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = PipelineConfig::from_env();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.working_locale, "en");
        assert_eq!(config.output_locale, "hi");
        assert_eq!(config.bullet_count, 50);
        assert_eq!(config.max_chunk_size, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("OUTPUT_LOCALE", "ta");
        env::set_var("SUMMARY_BULLET_COUNT", "10");
        env::set_var("TRANSLATE_CONCURRENCY", "not-a-number");

        let config = PipelineConfig::from_env();

        assert_eq!(config.working_locale, "en");
        assert_eq!(config.output_locale, "ta");
        assert_eq!(config.bullet_count, 10);
        assert_eq!(config.translate_concurrency, DEFAULT_TRANSLATE_CONCURRENCY);
        clear_env();
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = PipelineConfig::default();
        config.max_chunk_size = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.bullet_count = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.translate_concurrency = 0;
        assert!(config.validate().is_err());
    }
}
