//! Minimal framework config: token and optional API URL.
//! Loaded from env: BOT_TOKEN (or TELEGRAM_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;
use tracing::info;

/// Minimal Telegram bot config (connectivity only).
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"***")
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN / TELEGRAM_TOKEN; one of them is required.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TELEGRAM_TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN (or TELEGRAM_TOKEN) not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token and no custom API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Validates config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointed at `telegram_api_url` when set (e.g. a mock server).
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))?;
                info!(api_url = %url, "Using custom Telegram API URL");
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "TELEGRAM_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
        ] {
            env::remove_var(key);
        }
    }

    /// **Test: with_token sets bot_token; no API URL.**
    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_token() {
        clear_env();
        assert!(TelegramConfig::from_env(None).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_telegram_token() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "legacy_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");

        let config = TelegramConfig::from_env(None).unwrap();

        assert_eq!(config.bot_token, "legacy_token");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_token_argument_overrides_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");

        let config = TelegramConfig::from_env(Some("cli_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "cli_token");
        clear_env();
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }

    #[test]
    fn test_debug_hides_token() {
        let config = TelegramConfig::with_token("123456:SECRET".to_string());
        assert!(!format!("{:?}", config).contains("SECRET"));
    }
}
