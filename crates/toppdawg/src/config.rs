//! Configuration management for toppdawg.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::notify::dispatch::DispatchConfig;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "toppdawg";

/// Default preference database file name.
const PREFS_FILE_NAME: &str = "prefs.db";

/// Shape check for configured email addresses.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TOPPDAWG_`, sections split on `__`)
/// 2. TOML config file at `~/.config/toppdawg/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preference store configuration.
    pub store: StoreConfig,
    /// Signed-in account configuration.
    pub account: AccountConfig,
    /// Payment provider configuration.
    pub billing: BillingConfig,
    /// Notification configuration.
    pub notify: NotifyConfig,
}

/// Preference store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the preference database file.
    /// Defaults to `~/.local/share/toppdawg/prefs.db`
    pub prefs_path: Option<PathBuf>,
}

/// Signed-in account configuration.
///
/// Sign-in happens on the hosted service; the dashboard just needs to know
/// who the subscriber is. No email means signed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Email address of the signed-in subscriber.
    pub email: Option<String>,
}

/// Payment provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Publishable key for the payment provider.
    pub publishable_key: Option<String>,
}

/// Notification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Enable profile-added notifications.
    pub enabled: bool,
    /// Directory to write notifications into instead of the log.
    pub outbox_path: Option<PathBuf>,
    /// Delivery attempts per notification before giving up.
    pub max_attempts: u32,
    /// Pause between delivery attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            outbox_path: None, // Log-only delivery by default
            max_attempts: 3,
            retry_delay_ms: 500,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `TOPPDAWG_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("TOPPDAWG_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(email) = self.account.email.as_deref() {
            if !email.is_empty() {
                let email_re =
                    regex::Regex::new(EMAIL_PATTERN).map_err(|e| Error::ConfigValidation {
                        message: format!("invalid email pattern: {e}"),
                    })?;
                if !email_re.is_match(email) {
                    return Err(Error::ConfigValidation {
                        message: format!(
                            "account.email '{email}' does not look like an email address"
                        ),
                    });
                }
            }
        }

        if self.notify.max_attempts == 0 {
            return Err(Error::ConfigValidation {
                message: "notify.max_attempts must be at least 1".to_string(),
            });
        }

        if self.notify.retry_delay_ms == 0 {
            return Err(Error::ConfigValidation {
                message: "notify.retry_delay_ms must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Get the preference database path, resolving defaults if not set.
    #[must_use]
    pub fn prefs_path(&self) -> PathBuf {
        self.store
            .prefs_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(PREFS_FILE_NAME))
    }

    /// Get the configured outbox directory, if any.
    #[must_use]
    pub fn outbox_path(&self) -> Option<PathBuf> {
        self.notify.outbox_path.clone()
    }

    /// Get the retry delay as a Duration.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.notify.retry_delay_ms)
    }

    /// Get the dispatch worker policy from the notification settings.
    #[must_use]
    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            max_attempts: self.notify.max_attempts,
            retry_delay: self.retry_delay(),
        }
    }
}
