//! Payment provider handle.
//!
//! Checkout runs entirely on the payment provider's side; the dashboard
//! only holds the publishable key it was configured with. The key is
//! publishable by definition, but status output still masks it to keep
//! logs and screenshots tidy.

use crate::config::Config;

/// Prefix of live-mode publishable keys.
const LIVE_KEY_PREFIX: &str = "pk_live_";

/// A configured handle to the payment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingClient {
    publishable_key: String,
}

impl BillingClient {
    /// Create a billing client with the given publishable key.
    #[must_use]
    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: publishable_key.into(),
        }
    }

    /// Build the billing client from configuration, if a key is set.
    #[must_use]
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .billing
            .publishable_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(Self::new)
    }

    /// The raw publishable key.
    #[must_use]
    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    /// Whether the key is a live-mode key rather than a test key.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.publishable_key.starts_with(LIVE_KEY_PREFIX)
    }

    /// The key with its middle elided, for display.
    #[must_use]
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.publishable_key.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }

        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let client = BillingClient::new("pk_test_abc123");
        assert_eq!(client.publishable_key(), "pk_test_abc123");
    }

    #[test]
    fn test_from_config_with_key() {
        let mut config = Config::default();
        config.billing.publishable_key = Some("pk_test_abc123".to_string());

        let client = BillingClient::from_config(&config);
        assert_eq!(client, Some(BillingClient::new("pk_test_abc123")));
    }

    #[test]
    fn test_from_config_without_key() {
        let config = Config::default();
        assert_eq!(BillingClient::from_config(&config), None);
    }

    #[test]
    fn test_from_config_empty_key() {
        let mut config = Config::default();
        config.billing.publishable_key = Some(String::new());

        assert_eq!(BillingClient::from_config(&config), None);
    }

    #[test]
    fn test_is_live() {
        assert!(BillingClient::new("pk_live_abc123xyz").is_live());
        assert!(!BillingClient::new("pk_test_abc123xyz").is_live());
    }

    #[test]
    fn test_masked_key_elides_middle() {
        let client = BillingClient::new("pk_test_51AbCdEf123456");
        assert_eq!(client.masked_key(), "pk_t...3456");
    }

    #[test]
    fn test_masked_key_short_key() {
        let client = BillingClient::new("short");
        assert_eq!(client.masked_key(), "*****");
    }

    #[test]
    fn test_masked_key_never_reveals_middle() {
        let key = "pk_test_51AbCdEf123456";
        let masked = BillingClient::new(key).masked_key();
        assert!(!masked.contains("51AbCdEf"));
    }
}
