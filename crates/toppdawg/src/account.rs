//! Signed-in account state.
//!
//! Authentication itself lives with the hosted service; the dashboard only
//! ever sees the resulting session, which today is just the subscriber's
//! email address. No account session means notifications have no recipient.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A signed-in subscriber account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSession {
    /// Email address the account is registered under.
    pub email: String,
}

impl AccountSession {
    /// Create an account session for the given email address.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Build the account session from configuration, if one is signed in.
    ///
    /// Returns `None` when no email is configured, which the dashboard
    /// treats as signed out.
    #[must_use]
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .account
            .email
            .as_deref()
            .filter(|email| !email.is_empty())
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let account = AccountSession::new("dog@example.com");
        assert_eq!(account.email, "dog@example.com");
    }

    #[test]
    fn test_from_config_signed_in() {
        let mut config = Config::default();
        config.account.email = Some("dog@example.com".to_string());

        let account = AccountSession::from_config(&config);
        assert_eq!(account, Some(AccountSession::new("dog@example.com")));
    }

    #[test]
    fn test_from_config_signed_out() {
        let config = Config::default();
        assert_eq!(AccountSession::from_config(&config), None);
    }

    #[test]
    fn test_from_config_empty_email_is_signed_out() {
        let mut config = Config::default();
        config.account.email = Some(String::new());

        assert_eq!(AccountSession::from_config(&config), None);
    }

    #[test]
    fn test_serialization() {
        let account = AccountSession::new("dog@example.com");
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("dog@example.com"));

        let deserialized: AccountSession = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
