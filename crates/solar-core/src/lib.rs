//! Solar Rewards core model
//!
//! This crate holds everything the referral site does that is not markup:
//! route resolution, the navigation menu model, the referral and redemption
//! form records, the submission state machine and the submission service
//! abstraction with its simulated backend.

pub mod forms;
pub mod money;
pub mod notification;
pub mod routes;
pub mod submission;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use forms::{
    FormRequest, PayoutMethod, RedemptionField, RedemptionRequest, ReferralField, ReferralRequest,
};
pub use money::format_rupees;
pub use notification::{Notification, NotificationKind};
pub use routes::{MobileMenu, NavLink, Page, CATCH_ALL, NAV_LINKS};
pub use submission::{
    FormMachine, FormPhase, SimulatedService, Sleeper, Submission, SubmissionService, Ticket,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

pub type CoreResult<T> = Result<T, SubmitError>;

/// Site-wide settings, read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Latency of the simulated submission backend
    pub submit_latency_ms: u64,
    /// Reward paid per completed installation, in rupees
    pub reward_amount: u64,
    /// How long a notification stays on screen
    pub notification_ttl_ms: u64,
    /// Make the simulated backend reject every submission
    pub simulate_failure: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 2000,
            reward_amount: 1000,
            notification_ttl_ms: 5000,
            simulate_failure: false,
        }
    }
}

impl SiteConfig {
    pub const LATENCY_KEY: &'static str = "data-submit-latency-ms";
    pub const REWARD_KEY: &'static str = "data-reward-amount";
    pub const TTL_KEY: &'static str = "data-notification-ttl-ms";
    pub const FAILURE_KEY: &'static str = "data-simulate-failure";

    /// Build a config from a key lookup (the site passes document root
    /// attributes). Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::LATENCY_KEY) {
            config.submit_latency_ms = parse_number(Self::LATENCY_KEY, value)?;
        }
        if let Some(value) = lookup(Self::REWARD_KEY) {
            config.reward_amount = parse_number(Self::REWARD_KEY, value)?;
        }
        if let Some(value) = lookup(Self::TTL_KEY) {
            config.notification_ttl_ms = parse_number(Self::TTL_KEY, value)?;
        }
        if let Some(value) = lookup(Self::FAILURE_KEY) {
            config.simulate_failure = match value.trim() {
                "" | "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: Self::FAILURE_KEY,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Reward as shown in running text and notifications, e.g. `₹1000`
    pub fn reward_label(&self) -> String {
        format_rupees(self.reward_amount, false)
    }

    /// Reward as shown in headline cards, e.g. `₹1,000`
    pub fn reward_headline(&self) -> String {
        format_rupees(self.reward_amount, true)
    }
}

fn parse_number(key: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
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
    fn test_defaults_when_nothing_configured() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.submit_latency(), Duration::from_secs(2));
        assert_eq!(config.reward_label(), "₹1000");
        assert_eq!(config.reward_headline(), "₹1,000");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("data-submit-latency-ms", " 250 "),
            ("data-reward-amount", "1500"),
            ("data-simulate-failure", ""),
        ]))
        .unwrap();

        assert_eq!(config.submit_latency_ms, 250);
        assert_eq!(config.reward_amount, 1500);
        assert_eq!(config.notification_ttl_ms, 5000);
        assert!(config.simulate_failure);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = SiteConfig::from_lookup(lookup_from(&[("data-reward-amount", "lots")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "data-reward-amount",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: SiteConfig = serde_json::from_str(r#"{"reward_amount": 2000}"#).unwrap();
        assert_eq!(config.reward_amount, 2000);
        assert_eq!(config.submit_latency_ms, 2000);
    }

    #[test]
    fn test_missing_fields_message() {
        let err = SubmitError::MissingFields(vec!["Coupon Code", "UPI ID"]);
        assert_eq!(err.to_string(), "Please fill in: Coupon Code, UPI ID");
    }
}
