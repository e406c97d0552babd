//! User-facing outcome messages

use crate::{CoreResult, PayoutMethod, SubmitError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast reporting how an action went
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn referral_submitted() -> Self {
        Self::success(
            "Referral Submitted Successfully!",
            "We'll notify you once the installation is completed and your reward is ready.",
        )
    }

    /// `reward` is the already formatted amount, e.g. `₹1000`
    pub fn reward_claimed(reward: &str, method: PayoutMethod) -> Self {
        Self::success(
            "Reward Claimed Successfully!",
            format!(
                "{reward} will be transferred to your {} within 24 hours.",
                method.destination()
            ),
        )
    }

    pub fn submission_failed(err: &SubmitError) -> Self {
        Self::error("Something went wrong", err.to_string())
    }

    /// The toast for a settled submission, success or not
    pub fn for_outcome(outcome: CoreResult<Notification>) -> Self {
        outcome.unwrap_or_else(|err| Self::submission_failed(&err))
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_claimed_mentions_destination() {
        let upi = Notification::reward_claimed("₹1000", PayoutMethod::Upi);
        assert_eq!(
            upi.description,
            "₹1000 will be transferred to your UPI ID within 24 hours."
        );

        let bank = Notification::reward_claimed("₹1000", PayoutMethod::Bank);
        assert!(bank.description.contains("bank account"));
        assert!(bank.is_success());
    }

    #[test]
    fn test_failure_carries_error_text() {
        let note = Notification::submission_failed(&SubmitError::Rejected("coupon already used".into()));
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.description, "Submission rejected: coupon already used");
    }

    #[test]
    fn test_outcome_maps_to_toast() {
        assert_eq!(
            Notification::for_outcome(Ok(Notification::referral_submitted())),
            Notification::referral_submitted()
        );

        let failed = Notification::for_outcome(Err(SubmitError::InFlight));
        assert!(!failed.is_success());
        assert_eq!(failed.title, "Something went wrong");
    }
}
