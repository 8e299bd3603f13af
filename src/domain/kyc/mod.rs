//! KYC domain: submission review decisions.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of an admin's KYC review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KycDecision {
    Approved,
    Rejected { reason: String },
}

impl KycDecision {
    pub fn status(&self) -> &'static str {
        match self {
            KycDecision::Approved => "approved",
            KycDecision::Rejected { .. } => "rejected",
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            KycDecision::Approved => None,
            KycDecision::Rejected { reason } => Some(reason),
        }
    }
}

/// Review metadata written to `kyc_submissions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycReview {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub reviewed_at: DateTime<Utc>,
    pub reviewed_by: String,
}

impl KycReview {
    pub fn new(decision: &KycDecision, reviewer: &str, at: DateTime<Utc>) -> Self {
        Self {
            status: decision.status().to_string(),
            rejection_reason: decision.rejection_reason().map(str::to_string),
            reviewed_at: at,
            reviewed_by: reviewer.to_string(),
        }
    }
}

/// `profiles.kyc_status` projection used to remember the pre-decision state.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct KycStatusRow {
    #[serde(default)]
    pub kyc_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_omits_rejection_reason() {
        let review = KycReview::new(&KycDecision::Approved, "a1", Utc::now());
        let body = serde_json::to_value(&review).unwrap();
        assert_eq!(body["status"], "approved");
        assert_eq!(body["reviewed_by"], "a1");
        assert!(body.get("rejection_reason").is_none());
    }

    #[test]
    fn test_rejection_carries_reason() {
        let decision = KycDecision::Rejected {
            reason: "blurry document".to_string(),
        };
        let body = serde_json::to_value(KycReview::new(&decision, "a1", Utc::now())).unwrap();
        assert_eq!(body["status"], "rejected");
        assert_eq!(body["rejection_reason"], "blurry document");
    }
}
