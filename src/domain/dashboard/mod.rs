//! Dashboard domain: headline counts across the back office.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key used for profiles whose `kyc_status` is missing.
pub const UNKNOWN_KYC_STATUS: &str = "unknown";

/// Aggregated dashboard counts. Any count whose query failed is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_admins: u64,
    /// Profiles per `kyc_status`.
    pub kyc_stats: BTreeMap<String, u64>,
    pub total_deposits: u64,
    pub pending_deposits: u64,
    pub pending_withdrawals: u64,
    pub total_positions: u64,
    pub active_signals: u64,
    pub total_audit_logs: u64,
    pub total_notifications: u64,
}

/// Reads `[{"count": N}]`. Anything else counts as zero.
pub fn count_from(rows: Option<&serde_json::Value>) -> u64 {
    rows.and_then(|v| v.get(0))
        .and_then(|row| row.get("count"))
        .and_then(|c| c.as_u64().or_else(|| c.as_str().and_then(|s| s.parse().ok())))
        .unwrap_or(0)
}

/// Tallies `[{"kyc_status": "..."}, ...]` by status.
pub fn kyc_tally(rows: Option<&serde_json::Value>) -> BTreeMap<String, u64> {
    let mut tally = BTreeMap::new();
    let Some(rows) = rows.and_then(|v| v.as_array()) else {
        return tally;
    };
    for row in rows {
        let status = row
            .get("kyc_status")
            .and_then(|s| s.as_str())
            .unwrap_or(UNKNOWN_KYC_STATUS);
        *tally.entry(status.to_string()).or_insert(0) += 1;
    }
    tally
}
