//! Usage Status Projection

use crate::model::Tier;
use serde::{Deserialize, Serialize};

/// Immutable usage projection for display surfaces.
///
/// Produced by `EntitlementStore::snapshot` after the period reset has been
/// applied, so it always reflects the live window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Resolved tier
    pub tier: Tier,
    /// Runs consumed in the current period
    pub runs_used: u32,
    /// Run ceiling for the period (`None` = unbounded)
    pub runs_limit: Option<u32>,
    /// Per-run token ceiling (`None` = unbounded)
    pub max_tokens_per_run: Option<u64>,
}

impl std::fmt::Display for UsageSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.runs_limit, self.max_tokens_per_run) {
            (Some(runs_limit), Some(tokens)) => write!(
                f,
                "License: {} | Runs: {}/{} | Tokens/run: {}",
                self.tier, self.runs_used, runs_limit, tokens
            ),
            _ => write!(
                f,
                "License: {} | Runs today: {} | Unlimited",
                self.tier, self.runs_used
            ),
        }
    }
}
