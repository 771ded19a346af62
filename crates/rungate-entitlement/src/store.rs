//! Entitlement Store and Quota State Machine

use crate::credential::{
    self, CredentialDisposition, CredentialValidator, FormatValidator, TierResolution,
};
use crate::messages;
use crate::model::{Tier, TierLimits};
use crate::status::UsageSnapshot;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Environment variable holding the license key
pub const LICENSE_KEY_ENV: &str = "RUNGATE_LICENSE_KEY";

/// Rolling consumption window length in hours
const PERIOD_HOURS: i64 = 24;

/// Run counter over the rolling period.
///
/// Owns the reset logic, shared by consumption and snapshots so the two can
/// never observe diverging windows.
#[derive(Debug)]
struct UsageWindow {
    runs_consumed: u32,
    period_start: DateTime<Utc>,
}

impl UsageWindow {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            runs_consumed: 0,
            period_start: now,
        }
    }

    /// Reset the counter and advance the window if the period has elapsed.
    fn roll_if_due(&mut self, now: DateTime<Utc>) {
        if now - self.period_start >= Duration::hours(PERIOD_HOURS) {
            debug!(
                runs_consumed = self.runs_consumed,
                period_start = %self.period_start,
                "consumption period elapsed, resetting run counter"
            );
            self.runs_consumed = 0;
            self.period_start = now;
        }
    }
}

/// Denial payload; its `Display` output is the message callers surface to
/// the end user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("daily run limit reached ({used}/{limit} runs). Upgrade at {}", messages::UPGRADE_URL)]
pub struct QuotaExceeded {
    /// Runs consumed in the current period
    pub used: u32,
    /// The tier's run ceiling
    pub limit: u32,
}

/// Gating decision for one billable unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunDecision {
    /// Run admitted and counted
    Allowed,
    /// Run refused; the counter is untouched
    Denied(QuotaExceeded),
}

impl RunDecision {
    /// True when the run was admitted
    pub fn is_allowed(&self) -> bool {
        matches!(self, RunDecision::Allowed)
    }
}

/// Tier-aware run gate.
///
/// Owns all mutable entitlement state behind a single mutex; callers share
/// the store (typically behind `Arc`) and only ever observe decisions and
/// snapshots. Constructed exactly once at process start and threaded through
/// call sites. Usage is in-memory only and does not survive a restart.
#[derive(Debug)]
pub struct EntitlementStore {
    tier: Tier,
    limits: TierLimits,
    credential: Option<String>,
    disposition: CredentialDisposition,
    usage: Mutex<UsageWindow>,
}

impl EntitlementStore {
    /// Build a store from the ambient `RUNGATE_LICENSE_KEY` environment
    /// variable, read once here.
    pub fn from_env() -> Self {
        let key = std::env::var(LICENSE_KEY_ENV).ok();
        Self::from_credential(key.as_deref())
    }

    /// Build a store from an optional license key using the offline format
    /// validator.
    pub fn from_credential(credential: Option<&str>) -> Self {
        Self::with_validator(credential, &FormatValidator)
    }

    /// Build a store with an injected validator (the extension point for
    /// online verification).
    pub fn with_validator(credential: Option<&str>, validator: &dyn CredentialValidator) -> Self {
        let resolution = credential::resolve(credential, validator);
        Self::from_resolution(credential, resolution)
    }

    fn from_resolution(credential: Option<&str>, resolution: TierResolution) -> Self {
        let TierResolution {
            tier,
            limits,
            disposition,
        } = resolution;

        Self {
            tier,
            limits,
            credential: credential.filter(|key| !key.is_empty()).map(str::to_owned),
            disposition,
            usage: Mutex::new(UsageWindow::new(Utc::now())),
        }
    }

    /// Resolved tier
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Limits for the resolved tier
    pub fn limits(&self) -> TierLimits {
        self.limits
    }

    /// The presented license key, if any. Read-only; never persisted.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// How the presented key was classified at construction
    pub fn disposition(&self) -> &CredentialDisposition {
        &self.disposition
    }

    /// Startup notice describing the activation outcome, for the embedding
    /// CLI to print. Free-tier activations also carry the upgrade banner so
    /// a downgrade never happens unnoticed.
    pub fn activation_report(&self) -> String {
        let mut report = messages::activation_notice(self.tier, &self.disposition);
        if self.tier == Tier::Free {
            report.push('\n');
            report.push_str(messages::FREE_TIER_BANNER);
        }
        report
    }

    /// Gate one billable unit of work.
    ///
    /// Applies the period reset if due, then admits and counts the run, or
    /// refuses it carrying the current usage, the limit, and an upgrade
    /// pointer. Check-then-increment happens under one lock: with one slot
    /// left, two racing calls admit exactly one.
    pub fn try_consume_run(&self) -> RunDecision {
        self.try_consume_run_at(Utc::now())
    }

    pub(crate) fn try_consume_run_at(&self, now: DateTime<Utc>) -> RunDecision {
        let mut usage = self.usage.lock();
        usage.roll_if_due(now);

        match self.limits.max_runs_per_period {
            Some(limit) if usage.runs_consumed >= limit => {
                let denial = QuotaExceeded {
                    used: usage.runs_consumed,
                    limit,
                };
                warn!(
                    tier = %self.tier,
                    used = denial.used,
                    limit = denial.limit,
                    "run denied, daily limit reached"
                );
                RunDecision::Denied(denial)
            }
            _ => {
                // Unbounded tiers still count runs for status output
                usage.runs_consumed += 1;
                debug!(
                    tier = %self.tier,
                    runs_consumed = usage.runs_consumed,
                    "run admitted"
                );
                RunDecision::Allowed
            }
        }
    }

    /// Per-run token ceiling for the resolved tier; `None` is unbounded.
    ///
    /// Pure read; consumes nothing.
    pub fn remaining_token_budget(&self) -> Option<u64> {
        self.limits.max_tokens_per_run
    }

    /// Immutable usage projection for display surfaces.
    ///
    /// Applies the same period reset as consumption, so status and gating
    /// agree about the window at all times.
    pub fn snapshot(&self) -> UsageSnapshot {
        self.snapshot_at(Utc::now())
    }

    pub(crate) fn snapshot_at(&self, now: DateTime<Utc>) -> UsageSnapshot {
        let mut usage = self.usage.lock();
        usage.roll_if_due(now);

        UsageSnapshot {
            tier: self.tier,
            runs_used: usage.runs_consumed,
            runs_limit: self.limits.max_runs_per_period,
            max_tokens_per_run: self.limits.max_tokens_per_run,
        }
    }
}
