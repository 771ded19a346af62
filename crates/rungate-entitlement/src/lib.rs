//! Entitlement & Quota Enforcement (EQE)
//!
//! Resolves a caller's access tier from a presented license key, tracks run
//! consumption against tier limits over a rolling 24-hour window, and gates
//! billable work when limits are exhausted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ENTITLEMENT STORE                       │
//! │                                                             │
//! │   license key ──► TIER RESOLUTION ──► (tier, limits)        │
//! │                   offline format check, Free fallback       │
//! │                                                             │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │                 QUOTA STATE MACHINE                   │  │
//! │  │   try_consume_run │ reset ─► check ─► increment       │  │
//! │  │   snapshot        │ reset ─► read                     │  │
//! │  │          (one mutex, one reset implementation)        │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │                                                             │
//! │   Callers observe decisions and snapshots only              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage is in-memory only and resets with the process; a restart opens a
//! fresh consumption window.

#![warn(missing_docs)]

pub mod model;
pub mod credential;
pub mod store;
pub mod status;
pub mod messages;

pub use model::{Tier, TierLimits};
pub use credential::{
    CredentialDisposition, CredentialError, CredentialValidator, FormatValidator, TierResolution,
};
pub use store::{EntitlementStore, QuotaExceeded, RunDecision};
pub use status::UsageSnapshot;
