//! Credential Validation and Tier Resolution

use crate::model::{Tier, TierLimits};
use tracing::{info, warn};

/// Marker prefix for Pro license keys
pub const PRO_PREFIX: &str = "PRO_";
/// Marker prefix for Enterprise license keys
pub const ENT_PREFIX: &str = "ENT_";
/// Minimum well-formed key length, marker included
pub const MIN_KEY_LEN: usize = 20;

/// Why a presented license key was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// Key does not start with a known tier marker
    #[error("unrecognized key prefix")]
    UnrecognizedPrefix,
    /// Key is shorter than the well-formedness threshold
    #[error("key too short: {len} chars, minimum {MIN_KEY_LEN}")]
    TooShort {
        /// Length of the presented key
        len: usize,
    },
}

/// Pluggable license key verification.
///
/// The default implementation is an offline format check so that tier
/// resolution never blocks on an external service being reachable. An online
/// provider check can be swapped in here without touching the quota state
/// machine.
pub trait CredentialValidator: Send + Sync {
    /// Validate a non-empty key, yielding the tier it encodes.
    fn validate(&self, key: &str) -> Result<Tier, CredentialError>;
}

/// Offline format validator: tier marker prefix plus minimum length.
///
/// A forged-but-well-formed key is indistinguishable from a real one without
/// an online check; the trade-off buys offline operability.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValidator;

impl CredentialValidator for FormatValidator {
    fn validate(&self, key: &str) -> Result<Tier, CredentialError> {
        let tier = if key.starts_with(PRO_PREFIX) {
            Tier::Pro
        } else if key.starts_with(ENT_PREFIX) {
            Tier::Enterprise
        } else {
            return Err(CredentialError::UnrecognizedPrefix);
        };

        if key.len() < MIN_KEY_LEN {
            return Err(CredentialError::TooShort { len: key.len() });
        }

        Ok(tier)
    }
}

/// How the presented key was classified during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialDisposition {
    /// No key presented
    Absent,
    /// Key accepted by the validator
    Accepted,
    /// Key rejected; Free tier fallback applied
    Rejected(CredentialError),
}

/// Outcome of tier resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierResolution {
    /// Resolved tier
    pub tier: Tier,
    /// Limits for the resolved tier
    pub limits: TierLimits,
    /// What happened to the presented key
    pub disposition: CredentialDisposition,
}

impl TierResolution {
    fn free(disposition: CredentialDisposition) -> Self {
        Self {
            tier: Tier::Free,
            limits: TierLimits::for_tier(Tier::Free),
            disposition,
        }
    }
}

/// Resolve an optional license key into a tier and its limits.
///
/// Deterministic, with no side effects beyond activation logging. Never
/// fails: an absent or malformed key degrades to the Free tier, and the
/// rejection is carried in the disposition rather than an error.
pub fn resolve(credential: Option<&str>, validator: &dyn CredentialValidator) -> TierResolution {
    let key = credential.unwrap_or("");
    if key.is_empty() {
        info!(tier = %Tier::Free, "no license key presented, Free tier active");
        return TierResolution::free(CredentialDisposition::Absent);
    }

    match validator.validate(key) {
        Ok(tier) => {
            info!(tier = %tier, "license key accepted");
            TierResolution {
                tier,
                limits: TierLimits::for_tier(tier),
                disposition: CredentialDisposition::Accepted,
            }
        }
        Err(err) => {
            warn!(error = %err, "invalid license key, falling back to Free tier");
            TierResolution::free(CredentialDisposition::Rejected(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pro_key_at_threshold() {
        let resolution = resolve(Some("PRO_1234567890123456"), &FormatValidator);

        assert_eq!(resolution.tier, Tier::Pro);
        assert_eq!(resolution.disposition, CredentialDisposition::Accepted);
        assert_eq!(resolution.limits, TierLimits::for_tier(Tier::Pro));
    }

    #[test]
    fn test_enterprise_key_at_threshold() {
        let resolution = resolve(Some("ENT_1234567890123456"), &FormatValidator);

        assert_eq!(resolution.tier, Tier::Enterprise);
        assert_eq!(resolution.disposition, CredentialDisposition::Accepted);
    }

    #[test]
    fn test_short_key_falls_back_to_free() {
        let resolution = resolve(Some("PRO_123"), &FormatValidator);

        assert_eq!(resolution.tier, Tier::Free);
        assert_eq!(
            resolution.disposition,
            CredentialDisposition::Rejected(CredentialError::TooShort { len: 7 })
        );
    }

    #[test]
    fn test_unrecognized_prefix_falls_back_to_free() {
        let resolution = resolve(Some("FREE_1234567890123456"), &FormatValidator);

        assert_eq!(resolution.tier, Tier::Free);
        assert_eq!(
            resolution.disposition,
            CredentialDisposition::Rejected(CredentialError::UnrecognizedPrefix)
        );
    }

    #[test]
    fn test_absent_key_is_free() {
        let none = resolve(None, &FormatValidator);
        let empty = resolve(Some(""), &FormatValidator);

        assert_eq!(none.tier, Tier::Free);
        assert_eq!(none.disposition, CredentialDisposition::Absent);
        assert_eq!(empty.tier, Tier::Free);
        assert_eq!(empty.disposition, CredentialDisposition::Absent);
    }

    proptest! {
        #[test]
        fn test_resolution_is_deterministic(key in ".*") {
            let first = resolve(Some(&key), &FormatValidator);
            let second = resolve(Some(&key), &FormatValidator);

            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_resolution_always_yields_tier_limits(key in ".*") {
            let resolution = resolve(Some(&key), &FormatValidator);

            prop_assert_eq!(resolution.limits, TierLimits::for_tier(resolution.tier));
        }

        #[test]
        fn test_unmarked_keys_never_upgrade(key in "[^PE].*") {
            let resolution = resolve(Some(&key), &FormatValidator);

            prop_assert_eq!(resolution.tier, Tier::Free);
        }
    }
}
