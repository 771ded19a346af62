//! Tier Data Model

use serde::{Deserialize, Serialize};

/// Access tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tier {
    /// Default tier when no valid license key is presented
    Free,
    /// Paid individual tier
    Pro,
    /// Contract tier with every ceiling removed
    Enterprise,
}

impl Tier {
    /// Human-readable tier name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Get features for tier
    pub fn features(&self) -> Vec<&'static str> {
        match self {
            Self::Free => vec!["standard_models", "community_support"],
            Self::Pro => vec![
                "standard_models", "community_support",
                "extended_context", "priority_support",
            ],
            Self::Enterprise => vec![
                "standard_models", "community_support",
                "extended_context", "priority_support",
                "unlimited_usage", "custom_integrations",
                "dedicated_support", "sla_guarantee",
            ],
        }
    }

    /// Check if feature is enabled for this tier
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features().contains(&feature)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-tier usage limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierLimits {
    /// Max runs per rolling 24h period (`None` = unbounded)
    pub max_runs_per_period: Option<u32>,
    /// Max tokens per run (`None` = unbounded)
    pub max_tokens_per_run: Option<u64>,
}

impl TierLimits {
    /// Get limits for tier
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Free => Self {
                max_runs_per_period: Some(5),
                max_tokens_per_run: Some(1_000),
            },
            Tier::Pro => Self {
                max_runs_per_period: Some(100),
                max_tokens_per_run: Some(10_000),
            },
            Tier::Enterprise => Self::unlimited(),
        }
    }

    /// Limits with every ceiling removed
    pub fn unlimited() -> Self {
        Self {
            max_runs_per_period: None,
            max_tokens_per_run: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_limits() {
        let free = TierLimits::for_tier(Tier::Free);
        let pro = TierLimits::for_tier(Tier::Pro);

        assert_eq!(free.max_runs_per_period, Some(5));
        assert_eq!(free.max_tokens_per_run, Some(1_000));
        assert_eq!(pro.max_runs_per_period, Some(100));
        assert_eq!(pro.max_tokens_per_run, Some(10_000));
    }

    #[test]
    fn test_enterprise_is_unlimited() {
        let enterprise = TierLimits::for_tier(Tier::Enterprise);

        assert_eq!(enterprise, TierLimits::unlimited());
        assert_eq!(enterprise.max_runs_per_period, None);
        assert_eq!(enterprise.max_tokens_per_run, None);
    }

    #[test]
    fn test_tier_features() {
        assert!(Tier::Pro.has_feature("priority_support"));
        assert!(!Tier::Free.has_feature("priority_support"));
        assert!(Tier::Enterprise.has_feature("sla_guarantee"));
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(Tier::Free.to_string(), "Free");
        assert_eq!(Tier::Pro.to_string(), "Pro");
        assert_eq!(Tier::Enterprise.to_string(), "Enterprise");
    }
}
