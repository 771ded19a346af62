//! User-facing upgrade and activation copy.

use crate::credential::CredentialDisposition;
use crate::model::Tier;

/// Where quota-limited users are pointed to upgrade
pub const UPGRADE_URL: &str = "https://rungate.dev/pricing";

/// Support contact shown in the free-tier banner
pub const SUPPORT_EMAIL: &str = "support@rungate.dev";

/// Box-drawn banner the embedding CLI prints when the Free tier activates.
pub const FREE_TIER_BANNER: &str = "\
╔════════════════════════════════════════════════════════════════╗
║                       FREE TIER ACTIVE                         ║
╠════════════════════════════════════════════════════════════════╣
║  Limits: 5 runs/day, 1,000 tokens/run                          ║
║                                                                ║
║  Upgrade to Pro: 100 runs/day, 10,000 tokens/run               ║
║  Enterprise: unlimited runs and custom integrations            ║
║                                                                ║
║  https://rungate.dev/pricing                                   ║
║  support@rungate.dev                                           ║
╚════════════════════════════════════════════════════════════════╝";

/// One-line activation notice for startup output.
pub fn activation_notice(tier: Tier, disposition: &CredentialDisposition) -> String {
    if let CredentialDisposition::Rejected(err) = disposition {
        return format!("Invalid license key ({err}). Falling back to Free tier.");
    }

    match tier {
        Tier::Enterprise => "Enterprise license activated - unlimited usage".to_string(),
        Tier::Pro => "Pro license activated - 100 runs/day, 10,000 tokens/run".to_string(),
        Tier::Free => "Free tier active - 5 runs/day, 1,000 tokens/run".to_string(),
    }
}
