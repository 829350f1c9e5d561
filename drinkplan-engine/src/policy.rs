//! Cross-purchase rule for minors travelling with premium-package adults.
use serde::{Deserialize, Serialize};

use crate::catalog::{PackageTier, PricingCatalog};
use crate::constants::FORCED_MINOR_REASON;
use crate::input::PlanInput;
use crate::strategy::Evaluation;

/// The rate every minor pays when adults take the premium package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinorOverride {
    pub tier: PackageTier,
    pub daily_rate: f64,
    pub per_minor_total: f64,
    pub reason: String,
}

/// Settle the premium tier's minor cost.
///
/// Minors are always assigned the mid-tier package alongside premium adults;
/// their cost is folded into the premium total before any comparison.
/// Returns the override when there are minors to apply it to.
pub fn enforce_minor_policy(
    evaluation: &mut Evaluation,
    input: &PlanInput,
    catalog: &PricingCatalog,
) -> Option<MinorOverride> {
    let premium = evaluation.package_mut(PackageTier::Premium);
    if input.party.minor_count == 0 {
        premium.minor_total = 0.0;
        return None;
    }

    let days = f64::from(input.trip.days);
    let daily_rate = catalog.package_rate(PackageTier::Mid);
    let per_minor_total = daily_rate * days;
    premium.minor_total = per_minor_total * f64::from(input.party.minor_count);
    log::debug!(
        "premium package forces {} minor(s) onto the mid tier at {daily_rate:.2}/day",
        input.party.minor_count
    );

    Some(MinorOverride {
        tier: PackageTier::Mid,
        daily_rate,
        per_minor_total,
        reason: FORCED_MINOR_REASON.to_string(),
    })
}
