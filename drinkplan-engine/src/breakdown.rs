//! Per-traveler line items and per-category spend aggregates.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{PackageTier, PricingCatalog};
use crate::consumption::EffectiveConsumption;
use crate::drinks::DrinkCategory;
use crate::input::{ConsumptionProfile, PlanInput};
use crate::numbers::round_cents;
use crate::policy::MinorOverride;
use crate::strategy::{Evaluation, Strategy, StrategyCosts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelerKind {
    Adult,
    Minor,
}

/// One traveler's share of the winning strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelerLine {
    pub kind: TravelerKind,
    /// 1-based position among travelers of the same kind.
    pub ordinal: u32,
    pub strategy: Strategy,
    pub daily_rate: f64,
    pub trip_total: f64,
    /// Set when policy, not price, decided this traveler's rate.
    pub forced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TravelerBreakdown {
    pub lines: Vec<TravelerLine>,
}

impl TravelerBreakdown {
    pub fn adults(&self) -> impl Iterator<Item = &TravelerLine> {
        self.lines
            .iter()
            .filter(|line| line.kind == TravelerKind::Adult)
    }

    pub fn minors(&self) -> impl Iterator<Item = &TravelerLine> {
        self.lines
            .iter()
            .filter(|line| line.kind == TravelerKind::Minor)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.trip_total).sum()
    }
}

/// Expand the winner into one line per traveler.
///
/// Minors get the forced mid-tier rate whenever the winner is premium.
#[must_use]
pub fn traveler_breakdown(
    winner: Strategy,
    evaluation: &Evaluation,
    costs: &StrategyCosts,
    input: &PlanInput,
    minor_override: Option<&MinorOverride>,
) -> TravelerBreakdown {
    let days = f64::from(input.trip.days);
    let adults = f64::from(input.party.adult_count);

    let adult_trip = match winner.tier() {
        None => costs.pay_as_you_go.trip_total / adults,
        Some(tier) => {
            let package = evaluation.package(tier);
            (package.trip_total() - package.minor_total) / adults
        }
    };

    let (minor_strategy, minor_trip, forced, reason) = match (winner.tier(), minor_override) {
        (None, _) => (Strategy::PayAsYouGo, 0.0, false, None),
        (Some(PackageTier::Premium), Some(rule)) => (
            Strategy::from(rule.tier),
            rule.per_minor_total,
            true,
            Some(rule.reason.clone()),
        ),
        (Some(tier), _) => (winner, evaluation.package(tier).daily_rate * days, false, None),
    };

    let adult_lines = (1..=input.party.adult_count).map(|ordinal| TravelerLine {
        kind: TravelerKind::Adult,
        ordinal,
        strategy: winner,
        daily_rate: round_cents(adult_trip / days),
        trip_total: round_cents(adult_trip),
        forced: false,
        reason: None,
    });
    let minor_lines = (1..=input.party.minor_count).map(|ordinal| TravelerLine {
        kind: TravelerKind::Minor,
        ordinal,
        strategy: minor_strategy,
        daily_rate: round_cents(minor_trip / days),
        trip_total: round_cents(minor_trip),
        forced,
        reason: reason.clone(),
    });

    TravelerBreakdown {
        lines: adult_lines.chain(minor_lines).collect(),
    }
}

/// Gratuity-inclusive menu spend per drink category over the whole trip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub amounts: BTreeMap<DrinkCategory, f64>,
}

impl CategoryBreakdown {
    #[must_use]
    pub fn amount(&self, category: DrinkCategory) -> f64 {
        self.amounts.get(&category).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }

    /// Fraction of the total spent on `category`, 0 when nothing is spent.
    #[must_use]
    pub fn share(&self, category: DrinkCategory) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.amount(category) / total
        } else {
            0.0
        }
    }
}

fn party_daily_spend(
    profile: &ConsumptionProfile,
    input: &PlanInput,
    catalog: &PricingCatalog,
) -> f64 {
    let adults = f64::from(input.party.adult_count);
    profile
        .iter()
        .map(|(drink, qty)| qty * catalog.unit_price(drink))
        .sum::<f64>()
        * adults
        * catalog.gratuity_multiplier()
}

/// Where the money goes, independent of which strategy wins.
#[must_use]
pub fn category_breakdown(
    consumption: &ConsumptionProfile,
    input: &PlanInput,
    catalog: &PricingCatalog,
) -> CategoryBreakdown {
    let scale = f64::from(input.party.adult_count)
        * f64::from(input.trip.days)
        * catalog.gratuity_multiplier();
    let mut amounts: BTreeMap<DrinkCategory, f64> =
        DrinkCategory::ALL.into_iter().map(|c| (c, 0.0)).collect();
    for (drink, qty) in consumption.iter() {
        *amounts.entry(drink.category()).or_insert(0.0) += qty * catalog.unit_price(drink) * scale;
    }
    for amount in amounts.values_mut() {
        *amount = round_cents(*amount);
    }
    CategoryBreakdown { amounts }
}

/// Menu spend of the whole party on a typical sea day and port day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayProfile {
    pub sea_day_spend: f64,
    pub port_day_spend: f64,
}

#[must_use]
pub fn day_profile(
    effective: &EffectiveConsumption,
    input: &PlanInput,
    catalog: &PricingCatalog,
) -> DayProfile {
    DayProfile {
        sea_day_spend: round_cents(party_daily_spend(&effective.sea_day, input, catalog)),
        port_day_spend: round_cents(party_daily_spend(&effective.port_day, input, catalog)),
    }
}

/// Menu spend per adult per day at which a package matches pay-as-you-go.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    pub tier: PackageTier,
    pub daily_spend_per_adult: f64,
}

/// Break-even spend for every tier, with vouchers already in the party's hands.
#[must_use]
pub fn break_even(costs: &StrategyCosts, voucher_value: f64, input: &PlanInput) -> Vec<BreakEven> {
    let adult_days = f64::from(input.party.adult_count) * f64::from(input.trip.days);
    PackageTier::ALL
        .into_iter()
        .map(|tier| BreakEven {
            tier,
            daily_spend_per_adult: round_cents(
                (costs.get(tier.into()).trip_total + voucher_value) / adult_days,
            ),
        })
        .collect()
}
