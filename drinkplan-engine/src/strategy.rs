//! Strategy evaluation: what each way of paying for drinks costs over the trip.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{PackageTier, PricingCatalog};
use crate::input::{ConsumptionProfile, PlanInput};
use crate::numbers::round_cents;

/// The four candidate ways to pay, in tie-break preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    PayAsYouGo,
    Basic,
    Mid,
    Premium,
}

impl Strategy {
    pub const ALL: [Self; 4] = [Self::PayAsYouGo, Self::Basic, Self::Mid, Self::Premium];

    #[must_use]
    pub const fn tier(self) -> Option<PackageTier> {
        match self {
            Self::PayAsYouGo => None,
            Self::Basic => Some(PackageTier::Basic),
            Self::Mid => Some(PackageTier::Mid),
            Self::Premium => Some(PackageTier::Premium),
        }
    }

    #[must_use]
    pub const fn is_package(self) -> bool {
        !matches!(self, Self::PayAsYouGo)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PayAsYouGo => "Pay as you go",
            Self::Basic => "Basic package",
            Self::Mid => "Mid-tier package",
            Self::Premium => "Premium package",
        }
    }
}

impl From<PackageTier> for Strategy {
    fn from(tier: PackageTier) -> Self {
        match tier {
            PackageTier::Basic => Self::Basic,
            PackageTier::Mid => Self::Mid,
            PackageTier::Premium => Self::Premium,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gratuity-inclusive menu cost of the adults' drinks, split by alcohol.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PayAsYouGoCost {
    pub alcoholic: f64,
    pub non_alcoholic: f64,
}

impl PayAsYouGoCost {
    #[must_use]
    pub fn gross(&self) -> f64 {
        self.alcoholic + self.non_alcoholic
    }
}

/// Unrounded package cost pieces, before the minor policy settles premium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageCost {
    pub tier: PackageTier,
    pub daily_rate: f64,
    pub adult_total: f64,
    pub minor_total: f64,
    /// Premium only: drinks above the cap, gratuity included.
    pub overage_total: f64,
    /// Menu cost of drinks this tier does not cover, gratuity included.
    pub uncovered_total: f64,
    pub bill_uncovered: bool,
}

impl PackageCost {
    #[must_use]
    pub fn trip_total(&self) -> f64 {
        let uncovered = if self.bill_uncovered {
            self.uncovered_total
        } else {
            0.0
        };
        self.adult_total + self.minor_total + self.overage_total + uncovered
    }
}

/// Raw evaluation of every strategy for one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub pay_as_you_go: PayAsYouGoCost,
    pub packages: [PackageCost; PackageTier::COUNT],
}

impl Evaluation {
    #[must_use]
    pub const fn package(&self, tier: PackageTier) -> &PackageCost {
        &self.packages[tier.index()]
    }

    pub const fn package_mut(&mut self, tier: PackageTier) -> &mut PackageCost {
        &mut self.packages[tier.index()]
    }
}

/// Price every strategy against the effective consumption profile.
///
/// The premium tier's minor cost is left at zero; [`crate::policy`] owns it.
#[must_use]
pub fn evaluate(
    input: &PlanInput,
    consumption: &ConsumptionProfile,
    catalog: &PricingCatalog,
) -> Evaluation {
    let days = f64::from(input.trip.days);
    let adults = f64::from(input.party.adult_count);
    let minors = f64::from(input.party.minor_count);
    let gratuity = catalog.gratuity_multiplier();
    let adult_days = adults * days;

    let mut pay_as_you_go = PayAsYouGoCost::default();
    for (drink, qty) in consumption.iter() {
        let cost = qty * catalog.unit_price(drink) * adult_days * gratuity;
        if drink.is_alcoholic() {
            pay_as_you_go.alcoholic += cost;
        } else {
            pay_as_you_go.non_alcoholic += cost;
        }
    }

    let packages = PackageTier::ALL.map(|tier| {
        let rate = catalog.package_rate(tier);
        let uncovered_total: f64 = consumption
            .iter()
            .filter(|(drink, _)| !tier.covers(*drink))
            .map(|(drink, qty)| qty * catalog.unit_price(drink) * adult_days * gratuity)
            .sum();
        let (minor_total, overage_total) = match tier {
            PackageTier::Premium => {
                let overage: f64 = consumption
                    .iter()
                    .map(|(drink, qty)| qty * catalog.premium_overage(drink))
                    .sum();
                (0.0, overage * adult_days * gratuity)
            }
            PackageTier::Basic | PackageTier::Mid => (rate * minors * days, 0.0),
        };
        PackageCost {
            tier,
            daily_rate: rate,
            adult_total: rate * adult_days,
            minor_total,
            overage_total,
            uncovered_total,
            bill_uncovered: catalog.bills_uncovered_drinks(),
        }
    });

    Evaluation {
        pay_as_you_go,
        packages,
    }
}

/// Display-ready cost of one strategy, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyCost {
    pub strategy: Strategy,
    /// Per-adult daily rate: the package price, or average menu spend.
    pub daily_rate: f64,
    pub trip_total: f64,
    pub per_person_total: f64,
    pub per_day_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overage_total: Option<f64>,
    pub uncovered_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_minor_total: Option<f64>,
}

impl StrategyCost {
    fn new(strategy: Strategy, daily_rate: f64, trip_total: f64, input: &PlanInput) -> Self {
        // Normalized inputs guarantee days >= 1 and adults >= 1.
        let people = f64::from(input.party.total_people());
        let days = f64::from(input.trip.days);
        Self {
            strategy,
            daily_rate: round_cents(daily_rate),
            trip_total: round_cents(trip_total),
            per_person_total: round_cents(trip_total / people),
            per_day_total: round_cents(trip_total / days),
            overage_total: None,
            uncovered_total: 0.0,
            forced_minor_total: None,
        }
    }
}

/// One [`StrategyCost`] per strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyCosts {
    pub pay_as_you_go: StrategyCost,
    pub basic: StrategyCost,
    pub mid: StrategyCost,
    pub premium: StrategyCost,
}

impl StrategyCosts {
    /// Assemble final costs from a policy-settled evaluation and the
    /// voucher-offset pay-as-you-go total.
    #[must_use]
    pub fn from_evaluation(
        evaluation: &Evaluation,
        pay_as_you_go_net: f64,
        input: &PlanInput,
    ) -> Self {
        let adult_days = f64::from(input.party.adult_count) * f64::from(input.trip.days);
        let pay_as_you_go = StrategyCost::new(
            Strategy::PayAsYouGo,
            evaluation.pay_as_you_go.gross() / adult_days,
            pay_as_you_go_net,
            input,
        );
        let package = |tier: PackageTier| {
            let cost = evaluation.package(tier);
            let mut out = StrategyCost::new(tier.into(), cost.daily_rate, cost.trip_total(), input);
            out.uncovered_total = round_cents(cost.uncovered_total);
            if tier == PackageTier::Premium {
                out.overage_total = Some(round_cents(cost.overage_total));
                out.forced_minor_total = Some(round_cents(cost.minor_total));
            }
            out
        };
        Self {
            pay_as_you_go,
            basic: package(PackageTier::Basic),
            mid: package(PackageTier::Mid),
            premium: package(PackageTier::Premium),
        }
    }

    #[must_use]
    pub const fn get(&self, strategy: Strategy) -> &StrategyCost {
        match strategy {
            Strategy::PayAsYouGo => &self.pay_as_you_go,
            Strategy::Basic => &self.basic,
            Strategy::Mid => &self.mid,
            Strategy::Premium => &self.premium,
        }
    }

    /// Costs in tie-break preference order.
    pub fn iter(&self) -> impl Iterator<Item = &StrategyCost> {
        Strategy::ALL.into_iter().map(|strategy| self.get(strategy))
    }
}
