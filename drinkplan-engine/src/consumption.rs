//! Sea-day / port-day consumption weighting.
use serde::{Deserialize, Serialize};

use crate::input::{ConsumptionProfile, TripProfile};

/// Consumption after sea/port weighting.
///
/// `average` is what the strategy evaluator prices; `sea_day` and `port_day`
/// describe a typical day of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveConsumption {
    pub average: ConsumptionProfile,
    pub sea_day: ConsumptionProfile,
    pub port_day: ConsumptionProfile,
    /// Whether any redistribution took place.
    pub weighted: bool,
}

impl EffectiveConsumption {
    const fn unweighted(profile: ConsumptionProfile) -> Self {
        Self {
            average: profile,
            sea_day: profile,
            port_day: profile,
            weighted: false,
        }
    }
}

/// Shift consumption toward sea days without changing the trip-long total.
///
/// Sea days drink in proportion to `1 + sea_weight` and port days in
/// proportion to `1 - sea_weight`; both are rescaled so that the
/// day-count-weighted average equals the base quantity.
///
/// `average` therefore always equals the base profile and priced totals do
/// not move with `sea_weight`; only the `sea_day` and `port_day` profiles
/// shown in the day breakdown change.
#[must_use]
pub fn effective_consumption(
    profile: &ConsumptionProfile,
    trip: &TripProfile,
) -> EffectiveConsumption {
    let weight = trip.sea_weight;
    let sea_days = f64::from(trip.sea_days);
    let port_days = f64::from(trip.port_days());
    if weight <= 0.0 || trip.sea_days == 0 || trip.port_days() == 0 {
        return EffectiveConsumption::unweighted(*profile);
    }

    let days = f64::from(trip.days);
    let sea_factor = 1.0 + weight;
    let port_factor = 1.0 - weight;
    // days >= 1 and port_factor >= 0.6, so the denominator is positive.
    let scale = days / (sea_factor * sea_days + port_factor * port_days);

    let sea_day = profile.map(|_, qty| qty * sea_factor * scale);
    let port_day = profile.map(|_, qty| qty * port_factor * scale);
    let average = profile.map(|drink, _| {
        (sea_day.quantity(drink) * sea_days + port_day.quantity(drink) * port_days) / days
    });

    EffectiveConsumption {
        average,
        sea_day,
        port_day,
        weighted: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drinks::DrinkType;

    fn trip(days: u32, sea_days: u32, sea_weight: f64) -> TripProfile {
        TripProfile {
            days,
            sea_days,
            sea_weight,
        }
    }

    #[test]
    fn zero_weight_is_identity() {
        let profile = ConsumptionProfile::new().with(DrinkType::Beer, 3.0);
        let effective = effective_consumption(&profile, &trip(7, 3, 0.0));
        assert!(!effective.weighted);
        assert_eq!(effective.average, profile);
        assert_eq!(effective.sea_day, profile);
    }

    #[test]
    fn all_sea_or_all_port_is_identity() {
        let profile = ConsumptionProfile::new().with(DrinkType::Soda, 2.0);
        assert!(!effective_consumption(&profile, &trip(5, 0, 0.3)).weighted);
        assert!(!effective_consumption(&profile, &trip(5, 5, 0.3)).weighted);
    }

    #[test]
    fn weighting_shifts_but_conserves() {
        let profile = ConsumptionProfile::new()
            .with(DrinkType::Cocktail, 4.0)
            .with(DrinkType::BottledWater, 2.0);
        let effective = effective_consumption(&profile, &trip(10, 3, 0.4));
        assert!(effective.weighted);
        let sea = effective.sea_day.quantity(DrinkType::Cocktail);
        let port = effective.port_day.quantity(DrinkType::Cocktail);
        assert!(sea > 4.0 && port < 4.0);
        assert!((sea / port - 1.4 / 0.6).abs() < 1e-9);
        for (drink, qty) in profile.iter() {
            assert!((effective.average.quantity(drink) - qty).abs() < 1e-9);
        }
    }
}
