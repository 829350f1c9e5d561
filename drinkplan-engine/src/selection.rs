//! Winner selection across the four strategies.
use serde::{Deserialize, Serialize};

use crate::numbers::{cents_to_amount, to_cents};
use crate::strategy::{Strategy, StrategyCosts};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub winner: Strategy,
    /// Strategy the savings are measured against.
    pub compared_to: Strategy,
    /// Never negative.
    pub savings: f64,
}

/// Pick the cheapest strategy.
///
/// Totals are compared in whole cents. Ties go to pay-as-you-go, then to the
/// lower package tier, which is the order of [`Strategy::ALL`]. Savings are
/// measured against the runner-up, whichever strategy that is, so a package
/// that barely beats another package reads as a near break-even.
#[must_use]
pub fn select_winner(costs: &StrategyCosts) -> Selection {
    let cents = |strategy: Strategy| to_cents(costs.get(strategy).trip_total);

    let mut winner = Strategy::PayAsYouGo;
    for candidate in Strategy::ALL {
        if cents(candidate) < cents(winner) {
            winner = candidate;
        }
    }

    let compared_to = Strategy::ALL
        .into_iter()
        .filter(|strategy| *strategy != winner)
        .min_by_key(|strategy| cents(*strategy))
        .unwrap_or(Strategy::PayAsYouGo);

    let savings = cents_to_amount((cents(compared_to) - cents(winner)).max(0));
    log::debug!("winner {winner:?}, saving {savings:.2} over {compared_to:?}");

    Selection {
        winner,
        compared_to,
        savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PricingCatalog;
    use crate::input::{PlanInput, RawPlanInput, normalize};
    use crate::strategy::evaluate;

    fn costs_with_totals(totals: [f64; 4]) -> StrategyCosts {
        let input = PlanInput::default();
        let eval = evaluate(
            &input,
            &input.consumption,
            &PricingCatalog::fallback(),
        );
        let mut costs = StrategyCosts::from_evaluation(&eval, 0.0, &input);
        costs.pay_as_you_go.trip_total = totals[0];
        costs.basic.trip_total = totals[1];
        costs.mid.trip_total = totals[2];
        costs.premium.trip_total = totals[3];
        costs
    }

    #[test]
    fn picks_strict_minimum() {
        let selection = select_winner(&costs_with_totals([500.0, 450.0, 300.0, 700.0]));
        assert_eq!(selection.winner, Strategy::Mid);
        assert_eq!(selection.compared_to, Strategy::Basic);
        assert!((selection.savings - 150.0).abs() < 1e-9);
    }

    #[test]
    fn package_savings_measured_against_nearest_package() {
        let selection = select_winner(&costs_with_totals([900.0, 330.0, 300.0, 700.0]));
        assert_eq!(selection.winner, Strategy::Mid);
        assert_eq!(selection.compared_to, Strategy::Basic);
        assert!((selection.savings - 30.0).abs() < 1e-9);

        let selection = select_winner(&costs_with_totals([320.0, 450.0, 300.0, 700.0]));
        assert_eq!(selection.compared_to, Strategy::PayAsYouGo);
        assert!((selection.savings - 20.0).abs() < 1e-9);
    }

    #[test]
    fn ties_prefer_pay_as_you_go() {
        let selection = select_winner(&costs_with_totals([300.0, 300.0, 300.0, 300.0]));
        assert_eq!(selection.winner, Strategy::PayAsYouGo);
        assert!(selection.savings.abs() < f64::EPSILON);
    }

    #[test]
    fn package_ties_prefer_lower_tier() {
        let selection = select_winner(&costs_with_totals([900.0, 400.0, 400.0, 400.0]));
        assert_eq!(selection.winner, Strategy::Basic);
        let selection = select_winner(&costs_with_totals([900.0, 800.0, 400.0, 400.0]));
        assert_eq!(selection.winner, Strategy::Mid);
    }

    #[test]
    fn sub_cent_noise_does_not_break_ties() {
        let selection = select_winner(&costs_with_totals([300.000_000_1, 300.0, 500.0, 600.0]));
        assert_eq!(selection.winner, Strategy::PayAsYouGo);
    }

    #[test]
    fn pay_as_you_go_savings_measured_against_runner_up() {
        let selection = select_winner(&costs_with_totals([100.0, 450.0, 300.0, 700.0]));
        assert_eq!(selection.winner, Strategy::PayAsYouGo);
        assert_eq!(selection.compared_to, Strategy::Mid);
        assert!((selection.savings - 200.0).abs() < 1e-9);
    }

    #[test]
    fn zero_consumption_always_picks_pay_as_you_go() {
        let input = normalize(&RawPlanInput {
            adults: Some(4_u32.into()),
            minors: Some(3_u32.into()),
            ..RawPlanInput::default()
        });
        let eval = evaluate(&input, &input.consumption, &PricingCatalog::fallback());
        let costs = StrategyCosts::from_evaluation(&eval, 0.0, &input);
        assert_eq!(select_winner(&costs).winner, Strategy::PayAsYouGo);
    }
}
