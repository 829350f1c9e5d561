//! The engine's result record and the pipeline that produces it.
use serde::{Deserialize, Serialize};

use crate::advisory::{AdvisoryList, advisories};
use crate::breakdown::{
    BreakEven, CategoryBreakdown, DayProfile, TravelerBreakdown, break_even, category_breakdown,
    day_profile, traveler_breakdown,
};
use crate::catalog::PricingCatalog;
use crate::consumption::{EffectiveConsumption, effective_consumption};
use crate::input::PlanInput;
use crate::numbers::round_cents;
use crate::policy::enforce_minor_policy;
use crate::selection::select_winner;
use crate::strategy::{PayAsYouGoCost, Strategy, StrategyCosts, evaluate};
use crate::vouchers::offset_pay_as_you_go;

/// Everything a UI needs to render one recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Normalized input the result was computed from.
    pub input: PlanInput,
    pub consumption: EffectiveConsumption,
    pub costs: StrategyCosts,
    /// Gratuity-inclusive menu spend before vouchers.
    pub pay_as_you_go_subtotals: PayAsYouGoCost,
    pub voucher_value: f64,
    pub winner: Strategy,
    pub compared_to: Strategy,
    pub savings: f64,
    /// Whether package totals include drinks outside their coverage.
    pub uncovered_billed: bool,
    pub categories: CategoryBreakdown,
    pub travelers: TravelerBreakdown,
    pub day_profile: DayProfile,
    pub break_even: Vec<BreakEven>,
    pub advisories: AdvisoryList,
}

impl ResultSet {
    /// Serialize for fixtures and UI hand-off.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Price every strategy for a normalized input and pick the winner.
///
/// Pure and synchronous: the same input and catalog always give the same
/// result, and nothing is retained between calls.
#[must_use]
pub fn compute(input: &PlanInput, catalog: &PricingCatalog) -> ResultSet {
    let consumption = effective_consumption(&input.consumption, &input.trip);

    let mut evaluation = evaluate(input, &consumption.average, catalog);
    let minor_override = enforce_minor_policy(&mut evaluation, input, catalog);
    let vouchers = offset_pay_as_you_go(evaluation.pay_as_you_go.gross(), input);
    let costs = StrategyCosts::from_evaluation(&evaluation, vouchers.net, input);

    let selection = select_winner(&costs);
    let travelers = traveler_breakdown(
        selection.winner,
        &evaluation,
        &costs,
        input,
        minor_override.as_ref(),
    );

    let subtotals = evaluation.pay_as_you_go;
    let mut result = ResultSet {
        input: *input,
        categories: category_breakdown(&consumption.average, input, catalog),
        day_profile: day_profile(&consumption, input, catalog),
        break_even: break_even(&costs, vouchers.value, input),
        consumption,
        costs,
        pay_as_you_go_subtotals: PayAsYouGoCost {
            alcoholic: round_cents(subtotals.alcoholic),
            non_alcoholic: round_cents(subtotals.non_alcoholic),
        },
        voucher_value: round_cents(vouchers.value),
        winner: selection.winner,
        compared_to: selection.compared_to,
        savings: selection.savings,
        uncovered_billed: catalog.bills_uncovered_drinks(),
        travelers,
        advisories: AdvisoryList::new(),
    };
    result.advisories = advisories(&result);
    result
}
