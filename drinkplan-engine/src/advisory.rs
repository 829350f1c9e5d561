//! Plain-language notices derived from a finished result.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{
    ADVISORY_ALCOHOL_CAUTION, ADVISORY_ALCOHOL_HEALTH, ADVISORY_BREAK_EVEN,
    ADVISORY_COVERAGE_GAP, ADVISORY_PORT_HEAVY, ADVISORY_UNSUPPORTED_PARTY,
    ADVISORY_VOUCHER_CONFLICT, ALCOHOL_CAUTION_DAILY, ALCOHOL_HEALTH_DAILY, BREAK_EVEN_THRESHOLD,
    PORT_HEAVY_RATIO,
};
use crate::result::ResultSet;

/// Advisories are few; keep them inline.
pub type AdvisoryList = SmallVec<[Advisory; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Caution,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Stable key for UI lookup and tests.
    pub code: String,
    pub severity: Severity,
    pub message: String,
}

impl Advisory {
    fn new(code: &str, severity: Severity, message: String) -> Self {
        Self {
            code: code.to_string(),
            severity,
            message,
        }
    }
}

/// Build notices for a result. Reads only fields already computed.
#[must_use]
pub fn advisories(result: &ResultSet) -> AdvisoryList {
    let mut out = AdvisoryList::new();
    let input = &result.input;
    let winner = result.costs.get(result.winner);

    if !input.party.adult_present {
        out.push(Advisory::new(
            ADVISORY_UNSUPPORTED_PARTY,
            Severity::Warning,
            "Cruise lines require at least one adult per cabin. Prices assume one supervising \
             adult and no alcohol."
                .to_string(),
        ));
    }

    if input.vouchers.held_by(&input.party) && result.winner.is_package() {
        out.push(Advisory::new(
            ADVISORY_VOUCHER_CONFLICT,
            Severity::Warning,
            format!(
                "Drink vouchers cannot be combined with a package. Choosing the {} forfeits \
                 ${:.2} in voucher value.",
                result.winner.label().to_lowercase(),
                result.voucher_value
            ),
        ));
    }

    if result.winner.is_package() && !result.uncovered_billed && winner.uncovered_total > 0.0 {
        out.push(Advisory::new(
            ADVISORY_COVERAGE_GAP,
            Severity::Info,
            format!(
                "The {} does not cover every drink you listed; expect about ${:.2} more at \
                 menu prices.",
                result.winner.label().to_lowercase(),
                winner.uncovered_total
            ),
        ));
    }

    if result.savings.abs() < BREAK_EVEN_THRESHOLD {
        out.push(Advisory::new(
            ADVISORY_BREAK_EVEN,
            Severity::Info,
            format!(
                "{} and the {} are within ${:.2} of each other. Small changes in your habits \
                 could flip the answer.",
                result.winner.label(),
                result.compared_to.label().to_lowercase(),
                result.savings
            ),
        ));
    }

    if input.trip.port_days() > PORT_HEAVY_RATIO * input.trip.sea_days {
        out.push(Advisory::new(
            ADVISORY_PORT_HEAVY,
            Severity::Info,
            format!(
                "With {} port days against {} sea days you will spend much of the trip ashore, \
                 where a package earns nothing.",
                input.trip.port_days(),
                input.trip.sea_days
            ),
        ));
    }

    let alcoholic = result.consumption.average.alcoholic_total();
    if alcoholic > ALCOHOL_HEALTH_DAILY {
        out.push(Advisory::new(
            ADVISORY_ALCOHOL_HEALTH,
            Severity::Warning,
            format!(
                "{alcoholic:.1} alcoholic drinks a day is well above health guidelines. Please \
                 pace yourself and alternate with water."
            ),
        ));
    } else if alcoholic > ALCOHOL_CAUTION_DAILY {
        out.push(Advisory::new(
            ADVISORY_ALCOHOL_CAUTION,
            Severity::Caution,
            format!(
                "{alcoholic:.1} alcoholic drinks a day is above moderate-drinking guidelines."
            ),
        ));
    }

    out
}
