//! Raw caller input and the normalizer that turns it into bounded profiles.
//!
//! The expected caller is an interactive form, so half-typed values are
//! normal. Normalization never fails: it defaults what is missing, parses
//! what is textual and clamps what is out of range.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{
    DEFAULT_ADULTS, DEFAULT_DAYS, DEFAULT_MINORS, DEFAULT_SEA_DAYS, DEFAULT_SEA_WEIGHT,
    DEFAULT_VOUCHER_UNIT_VALUE, MAX_ADULTS, MAX_DAILY_QUANTITY, MAX_DAILY_VOUCHERS, MAX_DAYS,
    MAX_MINORS, MAX_SEA_WEIGHT, MAX_VOUCHER_UNIT_VALUE, MIN_ADULTS, MIN_DAYS,
};
use crate::drinks::DrinkType;
use crate::numbers::{clamp_finite, finite_or_zero, parse_lenient, trunc_f64_to_u32};

/// A form value that may arrive as a JSON number or as typed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Numeric reading of the value; unparsable text reads as 0.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => finite_or_zero(*n),
            Self::Text(text) => parse_lenient(text),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for RawNumber {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Pre-normalization input exactly as a form or fixture supplies it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlanInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_days: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_weight: Option<RawNumber>,
    #[serde(default, alias = "adult_count", skip_serializing_if = "Option::is_none")]
    pub adults: Option<RawNumber>,
    #[serde(default, alias = "minor_count", skip_serializing_if = "Option::is_none")]
    pub minors: Option<RawNumber>,
    /// Daily quantity per adult keyed by drink identifier.
    #[serde(default)]
    pub drinks: BTreeMap<String, RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_adult: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_minor: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_unit_value: Option<RawNumber>,
}

impl RawPlanInput {
    /// Load raw input from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into the raw input shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builder-style setter for a drink quantity.
    #[must_use]
    pub fn with_drink(mut self, drink: DrinkType, quantity: impl Into<RawNumber>) -> Self {
        self.drinks.insert(drink.id().to_string(), quantity.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripProfile {
    pub days: u32,
    pub sea_days: u32,
    /// Fraction by which sea days are boosted and port days reduced.
    pub sea_weight: f64,
}

impl TripProfile {
    #[must_use]
    pub const fn port_days(&self) -> u32 {
        self.days.saturating_sub(self.sea_days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyProfile {
    pub adult_count: u32,
    pub minor_count: u32,
    /// False when the caller reported no adults; one supervising adult is
    /// then assumed for arithmetic and all alcohol is removed.
    pub adult_present: bool,
}

impl PartyProfile {
    #[must_use]
    pub const fn total_people(&self) -> u32 {
        self.adult_count + self.minor_count
    }
}

/// Daily quantity per adult for every drink type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<DrinkType, f64>", into = "BTreeMap<DrinkType, f64>")]
pub struct ConsumptionProfile {
    quantities: [f64; DrinkType::COUNT],
}

impl ConsumptionProfile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn quantity(&self, drink: DrinkType) -> f64 {
        self.quantities[drink.index()]
    }

    pub fn set(&mut self, drink: DrinkType, quantity: f64) {
        self.quantities[drink.index()] = quantity;
    }

    #[must_use]
    pub fn with(mut self, drink: DrinkType, quantity: f64) -> Self {
        self.set(drink, quantity);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (DrinkType, f64)> + '_ {
        DrinkType::ALL
            .into_iter()
            .map(|drink| (drink, self.quantity(drink)))
    }

    /// Apply `f` to every quantity.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(DrinkType, f64) -> f64) -> Self {
        let mut next = *self;
        for drink in DrinkType::ALL {
            next.set(drink, f(drink, self.quantity(drink)));
        }
        next
    }

    /// Total alcoholic drinks per adult per day.
    #[must_use]
    pub fn alcoholic_total(&self) -> f64 {
        self.iter()
            .filter(|(drink, _)| drink.is_alcoholic())
            .map(|(_, qty)| qty)
            .sum()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, qty)| qty).sum()
    }

    #[must_use]
    pub fn without_alcohol(&self) -> Self {
        self.map(|drink, qty| if drink.is_alcoholic() { 0.0 } else { qty })
    }
}

impl From<BTreeMap<DrinkType, f64>> for ConsumptionProfile {
    fn from(map: BTreeMap<DrinkType, f64>) -> Self {
        let mut profile = Self::default();
        for (drink, qty) in map {
            profile.set(drink, qty);
        }
        profile
    }
}

impl From<ConsumptionProfile> for BTreeMap<DrinkType, f64> {
    fn from(profile: ConsumptionProfile) -> Self {
        profile.iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoucherProfile {
    pub per_adult_daily: u32,
    pub per_minor_daily: u32,
    /// Cash value each voucher offsets.
    pub unit_value: f64,
}

impl VoucherProfile {
    /// Whether anyone in the party actually holds vouchers.
    #[must_use]
    pub const fn held_by(&self, party: &PartyProfile) -> bool {
        self.per_adult_daily > 0 || (self.per_minor_daily > 0 && party.minor_count > 0)
    }
}

/// Fully normalized input record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub trip: TripProfile,
    pub party: PartyProfile,
    pub consumption: ConsumptionProfile,
    pub vouchers: VoucherProfile,
}

impl Default for PlanInput {
    fn default() -> Self {
        normalize(&RawPlanInput::default())
    }
}

impl PlanInput {
    /// Express a normalized record as raw input that normalizes back to itself.
    #[must_use]
    pub fn to_raw(&self) -> RawPlanInput {
        let adults = if self.party.adult_present {
            self.party.adult_count
        } else {
            0
        };
        RawPlanInput {
            days: Some(self.trip.days.into()),
            sea_days: Some(self.trip.sea_days.into()),
            sea_weight: Some(self.trip.sea_weight.into()),
            adults: Some(adults.into()),
            minors: Some(self.party.minor_count.into()),
            drinks: self
                .consumption
                .iter()
                .map(|(drink, qty)| (drink.id().to_string(), RawNumber::Number(qty)))
                .collect(),
            voucher_adult: Some(self.vouchers.per_adult_daily.into()),
            voucher_minor: Some(self.vouchers.per_minor_daily.into()),
            voucher_unit_value: Some(self.vouchers.unit_value.into()),
        }
    }
}

fn read(raw: Option<&RawNumber>, default: f64) -> f64 {
    raw.map_or(default, RawNumber::value)
}

fn count(field: &str, raw: Option<&RawNumber>, default: u32, min: u32, max: u32) -> u32 {
    let value = read(raw, f64::from(default));
    let clamped = trunc_f64_to_u32(value, min, max);
    if (f64::from(clamped) - value).abs() >= 1.0 {
        log::debug!("clamped {field} from {value} to {clamped}");
    }
    clamped
}

fn amount(field: &str, raw: Option<&RawNumber>, default: f64, min: f64, max: f64) -> f64 {
    let value = read(raw, default);
    let clamped = clamp_finite(value, min, max);
    if (clamped - value).abs() > f64::EPSILON {
        log::debug!("clamped {field} from {value} to {clamped}");
    }
    clamped
}

/// Clean, default and bound every raw field.
#[must_use]
pub fn normalize(raw: &RawPlanInput) -> PlanInput {
    let days = count("days", raw.days.as_ref(), DEFAULT_DAYS, MIN_DAYS, MAX_DAYS);
    let sea_days = count("sea_days", raw.sea_days.as_ref(), DEFAULT_SEA_DAYS, 0, days);
    let sea_weight = amount(
        "sea_weight",
        raw.sea_weight.as_ref(),
        DEFAULT_SEA_WEIGHT,
        0.0,
        MAX_SEA_WEIGHT,
    );

    let minor_count = count("minors", raw.minors.as_ref(), DEFAULT_MINORS, 0, MAX_MINORS);
    // Only a party of minors lacks an adult; an empty or zero adult field
    // with no minors is a half-typed form and clamps to one adult.
    let adult_present =
        minor_count == 0 || raw.adults.as_ref().is_none_or(|adults| adults.value() >= 1.0);
    let party = PartyProfile {
        adult_count: count(
            "adults",
            raw.adults.as_ref(),
            DEFAULT_ADULTS,
            MIN_ADULTS,
            MAX_ADULTS,
        ),
        minor_count,
        adult_present,
    };

    let mut consumption = ConsumptionProfile::new();
    for (key, quantity) in &raw.drinks {
        match key.parse::<DrinkType>() {
            Ok(drink) => consumption.set(
                drink,
                amount(drink.id(), Some(quantity), 0.0, 0.0, MAX_DAILY_QUANTITY),
            ),
            Err(err) => log::debug!("ignoring drink entry: {err}"),
        }
    }
    if !adult_present {
        log::debug!("no adult in party, removing alcoholic consumption");
        consumption = consumption.without_alcohol();
    }

    let vouchers = VoucherProfile {
        per_adult_daily: count(
            "voucher_adult",
            raw.voucher_adult.as_ref(),
            0,
            0,
            MAX_DAILY_VOUCHERS,
        ),
        per_minor_daily: count(
            "voucher_minor",
            raw.voucher_minor.as_ref(),
            0,
            0,
            MAX_DAILY_VOUCHERS,
        ),
        unit_value: amount(
            "voucher_unit_value",
            raw.voucher_unit_value.as_ref(),
            DEFAULT_VOUCHER_UNIT_VALUE,
            0.0,
            MAX_VOUCHER_UNIT_VALUE,
        ),
    };

    PlanInput {
        trip: TripProfile {
            days,
            sea_days,
            sea_weight,
        },
        party,
        consumption,
        vouchers,
    }
}
