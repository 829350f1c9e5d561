//! Pricing catalog: unit prices, package rates, gratuity and the premium cap.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::constants::{
    FALLBACK_BASIC_RATE, FALLBACK_GRATUITY_RATE, FALLBACK_MID_RATE, FALLBACK_PREMIUM_CAP,
    FALLBACK_PREMIUM_RATE, MAX_GRATUITY_RATE,
};
use crate::drinks::DrinkType;

/// Pricing document compiled into the crate.
pub const DEFAULT_CATALOG_DATA: &str = include_str!("../data/catalog.json");

/// Menu prices in [`DrinkType::ALL`] order.
const FALLBACK_UNIT_PRICES: [f64; DrinkType::COUNT] = [
    3.50,  // soda
    4.75,  // specialty coffee
    3.95,  // premium tea
    4.50,  // fresh juice
    6.50,  // mocktail
    4.99,  // energy drink
    5.95,  // milkshake
    3.00,  // bottled water
    8.50,  // beer
    11.00, // wine
    13.00, // cocktail
    15.50, // spirits
];

/// Prepaid package tiers, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageTier {
    /// Soda only.
    Basic,
    /// Every non-alcoholic drink.
    Mid,
    /// Everything, alcohol included up to the premium cap.
    Premium,
}

impl PackageTier {
    pub const COUNT: usize = 3;
    pub const ALL: [Self; Self::COUNT] = [Self::Basic, Self::Mid, Self::Premium];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the package absorbs this drink's menu price.
    #[must_use]
    pub const fn covers(self, drink: DrinkType) -> bool {
        match self {
            Self::Basic => matches!(drink, DrinkType::Soda),
            Self::Mid => !drink.is_alcoholic(),
            Self::Premium => true,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Mid => "mid",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Errors raised when a pricing document cannot back the engine.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("no unit price for drink type {0}")]
    MissingUnitPrice(DrinkType),
    #[error("no daily rate for package tier {0}")]
    MissingPackageRate(PackageTier),
    #[error("{field} must be a finite, non-negative amount (got {value})")]
    InvalidPrice { field: String, value: f64 },
    #[error("gratuity rate must be between 0 and {max:.2} (got {value})")]
    GratuityOutOfRange { value: f64, max: f64 },
    #[error("pricing document could not be parsed: {0}")]
    Parse(String),
}

/// Wire shape of a pricing document.
///
/// Keyed maps make hand-edited files readable; [`PricingCatalog`] checks that
/// every key is present before the engine ever sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub unit_prices: BTreeMap<DrinkType, f64>,
    pub package_rates: BTreeMap<PackageTier, f64>,
    pub gratuity_rate: f64,
    pub premium_cap: f64,
    #[serde(default)]
    pub bill_uncovered_drinks: bool,
}

/// Validated, read-only pricing data consumed by [`crate::compute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct PricingCatalog {
    unit_prices: [f64; DrinkType::COUNT],
    package_rates: [f64; PackageTier::COUNT],
    gratuity_rate: f64,
    premium_cap: f64,
    bill_uncovered_drinks: bool,
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

impl PricingCatalog {
    /// Hardcoded prices used when no pricing document is available.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            unit_prices: FALLBACK_UNIT_PRICES,
            package_rates: [
                FALLBACK_BASIC_RATE,
                FALLBACK_MID_RATE,
                FALLBACK_PREMIUM_RATE,
            ],
            gratuity_rate: FALLBACK_GRATUITY_RATE,
            premium_cap: FALLBACK_PREMIUM_CAP,
            bill_uncovered_drinks: false,
        }
    }

    /// Load the pricing document bundled with the crate, falling back to
    /// [`PricingCatalog::fallback`] if it does not validate.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_else(|err| {
            log::warn!("bundled pricing document rejected, using fallback prices: {err}");
            Self::fallback()
        })
    }

    /// Parse and validate a pricing document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the JSON is malformed or any entry is
    /// missing or out of range.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::try_from(document)
    }

    #[must_use]
    pub const fn unit_price(&self, drink: DrinkType) -> f64 {
        self.unit_prices[drink.index()]
    }

    #[must_use]
    pub const fn package_rate(&self, tier: PackageTier) -> f64 {
        self.package_rates[tier.index()]
    }

    #[must_use]
    pub const fn gratuity_rate(&self) -> f64 {
        self.gratuity_rate
    }

    /// `1 + gratuity_rate`.
    #[must_use]
    pub fn gratuity_multiplier(&self) -> f64 {
        1.0 + self.gratuity_rate
    }

    #[must_use]
    pub const fn premium_cap(&self) -> f64 {
        self.premium_cap
    }

    /// Whether drinks outside a tier's coverage are added to that tier's total.
    #[must_use]
    pub const fn bills_uncovered_drinks(&self) -> bool {
        self.bill_uncovered_drinks
    }

    /// Amount per unit the premium package does not absorb for this drink.
    #[must_use]
    pub fn premium_overage(&self, drink: DrinkType) -> f64 {
        (self.unit_price(drink) - self.premium_cap).max(0.0)
    }

    /// Copy with a new daily rate for one tier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` for negative or non-finite rates.
    pub fn with_package_rate(&self, tier: PackageTier, rate: f64) -> Result<Self, CatalogError> {
        check_amount(&format!("package_rates.{tier}"), rate)?;
        let mut next = self.clone();
        next.package_rates[tier.index()] = rate;
        Ok(next)
    }

    /// Copy with a new menu price for one drink.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` for negative or non-finite prices.
    pub fn with_unit_price(&self, drink: DrinkType, price: f64) -> Result<Self, CatalogError> {
        check_amount(&format!("unit_prices.{drink}"), price)?;
        let mut next = self.clone();
        next.unit_prices[drink.index()] = price;
        Ok(next)
    }

    /// Copy with a new premium per-drink cap.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` for negative or non-finite caps.
    pub fn with_premium_cap(&self, cap: f64) -> Result<Self, CatalogError> {
        check_amount("premium_cap", cap)?;
        let mut next = self.clone();
        next.premium_cap = cap;
        Ok(next)
    }

    #[must_use]
    pub fn with_uncovered_billing(&self, enabled: bool) -> Self {
        let mut next = self.clone();
        next.bill_uncovered_drinks = enabled;
        next
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidPrice {
            field: field.to_string(),
            value,
        })
    }
}

impl TryFrom<CatalogDocument> for PricingCatalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        let mut unit_prices = [0.0; DrinkType::COUNT];
        for drink in DrinkType::ALL {
            let price = *document
                .unit_prices
                .get(&drink)
                .ok_or(CatalogError::MissingUnitPrice(drink))?;
            check_amount(&format!("unit_prices.{drink}"), price)?;
            unit_prices[drink.index()] = price;
        }

        let mut package_rates = [0.0; PackageTier::COUNT];
        for tier in PackageTier::ALL {
            let rate = *document
                .package_rates
                .get(&tier)
                .ok_or(CatalogError::MissingPackageRate(tier))?;
            check_amount(&format!("package_rates.{tier}"), rate)?;
            package_rates[tier.index()] = rate;
        }

        let gratuity = document.gratuity_rate;
        if !gratuity.is_finite() || !(0.0..=MAX_GRATUITY_RATE).contains(&gratuity) {
            return Err(CatalogError::GratuityOutOfRange {
                value: gratuity,
                max: MAX_GRATUITY_RATE,
            });
        }
        check_amount("premium_cap", document.premium_cap)?;

        Ok(Self {
            unit_prices,
            package_rates,
            gratuity_rate: gratuity,
            premium_cap: document.premium_cap,
            bill_uncovered_drinks: document.bill_uncovered_drinks,
        })
    }
}

impl From<PricingCatalog> for CatalogDocument {
    fn from(catalog: PricingCatalog) -> Self {
        Self {
            unit_prices: DrinkType::ALL
                .into_iter()
                .map(|drink| (drink, catalog.unit_price(drink)))
                .collect(),
            package_rates: PackageTier::ALL
                .into_iter()
                .map(|tier| (tier, catalog.package_rate(tier)))
                .collect(),
            gratuity_rate: catalog.gratuity_rate,
            premium_cap: catalog.premium_cap,
            bill_uncovered_drinks: catalog.bill_uncovered_drinks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_document_matches_fallback() {
        let bundled = PricingCatalog::from_json(DEFAULT_CATALOG_DATA).unwrap();
        assert_eq!(bundled, PricingCatalog::fallback());
        assert_eq!(PricingCatalog::load_from_static(), bundled);
    }

    #[test]
    fn missing_drink_fails_loudly() {
        let mut document = CatalogDocument::from(PricingCatalog::fallback());
        document.unit_prices.remove(&DrinkType::Spirits);
        assert_eq!(
            PricingCatalog::try_from(document),
            Err(CatalogError::MissingUnitPrice(DrinkType::Spirits))
        );
    }

    #[test]
    fn missing_tier_fails_loudly() {
        let mut document = CatalogDocument::from(PricingCatalog::fallback());
        document.package_rates.remove(&PackageTier::Mid);
        assert_eq!(
            PricingCatalog::try_from(document),
            Err(CatalogError::MissingPackageRate(PackageTier::Mid))
        );
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        let base = PricingCatalog::fallback();
        assert!(matches!(
            base.with_package_rate(PackageTier::Premium, -1.0),
            Err(CatalogError::InvalidPrice { .. })
        ));
        assert!(base.with_premium_cap(f64::NAN).is_err());
        assert!(base.with_unit_price(DrinkType::Beer, f64::INFINITY).is_err());

        let mut document = CatalogDocument::from(base);
        document.gratuity_rate = 1.5;
        assert!(matches!(
            PricingCatalog::try_from(document),
            Err(CatalogError::GratuityOutOfRange { .. })
        ));
    }

    #[test]
    fn editing_returns_new_catalog() {
        let base = PricingCatalog::fallback();
        let edited = base.with_package_rate(PackageTier::Premium, 99.0).unwrap();
        assert!((edited.package_rate(PackageTier::Premium) - 99.0).abs() < f64::EPSILON);
        assert!((base.package_rate(PackageTier::Premium) - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_round_trips_through_document() {
        let catalog = PricingCatalog::fallback().with_uncovered_billing(true);
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"unit_prices\""));
        let restored: PricingCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PricingCatalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            PricingCatalog::from_json(r#"{"unit_prices":{"kombucha":4.0}}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn coverage_nests_by_tier() {
        for drink in DrinkType::ALL {
            if PackageTier::Basic.covers(drink) {
                assert!(PackageTier::Mid.covers(drink));
            }
            if PackageTier::Mid.covers(drink) {
                assert!(PackageTier::Premium.covers(drink));
            }
        }
        assert!(!PackageTier::Mid.covers(DrinkType::Beer));
    }

    #[test]
    fn overage_only_above_cap() {
        let catalog = PricingCatalog::fallback();
        assert!(catalog.premium_overage(DrinkType::Beer).abs() < f64::EPSILON);
        assert!((catalog.premium_overage(DrinkType::Spirits) - 1.5).abs() < 1e-9);
    }
}
