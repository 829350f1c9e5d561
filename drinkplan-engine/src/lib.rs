//! Drinkplan Pricing Engine
//!
//! Platform-agnostic core for comparing cruise beverage packages against
//! paying for drinks one at a time. This crate owns input normalization,
//! pricing, policy rules and advisories; rendering belongs to callers.

pub mod advisory;
pub mod breakdown;
pub mod catalog;
pub mod constants;
pub mod consumption;
pub mod drinks;
pub mod input;
pub mod numbers;
pub mod policy;
pub mod result;
pub mod selection;
pub mod strategy;
pub mod vouchers;

// Re-export commonly used types
pub use advisory::{Advisory, AdvisoryList, Severity, advisories};
pub use breakdown::{
    BreakEven, CategoryBreakdown, DayProfile, TravelerBreakdown, TravelerKind, TravelerLine,
};
pub use catalog::{CatalogError, PackageTier, PricingCatalog};
pub use consumption::{EffectiveConsumption, effective_consumption};
pub use drinks::{DrinkCategory, DrinkType};
pub use input::{
    ConsumptionProfile, PartyProfile, PlanInput, RawNumber, RawPlanInput, TripProfile,
    VoucherProfile, normalize,
};
pub use policy::{MinorOverride, enforce_minor_policy};
pub use result::{ResultSet, compute};
pub use selection::{Selection, select_winner};
pub use strategy::{Evaluation, Strategy, StrategyCost, StrategyCosts, evaluate};
pub use vouchers::{VoucherOffset, offset_pay_as_you_go, voucher_value};

/// Source of the pricing catalog. Hosts implement this for their own storage.
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the pricing catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or fails validation.
    fn load_catalog(&self) -> Result<PricingCatalog, Self::Error>;
}

/// Loader for the catalog compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogLoader for BundledCatalog {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<PricingCatalog, Self::Error> {
        PricingCatalog::from_json(catalog::DEFAULT_CATALOG_DATA)
    }
}

/// Main planner facade that coordinates catalog loading and recalculation
pub struct DrinkPlanner<L>
where
    L: CatalogLoader,
{
    catalog_loader: L,
}

impl<L> DrinkPlanner<L>
where
    L: CatalogLoader,
{
    /// Create a new planner with the provided catalog loader
    pub const fn new(catalog_loader: L) -> Self {
        Self { catalog_loader }
    }

    /// Catalog from the loader, or the bundled defaults if it fails.
    #[must_use]
    pub fn catalog(&self) -> PricingCatalog {
        match self.catalog_loader.load_catalog() {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!("catalog unavailable, using bundled prices: {err}");
                PricingCatalog::load_from_static()
            }
        }
    }

    /// Normalize raw form input and price it.
    #[must_use]
    pub fn plan(&self, raw: &RawPlanInput) -> ResultSet {
        let input = normalize(raw);
        compute(&input, &self.catalog())
    }
}
