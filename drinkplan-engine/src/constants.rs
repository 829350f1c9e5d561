//! Centralized ranges, defaults and thresholds for the pricing engine.
//!
//! Input bounds and advisory cut-offs live here so they can only change
//! through reviewed code, never through the pricing data file.

// Trip bounds ----------------------------------------------------------------
pub(crate) const DEFAULT_DAYS: u32 = 7;
pub(crate) const MIN_DAYS: u32 = 1;
pub(crate) const MAX_DAYS: u32 = 365;
pub(crate) const DEFAULT_SEA_DAYS: u32 = 3;
pub(crate) const DEFAULT_SEA_WEIGHT: f64 = 0.0;
pub(crate) const MAX_SEA_WEIGHT: f64 = 0.4;

// Party bounds ---------------------------------------------------------------
pub(crate) const DEFAULT_ADULTS: u32 = 1;
pub(crate) const MIN_ADULTS: u32 = 1;
pub(crate) const MAX_ADULTS: u32 = 20;
pub(crate) const DEFAULT_MINORS: u32 = 0;
pub(crate) const MAX_MINORS: u32 = 20;

// Consumption bounds ---------------------------------------------------------
pub(crate) const MAX_DAILY_QUANTITY: f64 = 99.0;

// Voucher bounds -------------------------------------------------------------
pub(crate) const MAX_DAILY_VOUCHERS: u32 = 6;
pub(crate) const DEFAULT_VOUCHER_UNIT_VALUE: f64 = 14.0;
pub(crate) const MAX_VOUCHER_UNIT_VALUE: f64 = 100.0;

// Advisory thresholds --------------------------------------------------------
pub(crate) const BREAK_EVEN_THRESHOLD: f64 = 50.0;
pub(crate) const PORT_HEAVY_RATIO: u32 = 2;
pub(crate) const ALCOHOL_CAUTION_DAILY: f64 = 3.0;
pub(crate) const ALCOHOL_HEALTH_DAILY: f64 = 6.0;

// Advisory codes -------------------------------------------------------------
pub(crate) const ADVISORY_BREAK_EVEN: &str = "advisory.break-even";
pub(crate) const ADVISORY_VOUCHER_CONFLICT: &str = "advisory.voucher-conflict";
pub(crate) const ADVISORY_PORT_HEAVY: &str = "advisory.port-heavy";
pub(crate) const ADVISORY_ALCOHOL_CAUTION: &str = "advisory.alcohol.caution";
pub(crate) const ADVISORY_ALCOHOL_HEALTH: &str = "advisory.alcohol.health";
pub(crate) const ADVISORY_UNSUPPORTED_PARTY: &str = "advisory.party.unsupported";
pub(crate) const ADVISORY_COVERAGE_GAP: &str = "advisory.coverage-gap";

// Fallback catalog -----------------------------------------------------------
pub(crate) const FALLBACK_GRATUITY_RATE: f64 = 0.18;
pub(crate) const FALLBACK_PREMIUM_CAP: f64 = 14.0;
pub(crate) const FALLBACK_BASIC_RATE: f64 = 14.0;
pub(crate) const FALLBACK_MID_RATE: f64 = 34.0;
pub(crate) const FALLBACK_PREMIUM_RATE: f64 = 85.0;
pub(crate) const MAX_GRATUITY_RATE: f64 = 1.0;

// Policy text ----------------------------------------------------------------
pub(crate) const FORCED_MINOR_REASON: &str =
    "Minors sailing with adults on the premium package must purchase the mid-tier package";
