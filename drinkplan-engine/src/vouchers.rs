//! Loyalty voucher offsetting. Vouchers only ever reduce pay-as-you-go.
use serde::{Deserialize, Serialize};

use crate::input::PlanInput;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoucherOffset {
    /// Cash value of every voucher held over the trip.
    pub value: f64,
    /// Pay-as-you-go total before vouchers.
    pub gross: f64,
    /// Pay-as-you-go total after vouchers, never negative.
    pub net: f64,
}

impl VoucherOffset {
    /// Portion of the voucher value actually used.
    #[must_use]
    pub fn applied(&self) -> f64 {
        self.gross - self.net
    }
}

/// Trip-long cash value of the party's vouchers.
#[must_use]
pub fn voucher_value(input: &PlanInput) -> f64 {
    let vouchers = &input.vouchers;
    let party = &input.party;
    let daily_count = vouchers.per_adult_daily * party.adult_count
        + vouchers.per_minor_daily * party.minor_count;
    f64::from(daily_count) * f64::from(input.trip.days) * vouchers.unit_value
}

/// Apply vouchers to a gross pay-as-you-go total.
#[must_use]
pub fn offset_pay_as_you_go(gross: f64, input: &PlanInput) -> VoucherOffset {
    let value = voucher_value(input);
    VoucherOffset {
        value,
        gross,
        net: (gross - value).max(0.0),
    }
}
