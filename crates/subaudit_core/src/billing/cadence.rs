//! Billing-cycle normalizer.
//!
//! | cycle     | monthly          | annual      |
//! |-----------|------------------|-------------|
//! | weekly    | `cost * 52 / 12` | `cost * 52` |
//! | monthly   | `cost`           | `cost * 12` |
//! | quarterly | `cost * 4 / 12`  | `cost * 4`  |
//! | annual    | `cost / 12`      | `cost`      |
//!
//! Multiplication always happens before division so exact inputs stay exact
//! as long as `Decimal` precision allows. Products that leave the `Decimal`
//! range saturate at `Decimal::MAX` (or `Decimal::MIN`) instead of panicking.

use crate::model::subscription::BillingCycle;
use rust_decimal::Decimal;

const MONTHS_PER_YEAR: i64 = 12;

/// Re-expresses a per-period `cost` as a monthly amount.
pub fn monthly_equivalent(cost: Decimal, cycle: BillingCycle) -> Decimal {
    match cycle {
        BillingCycle::Monthly => cost,
        BillingCycle::Annual => cost / Decimal::from(MONTHS_PER_YEAR),
        BillingCycle::Weekly | BillingCycle::Quarterly => {
            annual_equivalent(cost, cycle) / Decimal::from(MONTHS_PER_YEAR)
        }
    }
}

/// Re-expresses a per-period `cost` as a yearly amount.
pub fn annual_equivalent(cost: Decimal, cycle: BillingCycle) -> Decimal {
    match cycle {
        BillingCycle::Annual => cost,
        other => cost.saturating_mul(Decimal::from(other.periods_per_year())),
    }
}
