//! Category cost aggregation.
//!
//! Sums normalized cost over the subscriptions passed in. Only `Active`
//! entries contribute; paused, cancelled and pending entries are skipped,
//! not zero-weighted. An empty input totals zero, and a total that leaves the
//! `Decimal` range saturates rather than panicking.

use crate::billing::cadence::{annual_equivalent, monthly_equivalent};
use crate::model::subscription::Subscription;
use rust_decimal::Decimal;

/// Iterates the entries that count toward cost totals.
pub fn active_subscriptions<'a, I>(subscriptions: I) -> impl Iterator<Item = &'a Subscription>
where
    I: IntoIterator<Item = &'a Subscription>,
{
    subscriptions
        .into_iter()
        .filter(|subscription| subscription.status.is_active())
}

/// Total monthly-equivalent cost of the active subscriptions.
pub fn total_monthly_cost<'a, I>(subscriptions: I) -> Decimal
where
    I: IntoIterator<Item = &'a Subscription>,
{
    active_subscriptions(subscriptions)
        .map(|subscription| monthly_equivalent(subscription.cost, subscription.billing_cycle))
        .fold(Decimal::ZERO, |total, monthly| total.saturating_add(monthly))
}

/// Total annual-equivalent cost of the active subscriptions.
pub fn total_annual_cost<'a, I>(subscriptions: I) -> Decimal
where
    I: IntoIterator<Item = &'a Subscription>,
{
    active_subscriptions(subscriptions)
        .map(|subscription| annual_equivalent(subscription.cost, subscription.billing_cycle))
        .fold(Decimal::ZERO, |total, annual| total.saturating_add(annual))
}
