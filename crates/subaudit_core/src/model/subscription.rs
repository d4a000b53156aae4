//! Subscription domain model.
//!
//! # Responsibility
//! - Define the canonical recurring-charge record and its closed enums.
//! - Provide the cancel/reactivate lifecycle transitions.
//!
//! # Invariants
//! - `BillingCycle` orders as `Weekly < Monthly < Quarterly < Annual`.
//! - `SubscriptionStatus` orders as `Active < Paused < Cancelled < Pending`.
//! - Only `cancel` produces `Cancelled`; `reactivate` always yields `Active`
//!   with no cancellation date.
//! - Lifecycle transitions never touch `cost` or `billing_cycle`.

use crate::billing::cadence::{annual_equivalent, monthly_equivalent};
use crate::model::category::CategoryId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier for a subscription.
pub type SubscriptionId = Uuid;

/// Recurrence period of a charge.
///
/// Discriminants are explicit: comparisons between cycles are part of the
/// public contract.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    #[default]
    Weekly = 0,
    Monthly = 1,
    Quarterly = 2,
    Annual = 3,
}

impl BillingCycle {
    /// All cycles in ascending order.
    pub const ALL: [BillingCycle; 4] = [
        BillingCycle::Weekly,
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::Annual,
    ];

    /// Number of charges per year for this cycle.
    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Annual => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }
}

/// Lifecycle state of a subscription.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Active = 0,
    Paused = 1,
    Cancelled = 2,
    Pending = 3,
}

impl SubscriptionStatus {
    /// All statuses in ascending order.
    pub const ALL: [SubscriptionStatus; 4] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Paused,
        SubscriptionStatus::Cancelled,
        SubscriptionStatus::Pending,
    ];

    /// Only `Active` subscriptions contribute to cost totals.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Cancelled => "cancelled",
            Self::Pending => "pending",
        }
    }
}

/// Validation failures for caller-constructed subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionValidationError {
    #[error("subscription id must not be nil")]
    NilId,
    #[error("service name must not be blank")]
    BlankServiceName,
    #[error("cost must be zero or greater, got {0}")]
    NegativeCost(Decimal),
}

/// A recurring charge tracked by the audit tool.
///
/// `Default` produces the empty record callers fill in: blank name, zero
/// cost, weekly cycle, active status, nil id and epoch timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub service_name: String,
    /// Charge per billing period, in the subscription's own currency.
    pub cost: Decimal,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    /// Set by `cancel`, cleared by `reactivate`.
    pub cancellation_date: Option<DateTime<Utc>>,
    /// Weak reference; the category does not own this record.
    pub category_id: Option<CategoryId>,
    pub notes: Option<String>,
}

impl Subscription {
    /// Creates an active subscription with a generated id, starting now.
    pub fn new(
        service_name: impl Into<String>,
        cost: Decimal,
        billing_cycle: BillingCycle,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), service_name, cost, billing_cycle)
    }

    /// Creates an active subscription with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally. Does
    /// not validate; call [`Subscription::validate`] before persisting.
    pub fn with_id(
        id: SubscriptionId,
        service_name: impl Into<String>,
        cost: Decimal,
        billing_cycle: BillingCycle,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            service_name: service_name.into(),
            cost,
            billing_cycle,
            next_billing_date: now,
            status: SubscriptionStatus::Active,
            start_date: now,
            cancellation_date: None,
            category_id: None,
            notes: None,
        }
    }

    /// Cancels the subscription as of now.
    ///
    /// Allowed from every status; a repeated call refreshes the date.
    pub fn cancel(&mut self) {
        self.cancel_at(Utc::now());
    }

    /// Cancels the subscription with an explicit timestamp.
    pub fn cancel_at(&mut self, cancelled_at: DateTime<Utc>) {
        self.status = SubscriptionStatus::Cancelled;
        self.cancellation_date = Some(cancelled_at);
    }

    /// Moves the subscription back to `Active` and clears the cancellation
    /// date, whatever the current status.
    pub fn reactivate(&mut self) {
        self.status = SubscriptionStatus::Active;
        self.cancellation_date = None;
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Monthly-equivalent cost, ignoring status.
    pub fn monthly_cost(&self) -> Decimal {
        monthly_equivalent(self.cost, self.billing_cycle)
    }

    /// Annual-equivalent cost, ignoring status.
    pub fn annual_cost(&self) -> Decimal {
        annual_equivalent(self.cost, self.billing_cycle)
    }

    /// Checks caller-supplied fields before persistence.
    ///
    /// # Errors
    /// - `NilId` for a nil id.
    /// - `BlankServiceName` when the name is empty after trimming.
    /// - `NegativeCost` when `cost < 0`.
    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        if self.id.is_nil() {
            return Err(SubscriptionValidationError::NilId);
        }
        if self.service_name.trim().is_empty() {
            return Err(SubscriptionValidationError::BlankServiceName);
        }
        if self.cost < Decimal::ZERO {
            return Err(SubscriptionValidationError::NegativeCost(self.cost));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BillingCycle, Subscription, SubscriptionStatus, SubscriptionValidationError};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    #[test]
    fn cancel_at_records_given_timestamp() {
        let mut sub = Subscription::new("Netflix", Decimal::new(1599, 2), BillingCycle::Monthly);
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        sub.cancel_at(at);

        assert_eq!(sub.status, SubscriptionStatus::Cancelled);
        assert_eq!(sub.cancellation_date, Some(at));
    }

    #[test]
    fn periods_per_year_follow_cycle_order() {
        let periods: Vec<u32> = BillingCycle::ALL
            .iter()
            .map(|cycle| cycle.periods_per_year())
            .collect();
        assert_eq!(periods, vec![52, 12, 4, 1]);
    }

    #[test]
    fn validate_rejects_blank_name_and_negative_cost() {
        let mut sub = Subscription::new("   ", Decimal::ONE, BillingCycle::Monthly);
        assert_eq!(
            sub.validate(),
            Err(SubscriptionValidationError::BlankServiceName)
        );

        sub.service_name = "Spotify".to_string();
        sub.cost = Decimal::new(-1, 0);
        assert_eq!(
            sub.validate(),
            Err(SubscriptionValidationError::NegativeCost(Decimal::new(-1, 0)))
        );

        sub.cost = Decimal::ZERO;
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn default_record_fails_validation_on_nil_id() {
        assert_eq!(
            Subscription::default().validate(),
            Err(SubscriptionValidationError::NilId)
        );
    }
}
