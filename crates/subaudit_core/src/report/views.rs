//! Subscription and category views.

use crate::model::category::{Category, CategoryId};
use crate::model::subscription::{BillingCycle, Subscription, SubscriptionId, SubscriptionStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription record plus its normalized costs and category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionView {
    pub id: SubscriptionId,
    pub service_name: String,
    pub cost: Decimal,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub cancellation_date: Option<DateTime<Utc>>,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
    pub notes: Option<String>,
    pub monthly_cost: Decimal,
    pub annual_cost: Decimal,
}

impl SubscriptionView {
    /// Builds a view; `category` supplies the display name when known.
    pub fn from_subscription(subscription: &Subscription, category: Option<&Category>) -> Self {
        Self {
            id: subscription.id,
            service_name: subscription.service_name.clone(),
            cost: subscription.cost,
            billing_cycle: subscription.billing_cycle,
            next_billing_date: subscription.next_billing_date,
            status: subscription.status,
            start_date: subscription.start_date,
            cancellation_date: subscription.cancellation_date,
            category_id: subscription.category_id,
            category_name: category.map(|category| category.name.clone()),
            notes: subscription.notes.clone(),
            monthly_cost: subscription.monthly_cost(),
            annual_cost: subscription.annual_cost(),
        }
    }
}

/// Category header plus aggregated cost figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub color_code: Option<String>,
    pub total_monthly_cost: Decimal,
    pub total_annual_cost: Decimal,
    /// Every grouped subscription, whatever its status.
    pub subscription_count: usize,
    pub active_subscription_count: usize,
}

impl CategorySummary {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            color_code: category.color_code.clone(),
            total_monthly_cost: category.total_monthly_cost(),
            total_annual_cost: category.total_annual_cost(),
            subscription_count: category.subscriptions.len(),
            active_subscription_count: category
                .subscriptions
                .iter()
                .filter(|subscription| subscription.is_active())
                .count(),
        }
    }
}
