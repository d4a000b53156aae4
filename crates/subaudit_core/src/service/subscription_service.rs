//! Subscription use-case service.
//!
//! # Responsibility
//! - Provide one entry point per subscription command/query.
//! - Apply lifecycle transitions and hand the mutated record back to storage.
//!
//! # Invariants
//! - Transitions are permissive: cancel and reactivate are accepted from
//!   every status, as the model allows.
//! - Field updates never touch `status` or `cancellation_date`.
//! - Service layer remains storage-agnostic.

use super::ServiceError;
use crate::model::category::{Category, CategoryId};
use crate::model::subscription::{BillingCycle, Subscription, SubscriptionId};
use crate::report::views::SubscriptionView;
use crate::repo::subscription_repo::{
    CategoryRepository, SubscriptionListQuery, SubscriptionRepository,
};
use chrono::{DateTime, Utc};
use log::{info, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Request model for registering a new subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubscriptionRequest {
    pub service_name: String,
    pub cost: Decimal,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    /// Must reference an existing category when set.
    pub category_id: Option<CategoryId>,
    pub notes: Option<String>,
}

/// Request model for editing a subscription's descriptive fields.
///
/// `None` leaves a field untouched. For the optional fields, `Some(None)`
/// clears the stored value. Status is changed only through cancel/reactivate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSubscriptionRequest {
    pub service_name: Option<String>,
    pub cost: Option<Decimal>,
    pub billing_cycle: Option<BillingCycle>,
    pub next_billing_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub category_id: Option<Option<CategoryId>>,
    pub notes: Option<Option<String>>,
}

/// Use-case service for subscription commands and queries.
pub struct SubscriptionService<R> {
    repo: R,
}

impl<R> SubscriptionService<R>
where
    R: SubscriptionRepository + CategoryRepository,
{
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new active subscription.
    ///
    /// # Errors
    /// - `CategoryNotFound` when `category_id` names no stored category.
    /// - `Repo` for validation or storage failures.
    pub fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<SubscriptionView, ServiceError> {
        let category = match request.category_id {
            Some(category_id) => Some(self.require_category(category_id)?),
            None => None,
        };

        let mut subscription =
            Subscription::new(request.service_name, request.cost, request.billing_cycle);
        subscription.next_billing_date = request.next_billing_date;
        subscription.start_date = request.start_date;
        subscription.category_id = request.category_id;
        subscription.notes = request.notes;

        if let Err(err) = self.repo.create_subscription(&subscription) {
            warn!(
                "event=subscription_create module=service status=error error={}",
                err
            );
            return Err(err.into());
        }

        info!(
            "event=subscription_create module=service status=ok id={} cycle={}",
            subscription.id,
            subscription.billing_cycle.as_str()
        );
        Ok(SubscriptionView::from_subscription(
            &subscription,
            category.as_ref(),
        ))
    }

    /// Gets one subscription by id.
    pub fn get_subscription(&self, id: SubscriptionId) -> Result<SubscriptionView, ServiceError> {
        let subscription = self.require_subscription(id)?;
        let category = self.lookup_category(subscription.category_id)?;
        Ok(SubscriptionView::from_subscription(
            &subscription,
            category.as_ref(),
        ))
    }

    /// Lists subscriptions matching `query`, with category names resolved.
    pub fn list_subscriptions(
        &self,
        query: &SubscriptionListQuery,
    ) -> Result<Vec<SubscriptionView>, ServiceError> {
        let subscriptions = self.repo.list_subscriptions(query)?;
        let categories: HashMap<CategoryId, Category> = self
            .repo
            .list_categories()?
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        Ok(subscriptions
            .iter()
            .map(|subscription| {
                let category = subscription
                    .category_id
                    .and_then(|category_id| categories.get(&category_id));
                SubscriptionView::from_subscription(subscription, category)
            })
            .collect())
    }

    /// Applies `request` to an existing subscription.
    ///
    /// # Errors
    /// - `SubscriptionNotFound` when `id` names no stored subscription.
    /// - `CategoryNotFound` when the new `category_id` names no category.
    /// - `Repo` for validation or storage failures.
    pub fn update_subscription(
        &self,
        id: SubscriptionId,
        request: UpdateSubscriptionRequest,
    ) -> Result<SubscriptionView, ServiceError> {
        let mut subscription = self.require_subscription(id)?;

        if let Some(Some(category_id)) = request.category_id {
            self.require_category(category_id)?;
        }
        if let Some(service_name) = request.service_name {
            subscription.service_name = service_name;
        }
        if let Some(cost) = request.cost {
            subscription.cost = cost;
        }
        if let Some(billing_cycle) = request.billing_cycle {
            subscription.billing_cycle = billing_cycle;
        }
        if let Some(next_billing_date) = request.next_billing_date {
            subscription.next_billing_date = next_billing_date;
        }
        if let Some(start_date) = request.start_date {
            subscription.start_date = start_date;
        }
        if let Some(category_id) = request.category_id {
            subscription.category_id = category_id;
        }
        if let Some(notes) = request.notes {
            subscription.notes = notes;
        }

        if let Err(err) = self.repo.update_subscription(&subscription) {
            warn!(
                "event=subscription_update module=service status=error id={} error={}",
                id, err
            );
            return Err(err.into());
        }

        info!(
            "event=subscription_update module=service status=ok id={}",
            id
        );
        let category = self.lookup_category(subscription.category_id)?;
        Ok(SubscriptionView::from_subscription(
            &subscription,
            category.as_ref(),
        ))
    }

    /// Deletes a subscription; returns `false` when it did not exist.
    pub fn delete_subscription(&self, id: SubscriptionId) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete_subscription(id)?;
        if deleted {
            info!("event=subscription_delete module=service status=ok id={}", id);
        } else {
            warn!(
                "event=subscription_delete module=service status=not_found id={}",
                id
            );
        }
        Ok(deleted)
    }

    /// Cancels a subscription as of now, from any status.
    pub fn cancel_subscription(
        &self,
        id: SubscriptionId,
    ) -> Result<SubscriptionView, ServiceError> {
        self.transition(id, "subscription_cancel", Subscription::cancel)
    }

    /// Reactivates a subscription, from any status.
    pub fn reactivate_subscription(
        &self,
        id: SubscriptionId,
    ) -> Result<SubscriptionView, ServiceError> {
        self.transition(id, "subscription_reactivate", Subscription::reactivate)
    }

    fn transition(
        &self,
        id: SubscriptionId,
        event: &str,
        apply: fn(&mut Subscription),
    ) -> Result<SubscriptionView, ServiceError> {
        let mut subscription = self.require_subscription(id)?;
        let previous = subscription.status;
        apply(&mut subscription);
        self.repo.update_subscription(&subscription)?;

        info!(
            "event={} module=service status=ok id={} from={} to={}",
            event,
            id,
            previous.as_str(),
            subscription.status.as_str()
        );
        let category = self.lookup_category(subscription.category_id)?;
        Ok(SubscriptionView::from_subscription(
            &subscription,
            category.as_ref(),
        ))
    }

    fn require_subscription(&self, id: SubscriptionId) -> Result<Subscription, ServiceError> {
        self.repo
            .get_subscription(id)?
            .ok_or(ServiceError::SubscriptionNotFound(id))
    }

    fn require_category(&self, id: CategoryId) -> Result<Category, ServiceError> {
        self.repo
            .get_category(id)?
            .ok_or(ServiceError::CategoryNotFound(id))
    }

    // A dangling category id resolves to no name rather than an error.
    fn lookup_category(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Option<Category>, ServiceError> {
        match category_id {
            Some(id) => Ok(self.repo.get_category(id)?),
            None => Ok(None),
        }
    }
}
