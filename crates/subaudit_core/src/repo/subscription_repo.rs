//! Subscription/category repository contracts.

use crate::model::category::{Category, CategoryId, CategoryValidationError};
use crate::model::subscription::{
    BillingCycle, Subscription, SubscriptionId, SubscriptionStatus, SubscriptionValidationError,
};
use thiserror::Error;
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Record kind named in repository errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Subscription,
    Category,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subscription => f.write_str("subscription"),
            Self::Category => f.write_str("category"),
        }
    }
}

/// Repository error for persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: Uuid },
    #[error("{entity} already exists: {id}")]
    Duplicate { entity: EntityKind, id: Uuid },
    #[error(transparent)]
    InvalidSubscription(#[from] SubscriptionValidationError),
    #[error(transparent)]
    InvalidCategory(#[from] CategoryValidationError),
}

/// Filter and pagination options for listing subscriptions.
///
/// Results are ordered by `service_name`, then id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionListQuery {
    pub category_id: Option<CategoryId>,
    pub status: Option<SubscriptionStatus>,
    pub billing_cycle: Option<BillingCycle>,
    pub limit: Option<u32>,
    pub offset: u32,
}

impl SubscriptionListQuery {
    /// Every subscription grouped under `category_id`.
    pub fn for_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    /// Returns whether `subscription` passes the filters (pagination aside).
    pub fn matches(&self, subscription: &Subscription) -> bool {
        self.category_id
            .map_or(true, |id| subscription.category_id == Some(id))
            && self.status.map_or(true, |status| subscription.status == status)
            && self
                .billing_cycle
                .map_or(true, |cycle| subscription.billing_cycle == cycle)
    }
}

/// Storage contract for subscriptions.
pub trait SubscriptionRepository {
    fn create_subscription(&self, subscription: &Subscription) -> RepoResult<SubscriptionId>;
    fn update_subscription(&self, subscription: &Subscription) -> RepoResult<()>;
    fn get_subscription(&self, id: SubscriptionId) -> RepoResult<Option<Subscription>>;
    fn list_subscriptions(&self, query: &SubscriptionListQuery) -> RepoResult<Vec<Subscription>>;
    /// Removes a subscription; `Ok(false)` when no record had this id.
    fn delete_subscription(&self, id: SubscriptionId) -> RepoResult<bool>;
}

/// Storage contract for categories.
///
/// Stored categories carry no grouped subscriptions; callers assemble the
/// grouping through [`SubscriptionListQuery::for_category`].
pub trait CategoryRepository {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Lists categories ordered by name, then id.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Removes a category and clears `category_id` on every subscription
    /// that referenced it. `Ok(false)` when no record had this id.
    fn delete_category(&self, id: CategoryId) -> RepoResult<bool>;
}

impl<T: SubscriptionRepository + ?Sized> SubscriptionRepository for &T {
    fn create_subscription(&self, subscription: &Subscription) -> RepoResult<SubscriptionId> {
        (**self).create_subscription(subscription)
    }

    fn update_subscription(&self, subscription: &Subscription) -> RepoResult<()> {
        (**self).update_subscription(subscription)
    }

    fn get_subscription(&self, id: SubscriptionId) -> RepoResult<Option<Subscription>> {
        (**self).get_subscription(id)
    }

    fn list_subscriptions(&self, query: &SubscriptionListQuery) -> RepoResult<Vec<Subscription>> {
        (**self).list_subscriptions(query)
    }

    fn delete_subscription(&self, id: SubscriptionId) -> RepoResult<bool> {
        (**self).delete_subscription(id)
    }
}

impl<T: CategoryRepository + ?Sized> CategoryRepository for &T {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        (**self).create_category(category)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        (**self).get_category(id)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        (**self).list_categories()
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<bool> {
        (**self).delete_category(id)
    }
}
