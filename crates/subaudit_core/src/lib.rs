//! Subscription cost-normalization and lifecycle core.
//! This crate is the single source of truth for subscription invariants.

pub mod billing;
pub mod logging;
pub mod model;
pub mod report;
pub mod repo;
pub mod service;

pub use billing::aggregate::{active_subscriptions, total_annual_cost, total_monthly_cost};
pub use billing::cadence::{annual_equivalent, monthly_equivalent};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryId, CategoryValidationError};
pub use model::subscription::{
    BillingCycle, Subscription, SubscriptionId, SubscriptionStatus, SubscriptionValidationError,
};
pub use report::views::{CategorySummary, SubscriptionView};
pub use repo::memory::InMemoryRepository;
pub use repo::subscription_repo::{
    CategoryRepository, EntityKind, RepoError, RepoResult, SubscriptionListQuery,
    SubscriptionRepository,
};
pub use service::category_service::{CategoryService, CreateCategoryRequest};
pub use service::subscription_service::{
    CreateSubscriptionRequest, SubscriptionService, UpdateSubscriptionRequest,
};
pub use service::ServiceError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
