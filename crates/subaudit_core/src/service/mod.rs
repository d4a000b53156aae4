//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into command/query level APIs.
//! - Keep host layers decoupled from storage details.

use crate::model::category::CategoryId;
use crate::model::subscription::SubscriptionId;
use crate::repo::subscription_repo::{EntityKind, RepoError};
use thiserror::Error;

pub mod category_service;
pub mod subscription_service;

/// Service error shared by the subscription and category use-cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("subscription not found: {0}")]
    SubscriptionNotFound(SubscriptionId),
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound {
                entity: EntityKind::Subscription,
                id,
            } => Self::SubscriptionNotFound(id),
            RepoError::NotFound {
                entity: EntityKind::Category,
                id,
            } => Self::CategoryNotFound(id),
            other => Self::Repo(other),
        }
    }
}
