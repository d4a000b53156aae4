//! Category use-case service.
//!
//! # Responsibility
//! - Create categories and report their aggregated cost.
//! - Assemble each category's subscription grouping from the repository.
//!
//! # Invariants
//! - Summaries are always recomputed from current subscription state.

use super::ServiceError;
use crate::model::category::{Category, CategoryId};
use crate::report::views::CategorySummary;
use crate::repo::subscription_repo::{
    CategoryRepository, SubscriptionListQuery, SubscriptionRepository,
};
use log::{debug, info, warn};

/// Request model for creating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub color_code: Option<String>,
}

/// Use-case service for category commands and cost reports.
pub struct CategoryService<R> {
    repo: R,
}

impl<R> CategoryService<R>
where
    R: SubscriptionRepository + CategoryRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an empty category.
    pub fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<CategorySummary, ServiceError> {
        let mut category = Category::new(request.name);
        category.description = request.description;
        category.color_code = request.color_code;

        if let Err(err) = self.repo.create_category(&category) {
            warn!(
                "event=category_create module=service status=error error={}",
                err
            );
            return Err(err.into());
        }

        info!(
            "event=category_create module=service status=ok id={}",
            category.id
        );
        Ok(CategorySummary::from_category(&category))
    }

    /// Deletes a category and detaches its subscriptions.
    ///
    /// Member subscriptions survive with `category_id = None`. Returns
    /// `false` when the category did not exist.
    pub fn delete_category(&self, id: CategoryId) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete_category(id)?;
        if deleted {
            info!("event=category_delete module=service status=ok id={}", id);
        } else {
            warn!(
                "event=category_delete module=service status=not_found id={}",
                id
            );
        }
        Ok(deleted)
    }

    /// Loads a category together with every subscription grouped under it.
    pub fn load_category(&self, id: CategoryId) -> Result<Category, ServiceError> {
        let mut category = self
            .repo
            .get_category(id)?
            .ok_or(ServiceError::CategoryNotFound(id))?;
        category.subscriptions = self
            .repo
            .list_subscriptions(&SubscriptionListQuery::for_category(id))?;
        Ok(category)
    }

    /// Reports the aggregated cost of one category.
    pub fn category_summary(&self, id: CategoryId) -> Result<CategorySummary, ServiceError> {
        let category = self.load_category(id)?;
        let summary = CategorySummary::from_category(&category);
        debug!(
            "event=category_summary module=service status=ok id={} members={} active={}",
            id, summary.subscription_count, summary.active_subscription_count
        );
        Ok(summary)
    }

    /// Reports every category, ordered by name.
    pub fn list_category_summaries(&self) -> Result<Vec<CategorySummary>, ServiceError> {
        self.repo
            .list_categories()?
            .into_iter()
            .map(|category| self.category_summary(category.id))
            .collect()
    }
}
