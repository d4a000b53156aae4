//! In-memory repository implementation.
//!
//! Single-threaded by construction (`RefCell`); callers that share one
//! instance across threads must wrap it in their own lock.

use super::subscription_repo::{
    CategoryRepository, EntityKind, RepoError, RepoResult, SubscriptionListQuery,
    SubscriptionRepository,
};
use crate::model::category::{Category, CategoryId};
use crate::model::subscription::{Subscription, SubscriptionId};
use std::cell::RefCell;
use std::collections::HashMap;

/// Map-backed store for subscriptions and categories.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    subscriptions: RefCell<HashMap<SubscriptionId, Subscription>>,
    categories: RefCell<HashMap<CategoryId, Category>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriptionRepository for InMemoryRepository {
    fn create_subscription(&self, subscription: &Subscription) -> RepoResult<SubscriptionId> {
        subscription.validate()?;

        let mut subscriptions = self.subscriptions.borrow_mut();
        if subscriptions.contains_key(&subscription.id) {
            return Err(RepoError::Duplicate {
                entity: EntityKind::Subscription,
                id: subscription.id,
            });
        }
        subscriptions.insert(subscription.id, subscription.clone());
        Ok(subscription.id)
    }

    fn update_subscription(&self, subscription: &Subscription) -> RepoResult<()> {
        subscription.validate()?;

        match self.subscriptions.borrow_mut().get_mut(&subscription.id) {
            Some(stored) => {
                *stored = subscription.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound {
                entity: EntityKind::Subscription,
                id: subscription.id,
            }),
        }
    }

    fn get_subscription(&self, id: SubscriptionId) -> RepoResult<Option<Subscription>> {
        Ok(self.subscriptions.borrow().get(&id).cloned())
    }

    fn list_subscriptions(&self, query: &SubscriptionListQuery) -> RepoResult<Vec<Subscription>> {
        let mut matched: Vec<Subscription> = self
            .subscriptions
            .borrow()
            .values()
            .filter(|subscription| query.matches(subscription))
            .cloned()
            .collect();
        matched.sort_by(|left, right| {
            left.service_name
                .cmp(&right.service_name)
                .then_with(|| left.id.cmp(&right.id))
        });

        let limit = query.limit.map_or(usize::MAX, |limit| limit as usize);
        Ok(matched
            .into_iter()
            .skip(query.offset as usize)
            .take(limit)
            .collect())
    }

    fn delete_subscription(&self, id: SubscriptionId) -> RepoResult<bool> {
        Ok(self.subscriptions.borrow_mut().remove(&id).is_some())
    }
}

impl CategoryRepository for InMemoryRepository {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        category.validate()?;

        let mut categories = self.categories.borrow_mut();
        if categories.contains_key(&category.id) {
            return Err(RepoError::Duplicate {
                entity: EntityKind::Category,
                id: category.id,
            });
        }
        let mut stored = category.clone();
        stored.subscriptions.clear();
        categories.insert(category.id, stored);
        Ok(category.id)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        Ok(self.categories.borrow().get(&id).cloned())
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut categories: Vec<Category> = self.categories.borrow().values().cloned().collect();
        categories.sort_by(|left, right| {
            left.name
                .cmp(&right.name)
                .then_with(|| left.id.cmp(&right.id))
        });
        Ok(categories)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<bool> {
        if self.categories.borrow_mut().remove(&id).is_none() {
            return Ok(false);
        }
        for subscription in self.subscriptions.borrow_mut().values_mut() {
            if subscription.category_id == Some(id) {
                subscription.category_id = None;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryRepository;
    use crate::model::category::Category;
    use crate::model::subscription::{BillingCycle, Subscription};
    use crate::repo::subscription_repo::{
        CategoryRepository, RepoError, SubscriptionListQuery, SubscriptionRepository,
    };
    use rust_decimal::Decimal;

    #[test]
    fn create_rejects_duplicate_id() {
        let repo = InMemoryRepository::new();
        let sub = Subscription::new("Netflix", Decimal::new(1599, 2), BillingCycle::Monthly);

        repo.create_subscription(&sub).unwrap();
        let err = repo.create_subscription(&sub).unwrap_err();
        assert!(matches!(err, RepoError::Duplicate { .. }));
    }

    #[test]
    fn create_category_drops_grouped_subscriptions() {
        let repo = InMemoryRepository::new();
        let mut category = Category::new("Streaming");
        category
            .subscriptions
            .push(Subscription::new("Netflix", Decimal::ONE, BillingCycle::Monthly));

        let id = repo.create_category(&category).unwrap();
        let stored = repo.get_category(id).unwrap().unwrap();
        assert!(stored.subscriptions.is_empty());
    }

    #[test]
    fn delete_subscription_reports_whether_a_record_was_removed() {
        let repo = InMemoryRepository::new();
        let sub = Subscription::new("Netflix", Decimal::ONE, BillingCycle::Monthly);
        repo.create_subscription(&sub).unwrap();

        assert!(repo.delete_subscription(sub.id).unwrap());
        assert!(repo.get_subscription(sub.id).unwrap().is_none());
        assert!(!repo.delete_subscription(sub.id).unwrap());
    }

    #[test]
    fn delete_category_clears_member_references_only() {
        let repo = InMemoryRepository::new();
        let streaming = Category::new("Streaming");
        let fitness = Category::new("Fitness");
        repo.create_category(&streaming).unwrap();
        repo.create_category(&fitness).unwrap();

        let mut netflix = Subscription::new("Netflix", Decimal::ONE, BillingCycle::Monthly);
        netflix.category_id = Some(streaming.id);
        let mut gym = Subscription::new("Gym", Decimal::ONE, BillingCycle::Monthly);
        gym.category_id = Some(fitness.id);
        repo.create_subscription(&netflix).unwrap();
        repo.create_subscription(&gym).unwrap();

        assert!(repo.delete_category(streaming.id).unwrap());

        assert!(repo.get_category(streaming.id).unwrap().is_none());
        let netflix = repo.get_subscription(netflix.id).unwrap().unwrap();
        assert_eq!(netflix.category_id, None);
        let gym = repo.get_subscription(gym.id).unwrap().unwrap();
        assert_eq!(gym.category_id, Some(fitness.id));
        assert!(!repo.delete_category(streaming.id).unwrap());
    }

    #[test]
    fn list_applies_offset_then_limit() {
        let repo = InMemoryRepository::new();
        for name in ["Alpha", "Bravo", "Charlie", "Delta"] {
            let sub = Subscription::new(name, Decimal::ONE, BillingCycle::Monthly);
            repo.create_subscription(&sub).unwrap();
        }

        let page = repo
            .list_subscriptions(&SubscriptionListQuery {
                limit: Some(2),
                offset: 1,
                ..SubscriptionListQuery::default()
            })
            .unwrap();
        let names: Vec<&str> = page.iter().map(|sub| sub.service_name.as_str()).collect();
        assert_eq!(names, vec!["Bravo", "Charlie"]);
    }
}
