//! Category domain model.
//!
//! # Responsibility
//! - Group subscriptions for reporting.
//! - Expose category-level cost totals over the grouped subscriptions.
//!
//! # Invariants
//! - A category never owns its subscriptions' lifecycle; `subscriptions` is a
//!   grouping view assembled by the caller.
//! - Totals only count `Active` subscriptions.

use crate::billing::aggregate;
use crate::model::subscription::Subscription;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

static COLOR_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color code regex"));

/// Stable identifier for a category.
pub type CategoryId = Uuid;

/// Validation failures for caller-constructed categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryValidationError {
    #[error("category id must not be nil")]
    NilId,
    #[error("category name must not be blank")]
    BlankName,
    #[error("color code `{0}` must be a #RRGGBB hex value")]
    InvalidColorCode(String),
}

/// Named grouping of subscriptions, e.g. "Streaming".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    /// Display color such as `#FF5733`.
    pub color_code: Option<String>,
    /// Subscriptions currently grouped under this category, in caller order.
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl Category {
    /// Creates an empty category with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an empty category with a caller-provided id.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sum of monthly-equivalent costs over active subscriptions.
    pub fn total_monthly_cost(&self) -> Decimal {
        aggregate::total_monthly_cost(&self.subscriptions)
    }

    /// Sum of annual-equivalent costs over active subscriptions.
    pub fn total_annual_cost(&self) -> Decimal {
        aggregate::total_annual_cost(&self.subscriptions)
    }

    /// Checks caller-supplied fields before persistence.
    ///
    /// Grouped subscriptions are not validated here.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.id.is_nil() {
            return Err(CategoryValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::BlankName);
        }
        if let Some(color_code) = self.color_code.as_deref() {
            if !COLOR_CODE_RE.is_match(color_code) {
                return Err(CategoryValidationError::InvalidColorCode(
                    color_code.to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryValidationError};

    #[test]
    fn validate_accepts_hex_color_in_either_case() {
        let mut category = Category::new("Streaming");
        category.color_code = Some("#3498db".to_string());
        assert!(category.validate().is_ok());

        category.color_code = Some("#3498DB".to_string());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_color() {
        let mut category = Category::new("Streaming");
        category.color_code = Some("red".to_string());
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::InvalidColorCode("red".to_string()))
        );
    }

    #[test]
    fn validate_rejects_blank_name() {
        let category = Category::new(" ");
        assert_eq!(category.validate(), Err(CategoryValidationError::BlankName));
    }
}
