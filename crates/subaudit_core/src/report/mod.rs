//! Read-side projections handed to the query/reporting layer.
//!
//! # Responsibility
//! - Flatten domain records into serializable views with derived costs.
//!
//! # Invariants
//! - Derived costs are always computed from the record, never stored.
//! - Category totals exclude non-active subscriptions; counts do not.

pub mod views;
