//! Domain model for subscriptions and their categories.
//!
//! # Responsibility
//! - Define the records supplied by the external command/persistence layer.
//! - Keep the lifecycle transitions next to the data they mutate.
//!
//! # Invariants
//! - Subscription -> Category is a one-way optional id; there is no
//!   back-pointer from a subscription to its category value.

pub mod category;
pub mod subscription;
