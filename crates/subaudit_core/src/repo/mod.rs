//! Repository contracts for the external persistence layer.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for subscriptions and
//!   categories.
//! - Provide an in-memory implementation for callers without storage.
//!
//! # Invariants
//! - Repository writes must call `validate()` on the record before storing.
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`) rather
//!   than masking missing rows.

pub mod memory;
pub mod subscription_repo;
