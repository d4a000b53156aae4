//! Cost normalization across billing cycles.
//!
//! # Responsibility
//! - Convert a per-period charge into monthly and annual equivalents.
//! - Aggregate normalized cost over a set of subscriptions.
//!
//! # Invariants
//! - Every function here is pure: no I/O, no logging, no shared state.
//! - No function here fails; unvalidated input passes straight through.

pub mod aggregate;
pub mod cadence;
