//! Steinhaus–Johnson–Trotter permutation generation library.
//!
//! This crate provides a lazy permutation generator including:
//! - One-permutation-at-a-time production in SJT order (Even's speedup)
//! - Bounded O(n) work per step via a single adjacent swap
//! - Offset presentation of the generated values
//! - Typed errors for invalid construction and post-exhaustion calls
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core permutation generator and its error type.
///
/// This module exposes the generator interface while keeping
/// internal direction bookkeeping private.
pub mod generator;
