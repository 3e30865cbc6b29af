//! Top-level module for the permutation generation system.
//!
//! This module provides a lazy Steinhaus–Johnson–Trotter generator, including:
//! - The generator state machine (`PermutationGenerator`)
//! - Internal per-value movement state (`Direction`)
//! - The error surface (`GeneratorError`)

/// Lazy generator producing every permutation of `{offset,…,offset+n-1}`
/// in adjacent-transposition (SJT/Even) order.
///
/// Exposes construction, `has_next`, and `next`; all iteration state is
/// owned by the generator instance.
pub mod permutation;

/// Errors raised by generator construction and iteration.
pub mod error;

/// Internal per-value direction state (negative, zero, or positive).
///
/// Tracks which way each value would move if chosen as the mobile element.
/// This module is not exposed publicly.
mod direction;

pub use error::GeneratorError;
pub use permutation::PermutationGenerator;
