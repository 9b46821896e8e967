//! Bug Lab - paired buggy/fixed exercises for debugging practice
//!
//! Five independent exercise pairs, one per common bug class: incorrect
//! library API usage, off-by-one loop bounds, null/missing-field access,
//! variable shadowing, and wrong accumulator initialization. Each pair
//! exposes the seeded-defect variant, one or more corrected variants of
//! the same contract, and a demo harness that prints expected vs. actual
//! behavior side by side.

pub mod commands;
pub mod common;
pub mod exercises;
pub mod report;

// Re-export commonly used types for tests
pub use common::{Error, Result};
