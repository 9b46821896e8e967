//! The five exercise pairs
//!
//! Each module is self-contained: a seeded-defect variant, corrected
//! variant(s) of the same contract, and a `demo()` harness. No exercise
//! depends on another.

pub mod extraction;
pub mod reduction;
pub mod serialization;
pub mod taxation;
pub mod transform;

use crate::common::Result;

/// Run every exercise demo in sequence
pub fn run_all() -> Result<()> {
    serialization::demo()?;
    transform::demo()?;
    extraction::demo()?;
    taxation::demo()?;
    reduction::demo()?;
    Ok(())
}
