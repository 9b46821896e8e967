//! Shared infrastructure for the exercises

pub mod error;
pub mod logging;

pub use error::{Error, Result};
