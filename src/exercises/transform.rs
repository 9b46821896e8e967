//! Element-wise transform exercise
//!
//! Bug class: off-by-one loop bounds. The buggy variant iterates
//! `0..len-1` and silently drops the last element of any non-empty input.
//! The empty input produces an empty output either way, so the boundary
//! case masks the bug.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Result;
use crate::report;

/// One element of a heterogeneous input sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Text(String),
    Number(i64),
}

impl Item {
    fn process(&self) -> String {
        match self {
            Item::Text(s) => s.to_uppercase(),
            Item::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Text(s) => write!(f, "{s}"),
            Item::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Text(s.to_string())
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Number(n)
    }
}

/// Transform every item: uppercase text, stringify numbers.
///
/// Invariant: the output always has exactly as many elements as the input.
pub fn transform(items: &[Item]) -> Vec<String> {
    items.iter().map(Item::process).collect()
}

/// Same contract as [`transform`], with the seeded defect.
///
/// BUG: the loop bound stops one short, so the final element of any
/// non-empty input is dropped. No error is raised; only the length
/// invariant catches it.
pub fn transform_buggy(items: &[Item]) -> Vec<String> {
    let mut results = Vec::new();

    for i in 0..items.len().saturating_sub(1) {
        results.push(items[i].process());
    }

    results
}

/// Demonstration harness: runs both variants on the same input and
/// compares element counts and contents.
pub fn demo() -> Result<()> {
    report::heading(
        "element-wise transform",
        "bug class: off-by-one loop bounds",
    );

    let items: Vec<Item> = ["apple", "banana", "cherry", "date"]
        .into_iter()
        .map(Item::from)
        .collect();
    let expected = vec!["APPLE", "BANANA", "CHERRY", "DATE"];

    report::section("Buggy variant");
    let actual = transform_buggy(&items);
    report::comparison("element count", expected.len(), actual.len());
    report::comparison("elements", format!("{expected:?}"), format!("{actual:?}"));
    report::note("the last element vanished with no error raised");

    report::section("Fixed variant");
    let actual = transform(&items);
    report::comparison("element count", expected.len(), actual.len());
    report::comparison("elements", format!("{expected:?}"), format!("{actual:?}"));

    Ok(())
}
