//! Reduction with wrong seed exercise
//!
//! Bug class: wrong accumulator initialization. Seeding a running maximum
//! at zero silently returns zero for any all-negative input - a value that
//! is not in the sequence at all. The correct seed is the first element
//! (or negative infinity); the empty case is an absence, not an error.

use crate::common::Result;
use crate::report;

/// Greatest element of `numbers`, or `None` if the slice is empty.
///
/// The accumulator is seeded from the first element, so every possible
/// input value is a valid candidate.
pub fn max_value(numbers: &[i64]) -> Option<i64> {
    let (&first, rest) = numbers.split_first()?;

    let mut max_val = first;
    for &num in rest {
        if num > max_val {
            max_val = num;
        }
    }

    Some(max_val)
}

/// Same contract, via the standard iterator adapter.
pub fn max_value_iter(numbers: &[i64]) -> Option<i64> {
    numbers.iter().copied().max()
}

/// Same contract as [`max_value`], with the seeded defect.
///
/// BUG: the accumulator starts at zero, which is not a lower bound for
/// signed input. All-negative sequences silently report a maximum of 0.
pub fn max_value_buggy(numbers: &[i64]) -> Option<i64> {
    if numbers.is_empty() {
        return None;
    }

    let mut max_val = 0;
    for &num in numbers {
        if num > max_val {
            max_val = num;
        }
    }

    Some(max_val)
}

/// Demonstration harness: the all-negative case exposes the seed defect;
/// positive, mixed, and all-zero inputs mask it.
pub fn demo() -> Result<()> {
    report::heading(
        "maximum-finding reduction",
        "bug class: wrong accumulator initialization",
    );

    let positive = [3, 7, 2, 9, 1];
    let negative = [-5, -2, -8, -1, -10];
    let zeros = [0, 0, 0];

    report::section("Buggy variant");
    report::comparison(
        &format!("max of {positive:?}"),
        report::display_option(&Some(9)),
        report::display_option(&max_value_buggy(&positive)),
    );
    report::comparison(
        &format!("max of {negative:?}"),
        report::display_option(&Some(-1)),
        report::display_option(&max_value_buggy(&negative)),
    );
    report::note("0 is not an element of the input; the seed leaked through");
    report::comparison(
        &format!("max of {zeros:?}"),
        report::display_option(&Some(0)),
        report::display_option(&max_value_buggy(&zeros)),
    );

    report::section("Fixed variant");
    report::comparison(
        &format!("max of {negative:?}"),
        report::display_option(&Some(-1)),
        report::display_option(&max_value(&negative)),
    );
    report::comparison(
        "max of []",
        report::display_option(&None::<i64>),
        report::display_option(&max_value(&[])),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_maximum_of_positive_input() {
        assert_eq!(max_value(&[3, 7, 2, 9, 1]), Some(9));
    }

    #[test]
    fn finds_the_maximum_of_all_negative_input() {
        assert_eq!(max_value(&[-5, -2, -8, -1, -10]), Some(-1));
    }

    #[test]
    fn empty_input_is_an_absence() {
        assert_eq!(max_value(&[]), None);
    }

    #[test]
    fn single_negative_element() {
        assert_eq!(max_value(&[-42]), Some(-42));
    }

    #[test]
    fn all_zeros() {
        assert_eq!(max_value(&[0, 0, 0]), Some(0));
    }

    #[test]
    fn result_is_an_element_and_an_upper_bound() {
        let inputs: [&[i64]; 4] = [
            &[3, 7, 2, 9, 1],
            &[-5, -2, -8, -1, -10],
            &[-42],
            &[0, 0, 0],
        ];

        for numbers in inputs {
            let max = max_value(numbers).unwrap();
            assert!(numbers.contains(&max));
            assert!(numbers.iter().all(|&n| max >= n));
        }
    }

    #[test]
    fn iter_variant_agrees_everywhere() {
        let inputs: [&[i64]; 5] = [
            &[3, 7, 2, 9, 1],
            &[-5, -2, -8, -1, -10],
            &[],
            &[-42],
            &[0, 0, 0],
        ];

        for numbers in inputs {
            assert_eq!(max_value(numbers), max_value_iter(numbers));
        }
    }

    #[test]
    fn buggy_variant_fails_silently_on_all_negative_input() {
        // Returns the seed, which is not an element of the input.
        assert_eq!(max_value_buggy(&[-5, -2, -8, -1, -10]), Some(0));

        // Masked cases: positive, mixed, all-zero, and empty inputs.
        assert_eq!(max_value_buggy(&[3, 7, 2, 9, 1]), Some(9));
        assert_eq!(max_value_buggy(&[-5, 3, -2, 7, -1]), Some(7));
        assert_eq!(max_value_buggy(&[0, 0, 0]), Some(0));
        assert_eq!(max_value_buggy(&[]), None);
    }
}
