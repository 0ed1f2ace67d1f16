//! Construction entry points.
//!
//! [`ok`] and [`fail`] are the two ways a `FailureOr` enters the world;
//! everything else on the type is observation or composition.

use crate::failure_or::{FailureOr, Failures};

/// Wraps `value` as a success. Never fails, performs no validation.
///
/// `ok(())` or a marker from [`crate::markers`] covers operations with no
/// meaningful payload.
pub fn ok<T>(value: T) -> FailureOr<T> {
    FailureOr::Success(value)
}

/// Wraps one or more failures as a failed result.
///
/// Accepts a single [`Failure`](crate::Failure), a `Vec`, an array, or a
/// ready-made [`Failures`] list, with order preserved.
///
/// # Panics
///
/// Aborts with [`ContractViolation::EmptyFailures`](crate::ContractViolation)
/// when given an empty sequence; the failure variant never holds an empty
/// list.
pub fn fail<T>(failures: impl Into<Failures>) -> FailureOr<T> {
    FailureOr::Failure(failures.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::Failure;
    use crate::markers::Success;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Person {
        name: String,
        surname: String,
    }

    #[test]
    fn ok_wraps_a_value() {
        let person = Person {
            name: "John".to_string(),
            surname: "Doe".to_string(),
        };

        let result = ok(person.clone());

        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.value(), &person);
    }

    #[test]
    fn ok_wraps_a_void_value() {
        let result = ok(());

        assert!(result.is_success());
        assert_eq!(result.value(), &());
    }

    #[test]
    fn ok_wraps_an_outcome_marker() {
        let result = ok(Success);

        assert!(result.is_success());
        assert_eq!(result.value(), &Success);
    }

    #[test]
    fn fail_wraps_a_single_failure() {
        let failure = Failure::new();

        let result = fail::<Person>(failure.clone());

        assert!(result.is_failure());
        assert!(!result.is_success());
        assert_eq!(result.failures_or_empty(), &[failure]);
    }

    #[test]
    fn fail_wraps_a_list_of_failures() {
        let failures = vec![Failure::unexpected(), Failure::not_found()];

        let result = fail::<Person>(failures.clone());

        assert!(result.is_failure());
        assert_eq!(result.failures_or_empty(), failures.as_slice());
        assert_eq!(result.first_failure(), Some(&failures[0]));
    }

    #[test]
    fn fail_wraps_an_array_of_failures() {
        let result = fail::<Person>([Failure::validation(), Failure::conflict()]);

        assert_eq!(result.failures_or_empty().len(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one failure")]
    fn fail_aborts_on_an_empty_list() {
        let _ = fail::<Person>(Vec::new());
    }

    #[test]
    fn named_constructor_codes_survive_the_trip() {
        let result = fail::<Person>(Failure::not_found());

        assert_eq!(
            result.first_failure().map(Failure::code),
            Some("General.NotFound")
        );
    }
}
