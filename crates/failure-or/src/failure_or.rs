//! Success-or-failures container and its combinators.

use std::borrow::Cow;
use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ContractViolation;
use crate::failure::Failure;

/// Code of the sentinel failure reported when the failure list is read off a
/// successful result.
pub const NO_FAILURES: &str = "FailureOr.NoFailures";

/// Code of the sentinel failure reported when the first failure is read off a
/// successful result.
pub const NO_FIRST_FAILURE: &str = "FailureOr.NoFirstFailure";

/// Non-empty ordered list of failures.
///
/// Element 0 is the primary failure. Emptiness is rejected at every
/// construction seam, so holders can rely on a first element existing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failures(Vec<Failure>);

impl Failures {
    /// Validating constructor.
    ///
    /// Returns [`ContractViolation::EmptyFailures`] for an empty vector
    /// instead of aborting; the `From` conversions below are the aborting
    /// counterparts.
    pub fn new(failures: Vec<Failure>) -> Result<Self, ContractViolation> {
        if failures.is_empty() {
            return Err(ContractViolation::EmptyFailures);
        }
        Ok(Self(failures))
    }

    /// A single-element list.
    pub fn one(failure: Failure) -> Self {
        Self(vec![failure])
    }

    /// The primary failure.
    pub fn first(&self) -> &Failure {
        &self.0[0]
    }

    /// Consumes the list, returning the primary failure.
    pub fn into_first(mut self) -> Failure {
        self.0.swap_remove(0)
    }

    pub fn as_slice(&self) -> &[Failure] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Failure> {
        self.0
    }
}

impl std::ops::Deref for Failures {
    type Target = [Failure];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Failure> for Failures {
    fn from(failure: Failure) -> Self {
        Self::one(failure)
    }
}

/// Aborts on an empty vector; use [`Failures::new`] to handle that case as a
/// value instead.
impl From<Vec<Failure>> for Failures {
    fn from(failures: Vec<Failure>) -> Self {
        match Self::new(failures) {
            Ok(list) => list,
            Err(violation) => {
                tracing::error!("failure list constructed from an empty sequence");
                panic!("{violation}")
            }
        }
    }
}

/// Aborts for `N == 0`, like the `Vec` conversion.
impl<const N: usize> From<[Failure; N]> for Failures {
    fn from(failures: [Failure; N]) -> Self {
        Vec::from(failures).into()
    }
}

impl IntoIterator for Failures {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Failures {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let failures = Vec::<Failure>::deserialize(deserializer)?;
        Self::new(failures).map_err(serde::de::Error::custom)
    }
}

/// A discriminated union of either a value or a non-empty list of failures.
///
/// The two variants are public so consumers can match exhaustively; the
/// [`Failures`] payload keeps the "at least one failure" invariant even for
/// directly constructed values. Instances are immutable: combinators consume
/// the receiver and produce a new instance, they never mutate in place.
///
/// ```
/// use failure_or::{fail, ok, Failure, FailureOr};
///
/// fn parse(input: &str) -> FailureOr<i64> {
///     match input.parse() {
///         Ok(number) => ok(number),
///         Err(_) => fail(Failure::validation().with_code("Quantity.NotANumber")),
///     }
/// }
///
/// let doubled = parse("21").and_then(|n| ok(n * 2));
/// assert_eq!(doubled.value(), &42);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureOr<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation produced at least one failure.
    Failure(Failures),
}

impl<T> FailureOr<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the contained value.
    ///
    /// # Panics
    ///
    /// Aborts with [`ContractViolation::InvalidStateAccess`] on the failure
    /// variant; never returns a sentinel. Use [`FailureOr::try_value`] when
    /// the state is not known.
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failures) => invalid_state_access(failures),
        }
    }

    /// Consumes the result, returning the contained value.
    ///
    /// # Panics
    ///
    /// Aborts with [`ContractViolation::InvalidStateAccess`] on the failure
    /// variant, like [`FailureOr::value`].
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failures) => invalid_state_access(&failures),
        }
    }

    /// The contained value, or `None` on the failure variant.
    pub fn try_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure list, present only on the failure variant.
    pub fn failures(&self) -> Option<&Failures> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failures) => Some(failures),
        }
    }

    /// The primary failure, present only on the failure variant.
    pub fn first_failure(&self) -> Option<&Failure> {
        self.failures().map(Failures::first)
    }

    /// The failure list, or an empty slice on the success variant.
    pub fn failures_or_empty(&self) -> &[Failure] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(failures) => failures,
        }
    }

    /// The failure list, or a synthetic single-element list on success.
    ///
    /// The sentinel carries code [`NO_FAILURES`]. Kept for compatibility with
    /// callers that inspect failures without branching; new code should
    /// prefer [`FailureOr::failures`] or [`FailureOr::failures_or_empty`].
    pub fn failures_or_sentinel(&self) -> Cow<'_, [Failure]> {
        match self {
            Self::Success(_) => Cow::Owned(vec![
                Failure::unexpected()
                    .with_code(NO_FAILURES)
                    .with_description("Failures cannot be retrieved from a successful FailureOr"),
            ]),
            Self::Failure(failures) => Cow::Borrowed(failures.as_slice()),
        }
    }

    /// The primary failure, or a synthetic one on success.
    ///
    /// The sentinel carries code [`NO_FIRST_FAILURE`]. New code should prefer
    /// [`FailureOr::first_failure`].
    pub fn first_failure_or_sentinel(&self) -> Cow<'_, Failure> {
        match self {
            Self::Success(_) => Cow::Owned(
                Failure::unexpected()
                    .with_code(NO_FIRST_FAILURE)
                    .with_description(
                        "First failure cannot be retrieved from a successful FailureOr",
                    ),
            ),
            Self::Failure(failures) => Cow::Borrowed(failures.first()),
        }
    }

    /// Invokes exactly one of the two callbacks with the owned payload.
    pub fn switch(self, on_value: impl FnOnce(T), on_failure: impl FnOnce(Failures)) {
        match self {
            Self::Success(value) => on_value(value),
            Self::Failure(failures) => on_failure(failures),
        }
    }

    /// Like [`FailureOr::switch`], but the failure callback receives only the
    /// primary failure.
    pub fn switch_first(self, on_value: impl FnOnce(T), on_failure: impl FnOnce(Failure)) {
        match self {
            Self::Success(value) => on_value(value),
            Self::Failure(failures) => on_failure(failures.into_first()),
        }
    }

    /// Async [`FailureOr::switch`]: awaits the selected callback's future
    /// before returning control.
    pub async fn switch_async<FutV, FutF>(
        self,
        on_value: impl FnOnce(T) -> FutV,
        on_failure: impl FnOnce(Failures) -> FutF,
    ) where
        FutV: Future<Output = ()>,
        FutF: Future<Output = ()>,
    {
        match self {
            Self::Success(value) => on_value(value).await,
            Self::Failure(failures) => on_failure(failures).await,
        }
    }

    /// Async [`FailureOr::switch_first`].
    pub async fn switch_first_async<FutV, FutF>(
        self,
        on_value: impl FnOnce(T) -> FutV,
        on_failure: impl FnOnce(Failure) -> FutF,
    ) where
        FutV: Future<Output = ()>,
        FutF: Future<Output = ()>,
    {
        match self {
            Self::Success(value) => on_value(value).await,
            Self::Failure(failures) => on_failure(failures.into_first()).await,
        }
    }

    /// Folds both variants into one result value; exactly one callback runs
    /// and its return value is returned. (`match` is a keyword, hence the
    /// name.)
    pub fn match_with<R>(
        self,
        on_value: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Failures) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_value(value),
            Self::Failure(failures) => on_failure(failures),
        }
    }

    /// Like [`FailureOr::match_with`], but the failure callback receives only
    /// the primary failure.
    pub fn match_first<R>(
        self,
        on_value: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Failure) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_value(value),
            Self::Failure(failures) => on_failure(failures.into_first()),
        }
    }

    /// Async [`FailureOr::match_with`]: awaits the selected callback and
    /// returns its output.
    pub async fn match_with_async<R, FutV, FutF>(
        self,
        on_value: impl FnOnce(T) -> FutV,
        on_failure: impl FnOnce(Failures) -> FutF,
    ) -> R
    where
        FutV: Future<Output = R>,
        FutF: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_value(value).await,
            Self::Failure(failures) => on_failure(failures).await,
        }
    }

    /// Async [`FailureOr::match_first`].
    pub async fn match_first_async<R, FutV, FutF>(
        self,
        on_value: impl FnOnce(T) -> FutV,
        on_failure: impl FnOnce(Failure) -> FutF,
    ) -> R
    where
        FutV: Future<Output = R>,
        FutF: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_value(value).await,
            Self::Failure(failures) => on_failure(failures.into_first()).await,
        }
    }

    /// Short-circuiting left-to-right composition.
    ///
    /// On success the step runs and its result (success or failure) becomes
    /// the chain's new state. On failure the step is not invoked and the
    /// failure list is forwarded unchanged, retagged to `U`: once a chain
    /// fails, every later step is skipped and the first failure set produced
    /// anywhere propagates to the end. Evaluation is strictly sequential.
    pub fn and_then<U>(self, then: impl FnOnce(T) -> FailureOr<U>) -> FailureOr<U> {
        match self {
            Self::Success(value) => then(value),
            Self::Failure(failures) => FailureOr::Failure(failures),
        }
    }

    /// Recovery combinator, the failure-path dual of [`FailureOr::and_then`].
    ///
    /// On success the callback is not invoked and the receiver is returned
    /// unchanged. On failure the callback receives the full failure list and
    /// its result, success or a different failure set, becomes the new state.
    pub fn or_else(self, recover: impl FnOnce(Failures) -> FailureOr<T>) -> FailureOr<T> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(failures) => recover(failures),
        }
    }

    /// Bridges into `std::result` for `?`-style consumers.
    pub fn into_result(self) -> Result<T, Failures> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failures) => Err(failures),
        }
    }
}

impl<T> From<Failure> for FailureOr<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(Failures::one(failure))
    }
}

impl<T> From<Failures> for FailureOr<T> {
    fn from(failures: Failures) -> Self {
        Self::Failure(failures)
    }
}

fn invalid_state_access(failures: &Failures) -> ! {
    tracing::error!(
        failure_count = failures.len(),
        first_code = failures.first().code(),
        "value accessed on a failed FailureOr"
    );
    panic!("{}", ContractViolation::InvalidStateAccess)
}
