//! Failure descriptor and its classification model.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Caller-defined classification value for [`FailureKind::Custom`].
///
/// Domain taxonomies escaping the closed set pick either a symbolic name or a
/// numeric code. The two branches stay distinct under equality: a failure
/// classified `Name("42")` is not the same classification as `Code(42)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomKind {
    /// Symbolic classification, e.g. `"Payment.Declined"`.
    Name(String),
    /// Numeric classification, e.g. HTTP-ish status buckets.
    Code(i64),
}

impl From<&str> for CustomKind {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for CustomKind {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i64> for CustomKind {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

/// Classification of a [`Failure`].
///
/// The closed set covers common application failure categories;
/// [`FailureKind::Custom`] is the extension seam for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// A general failure with no more specific category.
    Default,
    /// Something outside the modeled failure paths happened.
    Unexpected,
    /// Input or state failed validation.
    Validation,
    /// The operation conflicts with current state.
    Conflict,
    /// A requested resource does not exist.
    NotFound,
    /// The caller is not allowed to perform the operation.
    Unauthorized,
    /// Caller-defined classification outside the closed set.
    Custom(CustomKind),
}

impl FailureKind {
    /// Stable numeric form of the classification.
    ///
    /// Standard kinds use fixed discriminants, `Custom(Code(n))` yields `n`,
    /// and named custom kinds have no numeric form.
    pub fn numeric_value(&self) -> Option<i64> {
        match self {
            FailureKind::Default => Some(0),
            FailureKind::Unexpected => Some(1),
            FailureKind::Validation => Some(2),
            FailureKind::Conflict => Some(3),
            FailureKind::NotFound => Some(4),
            FailureKind::Unauthorized => Some(5),
            FailureKind::Custom(CustomKind::Code(code)) => Some(*code),
            FailureKind::Custom(CustomKind::Name(_)) => None,
        }
    }
}

impl From<CustomKind> for FailureKind {
    fn from(kind: CustomKind) -> Self {
        Self::Custom(kind)
    }
}

impl From<&str> for FailureKind {
    fn from(name: &str) -> Self {
        Self::Custom(name.into())
    }
}

impl From<String> for FailureKind {
    fn from(name: String) -> Self {
        Self::Custom(name.into())
    }
}

impl From<i64> for FailureKind {
    fn from(code: i64) -> Self {
        Self::Custom(code.into())
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Default => f.write_str("Default"),
            FailureKind::Unexpected => f.write_str("Unexpected"),
            FailureKind::Validation => f.write_str("Validation"),
            FailureKind::Conflict => f.write_str("Conflict"),
            FailureKind::NotFound => f.write_str("NotFound"),
            FailureKind::Unauthorized => f.write_str("Unauthorized"),
            FailureKind::Custom(CustomKind::Name(name)) => f.write_str(name),
            FailureKind::Custom(CustomKind::Code(code)) => write!(f, "{code}"),
        }
    }
}

/// One classified failure reason.
///
/// Immutable after construction. Failures have no identity beyond their
/// fields: two instances with the same code, description, and kind are
/// interchangeable (structural equality).
///
/// Construction goes through the named constructors, which fill in the
/// stable default code/description for their category:
///
/// ```
/// use failure_or::{Failure, FailureKind};
///
/// let failure = Failure::not_found();
/// assert_eq!(failure.code(), "General.NotFound");
///
/// let failure = Failure::validation().with_code("User.InvalidEmail");
/// assert_eq!(failure.kind(), &FailureKind::Validation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Failure {
    code: String,
    description: String,
    kind: FailureKind,
}

impl Failure {
    fn from_parts(
        code: impl Into<String>,
        description: impl Into<String>,
        kind: FailureKind,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            kind,
        }
    }

    /// A general failure (`General.Failure`), kind [`FailureKind::Default`].
    pub fn new() -> Self {
        Self::from_parts(
            "General.Failure",
            "A failure has occurred.",
            FailureKind::Default,
        )
    }

    /// An unexpected failure (`General.Unexpected`).
    pub fn unexpected() -> Self {
        Self::from_parts(
            "General.Unexpected",
            "An unexpected failure has occurred.",
            FailureKind::Unexpected,
        )
    }

    /// A validation failure (`General.Validation`).
    pub fn validation() -> Self {
        Self::from_parts(
            "General.Validation",
            "A validation failure has occurred.",
            FailureKind::Validation,
        )
    }

    /// A conflict failure (`General.Conflict`).
    pub fn conflict() -> Self {
        Self::from_parts(
            "General.Conflict",
            "A conflict has occurred.",
            FailureKind::Conflict,
        )
    }

    /// A not-found failure (`General.NotFound`).
    pub fn not_found() -> Self {
        Self::from_parts(
            "General.NotFound",
            "A 'Not Found' failure has occurred.",
            FailureKind::NotFound,
        )
    }

    /// An unauthorized failure (`General.Unauthorized`).
    pub fn unauthorized() -> Self {
        Self::from_parts(
            "General.Unauthorized",
            "An 'Unauthorized' failure has occurred.",
            FailureKind::Unauthorized,
        )
    }

    /// A failure with a caller-supplied classification.
    ///
    /// The kind accepts anything convertible into [`FailureKind`]: a standard
    /// kind, a [`CustomKind`], a string, or a number.
    pub fn custom(
        code: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<FailureKind>,
    ) -> Self {
        Self::from_parts(code, description, kind.into())
    }

    /// Adapts an error into a failure, kind [`FailureKind::Unexpected`].
    ///
    /// The error's type name (final path segment) becomes the code and its
    /// `Display` output the description. This is the seam between
    /// exception-style error signaling and this value-based model.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let type_name = core::any::type_name::<E>();
        let code = type_name.rsplit("::").next().unwrap_or(type_name);
        tracing::debug!(%error, code, "adapting error into a failure");
        Self::from_parts(code, error.to_string(), FailureKind::Unexpected)
    }

    /// Stable machine-readable identifier, unique within its domain by
    /// convention.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable explanation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Classification of the failure.
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// Replaces the code, keeping description and kind.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Replaces the description, keeping code and kind.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl std::error::Error for Failure {}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        tracing::debug!(%error, "adapting anyhow error into a failure");
        // "{:#}" renders the whole context chain, not just the outermost message.
        Self::unexpected().with_description(format!("{error:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use thiserror::Error;

    #[test]
    fn new_uses_general_failure_defaults() {
        let failure = Failure::new();

        assert_eq!(failure.code(), "General.Failure");
        assert_eq!(failure.description(), "A failure has occurred.");
        assert_eq!(failure.kind(), &FailureKind::Default);
    }

    #[test]
    fn named_constructors_use_their_category_defaults() {
        let cases = [
            (
                Failure::unexpected(),
                "General.Unexpected",
                "An unexpected failure has occurred.",
                FailureKind::Unexpected,
            ),
            (
                Failure::validation(),
                "General.Validation",
                "A validation failure has occurred.",
                FailureKind::Validation,
            ),
            (
                Failure::conflict(),
                "General.Conflict",
                "A conflict has occurred.",
                FailureKind::Conflict,
            ),
            (
                Failure::not_found(),
                "General.NotFound",
                "A 'Not Found' failure has occurred.",
                FailureKind::NotFound,
            ),
            (
                Failure::unauthorized(),
                "General.Unauthorized",
                "An 'Unauthorized' failure has occurred.",
                FailureKind::Unauthorized,
            ),
        ];

        for (failure, code, description, kind) in cases {
            assert_eq!(failure.code(), code);
            assert_eq!(failure.description(), description);
            assert_eq!(failure.kind(), &kind);
        }
    }

    #[test]
    fn builder_methods_replace_code_and_description() {
        let failure = Failure::validation()
            .with_code("User.InvalidEmail")
            .with_description("The email address is malformed.");

        assert_eq!(failure.code(), "User.InvalidEmail");
        assert_eq!(failure.description(), "The email address is malformed.");
        assert_eq!(failure.kind(), &FailureKind::Validation);
    }

    #[test]
    fn custom_accepts_numeric_kind() {
        let failure = Failure::custom("Payment.Declined", "The card was declined.", 1234_i64);

        assert_eq!(failure.kind(), &FailureKind::Custom(CustomKind::Code(1234)));
        assert_eq!(failure.kind().numeric_value(), Some(1234));
    }

    #[test]
    fn custom_accepts_named_kind() {
        let failure = Failure::custom("Payment.Declined", "The card was declined.", "Payment");

        assert_eq!(
            failure.kind(),
            &FailureKind::Custom(CustomKind::Name("Payment".to_string()))
        );
        assert_eq!(failure.kind().numeric_value(), None);
    }

    #[test]
    fn custom_accepts_standard_kind() {
        let failure = Failure::custom("Order.Stale", "The order version is stale.", FailureKind::Conflict);

        assert_eq!(failure.kind(), &FailureKind::Conflict);
    }

    #[test]
    fn standard_kinds_have_stable_numeric_values() {
        assert_eq!(FailureKind::Default.numeric_value(), Some(0));
        assert_eq!(FailureKind::Unexpected.numeric_value(), Some(1));
        assert_eq!(FailureKind::Validation.numeric_value(), Some(2));
        assert_eq!(FailureKind::Conflict.numeric_value(), Some(3));
        assert_eq!(FailureKind::NotFound.numeric_value(), Some(4));
        assert_eq!(FailureKind::Unauthorized.numeric_value(), Some(5));
    }

    #[test]
    fn named_and_numeric_custom_kinds_are_distinct() {
        assert_ne!(FailureKind::from("42"), FailureKind::from(42_i64));
    }

    #[derive(Debug, Error)]
    #[error("the ledger is out of balance")]
    struct LedgerImbalance;

    #[test]
    fn from_error_maps_type_name_and_message() {
        let failure = Failure::from_error(&LedgerImbalance);

        assert_eq!(failure.code(), "LedgerImbalance");
        assert_eq!(failure.description(), "the ledger is out of balance");
        assert_eq!(failure.kind(), &FailureKind::Unexpected);
    }

    #[test]
    fn from_anyhow_keeps_the_context_chain() {
        let error = Result::<(), _>::Err(LedgerImbalance)
            .context("posting journal entry")
            .unwrap_err();

        let failure = Failure::from(error);

        assert_eq!(failure.code(), "General.Unexpected");
        assert_eq!(failure.kind(), &FailureKind::Unexpected);
        assert!(failure.description().contains("posting journal entry"));
        assert!(failure.description().contains("the ledger is out of balance"));
    }

    #[test]
    fn failures_with_identical_fields_are_equal() {
        let left = Failure::custom("Order.Missing", "No such order.", FailureKind::NotFound);
        let right = Failure::custom("Order.Missing", "No such order.", FailureKind::NotFound);

        assert_eq!(left, right);
    }

    #[test]
    fn display_joins_code_and_description() {
        let failure = Failure::not_found();

        assert_eq!(
            failure.to_string(),
            "General.NotFound: A 'Not Found' failure has occurred."
        );
    }
}
