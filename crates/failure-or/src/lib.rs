//! `failure-or`: a typed success-or-failures container.
//!
//! This crate contains **pure value types** (no infrastructure concerns):
//! a [`Failure`] descriptor, the [`FailureOr`] discriminated union, and the
//! [`ok`]/[`fail`] construction entry points. Composition happens through
//! consuming combinators (`and_then`, `or_else`, the `switch`/`match_with`
//! families) so fallible call chains short-circuit without exceptions.

pub mod error;
pub mod factory;
pub mod failure;
pub mod failure_or;
pub mod markers;

pub use error::ContractViolation;
pub use factory::{fail, ok};
pub use failure::{CustomKind, Failure, FailureKind};
pub use failure_or::{FailureOr, Failures, NO_FAILURES, NO_FIRST_FAILURE};
pub use markers::{Created, Deleted, Success, Updated};
