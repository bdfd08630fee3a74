/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Propagation mode selection
//!
//! Call sites use one vocabulary in every build: [`raise`] to signal a
//! failure, [`attempt`] to open a try region, [`Scope::catch`] to handle a
//! kind or a capability root, and [`conclude`] at the top of a program.
//! The Cargo feature `exceptions` picks which [`Propagation`] strategy
//! backs that vocabulary:
//!
//! - with it ([`Structured`]), failures travel as `Err` values up to the
//!   nearest matching handler, dropping every frame they leave;
//! - without it ([`Terminate`]), every raise aborts the process and
//!   handlers are dead code that still has to type-check.
//!
//! The choice is a type alias resolved at compile time. No call site
//! branches on it at runtime.

mod scope;
mod structured;
mod terminate;

pub use scope::{attempt, AnyLogic, AnyRuntime, Catchable, Scope};
pub use structured::{Structured, UNHANDLED_EXIT_CODE};
pub use terminate::Terminate;

use crate::errors::{Error, Result};

/// Strategy deciding what raising a failure does
pub trait Propagation {
    /// Whether raised failures can reach a handler
    const ENABLED: bool;

    /// Short name of the mode, for diagnostics
    const NAME: &'static str;

    /// Signal `failure`
    fn raise<T, F: Into<Error>>(failure: F) -> Result<T>;

    /// Signal the failure produced by `build`
    ///
    /// `build` only runs when the failure can actually be delivered.
    fn raise_with<T, B>(build: B) -> Result<T>
    where
        B: FnOnce() -> Error;

    /// Backstop for a failure that left every scope unhandled
    fn unhandled(error: Error) -> !;
}

/// Strategy compiled into this build
#[cfg(feature = "exceptions")]
pub type Active = Structured;

/// Strategy compiled into this build
#[cfg(not(feature = "exceptions"))]
pub type Active = Terminate;

/// True when this build propagates failures as values
pub const EXCEPTIONS_ENABLED: bool = <Active as Propagation>::ENABLED;

/// Name of the active propagation mode
pub const fn mode_name() -> &'static str {
    <Active as Propagation>::NAME
}

/// Signal a failure through the active propagation mode
///
/// ```
/// use libmesh_errors::{raise, Result, SolverException};
///
/// fn solve(status: i32) -> Result<f64> {
///     if status != 0 {
///         return raise(SolverException::new(status));
///     }
///     Ok(1.0)
/// }
///
/// assert_eq!(solve(0).unwrap(), 1.0);
/// ```
///
/// `failure` is evaluated by the caller before the mode is consulted. Use
/// [`raise_with`] (or the crate macros, which go through it) when building
/// the failure formats or allocates.
#[inline]
pub fn raise<T, F: Into<Error>>(failure: F) -> Result<T> {
    Active::raise(failure)
}

/// Signal a failure built on demand
///
/// With exceptions disabled the process aborts without calling `build`,
/// so no description is formatted and nothing is allocated.
#[inline]
pub fn raise_with<T, B>(build: B) -> Result<T>
where
    B: FnOnce() -> Error,
{
    Active::raise_with(build)
}

/// Terminate the process for a failure nobody handled
pub fn unhandled(error: Error) -> ! {
    Active::unhandled(error)
}

/// Unwrap the outcome of a top-level operation
///
/// A failure that got this far has exhausted every scope, so the process
/// ends with a non-zero status.
pub fn conclude<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => unhandled(error),
    }
}
