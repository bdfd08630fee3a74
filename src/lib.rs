/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # libmesh-errors
//!
//! Failure reporting for a finite element simulation library.
//!
//! The library signals a closed set of failure kinds ([`Error`]) through
//! one vocabulary ([`raise`], [`attempt`], [`Scope::catch`], [`conclude`]).
//! Whether a raised failure travels to a handler or aborts the process is
//! decided when the crate is built, by the `exceptions` Cargo feature.
//!
//! ```
//! use libmesh_errors::{attempt, raise, AnyRuntime, ConvergenceFailure, Result};
//!
//! fn newton_step(residual: f64) -> Result<f64> {
//!     if residual > 1.0 {
//!         return raise(ConvergenceFailure);
//!     }
//!     Ok(residual / 2.0)
//! }
//!
//! let halved = attempt(|| newton_step(0.5))
//!     .catch(|_: AnyRuntime| Ok(0.0))
//!     .finish()
//!     .unwrap();
//! assert_eq!(halved, 0.25);
//! ```

#[macro_use]
mod macros;

pub mod cli;
pub mod errors;
pub mod propagation;
pub mod utils;

pub use errors::{
    ConvergenceFailure, DynamicCastFailure, Error, Failure, FileError, FloatingPointException,
    Kind, LogicCondition, LogicError, NotImplemented, Result, Root, RuntimeCondition,
    SolverException, DEFAULT_LOGIC_MESSAGE,
};
pub use propagation::{
    attempt, conclude, mode_name, raise, raise_with, unhandled, AnyLogic, AnyRuntime, Catchable,
    Propagation, Scope, EXCEPTIONS_ENABLED,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
