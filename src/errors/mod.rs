/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error taxonomy
//!
//! The library signals exactly seven kinds of failure. Each has its own
//! type (see [`failures`]) and all of them are carried together by the
//! closed [`Error`] enum. Adding a kind means changing this enum, and with
//! it every exhaustive match downstream.

pub mod failures;
pub mod kinds;

pub use failures::{
    ConvergenceFailure, DynamicCastFailure, Failure, FileError, FloatingPointException,
    LogicCondition, LogicError, NotImplemented, RuntimeCondition, SolverException,
    DEFAULT_LOGIC_MESSAGE,
};
pub use kinds::{Kind, Root};

use thiserror::Error;

/// Any failure the library can signal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Logic(#[from] LogicError),

    #[error(transparent)]
    NotImplemented(#[from] NotImplemented),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceFailure),

    #[error(transparent)]
    DynamicCast(#[from] DynamicCastFailure),

    #[error(transparent)]
    FloatingPoint(#[from] FloatingPointException),

    #[error(transparent)]
    Solver(#[from] SolverException),
}

impl Error {
    pub fn kind(&self) -> Kind {
        match self {
            Error::Logic(_) => Kind::LogicError,
            Error::NotImplemented(_) => Kind::NotImplemented,
            Error::File(_) => Kind::FileError,
            Error::Convergence(_) => Kind::ConvergenceFailure,
            Error::DynamicCast(_) => Kind::DynamicCastFailure,
            Error::FloatingPoint(_) => Kind::FloatingPointException,
            Error::Solver(_) => Kind::SolverException,
        }
    }

    pub fn root(&self) -> Root {
        self.kind().root()
    }

    pub fn is_logic(&self) -> bool {
        self.root() == Root::Logic
    }

    pub fn is_runtime(&self) -> bool {
        self.root() == Root::Runtime
    }

    /// Description of the wrapped failure, fixed when it was constructed
    pub fn description(&self) -> &str {
        match self {
            Error::Logic(e) => e.description(),
            Error::NotImplemented(e) => e.description(),
            Error::File(e) => e.description(),
            Error::Convergence(e) => e.description(),
            Error::DynamicCast(e) => e.description(),
            Error::FloatingPoint(e) => e.description(),
            Error::Solver(e) => e.description(),
        }
    }

    /// Solver status code, if this is a [`SolverException`]
    pub fn solver_code(&self) -> Option<i32> {
        match self {
            Error::Solver(e) => Some(e.code()),
            _ => None,
        }
    }
}

/// Result type used at every raise site
pub type Result<T> = std::result::Result<T, Error>;
