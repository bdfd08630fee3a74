/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! One type per failure kind
//!
//! Every type renders its description when it is constructed. The
//! description is stored (or is a constant) and is never rebuilt, so two
//! values built from the same payload always describe themselves the same
//! way.

use super::kinds::Kind;
use thiserror::Error;

/// Description used by [`LogicError::new`]
pub const DEFAULT_LOGIC_MESSAGE: &str = "Error in libMesh internal logic";
const NOT_IMPLEMENTED_MESSAGE: &str = "Error: not implemented!";
const CONVERGENCE_FAILURE_MESSAGE: &str = "Unrecoverable failure to converge";
const DYNAMIC_CAST_FAILURE_MESSAGE: &str = "Failed dynamic cast!";
const FLOATING_POINT_MESSAGE: &str = "libmesh FPE!";

/// Behavior shared by every failure type
pub trait Failure: std::error::Error + Into<super::Error> + Send + Sync + 'static {
    /// Kind tag of this failure type
    const KIND: Kind;

    /// Human-readable description fixed at construction
    fn description(&self) -> &str;
}

/// Capability root for failures caused by a broken internal invariant
pub trait LogicCondition: Failure {}

/// Capability root for failures arising during normal operation
pub trait RuntimeCondition: Failure {}

/// An internal "this should never happen" condition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LogicError {
    message: String,
}

impl LogicError {
    /// Logic error carrying the default description
    pub fn new() -> Self {
        Self {
            message: DEFAULT_LOGIC_MESSAGE.to_string(),
        }
    }

    /// Logic error with a caller supplied description
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for LogicError {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Option<String>> for LogicError {
    fn from(message: Option<String>) -> Self {
        message.map_or_else(Self::new, Self::with_message)
    }
}

impl Failure for LogicError {
    const KIND: Kind = Kind::LogicError;

    fn description(&self) -> &str {
        &self.message
    }
}

impl LogicCondition for LogicError {}

/// A feature stub was reached
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("{}", NOT_IMPLEMENTED_MESSAGE)]
pub struct NotImplemented;

impl Failure for NotImplemented {
    const KIND: Kind = Kind::NotImplemented;

    fn description(&self) -> &str {
        NOT_IMPLEMENTED_MESSAGE
    }
}

impl LogicCondition for NotImplemented {}

/// Opening or accessing a file failed
///
/// The filename should include whatever path (absolute, relative or
/// implicit) was part of the failed open.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FileError {
    filename: String,
    message: String,
}

impl FileError {
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let message = format!("Error accessing file: {}", filename);
        Self { filename, message }
    }

    /// The filename exactly as given at construction
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Failure for FileError {
    const KIND: Kind = Kind::FileError;

    fn description(&self) -> &str {
        &self.message
    }
}

impl RuntimeCondition for FileError {}

/// An iterative solve failed to converge
///
/// This is a last resort. A solve that fails should normally be retried
/// with a smaller timestep, underrelaxation or a shorter continuation step
/// before this is raised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("{}", CONVERGENCE_FAILURE_MESSAGE)]
pub struct ConvergenceFailure;

impl Failure for ConvergenceFailure {
    const KIND: Kind = Kind::ConvergenceFailure;

    fn description(&self) -> &str {
        CONVERGENCE_FAILURE_MESSAGE
    }
}

impl RuntimeCondition for ConvergenceFailure {}

/// A downcast did not produce the expected type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("{}", DYNAMIC_CAST_FAILURE_MESSAGE)]
pub struct DynamicCastFailure;

impl Failure for DynamicCastFailure {
    const KIND: Kind = Kind::DynamicCastFailure;

    fn description(&self) -> &str {
        DYNAMIC_CAST_FAILURE_MESSAGE
    }
}

impl RuntimeCondition for DynamicCastFailure {}

/// An arithmetic fault (NaN, infinity, overflow trap)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("{}", FLOATING_POINT_MESSAGE)]
pub struct FloatingPointException;

impl Failure for FloatingPointException {
    const KIND: Kind = Kind::FloatingPointException;

    fn description(&self) -> &str {
        FLOATING_POINT_MESSAGE
    }
}

impl RuntimeCondition for FloatingPointException {}

/// An external solver engine returned a non-zero status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SolverException {
    code: i32,
    message: String,
}

impl SolverException {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            message: format!("Error code {} during solve.", code),
        }
    }

    /// Raw status reported by the solver engine
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl Failure for SolverException {
    const KIND: Kind = Kind::SolverException;

    fn description(&self) -> &str {
        &self.message
    }
}

impl RuntimeCondition for SolverException {}
