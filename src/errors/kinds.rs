/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Failure kinds and the two capability roots they fall under

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse grouping shared by several failure kinds
///
/// `Logic` covers broken internal invariants and unreachable code paths.
/// `Runtime` covers conditions that arise while the library is operating
/// normally: missing files, solves that stall, arithmetic faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Root {
    /// Logic-condition failures
    Logic,
    /// Runtime-condition failures
    Runtime,
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Logic => write!(f, "logic"),
            Root::Runtime => write!(f, "runtime"),
        }
    }
}

/// Discriminant of every failure the library can signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    LogicError,
    NotImplemented,
    FileError,
    ConvergenceFailure,
    DynamicCastFailure,
    FloatingPointException,
    SolverException,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 7] = [
        Kind::LogicError,
        Kind::NotImplemented,
        Kind::FileError,
        Kind::ConvergenceFailure,
        Kind::DynamicCastFailure,
        Kind::FloatingPointException,
        Kind::SolverException,
    ];

    /// The capability root this kind belongs to
    pub const fn root(self) -> Root {
        match self {
            Kind::LogicError | Kind::NotImplemented => Root::Logic,
            Kind::FileError
            | Kind::ConvergenceFailure
            | Kind::DynamicCastFailure
            | Kind::FloatingPointException
            | Kind::SolverException => Root::Runtime,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::LogicError => "LogicError",
            Kind::NotImplemented => "NotImplemented",
            Kind::FileError => "FileError",
            Kind::ConvergenceFailure => "ConvergenceFailure",
            Kind::DynamicCastFailure => "DynamicCastFailure",
            Kind::FloatingPointException => "FloatingPointException",
            Kind::SolverException => "SolverException",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
