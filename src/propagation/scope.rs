/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Try regions and catch clauses

use super::{Active, Propagation};
use crate::errors::{
    ConvergenceFailure, DynamicCastFailure, Error, FileError, FloatingPointException, LogicError,
    NotImplemented, Result, Root, SolverException,
};
use log::trace;
use std::any::type_name;
use std::ops::Deref;

/// Selector a catch clause matches failures against
pub trait Catchable: Sized {
    /// Take `error` if this selector matches it, otherwise hand it back
    fn intercept(error: Error) -> std::result::Result<Self, Error>;
}

macro_rules! catch_exact {
    ($($failure:ident => $variant:ident),* $(,)?) => {
        $(
            impl Catchable for $failure {
                fn intercept(error: Error) -> std::result::Result<Self, Error> {
                    match error {
                        Error::$variant(failure) => Ok(failure),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

catch_exact! {
    LogicError => Logic,
    NotImplemented => NotImplemented,
    FileError => File,
    ConvergenceFailure => Convergence,
    DynamicCastFailure => DynamicCast,
    FloatingPointException => FloatingPoint,
    SolverException => Solver,
}

/// Catch-all selector
impl Catchable for Error {
    fn intercept(error: Error) -> std::result::Result<Self, Error> {
        Ok(error)
    }
}

/// Selects any failure under the logic-condition root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyLogic(Error);

/// Selects any failure under the runtime-condition root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyRuntime(Error);

macro_rules! catch_root {
    ($($selector:ident => $root:ident),* $(,)?) => {
        $(
            impl $selector {
                pub fn into_inner(self) -> Error {
                    self.0
                }
            }

            impl Catchable for $selector {
                fn intercept(error: Error) -> std::result::Result<Self, Error> {
                    if error.root() == Root::$root {
                        Ok(Self(error))
                    } else {
                        Err(error)
                    }
                }
            }

            impl Deref for $selector {
                type Target = Error;

                fn deref(&self) -> &Error {
                    &self.0
                }
            }

            impl From<$selector> for Error {
                fn from(selector: $selector) -> Self {
                    selector.0
                }
            }
        )*
    };
}

catch_root! {
    AnyLogic => Logic,
    AnyRuntime => Runtime,
}

enum State<T> {
    /// Body finished, or raised and no clause has matched yet
    Open(Result<T>),
    /// A clause matched and its handler ran
    Handled(Result<T>),
}

/// Outcome of a try region, awaiting catch clauses
#[must_use = "call `finish` to propagate failures no clause handled"]
pub struct Scope<T> {
    state: State<T>,
}

/// Run `body` as a try region
///
/// Failures raised inside `body` and returned with `?` drop every frame in
/// between on their way here. Chain [`Scope::catch`] clauses and close the
/// region with [`Scope::finish`].
pub fn attempt<T, B>(body: B) -> Scope<T>
where
    B: FnOnce() -> Result<T>,
{
    Scope {
        state: State::Open(body()),
    }
}

impl<T> Scope<T> {
    /// Handle failures matched by selector `C`
    ///
    /// Clauses are tried in order and at most one handler runs per scope.
    /// A failure returned by the handler is rethrown to the enclosing scope
    /// and is not offered to later clauses. When exceptions are disabled
    /// the handler is never entered.
    pub fn catch<C, H>(self, handler: H) -> Self
    where
        C: Catchable,
        H: FnOnce(C) -> Result<T>,
    {
        let state = match self.state {
            State::Open(Err(error)) if <Active as Propagation>::ENABLED => {
                let kind = error.kind();
                match C::intercept(error) {
                    Ok(caught) => {
                        trace!("{} handled by {}", kind, type_name::<C>());
                        State::Handled(handler(caught))
                    }
                    Err(error) => State::Open(Err(error)),
                }
            }
            state => state,
        };
        Scope { state }
    }

    /// Whether a catch clause has run
    pub fn is_handled(&self) -> bool {
        matches!(self.state, State::Handled(_))
    }

    /// Close the region, propagating anything left unhandled
    pub fn finish(self) -> Result<T> {
        match self.state {
            State::Open(result) | State::Handled(result) => result,
        }
    }
}
