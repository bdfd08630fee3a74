/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Shorthand for raising from inside a function returning [`crate::Result`]
//!
//! Each macro returns from the enclosing function through
//! [`crate::raise_with`]. The failure expression, including any message
//! formatting, is only evaluated when exceptions are enabled.

/// Raise `failure` and return from the enclosing function
#[macro_export]
macro_rules! raise {
    ($failure:expr) => {
        return $crate::raise_with(|| ::std::convert::Into::<$crate::Error>::into($failure))
    };
}

/// Raise a [`LogicError`](crate::LogicError), with the default or a formatted description
#[macro_export]
macro_rules! logic_error {
    () => {
        return $crate::raise_with(|| $crate::Error::from($crate::LogicError::new()))
    };
    ($($arg:tt)+) => {
        return $crate::raise_with(|| {
            $crate::Error::from($crate::LogicError::with_message(::std::format!($($arg)+)))
        })
    };
}

/// Raise [`NotImplemented`](crate::NotImplemented)
#[macro_export]
macro_rules! not_implemented {
    () => {
        return $crate::raise_with(|| $crate::Error::from($crate::NotImplemented))
    };
}

/// Raise a [`FileError`](crate::FileError) for `filename`
#[macro_export]
macro_rules! file_error {
    ($filename:expr) => {
        return $crate::raise_with(|| $crate::Error::from($crate::FileError::new($filename)))
    };
}

/// Raise [`ConvergenceFailure`](crate::ConvergenceFailure)
#[macro_export]
macro_rules! convergence_failure {
    () => {
        return $crate::raise_with(|| $crate::Error::from($crate::ConvergenceFailure))
    };
}

/// Raise a [`LogicError`](crate::LogicError) unless `cond` holds
#[macro_export]
macro_rules! logic_assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            return $crate::raise_with(|| {
                $crate::Error::from($crate::LogicError::with_message(::std::concat!(
                    "Assertion `",
                    ::std::stringify!($cond),
                    "' failed."
                )))
            });
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return $crate::raise_with(|| {
                $crate::Error::from($crate::LogicError::with_message(::std::format!(
                    "Assertion `{}' failed. {}",
                    ::std::stringify!($cond),
                    ::std::format_args!($($arg)+)
                )))
            });
        }
    };
}
