/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Floating-point and solver status checks

use crate::errors::{FloatingPointException, Result, SolverException};
use crate::propagation::raise;
use log::debug;

/// Pass `value` through, raising [`FloatingPointException`] on NaN or infinity
pub fn check_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("non-finite value {}", value);
        raise(FloatingPointException)
    }
}

/// Raise [`FloatingPointException`] if any entry of `values` is NaN or infinite
pub fn check_all_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(index) => {
            debug!("non-finite value {} at index {}", values[index], index);
            raise(FloatingPointException)
        }
    }
}

/// Raise [`SolverException`] carrying `status` unless it is zero
pub fn check_solver_status(status: i32) -> Result<()> {
    if status == 0 {
        Ok(())
    } else {
        raise(SolverException::new(status))
    }
}
