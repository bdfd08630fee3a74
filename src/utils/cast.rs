/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Checked narrowing of type-erased values

use crate::errors::{DynamicCastFailure, Result};
use crate::propagation::raise;
use std::any::{type_name, Any};

/// Narrow `value` to `&T`, raising [`DynamicCastFailure`] on a mismatch
pub fn cast_ref<T: Any>(value: &dyn Any) -> Result<&T> {
    match value.downcast_ref::<T>() {
        Some(narrowed) => Ok(narrowed),
        None => {
            log::debug!("cast to {} failed", type_name::<T>());
            raise(DynamicCastFailure)
        }
    }
}

/// Narrow `value` to `&mut T`, raising [`DynamicCastFailure`] on a mismatch
pub fn cast_mut<T: Any>(value: &mut dyn Any) -> Result<&mut T> {
    match value.downcast_mut::<T>() {
        Some(narrowed) => Ok(narrowed),
        None => {
            log::debug!("mutable cast to {} failed", type_name::<T>());
            raise(DynamicCastFailure)
        }
    }
}

/// Narrow an owned value, raising [`DynamicCastFailure`] on a mismatch
pub fn cast_box<T: Any>(value: Box<dyn Any>) -> Result<Box<T>> {
    value.downcast::<T>().or_else(|_| {
        log::debug!("owned cast to {} failed", type_name::<T>());
        raise(DynamicCastFailure)
    })
}
