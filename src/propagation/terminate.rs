/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use super::Propagation;
use crate::errors::{Error, Result};

/// Every raise ends the process on the spot
///
/// The failure value is never converted or reported. The diagnostic is
/// whatever the platform prints for an aborted process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminate;

impl Propagation for Terminate {
    const ENABLED: bool = false;
    const NAME: &'static str = "terminate";

    #[inline]
    fn raise<T, F: Into<Error>>(_failure: F) -> Result<T> {
        std::process::abort()
    }

    #[inline]
    fn raise_with<T, B>(_build: B) -> Result<T>
    where
        B: FnOnce() -> Error,
    {
        std::process::abort()
    }

    fn unhandled(_failure: Error) -> ! {
        std::process::abort()
    }
}
