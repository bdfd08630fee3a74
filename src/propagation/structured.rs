/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use super::Propagation;
use crate::errors::{Error, Result};
use log::{debug, error};

/// Exit status of a process ended by an unhandled failure
pub const UNHANDLED_EXIT_CODE: i32 = 1;

/// Failures are returned as values and handled by matching scopes
#[derive(Debug, Clone, Copy, Default)]
pub struct Structured;

impl Propagation for Structured {
    const ENABLED: bool = true;
    const NAME: &'static str = "structured";

    #[inline]
    fn raise<T, F: Into<Error>>(failure: F) -> Result<T> {
        let failure = failure.into();
        debug!("raising {} ({}): {}", failure.kind(), failure.root(), failure);
        Err(failure)
    }

    #[inline]
    fn raise_with<T, B>(build: B) -> Result<T>
    where
        B: FnOnce() -> Error,
    {
        Self::raise(build())
    }

    fn unhandled(failure: Error) -> ! {
        error!("unhandled {}: {}", failure.kind(), failure);
        eprintln!("{}", failure);
        std::process::exit(UNHANDLED_EXIT_CODE)
    }
}
