/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Tests for structured failure propagation

#![cfg(feature = "exceptions")]

use libmesh_errors::{
    attempt, raise, AnyLogic, AnyRuntime, Catchable, ConvergenceFailure, DynamicCastFailure, Error,
    FileError, FloatingPointException, Kind, LogicError, NotImplemented, Result, SolverException,
    EXCEPTIONS_ENABLED,
};
use rayon::prelude::*;
use rstest::rstest;
use std::cell::Cell;

/// Counts drops so tests can see cleanup run on every exit path
struct Cleanup<'a>(&'a Cell<usize>);

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn inner_solve(cleanups: &Cell<usize>, fail: bool) -> Result<f64> {
    let _guard = Cleanup(cleanups);
    if fail {
        return raise(ConvergenceFailure);
    }
    Ok(1.0)
}

fn outer_solve(cleanups: &Cell<usize>, fail: bool) -> Result<f64> {
    let _guard = Cleanup(cleanups);
    let value = inner_solve(cleanups, fail)?;
    Ok(value * 2.0)
}

#[test]
fn test_structured_mode_is_active() {
    assert!(EXCEPTIONS_ENABLED);
}

#[test]
fn test_inner_handler_shields_outer() {
    let mut inner_hits = 0;
    let mut outer_hits = 0;

    let result = attempt(|| {
        attempt(|| raise::<&str, _>(ConvergenceFailure))
            .catch(|_: ConvergenceFailure| {
                inner_hits += 1;
                Ok("recovered")
            })
            .finish()
    })
    .catch(|_: AnyRuntime| {
        outer_hits += 1;
        Ok("outer")
    })
    .finish();

    assert_eq!(result.unwrap(), "recovered");
    assert_eq!(inner_hits, 1);
    assert_eq!(outer_hits, 0);
}

#[test]
fn test_unmatched_failure_reaches_outer_root_handler() {
    let mut inner_hits = 0;

    let caught = attempt(|| {
        attempt(|| raise::<(), _>(SolverException::new(9)))
            .catch(|_: ConvergenceFailure| {
                inner_hits += 1;
                Ok(())
            })
            .finish()
            .map(|_| None)
    })
    .catch(|failure: AnyRuntime| Ok(failure.solver_code()))
    .finish()
    .unwrap();

    assert_eq!(caught, Some(9));
    assert_eq!(inner_hits, 0);
}

#[test]
fn test_handler_runs_exactly_once() {
    let mut hits = Vec::new();

    let result = attempt(|| raise::<(), _>(LogicError::with_message("bad dof map")))
        .catch(|_: AnyLogic| {
            hits.push("root");
            Ok(())
        })
        .catch(|_: LogicError| {
            hits.push("exact");
            Ok(())
        })
        .catch(|_: Error| {
            hits.push("any");
            Ok(())
        })
        .finish();

    assert!(result.is_ok());
    assert_eq!(hits, vec!["root"]);
}

/// Raise `failure` behind an exact clause for `C` followed by a catch-all,
/// returning how often each handler ran
fn exact_then_any<C: Catchable>(failure: Error) -> (usize, usize) {
    let mut exact = 0;
    let mut any = 0;
    let result = attempt(|| raise::<(), _>(failure))
        .catch(|_: C| {
            exact += 1;
            Ok(())
        })
        .catch(|_: Error| {
            any += 1;
            Ok(())
        })
        .finish();
    assert!(result.is_ok());
    (exact, any)
}

type Dispatch = fn(Error) -> (usize, usize);

#[rstest]
#[case(LogicError::new().into(), exact_then_any::<LogicError> as Dispatch)]
#[case(NotImplemented.into(), exact_then_any::<NotImplemented> as Dispatch)]
#[case(FileError::new("missing.dat").into(), exact_then_any::<FileError> as Dispatch)]
#[case(ConvergenceFailure.into(), exact_then_any::<ConvergenceFailure> as Dispatch)]
#[case(DynamicCastFailure.into(), exact_then_any::<DynamicCastFailure> as Dispatch)]
#[case(FloatingPointException.into(), exact_then_any::<FloatingPointException> as Dispatch)]
#[case(SolverException::new(7).into(), exact_then_any::<SolverException> as Dispatch)]
fn test_exact_clause_runs_once_for_every_kind(
    #[case] failure: Error,
    #[case] dispatch: Dispatch,
) {
    assert_eq!(dispatch(failure), (1, 0));
}

#[rstest]
#[case(LogicError::new().into(), exact_then_any::<NotImplemented> as Dispatch)]
#[case(NotImplemented.into(), exact_then_any::<LogicError> as Dispatch)]
#[case(FileError::new("missing.dat").into(), exact_then_any::<SolverException> as Dispatch)]
#[case(ConvergenceFailure.into(), exact_then_any::<DynamicCastFailure> as Dispatch)]
#[case(DynamicCastFailure.into(), exact_then_any::<FloatingPointException> as Dispatch)]
#[case(FloatingPointException.into(), exact_then_any::<ConvergenceFailure> as Dispatch)]
#[case(SolverException::new(7).into(), exact_then_any::<FileError> as Dispatch)]
fn test_other_kind_clause_is_skipped(
    #[case] failure: Error,
    #[case] dispatch: Dispatch,
) {
    assert_eq!(dispatch(failure), (0, 1));
}

#[test]
fn test_rethrow_skips_sibling_clauses() {
    let mut sibling_hits = 0;

    let result = attempt(|| raise::<(), _>(FileError::new("restart.cpr")))
        .catch(|failure: FileError| raise(SolverException::new(failure.filename().len() as i32)))
        .catch(|_: SolverException| {
            sibling_hits += 1;
            Ok(())
        })
        .finish();

    assert_eq!(result.unwrap_err().solver_code(), Some(11));
    assert_eq!(sibling_hits, 0);
}

#[test]
fn test_unmatched_failure_propagates_unchanged() {
    let scope = attempt(|| raise::<(), _>(NotImplemented)).catch(|_: AnyRuntime| Ok(()));

    assert!(!scope.is_handled());
    let error = scope.finish().unwrap_err();
    assert_eq!(error.kind(), Kind::NotImplemented);
    assert_eq!(error.description(), "Error: not implemented!");
}

#[test]
fn test_cleanup_runs_on_every_exit_path() {
    let cleanups = Cell::new(0);
    assert_eq!(outer_solve(&cleanups, false).unwrap(), 2.0);
    assert_eq!(cleanups.get(), 2);

    let cleanups = Cell::new(0);
    let result = attempt(|| outer_solve(&cleanups, true))
        .catch(|_: ConvergenceFailure| Ok(-1.0))
        .finish();
    assert_eq!(result.unwrap(), -1.0);
    assert_eq!(cleanups.get(), 2);
}

#[test]
fn test_caller_owned_retry_loop() {
    fn step(dt: f64) -> Result<f64> {
        if dt > 0.1 {
            return raise(ConvergenceFailure);
        }
        Ok(dt)
    }

    let mut dt = 1.0;
    let mut attempts = 0;
    let accepted = loop {
        attempts += 1;
        let outcome = attempt(|| step(dt).map(Some))
            .catch(|_: ConvergenceFailure| Ok(None))
            .finish()
            .unwrap();
        match outcome {
            Some(accepted) => break accepted,
            None => dt /= 2.0,
        }
    };

    assert_eq!(accepted, 0.0625);
    assert_eq!(attempts, 5);
}

#[test]
fn test_threads_propagate_independently() {
    let outcomes: Vec<(usize, Option<i32>)> = (0..64_usize)
        .into_par_iter()
        .map(|i| {
            let handled = attempt(|| {
                if i % 2 == 0 {
                    raise(SolverException::new(i as i32))
                } else {
                    Ok(i)
                }
            })
            .catch(|failure: SolverException| Ok(failure.code() as usize + 1000))
            .finish()
            .unwrap();
            let code = (handled >= 1000).then(|| (handled - 1000) as i32);
            (i, code)
        })
        .collect();

    for (i, code) in outcomes {
        if i % 2 == 0 {
            assert_eq!(code, Some(i as i32));
        } else {
            assert_eq!(code, None);
        }
    }
}

#[test]
fn test_question_mark_into_anyhow() {
    fn run() -> anyhow::Result<()> {
        raise::<(), _>(FileError::new("missing.dat"))?;
        Ok(())
    }

    let err = run().unwrap_err();
    let failure = err.downcast_ref::<Error>().unwrap();
    assert_eq!(failure.kind(), Kind::FileError);
    assert_eq!(err.to_string(), "Error accessing file: missing.dat");
}
