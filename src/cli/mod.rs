/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! The `libmesh-errors` binary is a fault drill: it raises one failure of a
//! chosen kind inside a try region, optionally behind one catch clause, and
//! reports how the compiled propagation mode dispatched it.

use crate::errors::{
    ConvergenceFailure, DynamicCastFailure, Error, FileError, FloatingPointException, Kind,
    LogicError, NotImplemented, Root, SolverException,
};
use crate::propagation::{
    attempt, conclude, mode_name, raise_with, AnyLogic, AnyRuntime, Scope, EXCEPTIONS_ENABLED,
};
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

/// Fault drill for the failure propagation facility
#[derive(Parser, Debug)]
#[command(name = "libmesh-errors", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the propagation mode compiled into this build
    Mode {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Raise one failure inside a try region
    Raise(RaiseArgs),
}

#[derive(Args, Debug)]
pub struct RaiseArgs {
    /// Kind of failure to raise
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Description of a logic error (default message when omitted)
    #[arg(long)]
    pub message: Option<String>,

    /// Filename carried by a file error (empty when omitted)
    #[arg(long)]
    pub file: Option<String>,

    /// Status code carried by a solver exception (1 when omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub code: Option<i32>,

    /// Catch clause wrapped around the raise
    #[arg(long, value_enum)]
    pub catch: Option<Selector>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    LogicError,
    NotImplemented,
    FileError,
    ConvergenceFailure,
    DynamicCastFailure,
    FloatingPointException,
    SolverException,
}

impl From<KindArg> for Kind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::LogicError => Kind::LogicError,
            KindArg::NotImplemented => Kind::NotImplemented,
            KindArg::FileError => Kind::FileError,
            KindArg::ConvergenceFailure => Kind::ConvergenceFailure,
            KindArg::DynamicCastFailure => Kind::DynamicCastFailure,
            KindArg::FloatingPointException => Kind::FloatingPointException,
            KindArg::SolverException => Kind::SolverException,
        }
    }
}

/// What a catch clause matches: one kind, a capability root, or anything
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    LogicError,
    NotImplemented,
    FileError,
    ConvergenceFailure,
    DynamicCastFailure,
    FloatingPointException,
    SolverException,
    LogicRoot,
    RuntimeRoot,
    Any,
}

impl Selector {
    pub fn label(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

impl RaiseArgs {
    /// Reject payload flags the chosen kind does not carry
    pub fn validate(&self) -> Result<(), clap::Error> {
        let kind = Kind::from(self.kind);
        let payloads = [
            ("--message", self.message.is_some(), Kind::LogicError),
            ("--file", self.file.is_some(), Kind::FileError),
            ("--code", self.code.is_some(), Kind::SolverException),
        ];
        for (flag, given, carrier) in payloads {
            if given && kind != carrier {
                return Err(Cli::command().error(
                    ErrorKind::ArgumentConflict,
                    format!("{} only applies to {}, not {}", flag, carrier, kind),
                ));
            }
        }
        Ok(())
    }

    /// Build the failure described by these arguments
    pub fn failure(&self) -> Error {
        match self.kind {
            KindArg::LogicError => LogicError::from(self.message.clone()).into(),
            KindArg::NotImplemented => NotImplemented.into(),
            KindArg::FileError => FileError::new(self.file.clone().unwrap_or_default()).into(),
            KindArg::ConvergenceFailure => ConvergenceFailure.into(),
            KindArg::DynamicCastFailure => DynamicCastFailure.into(),
            KindArg::FloatingPointException => FloatingPointException.into(),
            KindArg::SolverException => SolverException::new(self.code.unwrap_or(1)).into(),
        }
    }
}

/// Outcome of a drill whose failure was handled
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mode: &'static str,
    pub handled_by: String,
    pub kind: Kind,
    pub root: Root,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

impl Report {
    fn new(selector: Selector, error: Error) -> Self {
        let report = Self {
            mode: mode_name(),
            handled_by: selector.label(),
            kind: error.kind(),
            root: error.root(),
            description: error.description().to_string(),
            code: error.solver_code(),
        };
        info!("{} handled by {}", report.kind, report.handled_by);
        report
    }

    fn render(&self) -> String {
        let mut text = format!(
            "handled by {}\nmode: {}\nkind: {} ({})\ndescription: {}",
            self.handled_by, self.mode, self.kind, self.root, self.description
        );
        if let Some(code) = self.code {
            text.push_str(&format!("\ncode: {}", code));
        }
        text
    }
}

/// Attach the catch clause named by `selector` to `scope`
pub fn guard(scope: Scope<Report>, selector: Selector) -> Scope<Report> {
    let report =
        move |error: Error| -> crate::Result<Report> { Ok(Report::new(selector, error)) };
    match selector {
        Selector::LogicError => scope.catch(|e: LogicError| report(e.into())),
        Selector::NotImplemented => scope.catch(|e: NotImplemented| report(e.into())),
        Selector::FileError => scope.catch(|e: FileError| report(e.into())),
        Selector::ConvergenceFailure => scope.catch(|e: ConvergenceFailure| report(e.into())),
        Selector::DynamicCastFailure => scope.catch(|e: DynamicCastFailure| report(e.into())),
        Selector::FloatingPointException => {
            scope.catch(|e: FloatingPointException| report(e.into()))
        }
        Selector::SolverException => scope.catch(|e: SolverException| report(e.into())),
        Selector::LogicRoot => scope.catch(|e: AnyLogic| report(e.into_inner())),
        Selector::RuntimeRoot => scope.catch(|e: AnyRuntime| report(e.into_inner())),
        Selector::Any => scope.catch(report),
    }
}

/// Run one drill
pub fn drill(args: &RaiseArgs) -> crate::Result<Report> {
    info!("raising {} in {} mode", Kind::from(args.kind), mode_name());

    let scope = attempt(|| raise_with(|| args.failure()));
    match args.catch {
        Some(selector) => guard(scope, selector).finish(),
        None => scope.finish(),
    }
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Mode { json } => {
            if json {
                let mode = serde_json::json!({
                    "mode": mode_name(),
                    "exceptions_enabled": EXCEPTIONS_ENABLED,
                });
                println!("{}", serde_json::to_string(&mode)?);
            } else {
                println!("{}", mode_name());
            }
        }
        Command::Raise(args) => {
            if let Err(err) = args.validate() {
                err.exit();
            }
            let report = conclude(drill(&args));
            if args.json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{}", report.render());
            }
        }
    }
    Ok(())
}
