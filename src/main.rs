/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Fault drill executable for libmesh-errors

use clap::Parser;
use libmesh_errors::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    cli::run(cli)
}
