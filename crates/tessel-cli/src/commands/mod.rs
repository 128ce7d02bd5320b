//! Subcommand implementations. Each reads its inputs, runs one engine
//! operation and prints the result to stdout.

mod check;
mod config;
mod edit;
mod handle;
mod layout_io;

use std::process::ExitCode;

use tessel_common::Result;
use tessel_config::TesselConfig;

use crate::cli::Command;

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The layout was read but breaks at least one invariant.
    Violations,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Violations => ExitCode::from(1),
        }
    }
}

pub fn run(command: &Command, config: &TesselConfig) -> Result<Outcome> {
    let grid = &config.grid;
    match command {
        Command::Compact { layout } => edit::compact(layout, grid),
        Command::Move {
            layout,
            select,
            dx,
            dy,
        } => edit::move_items(layout, grid, select, *dx, *dy),
        Command::Resize {
            layout,
            key,
            handle,
            dx,
            dy,
        } => edit::resize(layout, grid, key, *handle, *dx, *dy),
        Command::Check { layout } => check::run(layout, grid),
        Command::Handle {
            layout,
            key,
            container_width,
            x,
            y,
        } => handle::run(layout, grid, key, *container_width, *x, *y),
        Command::Config => config::show(config),
        Command::InitConfig { path } => config::init(path.as_deref()),
    }
}
