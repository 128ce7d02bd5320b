use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tessel_common::ResizeHandle;

/// Tessel: grid layout packing from the command line.
#[derive(Parser, Debug)]
#[command(name = "tessel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compact a layout and print the result.
    Compact {
        /// JSON file holding an array of items.
        layout: PathBuf,
    },

    /// Move selected items by a grid delta, then compact.
    Move {
        layout: PathBuf,

        /// Comma-separated item keys.
        #[arg(long, value_delimiter = ',', required = true)]
        select: Vec<String>,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dx: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dy: i32,
    },

    /// Resize one item from a grip, then compact.
    Resize {
        layout: PathBuf,

        #[arg(long)]
        key: String,

        /// Grip code: n, ne, e, se, s, sw, w or nw.
        #[arg(long)]
        handle: ResizeHandle,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dx: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dy: i32,
    },

    /// Report layout invariant violations. Exits with status 1 if any.
    Check { layout: PathBuf },

    /// Print the resize grip under a pixel position on an item.
    Handle {
        layout: PathBuf,

        #[arg(long)]
        key: String,

        /// Container width in pixels.
        #[arg(long)]
        container_width: f64,

        /// Pointer x in container pixels.
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Pointer y in container pixels.
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },

    /// Print the effective configuration as JSON.
    Config,

    /// Write a documented default config file.
    InitConfig {
        /// Destination; defaults to the platform config path.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
