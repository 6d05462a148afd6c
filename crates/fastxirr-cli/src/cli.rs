//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BracketArgs, NpvArgs, SolveArgs};

/// fastxirr - XIRR for irregular dated cash flows
#[derive(Parser)]
#[command(name = "fastxirr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Solver configuration file (TOML)
    #[arg(short, long, global = true, env = "FASTXIRR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Solve for the XIRR of a cash-flow file
    Solve(SolveArgs),

    /// Net present value at a given rate
    Npv(NpvArgs),

    /// Find a rate interval where NPV changes sign
    Bracket(BracketArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    Minimal,
}
