use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadsolve",
    about = "Real roots of ax^2 + bx + c = 0 (interactive by default)",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QuadCli {
    /// Global: path to config (TOML); default: ~/.quadsolve/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Global: disable coloured output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a single equation and exit
    ///
    /// Examples:
    ///   quadsolve solve 1 -3 2
    ///   quadsolve solve 0 2 -4
    Solve {
        #[arg(value_name = "A", allow_negative_numbers = true)]
        a: f64,
        #[arg(value_name = "B", allow_negative_numbers = true)]
        b: f64,
        #[arg(value_name = "C", allow_negative_numbers = true)]
        c: f64,
    },

    /// Solve random equations and check the roots by substitution
    Selftest {
        /// Number of equations (config: selftest.cases)
        #[arg(long = "cases", value_name = "N")]
        cases: Option<usize>,
        /// Seed for a reproducible run
        #[arg(long = "seed", value_name = "SEED")]
        seed: Option<u64>,
        /// Lower bound for coefficients (inclusive)
        #[arg(long = "low", value_name = "X", allow_negative_numbers = true)]
        low: Option<f64>,
        /// Upper bound for coefficients (exclusive)
        #[arg(long = "high", value_name = "X", allow_negative_numbers = true)]
        high: Option<f64>,
    },
}
