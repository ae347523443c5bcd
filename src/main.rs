use clap::Parser; // trait import enables QuadCli::parse()
use colored::Colorize;
use std::io;

use quadsolve::cli::{Command, QuadCli};
use quadsolve::commands;
use quadsolve::config::{resolve_config_path, Config};
use quadsolve::core::SolveError;
use quadsolve::logging;

fn main() -> anyhow::Result<()> {
    let args = QuadCli::parse();
    logging::init(args.verbose);

    let cfg_path = resolve_config_path(&args.config);
    let mut cfg = Config::load_or_default(cfg_path.as_deref())?;
    if args.no_color || !cfg.output.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let precision = cfg.output.precision;

    let res = match args.cmd {
        // No subcommand: the interactive dialogue.
        None => commands::session::run(io::stdin().lock(), &mut out, &cfg),

        Some(Command::Solve { a, b, c }) => {
            commands::solve::main(a, b, c, precision, &mut out).map(|_| ())
        }

        Some(Command::Selftest { cases, seed, low, high }) => {
            let st = &mut cfg.selftest;
            if let Some(n) = cases {
                st.cases = n;
            }
            if seed.is_some() {
                st.seed = seed;
            }
            if let Some(l) = low {
                st.low = l;
            }
            if let Some(h) = high {
                st.high = h;
            }
            commands::selftest::main(&cfg.selftest, precision, &mut out).map(|_| ())
        }
    };

    // Non-finite coefficients end the process right here, nothing retries them.
    if let Err(e) = res {
        if let Some(solve_err) = e.downcast_ref::<SolveError>() {
            eprintln!("{} {}", "error:".bright_red().bold(), solve_err);
            std::process::exit(1);
        }
        return Err(e);
    }
    Ok(())
}
