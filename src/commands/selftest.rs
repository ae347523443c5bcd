//! src/commands/selftest.rs
//! Random-coefficient harness: solve, substitute, report.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SelfTestConfig;
use crate::core::{solve_coefficients, verify, Classification, Coefficients};

#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub coefficients: Coefficients,
    pub result: Classification,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelfTestReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}

/// Solves one equation and checks its roots by substitution.
pub fn check_case(coefficients: Coefficients) -> Result<CaseOutcome> {
    let result = solve_coefficients(&coefficients)?;
    let passed = verify::check(&coefficients, &result);
    Ok(CaseOutcome { coefficients, result, passed })
}

fn write_case<W: Write>(out: &mut W, case: &CaseOutcome, precision: usize) -> Result<()> {
    let p = precision;
    writeln!(out, "For {:.p$} coefficients", case.coefficients, p = p)?;
    match case.result {
        Classification::NoRoots => {
            writeln!(out, "No roots")?;
            writeln!(out, "{}", "Test passed".green())?;
        }
        Classification::Identity => {
            writeln!(out, "Infinite solution number")?;
            writeln!(out, "{}", "Test passed".green())?;
        }
        Classification::OneRoot(x) => write_roots(out, x, x, case.passed, p)?,
        Classification::TwoRoots(x1, x2) => write_roots(out, x1, x2, case.passed, p)?,
    }
    Ok(())
}

fn write_roots<W: Write>(out: &mut W, x1: f64, x2: f64, passed: bool, p: usize) -> Result<()> {
    writeln!(out, "root1 = {x1:.p$}, root2 = {x2:.p$}")?;
    if passed {
        writeln!(out, "{}", "Test passed!".green())?;
        writeln!(out, " ")?;
    } else {
        writeln!(out, "{}", "Failed".red())?;
    }
    Ok(())
}

pub fn run_with_rng<R: Rng, W: Write>(
    cfg: &SelfTestConfig,
    rng: &mut R,
    precision: usize,
    out: &mut W,
) -> Result<SelfTestReport> {
    cfg.validate()?;
    let dist = Uniform::new(cfg.low, cfg.high);
    let mut report = SelfTestReport::default();
    for _ in 0..cfg.cases {
        let coeffs = Coefficients::new(dist.sample(rng), dist.sample(rng), dist.sample(rng));
        let case = check_case(coeffs)?;
        write_case(out, &case, precision)?;
        report.outcomes.push(case);
    }
    info!(cases = report.outcomes.len(), passed = report.passed(), failed = report.failed(), "selftest finished");
    Ok(report)
}

/// Seeded when `cfg.seed` is set, otherwise from OS entropy.
pub fn run<W: Write>(cfg: &SelfTestConfig, precision: usize, out: &mut W) -> Result<SelfTestReport> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_with_rng(cfg, &mut rng, precision, out)
}

/// Entry point for the `selftest` subcommand: the run plus a summary line.
pub fn main<W: Write>(cfg: &SelfTestConfig, precision: usize, out: &mut W) -> Result<SelfTestReport> {
    let report = run(cfg, precision, out)?;
    writeln!(out, "{} passed, {} failed", report.passed(), report.failed())?;
    Ok(report)
}
