//! Solve command implementation.
//!
//! Reads a cash-flow file and prints its XIRR. A series with no rate is a
//! result, not an error: it prints `NaN` and exits successfully.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use fastxirr::bracket::Bracket;
use fastxirr::{XirrConfig, XirrMethod, XirrResult, XirrSolution, XirrSolver};

use crate::cli::OutputFormat;
use crate::input::read_cashflows;
use crate::output::{
    format_rate, print_header, print_json, print_success, print_table, print_warning, KeyValue,
};

/// Arguments for the solve command.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Cash-flow CSV file with a `date,amount` header
    #[arg(short, long)]
    pub input: PathBuf,

    /// Root-finding method
    #[arg(short, long, value_enum, default_value = "auto")]
    pub method: Method,

    /// Convergence tolerance (overrides the configuration)
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Maximum iterations per attempt (overrides the configuration)
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Initial bracket as LOW,HIGH
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub bracket: Option<Vec<f64>>,
}

/// Method selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Method {
    /// Brent's method, falling back to bisection
    #[default]
    Auto,
    /// Brent's method only
    Brent,
    /// Bisection only
    Bisection,
}

/// Solve result for JSON output.
#[derive(Debug, Serialize)]
struct SolveReport {
    rate: Option<f64>,
    method: Option<XirrMethod>,
    iterations: Option<u32>,
    residual: Option<f64>,
    bracket: Option<Bracket>,
    rebracketed: bool,
    flows: usize,
    error: Option<String>,
}

impl SolveReport {
    fn new(outcome: &XirrResult<XirrSolution>, flows: usize) -> Self {
        match outcome {
            Ok(solution) => Self {
                rate: Some(solution.rate),
                method: Some(solution.method),
                iterations: Some(solution.iterations),
                residual: Some(solution.residual),
                bracket: Some(solution.bracket),
                rebracketed: solution.rebracketed,
                flows,
                error: None,
            },
            Err(err) => Self {
                rate: None,
                method: None,
                iterations: None,
                residual: None,
                bracket: None,
                rebracketed: false,
                flows,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Execute the solve command.
pub fn execute(args: SolveArgs, format: OutputFormat, mut config: XirrConfig) -> Result<()> {
    if let Some(tolerance) = args.tolerance {
        config = config.with_tolerance(tolerance);
    }
    if let Some(max_iterations) = args.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }

    let bracket = args.bracket.as_deref().map(Bracket::from_slice).transpose()?;
    let solver = XirrSolver::new(config)?;
    let flows = read_cashflows(&args.input)?;

    let outcome = match args.method {
        Method::Auto => solver.calculate_from(&flows, bracket),
        Method::Brent => solver.solve(XirrMethod::Brent, &flows, bracket),
        Method::Bisection => solver.solve(XirrMethod::Bisection, &flows, bracket),
    };

    // Only numeric failures are results; bad input still fails the command
    let outcome = match outcome {
        Err(err) if !err.is_numeric() => return Err(err.into()),
        other => other,
    };

    match format {
        OutputFormat::Table => print_solution_table(&outcome, flows.len()),
        OutputFormat::Json => print_json(&SolveReport::new(&outcome, flows.len()))?,
        OutputFormat::Minimal => {
            println!("{}", outcome.as_ref().map_or(f64::NAN, |s| s.rate));
        }
    }

    Ok(())
}

fn print_solution_table(outcome: &XirrResult<XirrSolution>, flows: usize) {
    print_header("XIRR");

    match outcome {
        Ok(solution) => {
            let rows = vec![
                KeyValue::new("Rate", format_rate(solution.rate)),
                KeyValue::new("Rate (decimal)", solution.rate.to_string()),
                KeyValue::new("Method", solution.method.to_string()),
                KeyValue::new("Iterations", solution.iterations.to_string()),
                KeyValue::new("NPV at rate", format!("{:.3e}", solution.residual)),
                KeyValue::new(
                    "Bracket",
                    format!("[{}, {}]", solution.bracket.low, solution.bracket.high),
                ),
                KeyValue::new("Rebracketed", solution.rebracketed.to_string()),
                KeyValue::new("Cash flows", flows.to_string()),
            ];
            print_table(&rows);
            print_success("converged");
        }
        Err(err) => {
            let rows = vec![
                KeyValue::new("Rate", format_rate(f64::NAN)),
                KeyValue::new("Cash flows", flows.to_string()),
            ];
            print_table(&rows);
            print_warning(&err.to_string());
        }
    }
}
