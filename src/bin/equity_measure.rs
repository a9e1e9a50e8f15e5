//! Measure the equity engine on the reference scenarios.
//!
//! For every scenario this times the exact enumeration, runs repeated
//! Monte Carlo estimates and records a convergence trace, then prints
//! everything as one JSON document on stdout. Logs go to stderr.

use std::time::Instant;

use clap::Parser;
use holdem_equity::core::{EquityError, FlatDeck};
use holdem_equity::holdem::{ConvergencePoint, EquityGame, EstimateSummary, Scenario};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{Level, event};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "equity-measure")]
struct Args {
    /// Number of repeated Monte Carlo estimates per scenario
    #[arg(long, default_value_t = 30)]
    runs: usize,

    /// Samples per Monte Carlo estimate
    #[arg(long, default_value_t = 100_000)]
    iterations: usize,

    /// Samples in the convergence trace, 0 to skip it
    #[arg(long, default_value_t = 50_000)]
    conv: usize,

    /// Record the running equity every this many samples
    #[arg(long, default_value_t = 2_000)]
    conv_step: usize,

    /// Base seed. Without it every run is seeded from the OS
    #[arg(long)]
    seed: Option<u64>,

    /// Scenario to run by tag or prefix (S1, S2, S3). Repeatable,
    /// defaults to all of them
    #[arg(long = "scenario")]
    scenarios: Vec<String>,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,
}

impl Args {
    fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = match self.verbosity {
                0 => "info",
                1 => "debug",
                _ => "trace",
            };
            EnvFilter::new(level)
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }

    fn rng(&self, offset: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExactReport {
    equity: f64,
    equities: Vec<f64>,
    candidates: u64,
    time_s: f64,
}

#[derive(Debug, Serialize)]
struct RunReport {
    estimate: f64,
    time_s: f64,
}

#[derive(Debug, Serialize)]
struct ScenarioReport {
    scenario: &'static str,
    exact: ExactReport,
    iterations: usize,
    runs: Vec<RunReport>,
    summary: EstimateSummary,
    convergence: Vec<ConvergencePoint>,
}

fn measure(args: &Args, scenario: &Scenario) -> Result<ScenarioReport, EquityError> {
    let game = EquityGame::new(
        &scenario.hero,
        &scenario.opponents,
        &FlatDeck::default(),
        &scenario.known_board,
    )?;

    let start = Instant::now();
    let exact = game.exact()?;
    let exact = ExactReport {
        equity: exact.hero_equity(),
        equities: exact.equities(),
        candidates: exact.candidates(),
        time_s: start.elapsed().as_secs_f64(),
    };
    event!(
        Level::INFO,
        scenario = scenario.tag,
        equity = exact.equity,
        time_s = exact.time_s,
        "Exact equity"
    );

    let mut runs = Vec::with_capacity(args.runs);
    for i in 0..args.runs {
        let mut rng = args.rng(scenario.seed_offset + i as u64);
        let start = Instant::now();
        let estimate = game.monte_carlo(args.iterations, &mut rng)?.hero_equity();
        runs.push(RunReport {
            estimate,
            time_s: start.elapsed().as_secs_f64(),
        });
    }
    let estimates: Vec<f64> = runs.iter().map(|r| r.estimate).collect();
    let summary = EstimateSummary::from_estimates(&estimates)?;
    event!(
        Level::INFO,
        scenario = scenario.tag,
        mean = summary.mean,
        ci_low = summary.ci_low,
        ci_high = summary.ci_high,
        "Monte Carlo estimates"
    );

    let convergence = if args.conv > 0 {
        let mut rng = args.rng(scenario.seed_offset + args.runs as u64);
        game.convergence(args.conv, args.conv_step, &mut rng)?
    } else {
        Vec::new()
    };

    Ok(ScenarioReport {
        scenario: scenario.tag,
        exact,
        iterations: args.iterations,
        runs,
        summary,
        convergence,
    })
}

fn selected(args: &Args) -> Result<Vec<Scenario>, String> {
    if args.scenarios.is_empty() {
        return Scenario::all().map_err(|e| e.to_string());
    }
    args.scenarios
        .iter()
        .map(|name| match Scenario::find(name) {
            Ok(Some(scenario)) => Ok(scenario),
            Ok(None) => Err(format!("Unknown scenario '{name}'")),
            Err(e) => Err(e.to_string()),
        })
        .collect()
}

fn main() {
    let args = Args::parse();
    args.init_tracing();

    let scenarios = match selected(&args) {
        Ok(scenarios) => scenarios,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let mut reports = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        match measure(&args, scenario) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Error measuring {}: {e}", scenario.tag);
                std::process::exit(1);
            }
        }
    }

    match serde_json::to_string_pretty(&reports) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error writing report: {e}");
            std::process::exit(1);
        }
    }
}
