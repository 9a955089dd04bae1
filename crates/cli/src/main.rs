use anyhow::{Context, Result};
use bzone::lattice::LatticeParameters;
use bzone::{BzCfg, BzFailure, CellMethod, MAX_GRID_RANGE};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod runner;

#[derive(Parser)]
#[command(name = "bzone")]
#[command(about = "Reciprocal lattice and first Brillouin zone of a 2D lattice")]
struct Cmd {
    /// Debug-level logs on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Single-line JSON output
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute lattice, zone and symmetry points for one (a, b, γ)
    Compute {
        #[command(flatten)]
        lattice: LatticeArgs,
        #[arg(long)]
        gamma: f64,
        /// On an unbounded cell, retry up to N times with doubled grid range
        #[arg(long, default_value_t = 0)]
        grow: u32,
    },
    /// Sweep γ and print one JSON line per step
    Scan {
        #[command(flatten)]
        lattice: LatticeArgs,
        #[arg(long, default_value_t = 30.0)]
        from: f64,
        #[arg(long, default_value_t = 150.0)]
        to: f64,
        #[arg(long, default_value_t = 24)]
        steps: u32,
    },
    /// Print version information
    Report,
}

#[derive(Args)]
struct LatticeArgs {
    #[arg(long)]
    a: f64,
    #[arg(long)]
    b: f64,
    #[arg(
        long,
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_GRID_RANGE))
    )]
    grid_range: u32,
    #[arg(long, value_enum, default_value_t = Method::Voronoi)]
    method: Method,
    /// Absolute tolerance of the zero-area check
    #[arg(long)]
    eps_area: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Voronoi,
    Bisector,
}

impl LatticeArgs {
    fn cfg(&self) -> BzCfg {
        let method = match self.method {
            Method::Voronoi => CellMethod::Voronoi,
            Method::Bisector => CellMethod::Bisector,
        };
        let cfg = BzCfg::default()
            .with_grid_range(self.grid_range)
            .with_method(method);
        match self.eps_area {
            Some(eps) => cfg.with_eps_area(eps),
            None => cfg,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    match cmd.action {
        Action::Compute {
            lattice,
            gamma,
            grow,
        } => compute(&lattice, gamma, grow, cmd.compact),
        Action::Scan {
            lattice,
            from,
            to,
            steps,
        } => scan(&lattice, from, to, steps),
        Action::Report => report(cmd.compact),
    }
}

fn compute(args: &LatticeArgs, gamma: f64, grow: u32, compact: bool) -> Result<ExitCode> {
    let params = LatticeParameters::new(args.a, args.b, gamma);
    tracing::info!(a = args.a, b = args.b, gamma, grid_range = args.grid_range, "compute");
    let run = runner::compute_with_growth(&params, args.cfg(), grow);
    match run.outcome {
        Ok(result) => {
            tracing::info!(
                grid_range = run.grid_range,
                attempts = run.attempts,
                vertices = result.bz_polygon.len(),
                "done"
            );
            print_json(&result, compact)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(%err, attempts = run.attempts, "failed");
            print_json(&BzFailure::from(&err), compact)?;
            Ok(ExitCode::from(2))
        }
    }
}

fn scan(args: &LatticeArgs, from: f64, to: f64, steps: u32) -> Result<ExitCode> {
    tracing::info!(a = args.a, b = args.b, from, to, steps, "scan");
    for row in runner::scan(args.a, args.b, from, to, steps, args.cfg()) {
        print_json(&row, true)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn report(compact: bool) -> Result<ExitCode> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "bzone": bzone::VERSION,
        "code_rev": rev,
        "defaults": BzCfg::default(),
    });
    print_json(&obj, compact)?;
    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("serializing output")?;
    println!("{text}");
    Ok(())
}
