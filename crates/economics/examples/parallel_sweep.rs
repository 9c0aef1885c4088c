//! Parallel yield sweep for Tidelock dual staking
//!
//! Evaluates the APY surface over the default dashboard grid (staking ratio
//! x bridged stake) with one Rayon task per stake level. Produces
//! `yield_sweep.csv` and prints a summary, including any failing cells.
//!
//! Run with `RUST_LOG=debug` to see the per-cell calculation trace.

use rayon::prelude::*;
use std::{fs::File, io::Write};
use tidelock_economics::*;

const RATIO_STEPS: usize = 10;
const STAKE_STEPS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    println!(
        "🚀 Sweeping the Tidelock yield surface over a {}x{} grid",
        STAKE_STEPS, RATIO_STEPS
    );

    let policy = SplitPolicy::default();
    let base = StakeSnapshot {
        fixed_yield_budget: 0.08,
        native_total_supply: 1e10,
        bridged_asset_staked: 2e9,
        native_staking_ratio: 0.2,
        native_price: 1.0,
        bridged_asset_price: 75_000.0,
    };

    let ratios = SweepRange {
        start: 0.1,
        end: 1.0,
        steps: RATIO_STEPS,
    };
    let stakes = SweepRange {
        start: 2e9,
        end: 1e10,
        steps: STAKE_STEPS,
    };

    // One task per stake level; each task sweeps the full ratio range
    let rows: Result<Vec<(f64, SweepOutcome)>, YieldError> = stakes
        .values()
        .into_par_iter()
        .map(|stake| {
            let mut row_base = base;
            row_base.bridged_asset_staked = stake;
            sweep_staking_ratio(&row_base, &policy, &ratios).map(|outcome| (stake, outcome))
        })
        .collect();
    let rows = rows?;

    let mut csv = File::create("yield_sweep.csv")?;
    writeln!(
        csv,
        "bridged_asset_staked,native_staking_ratio,beta,gamma,native_share,bridged_share,native_apy_pct,bridged_apy_pct"
    )?;
    for (stake, outcome) in &rows {
        for point in &outcome.points {
            writeln!(
                csv,
                "{},{},{},{},{},{},{},{}",
                stake,
                point.native_staking_ratio,
                point.report.beta,
                point.report.gamma,
                point.report.split.native_share,
                point.report.split.bridged_share,
                point.report.rates.native_apy,
                point.report.rates.bridged_asset_apy
            )?;
        }
    }

    summarize(&rows);
    println!("✅ Sweep complete, data written to yield_sweep.csv");
    Ok(())
}

fn summarize(rows: &[(f64, SweepOutcome)]) {
    let points: Vec<&SweepPoint> = rows
        .iter()
        .flat_map(|(_, outcome)| outcome.points.iter())
        .collect();
    if points.is_empty() {
        println!("⚠️  No cells evaluated");
        return;
    }

    let native: Vec<f64> = points.iter().map(|p| p.report.rates.native_apy).collect();
    let bridged: Vec<f64> = points
        .iter()
        .map(|p| p.report.rates.bridged_asset_apy)
        .collect();

    println!("📈 Yield surface over {} cells:", points.len());
    println!(
        "   native APY: min={:.4}%, max={:.4}%, avg={:.4}%",
        min_of(&native),
        max_of(&native),
        native.iter().sum::<f64>() / native.len() as f64
    );
    println!(
        "   bridged APY: min={:.4}%, max={:.4}%, avg={:.4}%",
        min_of(&bridged),
        max_of(&bridged),
        bridged.iter().sum::<f64>() / bridged.len() as f64
    );

    let failures: Vec<&SweepFailure> = rows
        .iter()
        .flat_map(|(_, outcome)| outcome.failures.iter())
        .collect();
    if failures.is_empty() {
        println!("   no failing cells");
    } else {
        println!("⚠️  {} failing cells:", failures.len());
        for failure in failures {
            println!(
                "   ratio={}, bridged_stake={}: {}",
                failure.native_staking_ratio, failure.bridged_asset_staked, failure.error
            );
        }
    }
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
