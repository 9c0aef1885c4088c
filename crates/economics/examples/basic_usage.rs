//! Basic usage example for the Tidelock economics crate
//!
//! This example demonstrates how to use the yield engine for:
//! - Reading the default split policy and its gamma tiers
//! - Deriving beta, gamma, and the reward split from a staking ratio
//! - Computing native and bridged APYs for a full snapshot
//! - Handling the typed errors the calculations can return

use tidelock_economics::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Tidelock Economics v{} - Basic Usage Example\n", VERSION);

    // 1. Default split policy
    let policy = SplitPolicy::default();
    println!("Split Policy:");
    println!("  Target staking ratio: {}", policy.target_staking_ratio);
    println!(
        "  Beta band: [{}, {}] (both ends inclusive)",
        policy.lower_beta_bound, policy.upper_beta_bound
    );
    println!("  Gamma tiers: {:?}", policy.gamma_table());
    println!();

    // 2. Walk the policy across sample staking ratios
    println!("Policy Evaluation:");
    for ratio in [0.1, 0.2, 0.4, 0.8, 0.96, 1.0] {
        let beta = beta_for_ratio(ratio, &policy);
        let gamma = gamma_for_beta(beta, &policy);
        let split = split_for_gamma(gamma)?;
        println!(
            "  ratio {:>4}: beta {:.3} -> gamma {:.4} -> native {:.4} / bridged {:.4}",
            ratio, beta, gamma, split.native_share, split.bridged_share
        );
    }
    println!();

    // 3. Full snapshot: 8% yearly budget, 10B supply at $0.10, $2B in
    //    bridged stake at $75k per unit, 20% of the supply staked
    let snapshot = StakeSnapshot {
        fixed_yield_budget: 0.08,
        native_total_supply: 1e10,
        bridged_asset_staked: 2e9,
        native_staking_ratio: 0.2,
        native_price: 0.1,
        bridged_asset_price: 75_000.0,
    };

    let report = yield_report(&snapshot, &policy)?;
    println!("Yield Report:");
    println!("  Beta: {:.4}", report.beta);
    println!("  Gamma: {:.4}", report.gamma);
    println!(
        "  Split: {:.2}% native / {:.2}% bridged",
        report.split.native_share * 100.0,
        report.split.bridged_share * 100.0
    );
    println!("  Native FDV: {} (quote currency)", report.native_fdv);
    println!(
        "  Distributed to bridged stakers: {:.4} units/year",
        report.bridged_asset_distributed
    );
    println!("  Native APY: {:.4}%", report.rates.native_apy);
    println!("  Bridged APY: {:.4}%", report.rates.bridged_asset_apy);
    println!();

    // 4. The report serializes as-is for logs or downstream consumers
    println!("Report as JSON:");
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!();

    // 5. Errors are typed, not stringly
    println!("Error Handling:");
    let mut empty_pool = snapshot;
    empty_pool.native_staking_ratio = 0.0;
    match compute_yields(&empty_pool, &policy) {
        Ok(rates) => println!("  unexpected success: {:?}", rates),
        Err(err) => println!("  zero staking ratio -> {}", err),
    }

    let mut bad_input = snapshot;
    bad_input.fixed_yield_budget = 1.5;
    match compute_yields(&bad_input, &policy) {
        Ok(rates) => println!("  unexpected success: {:?}", rates),
        Err(err) => println!("  budget above 100% -> {}", err),
    }

    Ok(())
}
