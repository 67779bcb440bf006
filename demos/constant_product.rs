//! Constant product pool walkthrough (`x · y = k`).
//!
//! Seeds a pool from a validated config, adds liquidity, trades in both
//! directions, withdraws with a fee, and finally drains the pool.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use xyk_pool::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product Pool (x · y = k) ===\n");

    // ── 1. Configure fees and the initial state ─────────────────────────
    let fees = FeeSchedule::from_basis_points(30, 30)?;
    let config = PoolConfig::new(Amount::new(2_000), Amount::new(100), Shares::new(10_000))?;
    println!("Config: {config}");
    println!("Fees:   {fees}");

    let mut pool = Pool::from_config(&config)?;
    println!("\nPool:   {pool}");
    println!("Price:  {} (x per y)", pool.price()?);
    println!("k:      {}", pool.invariant_k());

    // ── 2. Deposit at the current ratio ─────────────────────────────────
    let quote = pool.quote_deposit(Amount::new(200), Amount::new(10))?;
    println!("\n--- Quote deposit (200, 10) ---");
    println!("  {quote}");
    let deposit = pool.deposit(Amount::new(200), Amount::new(10))?;
    println!("--- Commit deposit ---");
    println!("  {deposit}");
    println!("  Pool now: {pool}");

    // ── 3. Unbalanced deposit: only the binding side is taken in full ───
    let deposit = pool.deposit(Amount::new(100), Amount::new(2_000))?;
    println!("\n--- Deposit (100, 2000) ---");
    println!("  {deposit}");
    println!("  Pool now: {pool}");

    // ── 4. Trade both ways ──────────────────────────────────────────────
    let k_before = pool.invariant_k();
    let sell_x = pool.swap_x_for_y(Amount::new(300), fees.swap())?;
    println!("\n--- {sell_x} ---");
    let sell_y = pool.swap_y_for_x(Amount::new(20), fees.swap())?;
    println!("--- {sell_y} ---");
    println!("  Pool now: {pool}");
    println!("  Price:    {}", pool.price()?);
    println!("  k grew:   {} -> {}", k_before, pool.invariant_k());

    // ── 5. Withdraw part of the supply, paying the withdrawal fee ───────
    let withdraw = pool.withdraw(Shares::new(1_000), fees.withdrawal())?;
    println!("\n--- {withdraw} ---");
    println!("  Pool now: {pool}");

    // ── 6. Burn everything that is left; no fee on the last exit ────────
    let remaining = pool.share_supply();
    let last = pool.withdraw(remaining, fees.withdrawal())?;
    println!("\n--- {last} ---");
    println!("  Pool now: {pool}");
    println!("  Depleted: {}", pool.is_depleted());

    match pool.swap_x_for_y(Amount::new(1), fees.swap()) {
        Ok(outcome) => println!("  Unexpected swap on a depleted pool: {outcome}"),
        Err(err) => println!("  Swap refused: {err}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
