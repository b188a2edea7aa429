//! Black-Scholes console report
//!
//! Prints prices, Greeks, a parity check, and an ASCII PnL grid for a
//! reference scenario. Pass a path as the first argument to also write
//! the scenario as JSON.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use bs_dashboard::prelude::*;

#[derive(Debug, Serialize)]
struct ScenarioReport {
    inputs: MarketInputs,
    option_type: OptionType,
    purchase_price: f64,
    call_price: f64,
    put_price: f64,
    greeks: Greeks,
    pnl: PnlGrid,
}

fn write_report(path: &str, report: &ScenarioReport) -> DashResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| DashError::serialization(e.to_string()))?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("Black-Scholes Option Pricing");
    println!("============================\n");

    let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.20);
    let option_type = OptionType::Call;
    let purchase_price = 10.0;

    if let Err(e) = inputs.validate() {
        eprintln!("Bad inputs: {}", e);
        std::process::exit(1);
    }

    println!("Inputs:");
    println!("  Spot:   ${:.2}", inputs.spot);
    println!("  Strike: ${:.2}", inputs.strike);
    println!("  Time:   {:.2} years", inputs.time);
    println!("  Rate:   {:.1}%", inputs.rate * 100.0);
    println!("  Vol:    {:.1}%\n", inputs.vol * 100.0);

    let call_price = inputs.price(OptionType::Call);
    let put_price = inputs.price(OptionType::Put);

    println!("Option Prices:");
    println!("  Call: ${:.2}", call_price);
    println!("  Put:  ${:.2}", put_price);

    // Put-call parity: C - P = S - K*e^(-rT)
    let parity_rhs = inputs.spot - inputs.strike * inputs.discount_factor();
    println!("\nPut-Call Parity Check:");
    println!("  C - P           = {:.4}", call_price - put_price);
    println!("  S - K*e^(-rT)   = {:.4}", parity_rhs);

    let greeks = inputs.greeks(option_type);
    println!("\n{} Greeks:", option_type.label());
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.6}", greeks.gamma);
    println!("  Vega:  {:.4}", greeks.vega);
    println!("  Theta: {:.4}", greeks.theta);
    println!("  Rho:   {:.4}", greeks.rho);

    // PnL grid as ASCII table: vols across, spots down
    let pnl = PnlGrid::compute(
        &PnlGridConfig::default(),
        inputs.strike,
        inputs.time,
        inputs.rate,
        purchase_price,
        option_type,
    );

    println!(
        "\n{} PnL vs purchase price ${:.2}:",
        option_type.label(),
        purchase_price
    );
    print!("Spot\\Vol |");
    for &vol in &pnl.vols {
        print!(" {:>6.2}", vol);
    }
    println!();
    print!("---------+");
    for _ in &pnl.vols {
        print!("-------");
    }
    println!();

    for (i, &spot) in pnl.spots.iter().enumerate() {
        print!(" {:>7.2} |", spot);
        for j in 0..pnl.vols.len() {
            print!(" {:>6.1}", pnl.pnl[[i, j]]);
        }
        println!();
    }

    if let Some(path) = std::env::args().nth(1) {
        let report = ScenarioReport {
            inputs,
            option_type,
            purchase_price,
            call_price,
            put_price,
            greeks,
            pnl,
        };
        match write_report(&path, &report) {
            Ok(()) => tracing::info!("wrote scenario report to {}", path),
            Err(e) => {
                eprintln!("Could not write report: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("\n--- Done ---");
}
