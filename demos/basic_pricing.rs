//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use bs_dashboard::prelude::*;

fn main() {
    // Option parameters
    let inputs = MarketInputs::new(
        100.0, // spot
        105.0, // strike
        0.25,  // 3 months
        0.05,  // 5% risk-free rate
        0.20,  // 20% volatility
    );
    inputs.validate().expect("inputs in model domain");

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", inputs.spot);
    println!("Strike:   ${:.2}", inputs.strike);
    println!("Time:     {:.2} years ({:.0} days)", inputs.time, inputs.time * 365.0);
    println!("Rate:     {:.1}%", inputs.rate * 100.0);
    println!("Vol:      {:.1}%\n", inputs.vol * 100.0);

    // Price call and put
    let call_price = inputs.price(OptionType::Call);
    let put_price = inputs.price(OptionType::Put);
    println!("Call Price: ${:.4}", call_price);
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = inputs.spot - inputs.strike * inputs.discount_factor();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    // Calculate Greeks for the call
    println!("\n=== Greeks (Call) ===\n");
    let greeks = inputs.greeks(OptionType::Call);
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.4}", greeks.gamma);
    println!("Vega:   {:.4}", greeks.vega);
    println!("Theta:  {:.4} (per day: {:.4})", greeks.theta, greeks.theta / 365.0);
    println!("Rho:    {:.4}", greeks.rho);

    // Sweep a Greek across spot prices
    println!("\n=== Delta vs Spot ===\n");
    let curve = GreekCurve::compute(
        &CurveConfig {
            spot_range: (80.0, 130.0),
            n_samples: 11,
        },
        inputs.strike,
        inputs.time,
        inputs.rate,
        inputs.vol,
        GreekKind::Delta,
        OptionType::Call,
    );
    for [spot, delta] in curve.points() {
        println!("  S = {:>6.1}  Delta = {:.4}", spot, delta);
    }
}
