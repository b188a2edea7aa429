//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation (Delta, Gamma, Vega, Theta, Rho)
//!
//! The closed form is only defined for positive time and vol; at the
//! degenerate boundary the functions return the exact limits (intrinsic
//! value at expiry, discounted forward intrinsic at zero vol) instead of
//! letting NaN leak into the plots.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{Greeks, MarketInputs, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Black-Scholes European option price
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> f64 {
    if time <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    if vol <= 0.0 {
        // Zero vol = discounted intrinsic on the forward
        let forward = spot * (rate * time).exp();
        let df = (-rate * time).exp();
        return df * option_type.intrinsic(forward, strike);
    }

    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Black-Scholes Greeks
///
/// Raw partial derivatives; see [`Greeks`] for units.
pub fn greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> Greeks {
    if time <= 0.0 || vol <= 0.0 {
        // At expiry or zero vol the price is piecewise linear in spot
        let delta = match option_type {
            OptionType::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        };
        return Greeks::new(delta, 0.0, 0.0, 0.0, 0.0);
    }

    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    // Delta
    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma (same for call and put)
    let gamma = pdf_d1 / (spot * vol * sqrt_t);

    // Vega (same for call and put)
    let vega = spot * pdf_d1 * sqrt_t;

    // Theta (per year)
    let term1 = -spot * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = match option_type {
        OptionType::Call => term1 - rate * strike * df * norm_cdf(d2),
        OptionType::Put => term1 + rate * strike * df * norm_cdf(-d2),
    };

    // Rho
    let rho = match option_type {
        OptionType::Call => strike * time * df * norm_cdf(d2),
        OptionType::Put => -strike * time * df * norm_cdf(-d2),
    };

    Greeks::new(delta, gamma, theta, vega, rho)
}

impl MarketInputs {
    /// Black-Scholes price for these inputs
    pub fn price(&self, option_type: OptionType) -> f64 {
        price(
            self.spot,
            self.strike,
            self.rate,
            self.vol,
            self.time,
            option_type,
        )
    }

    /// Black-Scholes Greeks for these inputs
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        greeks(
            self.spot,
            self.strike,
            self.rate,
            self.vol,
            self.time,
            option_type,
        )
    }
}
