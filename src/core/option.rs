//! Option type and market inputs
//!
//! A European option evaluation is fully described by the five scalar
//! market parameters plus the option type (call/put).

use serde::{Deserialize, Serialize};

use crate::core::{DashError, DashResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

/// Market parameters for a single European option evaluation.
///
/// Times are year fractions, rate and vol are annualized decimals
/// (0.05 = 5%, 0.2 = 20% vol).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub time: f64,
    /// Risk-free rate (continuously compounded)
    pub rate: f64,
    /// Volatility
    pub vol: f64,
}

impl MarketInputs {
    pub fn new(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            time,
            rate,
            vol,
        }
    }

    /// Check that the inputs are inside the model's domain.
    ///
    /// Spot, strike, time, and vol must be strictly positive and finite;
    /// the rate only needs to be finite (negative rates are valid).
    pub fn validate(&self) -> DashResult<()> {
        let finite = [self.spot, self.strike, self.time, self.rate, self.vol];
        if finite.iter().any(|x| !x.is_finite()) {
            return Err(DashError::invalid_input("Non-finite market parameter"));
        }
        if self.spot <= 0.0 {
            return Err(DashError::invalid_input("Non-positive spot"));
        }
        if self.strike <= 0.0 {
            return Err(DashError::invalid_input("Non-positive strike"));
        }
        if self.time <= 0.0 {
            return Err(DashError::invalid_input("Non-positive time to maturity"));
        }
        if self.vol <= 0.0 {
            return Err(DashError::invalid_input("Non-positive volatility"));
        }
        Ok(())
    }

    /// Simple moneyness S/K
    pub fn moneyness(&self) -> f64 {
        self.spot / self.strike
    }

    /// Log-moneyness: ln(K/S)
    pub fn log_moneyness(&self) -> f64 {
        (self.strike / self.spot).ln()
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }

    /// Forward price F = S * e^(rT)
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.time).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);

        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_validate_accepts_typical_inputs() {
        let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!(inputs.validate().is_ok());

        // Negative rates are fine
        let inputs = MarketInputs::new(100.0, 100.0, 1.0, -0.01, 0.2);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_inputs() {
        let base = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);

        let mut inputs = base;
        inputs.spot = 0.0;
        assert!(inputs.validate().is_err());

        let mut inputs = base;
        inputs.strike = -5.0;
        assert!(inputs.validate().is_err());

        let mut inputs = base;
        inputs.time = 0.0;
        assert!(inputs.validate().is_err());

        let mut inputs = base;
        inputs.vol = 0.0;
        assert!(inputs.validate().is_err());

        let mut inputs = base;
        inputs.rate = f64::NAN;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_forward_and_discount() {
        let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!((inputs.discount_factor() - (-0.05_f64).exp()).abs() < 1e-12);
        assert!((inputs.forward() - 100.0 * 0.05_f64.exp()).abs() < 1e-10);
        assert!((inputs.moneyness() - 1.0).abs() < 1e-12);
        assert!(inputs.log_moneyness().abs() < 1e-12);

        let itm = MarketInputs::new(110.0, 100.0, 1.0, 0.05, 0.2);
        assert!(itm.log_moneyness() < 0.0);
    }
}
