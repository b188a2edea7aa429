//! Option Greeks
//!
//! First and second order sensitivities for options.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
///
/// All values are raw partial derivatives of the option price: Theta is
/// per year, Vega per unit of vol (1.0 = 100 vol points), Rho per unit
/// of rate. Divide by 365 / 100 / 100 for the per-day / per-1% trader
/// conventions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: dV/dt (time decay, per year)
    pub theta: f64,
    /// Vega: dV/dσ (sensitivity to volatility)
    pub vega: f64,
    /// Rho: dV/dr (sensitivity to interest rate)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }
}

/// Which Greek to plot on the sensitivity curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GreekKind {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl GreekKind {
    /// All kinds, in display order
    pub const ALL: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Vega,
        GreekKind::Theta,
        GreekKind::Rho,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GreekKind::Delta => "Delta",
            GreekKind::Gamma => "Gamma",
            GreekKind::Vega => "Vega",
            GreekKind::Theta => "Theta",
            GreekKind::Rho => "Rho",
        }
    }

    /// Pull this Greek out of a computed set
    pub fn extract(&self, greeks: &Greeks) -> f64 {
        match self {
            GreekKind::Delta => greeks.delta,
            GreekKind::Gamma => greeks.gamma,
            GreekKind::Vega => greeks.vega,
            GreekKind::Theta => greeks.theta,
            GreekKind::Rho => greeks.rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        let g = Greeks::new(0.5, 0.02, -6.0, 37.0, 53.0);
        assert_eq!(GreekKind::Delta.extract(&g), 0.5);
        assert_eq!(GreekKind::Gamma.extract(&g), 0.02);
        assert_eq!(GreekKind::Theta.extract(&g), -6.0);
        assert_eq!(GreekKind::Vega.extract(&g), 37.0);
        assert_eq!(GreekKind::Rho.extract(&g), 53.0);
    }

    #[test]
    fn test_labels_unique() {
        for (i, a) in GreekKind::ALL.iter().enumerate() {
            for b in GreekKind::ALL.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
