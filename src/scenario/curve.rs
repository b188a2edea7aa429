//! Greek sensitivity curve
//!
//! Evaluates a selected Greek over a range of spot prices for plotting.

use serde::{Deserialize, Serialize};

use super::linspace;
use crate::core::{GreekKind, OptionType};
use crate::models::black_scholes;

/// Spot range for the sensitivity curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Spot axis (min, max)
    pub spot_range: (f64, f64),
    /// Number of samples
    pub n_samples: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            spot_range: (50.0, 150.0),
            n_samples: 100,
        }
    }
}

/// A Greek evaluated over linearly spaced spots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreekCurve {
    /// Which Greek this curve shows
    pub greek: GreekKind,
    /// Spot axis
    pub spots: Vec<f64>,
    /// Greek values, parallel to `spots`
    pub values: Vec<f64>,
}

impl GreekCurve {
    /// Evaluate the curve for fixed strike, maturity, rate, and vol.
    pub fn compute(
        config: &CurveConfig,
        strike: f64,
        time: f64,
        rate: f64,
        vol: f64,
        greek: GreekKind,
        option_type: OptionType,
    ) -> Self {
        let spots = linspace(config.spot_range.0, config.spot_range.1, config.n_samples);
        let values = spots
            .iter()
            .map(|&spot| {
                let g = black_scholes::greeks(spot, strike, rate, vol, time, option_type);
                greek.extract(&g)
            })
            .collect();

        Self {
            greek,
            spots,
            values,
        }
    }

    /// (spot, value) pairs for plotting
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.spots
            .iter()
            .zip(&self.values)
            .map(|(&s, &v)| [s, v])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Greeks;

    fn default_curve(greek: GreekKind, option_type: OptionType) -> GreekCurve {
        GreekCurve::compute(
            &CurveConfig::default(),
            100.0,
            1.0,
            0.05,
            0.2,
            greek,
            option_type,
        )
    }

    #[test]
    fn test_curve_shape() {
        let curve = default_curve(GreekKind::Delta, OptionType::Call);
        assert_eq!(curve.spots.len(), 100);
        assert_eq!(curve.values.len(), 100);
        assert!((curve.spots[0] - 50.0).abs() < 1e-12);
        assert!((curve.spots[99] - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_curve_matches_pointwise_greeks() {
        for greek in GreekKind::ALL {
            let curve = default_curve(greek, OptionType::Put);
            for (&spot, &value) in curve.spots.iter().zip(&curve.values) {
                let g: Greeks =
                    black_scholes::greeks(spot, 100.0, 0.05, 0.2, 1.0, OptionType::Put);
                assert!((value - greek.extract(&g)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_call_delta_curve_increasing() {
        let curve = default_curve(GreekKind::Delta, OptionType::Call);
        for w in curve.values.windows(2) {
            assert!(w[1] >= w[0] - 1e-9);
        }
        // Deep OTM near zero, deep ITM near one
        assert!(curve.values[0] < 0.1);
        assert!(curve.values[99] > 0.9);
    }

    #[test]
    fn test_points_are_parallel_arrays() {
        let curve = default_curve(GreekKind::Vega, OptionType::Call);
        let points = curve.points();
        assert_eq!(points.len(), 100);
        assert_eq!(points[3][0], curve.spots[3]);
        assert_eq!(points[3][1], curve.values[3]);
    }
}
