//! Profit/loss grid
//!
//! Evaluates option price minus purchase price over a spot x vol grid.
//! The grid is small (8x8 by default) and recomputed in full on every
//! interaction; there is no caching.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::linspace;
use crate::core::OptionType;
use crate::models::black_scholes;

/// Grid ranges for the PnL heatmap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnlGridConfig {
    /// Spot axis (min, max)
    pub spot_range: (f64, f64),
    /// Vol axis (min, max)
    pub vol_range: (f64, f64),
    /// Number of spot samples (rows)
    pub n_spots: usize,
    /// Number of vol samples (columns)
    pub n_vols: usize,
}

impl Default for PnlGridConfig {
    fn default() -> Self {
        Self {
            spot_range: (50.0, 150.0),
            vol_range: (0.1, 0.6),
            n_spots: 8,
            n_vols: 8,
        }
    }
}

/// Profit/loss matrix over (spot, vol) scenarios
///
/// `pnl[[i, j]]` is the Black-Scholes price at `(spots[i], vols[j])`
/// minus the purchase price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnlGrid {
    /// Spot axis (rows)
    pub spots: Vec<f64>,
    /// Vol axis (columns)
    pub vols: Vec<f64>,
    /// PnL values, spots x vols
    pub pnl: Array2<f64>,
}

impl PnlGrid {
    /// Evaluate the grid for a fixed strike, maturity, and rate.
    pub fn compute(
        config: &PnlGridConfig,
        strike: f64,
        time: f64,
        rate: f64,
        purchase_price: f64,
        option_type: OptionType,
    ) -> Self {
        let spots = linspace(config.spot_range.0, config.spot_range.1, config.n_spots);
        let vols = linspace(config.vol_range.0, config.vol_range.1, config.n_vols);

        let mut pnl = Array2::zeros((spots.len(), vols.len()));
        for (i, &spot) in spots.iter().enumerate() {
            for (j, &vol) in vols.iter().enumerate() {
                let price = black_scholes::price(spot, strike, rate, vol, time, option_type);
                pnl[[i, j]] = price - purchase_price;
            }
        }

        tracing::debug!(
            "computed {}x{} PnL grid for {} K={} T={}",
            spots.len(),
            vols.len(),
            option_type.label(),
            strike,
            time
        );

        Self { spots, vols, pnl }
    }

    /// Largest |pnl| in the grid (used to center the color scale at 0)
    pub fn max_abs(&self) -> f64 {
        self.pnl.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid(option_type: OptionType) -> PnlGrid {
        PnlGrid::compute(
            &PnlGridConfig::default(),
            100.0,
            1.0,
            0.05,
            10.0,
            option_type,
        )
    }

    #[test]
    fn test_grid_shape_and_axes() {
        let grid = default_grid(OptionType::Call);
        assert_eq!(grid.pnl.dim(), (8, 8));
        assert_eq!(grid.spots.len(), 8);
        assert_eq!(grid.vols.len(), 8);
        assert!((grid.spots[0] - 50.0).abs() < 1e-12);
        assert!((grid.spots[7] - 150.0).abs() < 1e-12);
        assert!((grid.vols[0] - 0.1).abs() < 1e-12);
        assert!((grid.vols[7] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_cells_are_price_minus_purchase() {
        let grid = default_grid(OptionType::Put);
        for (i, &spot) in grid.spots.iter().enumerate() {
            for (j, &vol) in grid.vols.iter().enumerate() {
                let expected = black_scholes::price(spot, 100.0, 0.05, vol, 1.0, OptionType::Put)
                    - 10.0;
                assert!((grid.pnl[[i, j]] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_call_pnl_monotone_in_spot() {
        let grid = default_grid(OptionType::Call);
        for j in 0..grid.vols.len() {
            for i in 1..grid.spots.len() {
                assert!(grid.pnl[[i, j]] >= grid.pnl[[i - 1, j]] - 1e-9);
            }
        }
    }

    #[test]
    fn test_max_abs() {
        let grid = default_grid(OptionType::Call);
        let expected = grid
            .pnl
            .iter()
            .map(|v| v.abs())
            .fold(f64::MIN, f64::max);
        assert!((grid.max_abs() - expected).abs() < 1e-12);
        assert!(grid.max_abs() > 0.0);
    }

    #[test]
    fn test_custom_config() {
        let config = PnlGridConfig {
            spot_range: (80.0, 120.0),
            vol_range: (0.2, 0.4),
            n_spots: 5,
            n_vols: 3,
        };
        let grid = PnlGrid::compute(&config, 100.0, 0.5, 0.02, 4.0, OptionType::Call);
        assert_eq!(grid.pnl.dim(), (5, 3));
        assert!((grid.spots[4] - 120.0).abs() < 1e-12);
        assert!((grid.vols[2] - 0.4).abs() < 1e-12);
    }
}
