//! Scenario evaluation
//!
//! Sweeps the pricing model over parameter grids for visualization:
//! - PnlGrid: profit/loss over a spot x vol grid (heatmap)
//! - GreekCurve: a selected Greek over a range of spots (line chart)

pub mod curve;
pub mod pnl;

pub use curve::*;
pub use pnl::*;

/// n evenly spaced values from a to b inclusive
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            (0..n).map(|i| a + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        let xs = linspace(50.0, 150.0, 8);
        assert_eq!(xs.len(), 8);
        assert!((xs[0] - 50.0).abs() < 1e-12);
        assert!((xs[7] - 150.0).abs() < 1e-12);

        // Even spacing
        let step = xs[1] - xs[0];
        for w in xs.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }
}
