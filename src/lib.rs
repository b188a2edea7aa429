//! # Black-Scholes Option Pricing Dashboard
//!
//! Closed-form European option pricing with an interactive GUI for
//! exploring how price and risk sensitivities respond to market
//! parameters.
//!
//! ## Overview
//!
//! The computational core is two pure functions — price and Greeks —
//! evaluated pointwise or over small parameter grids. Everything is
//! stateless and deterministic; the dashboard recomputes the full set of
//! outputs on every interaction.
//!
//! ## Key Components
//!
//! - **Black-Scholes**: call/put pricing and Greeks (Delta, Gamma, Vega,
//!   Theta, Rho) via the normal CDF
//! - **Scenario grids**: profit/loss over a spot x vol grid, and a
//!   selected Greek over a range of spots
//! - **Binaries**: `bs_gui` (egui dashboard) and `cli` (console report)
//!
//! ## Usage
//!
//! ```rust
//! use bs_dashboard::prelude::*;
//!
//! let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! inputs.validate().unwrap();
//!
//! let call = inputs.price(OptionType::Call);
//! let greeks = inputs.greeks(OptionType::Call);
//! assert!((call - 10.45).abs() < 0.01);
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Implied-volatility root finding
//! - American exercise or PDE/lattice methods
//! - Market-data ingestion or persistence

pub mod core;
pub mod models;
pub mod scenario;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{DashError, DashResult, GreekKind, Greeks, MarketInputs, OptionType};

    // Black-Scholes
    pub use crate::models::{greeks as bs_greeks, norm_cdf, norm_pdf, price as bs_price};

    // Scenario grids
    pub use crate::scenario::{linspace, CurveConfig, GreekCurve, PnlGrid, PnlGridConfig};
}

// Re-export main types at crate root
pub use crate::core::{DashError, DashResult};
pub use crate::scenario::{GreekCurve, PnlGrid};
