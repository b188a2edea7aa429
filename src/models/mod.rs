//! Pricing models
//!
//! Implements:
//! - Black-Scholes (closed-form European pricing and Greeks)

pub mod black_scholes;

pub use black_scholes::*;
