//! Core data types for the pricing dashboard
//!
//! Defines fundamental types:
//! - OptionType: Call/Put with payoff helpers
//! - MarketInputs: the five scalar pricing parameters
//! - Greeks: first and second order sensitivities
//! - GreekKind: selector for the sensitivity curve

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
