//! Vehicle installment calculator
//!
//! Computes flat-rate monthly installments for three fixed vehicle price
//! tiers and exposes the calculation over a small JSON API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::financing;
pub use modules::financing::{Category, FinancingRequest, FinancingResult, InstallmentCalculator};
