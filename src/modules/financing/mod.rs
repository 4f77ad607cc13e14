pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure_financing_routes;
pub use models::{Category, FinancingRequest, FinancingResult, FormConstraints};
pub use services::{InstallmentCalculator, QuoteService};
