pub mod installment_calculator;
pub mod quote_service;

pub use installment_calculator::InstallmentCalculator;
pub use quote_service::{FormattedAmounts, Quote, QuoteService};
