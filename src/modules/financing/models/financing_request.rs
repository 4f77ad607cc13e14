use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// Inputs of one installment calculation
///
/// The calculator accepts any values here. Range limits belong to the form
/// (see [`FormConstraints`](super::FormConstraints)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingRequest {
    /// Selected tier; `None` when the selection could not be resolved
    pub category: Option<Category>,
    pub down_payment: Decimal,
    pub term_years: i32,
    /// Percentage, so `15` means 15% per year
    pub annual_interest_rate_percent: Decimal,
}

impl FinancingRequest {
    pub fn new(
        category: Category,
        down_payment: Decimal,
        term_years: i32,
        annual_interest_rate_percent: Decimal,
    ) -> Self {
        Self {
            category: Some(category),
            down_payment,
            term_years,
            annual_interest_rate_percent,
        }
    }

    /// Builds a request from the raw selector label
    pub fn from_selection(
        selection: &str,
        down_payment: Decimal,
        term_years: i32,
        annual_interest_rate_percent: Decimal,
    ) -> Self {
        Self {
            category: Category::resolve(selection),
            down_payment,
            term_years,
            annual_interest_rate_percent,
        }
    }
}
