use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Currency, Result};
use crate::modules::financing::models::{FinancingRequest, FinancingResult, FormConstraints};
use crate::modules::financing::services::InstallmentCalculator;

/// Display strings for the three result cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedAmounts {
    pub vehicle_price: String,
    pub financed_principal: String,
    pub monthly_payment: String,
}

/// A validated calculation plus its display strings
#[derive(Debug, Clone)]
pub struct Quote {
    pub request: FinancingRequest,
    pub result: FinancingResult,
    pub formatted: FormattedAmounts,
}

/// Presentation-boundary service: validates form input, runs the calculator,
/// and formats the figures the way the result cards show them
#[derive(Debug, Clone, Copy)]
pub struct QuoteService {
    form: FormConstraints,
    currency: Currency,
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::new(FormConstraints::default(), Currency::EGP)
    }
}

impl QuoteService {
    pub fn new(form: FormConstraints, currency: Currency) -> Self {
        Self { form, currency }
    }

    pub fn form(&self) -> &FormConstraints {
        &self.form
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Quote a request that passed the form's range checks
    pub fn quote(&self, request: FinancingRequest) -> Result<Quote> {
        self.form.validate(&request)?;

        let result = InstallmentCalculator::compute(request);

        info!(
            category = ?request.category,
            term_years = request.term_years,
            monthly_payment = %self.currency.round(result.monthly_payment),
            "Quote computed"
        );

        Ok(Quote {
            request,
            result,
            formatted: self.format(&result),
        })
    }

    /// Price and principal as whole pounds, monthly payment to the piastre
    pub fn format(&self, result: &FinancingResult) -> FormattedAmounts {
        FormattedAmounts {
            vehicle_price: self.currency.format_whole(result.vehicle_price),
            financed_principal: self.currency.format_whole(result.financed_principal),
            monthly_payment: self.currency.format_amount(result.monthly_payment),
        }
    }
}
