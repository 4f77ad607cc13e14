use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::modules::financing::models::{Category, FinancingRequest, FinancingResult};

const MONTHS_PER_YEAR: i32 = 12;

/// Flat-rate installment calculator for the three vehicle tiers
///
/// Interest is simple interest charged once over the whole term:
/// `principal * rate * years`, added to the principal and split evenly over
/// `years * 12` months. There is no declining-balance recalculation.
pub struct InstallmentCalculator;

impl InstallmentCalculator {
    /// Compute price, financed principal and monthly payment for a request
    ///
    /// Never fails. An unresolved category prices at 0, a down payment above
    /// the price clamps the principal to 0, and any arithmetic failure (a
    /// zero-year term, decimal overflow) yields [`FinancingResult::fallback`].
    /// Negative down payments and terms are not rejected here; range checks
    /// belong to the form.
    pub fn compute(request: FinancingRequest) -> FinancingResult {
        let vehicle_price = Category::price_of(request.category);

        match Self::try_compute(vehicle_price, &request) {
            Some(result) => {
                debug!(
                    category = ?request.category,
                    principal = %result.financed_principal,
                    monthly_payment = %result.monthly_payment,
                    "Computed installment"
                );
                result
            }
            None => {
                warn!(
                    category = ?request.category,
                    down_payment = %request.down_payment,
                    term_years = request.term_years,
                    rate = %request.annual_interest_rate_percent,
                    "Installment calculation failed, returning zero result"
                );
                FinancingResult::fallback(vehicle_price)
            }
        }
    }

    /// Formula with checked arithmetic; `None` on division by zero or overflow
    fn try_compute(vehicle_price: Decimal, request: &FinancingRequest) -> Option<FinancingResult> {
        let rate_fraction = request
            .annual_interest_rate_percent
            .checked_div(Decimal::ONE_HUNDRED)?;

        let financed_principal = vehicle_price
            .checked_sub(request.down_payment)?
            .max(Decimal::ZERO);

        let years = Decimal::from(request.term_years);
        let total_interest = financed_principal
            .checked_mul(rate_fraction)?
            .checked_mul(years)?;
        let total_repayment = financed_principal.checked_add(total_interest)?;

        let installment_count = request.term_years.checked_mul(MONTHS_PER_YEAR)?;
        let monthly_payment = total_repayment.checked_div(Decimal::from(installment_count))?;

        Some(FinancingResult {
            vehicle_price,
            financed_principal,
            monthly_payment,
            total_interest,
            total_repayment,
            installment_count,
            fallback: false,
        })
    }
}
