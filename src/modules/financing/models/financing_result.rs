use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outputs of one installment calculation
///
/// Amounts are exact; rounding happens only when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingResult {
    pub vehicle_price: Decimal,
    /// `vehicle_price - down_payment`, never below zero
    pub financed_principal: Decimal,
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
    pub total_repayment: Decimal,
    /// `term_years * 12`, or 0 on fallback
    pub installment_count: i32,
    /// True when the zero-result fallback replaced a failed calculation
    pub fallback: bool,
}

impl FinancingResult {
    /// Zero result used when the arithmetic cannot be carried out.
    /// The looked-up price is kept, everything else collapses to zero.
    pub fn fallback(vehicle_price: Decimal) -> Self {
        Self {
            vehicle_price,
            financed_principal: Decimal::ZERO,
            monthly_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_repayment: Decimal::ZERO,
            installment_count: 0,
            fallback: true,
        }
    }
}
