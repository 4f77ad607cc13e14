use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, FinancingRequest};
use crate::core::{AppError, Result};

/// Range and default of a decimal input widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalField {
    pub min: Decimal,
    /// `None` for an open upper bound
    pub max: Option<Decimal>,
    pub default: Decimal,
    pub step: Decimal,
}

impl DecimalField {
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Range and default of an integer slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerField {
    pub min: i32,
    pub max: i32,
    pub default: i32,
    pub step: i32,
}

impl IntegerField {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Input limits and defaults of the financing form
///
/// These are enforced at the HTTP boundary only. The calculator itself stays
/// permissive so that a caller with its own widgets can pass anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConstraints {
    pub default_category: Category,
    pub down_payment: DecimalField,
    pub term_years: IntegerField,
    pub annual_interest_rate_percent: DecimalField,
}

impl Default for FormConstraints {
    fn default() -> Self {
        Self {
            default_category: Category::Tier1,
            down_payment: DecimalField {
                min: Decimal::ZERO,
                max: None,
                default: Decimal::from(250_000),
                step: Decimal::from(5_000),
            },
            term_years: IntegerField {
                min: 1,
                max: 7,
                default: 3,
                step: 1,
            },
            annual_interest_rate_percent: DecimalField {
                min: Decimal::ZERO,
                max: Some(Decimal::from(30)),
                default: Decimal::from(15),
                step: Decimal::new(5, 1),
            },
        }
    }
}

impl FormConstraints {
    /// Request the form shows before the user touches anything
    pub fn default_request(&self) -> FinancingRequest {
        FinancingRequest::new(
            self.default_category,
            self.down_payment.default,
            self.term_years.default,
            self.annual_interest_rate_percent.default,
        )
    }

    /// Checks a request against the widget ranges
    ///
    /// Steps are not enforced; a typed down payment need not be a multiple
    /// of 5000.
    pub fn validate(&self, request: &FinancingRequest) -> Result<()> {
        if request.category.is_none() {
            return Err(AppError::validation("Category must be one of tier1, tier2, tier3"));
        }

        if !self.down_payment.contains(request.down_payment) {
            return Err(AppError::validation(format!(
                "down_payment must be at least {}, got {}",
                self.down_payment.min, request.down_payment
            )));
        }

        if !self.term_years.contains(request.term_years) {
            return Err(AppError::validation(format!(
                "term_years must be between {} and {}, got {}",
                self.term_years.min, self.term_years.max, request.term_years
            )));
        }

        if !self
            .annual_interest_rate_percent
            .contains(request.annual_interest_rate_percent)
        {
            let max = self
                .annual_interest_rate_percent
                .max
                .map(|m| m.to_string())
                .unwrap_or_else(|| "unbounded".to_string());
            return Err(AppError::validation(format!(
                "annual_interest_rate_percent must be between {} and {}, got {}",
                self.annual_interest_rate_percent.min, max, request.annual_interest_rate_percent
            )));
        }

        Ok(())
    }
}
