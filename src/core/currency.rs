use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Egyptian Pound (2 decimal places, piastres)
    EGP,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::EGP => 2,
        }
    }

    /// Local symbol shown after an amount
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EGP => "ج.م",
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Rounds to the currency scale and pads, e.g. `0.00`, for API output
    pub fn to_fixed(&self, amount: Decimal) -> String {
        format!("{:.width$}", self.round(amount), width = self.scale() as usize)
    }

    /// Formats an amount at the currency scale, e.g. `19,131.94 ج.م`
    pub fn format_amount(&self, amount: Decimal) -> String {
        self.format_with_scale(amount, self.scale())
    }

    /// Formats an amount without fractional digits, e.g. `725,000 ج.م`
    pub fn format_whole(&self, amount: Decimal) -> String {
        self.format_with_scale(amount, 0)
    }

    /// Formats an amount rounded to `scale` places with thousands separators
    pub fn format_with_scale(&self, amount: Decimal, scale: u32) -> String {
        let mut rounded = amount.round_dp(scale);
        if rounded.is_zero() {
            // drop the sign of -0.00
            rounded = Decimal::ZERO;
        }

        let plain = format!("{:.width$}", rounded, width = scale as usize);
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let mut out = String::from(sign);
        out.push_str(&group_thousands(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out.push(' ');
        out.push_str(self.symbol());
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::EGP => write!(f, "EGP"),
        }
    }
}
