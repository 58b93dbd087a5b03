//! Static business rules applied before any call to the payment endpoint.

use super::payment::{PaymentRequest, PaymentResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Amounts must be strictly greater than this.
pub const MINIMUM_AMOUNT: Decimal = dec!(0.50);

pub const SUPPORTED_CURRENCIES: [&str; 3] = ["EUR", "USD", "GBP"];

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RuleViolation {
    #[error("Invalid amount: {0} is below the minimum threshold.")]
    InvalidAmount(Decimal),
    #[error("Invalid currency: {0} not supported.")]
    UnsupportedCurrency(String),
}

pub fn is_amount_valid(amount: Decimal) -> bool {
    amount > MINIMUM_AMOUNT
}

/// Case-sensitive membership test.
pub fn is_currency_supported(currency: &str) -> bool {
    SUPPORTED_CURRENCIES.contains(&currency)
}

/// Checks the amount, then the currency, stopping at the first violation.
pub fn validate(request: &PaymentRequest) -> Result<(), RuleViolation> {
    if !is_amount_valid(request.amount()) {
        return Err(RuleViolation::InvalidAmount(request.amount()));
    }
    if !is_currency_supported(request.currency()) {
        return Err(RuleViolation::UnsupportedCurrency(
            request.currency().to_string(),
        ));
    }
    Ok(())
}

impl From<RuleViolation> for PaymentResult {
    fn from(violation: RuleViolation) -> Self {
        PaymentResult::Failed {
            error: violation.to_string(),
        }
    }
}
