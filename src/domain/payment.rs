use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A single payment submission.
///
/// Card number and expiration date are opaque: they are carried through to the
/// payload untouched. Fields are private so a request cannot change once built.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    card_number: String,
    expiration_date: String,
    #[serde(deserialize_with = "deserialize_amount")]
    amount: Decimal,
    currency: String,
    endpoint: String,
}

/// Parses a decimal amount, refusing any value `Decimal` would have to round.
pub fn parse_amount(value: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str_exact(value)
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_amount(&value).map_err(serde::de::Error::custom)
}

impl PaymentRequest {
    pub fn new(
        card_number: impl Into<String>,
        expiration_date: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration_date: expiration_date.into(),
            amount,
            currency: currency.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Normalized outcome of a submission.
///
/// Serializes with a `status` tag, e.g. `{"status":"success","transaction_id":"..."}`.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentResult {
    /// The endpoint accepted the payment.
    Success { transaction_id: String },
    /// A business rule or the endpoint rejected the payment.
    Failed { error: String },
    /// Communicating with the endpoint failed.
    Error { error: String },
}

impl PaymentResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentResult::Success { .. })
    }

    /// The error text for `Failed` and `Error` outcomes.
    pub fn error(&self) -> Option<&str> {
        match self {
            PaymentResult::Success { .. } => None,
            PaymentResult::Failed { error } | PaymentResult::Error { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_accessors() {
        let request = PaymentRequest::new(
            "4111111111111111",
            "12/26",
            dec!(50.00),
            "USD",
            "https://api.example.com/pay",
        );
        assert_eq!(request.card_number(), "4111111111111111");
        assert_eq!(request.expiration_date(), "12/26");
        assert_eq!(request.amount(), dec!(50.00));
        assert_eq!(request.currency(), "USD");
        assert_eq!(request.endpoint(), "https://api.example.com/pay");
    }

    #[test]
    fn test_parse_amount_keeps_scale() {
        let amount = parse_amount("50.00").unwrap();
        assert_eq!(amount, dec!(50.00));
        assert_eq!(amount.to_string(), "50.00");
        assert_eq!(parse_amount("-1.00").unwrap().to_string(), "-1.00");
    }

    #[test]
    fn test_parse_amount_rejects_rounding() {
        assert!(parse_amount("0.50000000000000000000000000001").is_err());
        assert!(parse_amount("not_a_number").is_err());
    }

    #[test]
    fn test_result_serialization() {
        let success = PaymentResult::Success {
            transaction_id: "tx_12345abc".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&success).unwrap(),
            r#"{"status":"success","transaction_id":"tx_12345abc"}"#
        );

        let failed = PaymentResult::Failed {
            error: "Invalid API endpoint".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"status":"failed","error":"Invalid API endpoint"}"#
        );

        let error = PaymentResult::Error {
            error: "connection refused".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"status":"error","error":"connection refused"}"#
        );
    }

    #[test]
    fn test_result_error_text() {
        let success = PaymentResult::Success {
            transaction_id: "tx_1".to_string(),
        };
        assert!(success.is_success());
        assert_eq!(success.error(), None);

        let failed = PaymentResult::Failed {
            error: "nope".to_string(),
        };
        assert!(!failed.is_success());
        assert_eq!(failed.error(), Some("nope"));
    }
}
