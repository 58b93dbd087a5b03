use super::payment::PaymentRequest;
use rust_decimal::Decimal;
use serde::Serialize;

/// Body sent to the payment endpoint.
///
/// Borrows from the request it was built from. The amount goes out as a decimal
/// string with its scale intact (`50.00` stays `"50.00"`).
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentPayload<'a> {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: &'a str,
    pub payment_method: PaymentMethod<'a>,
}

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodType {
    Card,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentMethod<'a> {
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    pub fields: CardFields<'a>,
}

/// Raw card data. CVV is left to an external tokenization step.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CardFields<'a> {
    pub number: &'a str,
    pub expiration_date: &'a str,
}

impl<'a> PaymentPayload<'a> {
    pub fn from_request(request: &'a PaymentRequest) -> Self {
        Self {
            amount: request.amount(),
            currency: request.currency(),
            payment_method: PaymentMethod {
                method_type: PaymentMethodType::Card,
                fields: CardFields {
                    number: request.card_number(),
                    expiration_date: request.expiration_date(),
                },
            },
        }
    }
}
