//! Domain layer: the payment request and result types, the business rules that
//! gate a request, the payload sent downstream, and the gateway port.

pub mod payload;
pub mod payment;
pub mod ports;
pub mod rules;
