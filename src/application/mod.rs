//! Application layer orchestrating a payment submission.
//!
//! `PaymentSubmitter` runs the business rules, builds the payload and dispatches it
//! through a `PaymentGateway`, folding every outcome into a `PaymentResult`.

pub mod submitter;
