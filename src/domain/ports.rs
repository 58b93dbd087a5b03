use super::payload::PaymentPayload;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// What the endpoint said about a well-formed request.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GatewayResponse {
    Accepted { transaction_id: String },
    Rejected { reason: String },
}

/// Failure to talk to the endpoint at all.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connection(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn dispatch(
        &self,
        endpoint: &str,
        payload: &PaymentPayload<'_>,
    ) -> Result<GatewayResponse, TransportError>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
