use crate::domain::payload::PaymentPayload;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::{GatewayResponse, PaymentGateway, PaymentGatewayBox, TransportError};
use crate::domain::rules;
use crate::infrastructure::mock_gateway::MockGateway;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upper bound on a single dispatch.
pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Validates payment requests and hands accepted ones to a gateway.
///
/// Every outcome, including transport failures, comes back as a
/// [`PaymentResult`]; `submit` never returns an error.
pub struct PaymentSubmitter {
    gateway: PaymentGatewayBox,
    timeout: Duration,
}

impl PaymentSubmitter {
    /// Creates a submitter dispatching through `gateway` with the default timeout.
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_DISPATCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the business rules, builds the payload and dispatches it.
    pub async fn submit(&self, request: &PaymentRequest) -> PaymentResult {
        if let Err(violation) = rules::validate(request) {
            debug!(%violation, "payment rejected by business rules");
            return violation.into();
        }

        let payload = PaymentPayload::from_request(request);

        info!(
            "Attempting to process payment of {} {}...",
            request.currency(),
            request.amount()
        );

        match self.dispatch(request.endpoint(), &payload).await {
            Ok(GatewayResponse::Accepted { transaction_id }) => {
                PaymentResult::Success { transaction_id }
            }
            Ok(GatewayResponse::Rejected { reason }) => PaymentResult::Failed { error: reason },
            Err(e) => {
                warn!(error = %e, "payment dispatch failed");
                PaymentResult::Error {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        payload: &PaymentPayload<'_>,
    ) -> Result<GatewayResponse, TransportError> {
        tokio::time::timeout(self.timeout, self.gateway.dispatch(endpoint, payload))
            .await
            .map_err(|_| TransportError::Timeout(self.timeout))?
    }
}

impl Default for PaymentSubmitter {
    fn default() -> Self {
        Self::new(Box::new(MockGateway::new()))
    }
}

/// Submits one payment through the mock gateway.
pub async fn submit_payment(
    card_number: &str,
    expiration_date: &str,
    amount: Decimal,
    currency: &str,
    endpoint_url: &str,
) -> PaymentResult {
    let request = PaymentRequest::new(card_number, expiration_date, amount, currency, endpoint_url);
    PaymentSubmitter::default().submit(&request).await
}
