use crate::domain::payload::PaymentPayload;
use crate::domain::ports::{GatewayResponse, PaymentGateway, TransportError};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The only endpoint the mock accepts.
pub const SENTINEL_ENDPOINT: &str = "https://api.example.com/pay";
pub const MOCK_TRANSACTION_ID: &str = "tx_12345abc";
pub const INVALID_ENDPOINT_REASON: &str = "Invalid API endpoint";

/// A gateway that never touches the network.
///
/// Accepts payments sent to [`SENTINEL_ENDPOINT`] with a fixed transaction id and
/// rejects everything else. Clones share the dispatch counter.
#[derive(Default, Clone)]
pub struct MockGateway {
    dispatched: Arc<AtomicUsize>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of payloads that reached this gateway.
    pub fn dispatch_count(&self) -> usize {
        self.dispatched.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn dispatch(
        &self,
        endpoint: &str,
        _payload: &PaymentPayload<'_>,
    ) -> Result<GatewayResponse, TransportError> {
        self.dispatched.fetch_add(1, Ordering::SeqCst);

        if endpoint == SENTINEL_ENDPOINT {
            Ok(GatewayResponse::Accepted {
                transaction_id: MOCK_TRANSACTION_ID.to_string(),
            })
        } else {
            Ok(GatewayResponse::Rejected {
                reason: INVALID_ENDPOINT_REASON.to_string(),
            })
        }
    }
}
