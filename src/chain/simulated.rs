//! Simulated transaction service
//!
//! Accepts every request, hands back a random transaction hash and, after a
//! delay, delivers the same events a real chain watcher would: a confirmed
//! status and, for deployments, `CollectionCreated`.

use super::{
    Address, ChainEvent, ConfigureTokenRequest, DeployCollectionRequest, SubmissionId,
    TransactionError, TransactionService, TxStatus, WalletSession,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Request accepted by the simulated chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedCall {
    Deploy(DeployCollectionRequest),
    Configure(ConfigureTokenRequest),
}

pub struct SimulatedChain {
    events: mpsc::UnboundedSender<ChainEvent>,
    confirm_delay: Duration,
    journal: Mutex<Vec<(SubmissionId, SimulatedCall)>>,
    fail_next: Mutex<Option<TransactionError>>,
}

impl SimulatedChain {
    /// Create the chain and the receiving end of its event stream.
    pub fn new(confirm_delay: Duration) -> (Self, mpsc::UnboundedReceiver<ChainEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let chain = Self {
            events,
            confirm_delay,
            journal: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        };
        (chain, rx)
    }

    /// Make the next submission fail with `error` instead of being accepted.
    pub fn fail_next(&self, error: TransactionError) {
        *self.fail_next.lock() = Some(error);
    }

    /// Every accepted call, oldest first
    pub fn journal(&self) -> Vec<(SubmissionId, SimulatedCall)> {
        self.journal.lock().clone()
    }

    fn accept(&self, call: SimulatedCall) -> Result<SubmissionId, TransactionError> {
        if let Some(error) = self.fail_next.lock().take() {
            return Err(error);
        }
        let id = random_tx_hash();
        self.journal.lock().push((id.clone(), call));
        Ok(id)
    }

    fn schedule(&self, submission: SubmissionId, created: Option<Address>) {
        let events = self.events.clone();
        let delay = self.confirm_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(ChainEvent::StatusChanged {
                submission: submission.clone(),
                status: TxStatus::Confirmed,
            });

            if let Some(collection) = created {
                debug!("Simulated CollectionCreated {} from {}", collection, submission);
                let _ = events.send(ChainEvent::CollectionCreated {
                    submission: Some(submission),
                    collection,
                });
            }
        });
    }
}

#[async_trait]
impl TransactionService for SimulatedChain {
    async fn deploy_collection(
        &self,
        request: &DeployCollectionRequest,
    ) -> Result<SubmissionId, TransactionError> {
        let id = self.accept(SimulatedCall::Deploy(request.clone()))?;
        let collection = Address(rand::random::<[u8; 20]>());
        info!(
            "Simulated deployNew on {} for '{}' -> {}",
            request.factory, request.name, id
        );
        self.schedule(id.clone(), Some(collection));
        Ok(id)
    }

    async fn configure_token(
        &self,
        request: &ConfigureTokenRequest,
    ) -> Result<SubmissionId, TransactionError> {
        let id = self.accept(SimulatedCall::Configure(request.clone()))?;
        info!(
            "Simulated configureToken({}) on {} -> {}",
            request.token_id, request.collection, id
        );
        self.schedule(id.clone(), None);
        Ok(id)
    }
}

fn random_tx_hash() -> SubmissionId {
    SubmissionId(format!("0x{}", hex::encode(rand::random::<[u8; 32]>())))
}

/// Wallet session with a fixed account, or none
#[derive(Debug, Clone, Default)]
pub struct StaticWallet {
    address: Option<Address>,
}

impl StaticWallet {
    pub fn connected(address: Address) -> Self {
        Self {
            address: Some(address),
        }
    }

    pub fn disconnected() -> Self {
        Self { address: None }
    }
}

impl WalletSession for StaticWallet {
    fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    fn current_address(&self) -> Option<Address> {
        self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deploy_request() -> DeployCollectionRequest {
        DeployCollectionRequest {
            factory: Address::ZERO,
            collection_uri: "data:application/json;base64,e30=".to_string(),
            creator_fee: 0,
            referral_fee: 0,
            name: "Test".to_string(),
            symbol: "T".to_string(),
            description: "D".to_string(),
            image: "http://i".to_string(),
            external_link: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_deploy_delivers_events_in_order() {
        let (chain, mut rx) = SimulatedChain::new(Duration::from_millis(1_000));
        let id = chain.deploy_collection(&deploy_request()).await.unwrap();
        assert!(id.as_str().starts_with("0x"));
        assert_eq!(id.as_str().len(), 66);

        assert_eq!(
            rx.recv().await,
            Some(ChainEvent::StatusChanged {
                submission: id.clone(),
                status: TxStatus::Confirmed
            })
        );
        match rx.recv().await {
            Some(ChainEvent::CollectionCreated { submission, .. }) => {
                assert_eq!(submission, Some(id.clone()))
            }
            other => panic!("unexpected event: {:?}", other),
        }

        let journal = chain.journal();
        assert_eq!(journal.len(), 1);
        assert_eq!(journal[0].0, id);
    }

    #[tokio::test]
    async fn test_fail_next() {
        let (chain, _rx) = SimulatedChain::new(Duration::from_millis(10));
        chain.fail_next(TransactionError::Rejected("User rejected the request.".into()));

        let err = chain.deploy_collection(&deploy_request()).await.unwrap_err();
        assert_eq!(err.summary(), "User rejected the request");
        assert!(chain.journal().is_empty());

        // Only the next call fails
        assert!(chain.deploy_collection(&deploy_request()).await.is_ok());
    }

    #[test]
    fn test_static_wallet() {
        let wallet = StaticWallet::disconnected();
        assert!(!wallet.is_connected());
        assert_eq!(wallet.current_address(), None);

        let wallet = StaticWallet::connected(Address([7u8; 20]));
        assert!(wallet.is_connected());
        assert_eq!(wallet.current_address(), Some(Address([7u8; 20])));
    }
}
