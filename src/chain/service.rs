//! Capabilities the wizard depends on
//!
//! Wallet connection and transaction submission live outside this crate.
//! They are injected so the wizard can be driven by a browser bridge, an RPC
//! client or the simulated chain alike.

use super::{Address, ConfigureTokenRequest, DeployCollectionRequest, SubmissionId, TransactionError};
use async_trait::async_trait;
use std::sync::Arc;

/// Submits signed transactions on behalf of the connected wallet
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Ask the factory to deploy a new collection.
    async fn deploy_collection(
        &self,
        request: &DeployCollectionRequest,
    ) -> Result<SubmissionId, TransactionError>;

    /// Configure a token on an already deployed collection.
    async fn configure_token(
        &self,
        request: &ConfigureTokenRequest,
    ) -> Result<SubmissionId, TransactionError>;
}

/// Read-only view of the wallet session
pub trait WalletSession: Send + Sync {
    fn is_connected(&self) -> bool;
    fn current_address(&self) -> Option<Address>;
}

#[async_trait]
impl<T: TransactionService + ?Sized> TransactionService for Arc<T> {
    async fn deploy_collection(
        &self,
        request: &DeployCollectionRequest,
    ) -> Result<SubmissionId, TransactionError> {
        (**self).deploy_collection(request).await
    }

    async fn configure_token(
        &self,
        request: &ConfigureTokenRequest,
    ) -> Result<SubmissionId, TransactionError> {
        (**self).configure_token(request).await
    }
}

impl<T: WalletSession + ?Sized> WalletSession for Arc<T> {
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn current_address(&self) -> Option<Address> {
        (**self).current_address()
    }
}
