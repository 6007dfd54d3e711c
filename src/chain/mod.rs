//! Types exchanged with the external transaction service
//!
//! The wizard never talks to a ledger itself. It builds requests, hands them
//! to a [`TransactionService`] and reacts to [`ChainEvent`]s delivered back by
//! whatever drives it.

pub mod service;
pub mod simulated;

pub use service::{TransactionService, WalletSession};
pub use simulated::{SimulatedChain, StaticWallet};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Identifiers
// ============================================================================

/// 20-byte account or contract address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; 20]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address must start with 0x: {0}")]
    MissingPrefix(String),
    #[error("Address must be 40 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("Invalid hex in address: {0}")]
    InvalidHex(String),
}

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// `0x1234…abcd` form for narrow displays
    pub fn short(&self) -> String {
        let full = self.to_string();
        format!("{}…{}", &full[..6], &full[full.len() - 4..])
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AddressError::MissingPrefix(s.to_string()))?;
        if digits.len() != 40 {
            return Err(AddressError::InvalidLength(digits.len()));
        }
        let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Address(arr))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Identifier returned by the transaction service for a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Outbound requests
// ============================================================================

/// Factory call that deploys a new collection contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployCollectionRequest {
    pub factory: Address,
    /// Embedded-data URI of the collection metadata
    pub collection_uri: String,
    pub creator_fee: u128,
    pub referral_fee: u128,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    pub external_link: String,
}

/// Collection call that configures one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigureTokenRequest {
    pub collection: Address,
    pub token_id: u128,
    /// Embedded-data URI of the token metadata
    pub token_uri: String,
    /// Minting deadline in Unix seconds, 0 for none
    pub expiration: u64,
}

// ============================================================================
// Errors and lifecycle
// ============================================================================

/// Failure reported by the transaction service or the wallet
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Reverted(String),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Other(String),
}

impl TransactionError {
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(m) | Self::Reverted(m) | Self::Network(m) | Self::Other(m) => m,
        }
    }

    /// The message text before its first period.
    ///
    /// Wallet libraries append multi-sentence details and version banners;
    /// only the leading sentence is shown to the user.
    pub fn summary(&self) -> &str {
        let message = self.message();
        message.split('.').next().unwrap_or(message)
    }
}

/// Status update for a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    Confirmed,
    Failed(TransactionError),
}

/// Observed phase of a transaction, from the wizard's point of view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TxPhase {
    #[default]
    Idle,
    /// Waiting for the wallet to sign and the service to accept it
    Pending,
    /// Accepted, waiting for the receipt
    Confirming,
    Confirmed,
    Failed(String),
}

impl TxPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirming)
    }
}

/// Last submission of one kind and its observed phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxTracker {
    pub submission: Option<SubmissionId>,
    pub phase: TxPhase,
}

impl TxTracker {
    pub fn begin(&mut self) {
        self.submission = None;
        self.phase = TxPhase::Pending;
    }

    pub fn submitted(&mut self, submission: SubmissionId) {
        self.submission = Some(submission);
        self.phase = TxPhase::Confirming;
    }

    pub fn fail(&mut self, error: &TransactionError) {
        self.phase = TxPhase::Failed(error.summary().to_string());
    }

    pub fn tracks(&self, submission: &SubmissionId) -> bool {
        self.submission.as_ref() == Some(submission)
    }
}

// ============================================================================
// Inbound events
// ============================================================================

/// Messages delivered to the wizard by an external dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEvent {
    /// The factory reported a new collection
    CollectionCreated {
        /// Deployment that produced it, when the source can tell
        submission: Option<SubmissionId>,
        collection: Address,
    },
    StatusChanged {
        submission: SubmissionId,
        status: TxStatus,
    },
}
