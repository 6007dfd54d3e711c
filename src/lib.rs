//! Artist Program creation flow
//!
//! Lets an artist deploy a token collection and configure its first artwork
//! through wallet-signed transactions. The crate owns the wizard logic and the
//! payload formats; wallets and transaction submission are injected.
//!
//! ## Module Structure
//!
//! - `wizard/`: the two-step state machine
//! - `chain/`: requests, events and the transaction service seam
//! - `metadata`: collection and token metadata documents
//! - `notification`: transient user notifications
//! - `config`: program configuration
//! - `util/`: data URI and timestamp helpers

pub mod chain;
pub mod config;
pub mod metadata;
pub mod notification;
pub mod util;
pub mod wizard;

pub use chain::{
    Address, ChainEvent, ConfigureTokenRequest, DeployCollectionRequest, SimulatedChain,
    StaticWallet, SubmissionId, TransactionError, TransactionService, TxPhase, TxStatus,
    WalletSession,
};
pub use config::{ConfigError, ProgramConfig};
pub use metadata::{CollectionMetadata, TokenMetadata};
pub use notification::{Notification, NotificationSlot, Severity};
pub use util::encoding::{decode_json_data_uri, encode_json_data_uri, DataUriError};
pub use util::timestamp::{expiration_to_unix_seconds, LocalZone, TimestampError};
pub use wizard::{
    ArtworkFields, ArtworkReceipt, CollectionFields, CreationWizard, Stage, WizardError,
    WizardState,
};
