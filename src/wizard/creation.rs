//! Creation Wizard
//!
//! Drives the two-step flow: deploy a collection through the factory, then
//! configure the first artwork on the deployed collection.
//!
//! The wizard only ever moves to the artwork step when the deployment
//! confirmation event arrives; a successful submission alone does not advance
//! it. Confirmation events are fed in through [`CreationWizard::handle`].

use super::state::{
    ArtworkFields, ArtworkReceipt, CollectionFields, PendingArtwork, Stage, WizardState,
};
use crate::chain::{
    Address, ChainEvent, ConfigureTokenRequest, DeployCollectionRequest, SubmissionId,
    TransactionError, TransactionService, TxPhase, TxStatus, WalletSession,
};
use crate::config::{ChainConfig, ProgramConfig};
use crate::notification::{Notification, Severity, DEFAULT_DISPLAY_WINDOW};
use crate::util::timestamp::{LocalZone, TimestampError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Every failure the wizard can report; `Display` is the user-facing text
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please fill in all collection information")]
    MissingCollectionFields,
    #[error("Please connect your wallet first")]
    WalletNotConnected,
    #[error("Collection not deployed yet")]
    CollectionNotDeployed,
    #[error("Please fill in all artwork information")]
    MissingArtworkFields,
    #[error("Artwork ID must be a positive whole number")]
    InvalidTokenId,
    #[error("Invalid minting deadline: {0}")]
    InvalidExpiration(TimestampError),
    #[error("Could not encode metadata: {0}")]
    Metadata(String),
    #[error("Deployment Error: {}", .0.summary())]
    Deployment(TransactionError),
    #[error("Error: {}", .0.summary())]
    Configuration(TransactionError),
}

pub struct CreationWizard<S, W> {
    state: WizardState,
    service: S,
    wallet: W,
    factory: Address,
    zone: LocalZone,
    chain: ChainConfig,
}

impl<S: TransactionService, W: WalletSession> CreationWizard<S, W> {
    pub fn new(service: S, wallet: W, factory: Address) -> Self {
        Self {
            state: WizardState::new(DEFAULT_DISPLAY_WINDOW),
            service,
            wallet,
            factory,
            zone: LocalZone::System,
            chain: ChainConfig::default(),
        }
    }

    pub fn from_config(
        service: S,
        wallet: W,
        config: &ProgramConfig,
    ) -> Result<Self, TimestampError> {
        let mut wizard = Self::new(service, wallet, config.factory_address);
        wizard.state = WizardState::new(config.wizard.notification_window());
        wizard.zone = config.wizard.local_zone()?;
        wizard.chain = config.chain.clone();
        Ok(wizard)
    }

    pub fn with_local_zone(mut self, zone: LocalZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn factory(&self) -> Address {
        self.factory
    }

    pub fn deployed_collection(&self) -> Option<Address> {
        self.state.deployed_collection_address
    }

    pub fn receipt(&self) -> Option<&ArtworkReceipt> {
        self.state.receipt.as_ref()
    }

    // ========================================================================
    // Step one: collection
    // ========================================================================

    /// Validate the collection form and submit the factory deployment.
    ///
    /// Stays on the collection step; the stage moves only when the
    /// `CollectionCreated` event for this submission is handled.
    pub async fn submit_collection_info(
        &mut self,
        fields: CollectionFields,
    ) -> Result<SubmissionId, WizardError> {
        self.state.collection_fields = fields;
        let fields = &self.state.collection_fields;

        if !fields.is_complete() {
            return Err(self.reject(WizardError::MissingCollectionFields));
        }

        let collection_uri = match fields.to_metadata().to_data_uri() {
            Ok(uri) => uri,
            Err(e) => return Err(self.reject(WizardError::Metadata(e.to_string()))),
        };
        debug!(
            "Collection metadata URI ({} bytes): {}",
            collection_uri.len(),
            collection_uri
        );

        let request = DeployCollectionRequest {
            factory: self.factory,
            collection_uri,
            creator_fee: 0,
            referral_fee: 0,
            name: fields.name.clone(),
            symbol: fields.symbol.clone(),
            description: fields.description.clone(),
            image: fields.image_url.clone(),
            external_link: fields.external_link.clone(),
        };

        self.state.deploy.begin();
        match self.service.deploy_collection(&request).await {
            Ok(submission) => {
                info!(
                    "Deploy collection '{}' submitted to factory {}: {}",
                    request.name, self.factory, submission
                );
                self.state.deploy.submitted(submission.clone());
                Ok(submission)
            }
            Err(e) => {
                self.state.deploy.fail(&e);
                Err(self.reject(WizardError::Deployment(e)))
            }
        }
    }

    /// Record the deployed collection and move to the artwork step.
    ///
    /// Returns `false` for a repeat of the already recorded address.
    pub fn on_collection_deployed(&mut self, address: Address) -> bool {
        if self.state.deployed_collection_address == Some(address) {
            debug!("Duplicate CollectionCreated for {}, ignoring", address);
            return false;
        }

        if let Some(previous) = self.state.deployed_collection_address {
            info!("Replacing deployed collection {} with {}", previous, address);
        }
        self.state.deployed_collection_address = Some(address);
        self.state.stage = Stage::ArtworkInfo;
        info!("Collection deployed at {}, moving to artwork step", address);
        true
    }

    /// Return to the collection step, keeping everything entered so far.
    pub fn go_back(&mut self) -> bool {
        match self.state.stage {
            Stage::ArtworkInfo => {
                self.state.stage = Stage::CollectionInfo;
                true
            }
            Stage::CollectionInfo => false,
        }
    }

    // ========================================================================
    // Step two: artwork
    // ========================================================================

    /// Check the preconditions, then submit `configureToken` on the
    /// deployed collection.
    pub async fn submit_artwork_info(
        &mut self,
        fields: ArtworkFields,
    ) -> Result<SubmissionId, WizardError> {
        self.state.artwork_fields = fields;

        if !self.wallet.is_connected() {
            return Err(self.reject(WizardError::WalletNotConnected));
        }
        let Some(collection) = self.state.deployed_collection_address else {
            return Err(self.reject(WizardError::CollectionNotDeployed));
        };

        let fields = &self.state.artwork_fields;
        if !fields.is_complete() {
            return Err(self.reject(WizardError::MissingArtworkFields));
        }
        let Some(token_id) = fields.parsed_token_id() else {
            return Err(self.reject(WizardError::InvalidTokenId));
        };
        let expiration = match self.zone.unix_seconds(&fields.expiration) {
            Ok(seconds) => seconds,
            Err(e) => return Err(self.reject(WizardError::InvalidExpiration(e))),
        };
        let token_uri = match fields.to_metadata().to_data_uri() {
            Ok(uri) => uri,
            Err(e) => return Err(self.reject(WizardError::Metadata(e.to_string()))),
        };
        debug!("Token metadata URI ({} bytes): {}", token_uri.len(), token_uri);

        let request = ConfigureTokenRequest {
            collection,
            token_id,
            token_uri,
            expiration,
        };
        let pending = PendingArtwork {
            collection,
            token_id,
            title: fields.title.clone(),
        };

        self.state.configure.begin();
        self.state.receipt = None;
        match self.service.configure_token(&request).await {
            Ok(submission) => {
                info!(
                    "Configure token {} on {} submitted (expiration {}): {}",
                    token_id, collection, expiration, submission
                );
                self.state.configure.submitted(submission.clone());
                self.state.pending_artwork = Some(pending);
                Ok(submission)
            }
            Err(e) => {
                self.state.configure.fail(&e);
                Err(self.reject(WizardError::Configuration(e)))
            }
        }
    }

    // ========================================================================
    // Inbound events
    // ========================================================================

    /// Apply an event from the external dispatcher. Returns whether the
    /// wizard state changed.
    pub fn handle(&mut self, event: ChainEvent) -> bool {
        match event {
            ChainEvent::CollectionCreated {
                submission,
                collection,
            } => {
                if let Some(submission) = submission {
                    if !self.state.deploy.tracks(&submission) {
                        warn!(
                            "Ignoring CollectionCreated {} from stale deployment {}",
                            collection, submission
                        );
                        return false;
                    }
                }
                self.on_collection_deployed(collection)
            }
            ChainEvent::StatusChanged { submission, status } => {
                if self.state.deploy.tracks(&submission) {
                    self.on_deploy_status(status)
                } else if self.state.configure.tracks(&submission) {
                    self.on_configure_status(&submission, status)
                } else {
                    debug!("Status update for unknown submission {}", submission);
                    false
                }
            }
        }
    }

    fn on_deploy_status(&mut self, status: TxStatus) -> bool {
        match status {
            TxStatus::Confirmed => {
                info!("Collection deployment confirmed");
                self.state.deploy.phase = TxPhase::Confirmed;
            }
            TxStatus::Failed(e) => {
                self.state.deploy.fail(&e);
                self.reject(WizardError::Deployment(e));
            }
        }
        true
    }

    fn on_configure_status(&mut self, submission: &SubmissionId, status: TxStatus) -> bool {
        match status {
            TxStatus::Confirmed => {
                self.state.configure.phase = TxPhase::Confirmed;
                if let Some(pending) = self.state.pending_artwork.take() {
                    info!(
                        "Artwork {} '{}' created on {}",
                        pending.token_id, pending.title, pending.collection
                    );
                    self.state.receipt = Some(ArtworkReceipt {
                        collection_name: self.state.collection_fields.name.clone(),
                        collection_address: pending.collection,
                        token_id: pending.token_id,
                        title: pending.title,
                        transaction: submission.clone(),
                        explorer_url: self.chain.tx_url(submission.as_str()),
                    });
                }
                self.state
                    .pending_notification
                    .raise("Your artwork has been created!", Severity::Success);
            }
            TxStatus::Failed(e) => {
                self.state.configure.fail(&e);
                self.reject(WizardError::Configuration(e));
            }
        }
        true
    }

    // ========================================================================
    // Presentation helpers
    // ========================================================================

    /// Visible notification, cleared once its display window has elapsed
    pub fn notification(&mut self) -> Option<&Notification> {
        self.state.pending_notification.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.state.pending_notification.dismiss();
    }

    pub fn step_number(&self) -> usize {
        self.state.stage.step_number()
    }

    pub fn primary_action_label(&self) -> &'static str {
        match self.state.stage {
            Stage::CollectionInfo => match self.state.deploy.phase {
                TxPhase::Pending => "Deploying Collection...",
                TxPhase::Confirming => "Confirming Deployment...",
                _ => "Next: Create Artwork →",
            },
            Stage::ArtworkInfo => match self.state.configure.phase {
                TxPhase::Pending => "Creating Your Artwork...",
                TxPhase::Confirming => "Confirming...",
                _ => "Create Artwork",
            },
        }
    }

    pub fn can_submit_collection(&self) -> bool {
        !self.state.deploy.phase.is_in_flight()
    }

    pub fn can_submit_artwork(&self) -> bool {
        self.wallet.is_connected() && !self.state.configure.phase.is_in_flight()
    }

    /// Persistent error lines, deployment first, one per failed transaction
    pub fn error_banners(&self) -> Vec<String> {
        let mut banners = Vec::new();
        if let TxPhase::Failed(summary) = &self.state.deploy.phase {
            banners.push(format!("Deployment Error: {}", summary));
        }
        if let TxPhase::Failed(summary) = &self.state.configure.phase {
            banners.push(format!("Error: {}", summary));
        }
        banners
    }

    fn reject(&mut self, error: WizardError) -> WizardError {
        warn!("{}", error);
        self.state
            .pending_notification
            .raise(error.to_string(), Severity::Error);
        error
    }
}
