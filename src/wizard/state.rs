//! Wizard State Management

use crate::chain::{Address, SubmissionId, TxTracker};
use crate::metadata::{CollectionMetadata, TokenMetadata};
use crate::notification::NotificationSlot;
use std::time::Duration;

/// Current stage of the creation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectionInfo,
    ArtworkInfo,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CollectionInfo => "Collection",
            Self::ArtworkInfo => "Artwork",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::CollectionInfo => "Collection Information",
            Self::ArtworkInfo => "Artwork Information",
        }
    }

    pub fn step_number(&self) -> usize {
        match self {
            Self::CollectionInfo => 1,
            Self::ArtworkInfo => 2,
        }
    }

    pub fn total_steps() -> usize {
        2
    }
}

/// Step one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionFields {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image_url: String,
    /// Optional artist website
    pub external_link: String,
}

impl CollectionFields {
    /// Name, symbol, description and image are required
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.symbol.is_empty()
            && !self.description.is_empty()
            && !self.image_url.is_empty()
    }

    pub fn to_metadata(&self) -> CollectionMetadata {
        CollectionMetadata {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            description: self.description.clone(),
            image: self.image_url.clone(),
            external_link: self.external_link.clone(),
        }
    }
}

/// Step two form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkFields {
    /// Token id as typed
    pub token_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// `datetime-local` minting deadline, empty for none
    pub expiration: String,
}

impl ArtworkFields {
    /// Id, title, description and image are required
    pub fn is_complete(&self) -> bool {
        !self.token_id.is_empty()
            && !self.title.is_empty()
            && !self.description.is_empty()
            && !self.image_url.is_empty()
    }

    /// Positive whole-number token id
    pub fn parsed_token_id(&self) -> Option<u128> {
        self.token_id.trim().parse::<u128>().ok().filter(|id| *id > 0)
    }

    pub fn to_metadata(&self) -> TokenMetadata {
        TokenMetadata {
            name: self.title.clone(),
            description: self.description.clone(),
            image: self.image_url.clone(),
        }
    }
}

/// Artwork being configured, captured at submission time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingArtwork {
    pub collection: Address,
    pub token_id: u128,
    pub title: String,
}

/// Summary shown once the artwork transaction is confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkReceipt {
    pub collection_name: String,
    pub collection_address: Address,
    pub token_id: u128,
    pub title: String,
    pub transaction: SubmissionId,
    pub explorer_url: String,
}

/// Complete wizard state
#[derive(Debug)]
pub struct WizardState {
    pub stage: Stage,
    pub collection_fields: CollectionFields,
    pub artwork_fields: ArtworkFields,
    /// Set only by the deployment confirmation event
    pub deployed_collection_address: Option<Address>,
    pub pending_notification: NotificationSlot,

    // Transactions
    pub deploy: TxTracker,
    pub configure: TxTracker,
    pub pending_artwork: Option<PendingArtwork>,
    pub receipt: Option<ArtworkReceipt>,
}

impl WizardState {
    pub fn new(notification_window: Duration) -> Self {
        Self {
            stage: Stage::CollectionInfo,
            collection_fields: CollectionFields::default(),
            artwork_fields: ArtworkFields::default(),
            deployed_collection_address: None,
            pending_notification: NotificationSlot::new(notification_window),

            deploy: TxTracker::default(),
            configure: TxTracker::default(),
            pending_artwork: None,
            receipt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_collection() -> CollectionFields {
        CollectionFields {
            name: "Test".to_string(),
            symbol: "T".to_string(),
            description: "D".to_string(),
            image_url: "http://i".to_string(),
            external_link: String::new(),
        }
    }

    #[test]
    fn test_collection_required_fields() {
        assert!(full_collection().is_complete());

        let blanks: [fn(&mut CollectionFields); 4] = [
            |f| f.name.clear(),
            |f| f.symbol.clear(),
            |f| f.description.clear(),
            |f| f.image_url.clear(),
        ];
        for blank in blanks {
            let mut fields = full_collection();
            blank(&mut fields);
            assert!(!fields.is_complete(), "{:?}", fields);
        }
    }

    #[test]
    fn test_token_id_parsing() {
        let mut fields = ArtworkFields {
            token_id: " 42 ".to_string(),
            ..Default::default()
        };
        assert_eq!(fields.parsed_token_id(), Some(42));

        for bad in ["0", "-1", "1.5", "abc", ""] {
            fields.token_id = bad.to_string();
            assert_eq!(fields.parsed_token_id(), None, "{}", bad);
        }
    }

    #[test]
    fn test_stage_numbers() {
        assert_eq!(Stage::CollectionInfo.step_number(), 1);
        assert_eq!(Stage::ArtworkInfo.step_number(), Stage::total_steps());
        assert_eq!(Stage::ArtworkInfo.title(), "Artwork");
    }
}
