//! Two-step creation wizard
//!
//! 1. Collection information: deploy a collection through the factory
//! 2. Artwork information: configure the first token on that collection

pub mod creation;
pub mod state;

pub use creation::{CreationWizard, WizardError};
pub use state::{ArtworkFields, ArtworkReceipt, CollectionFields, Stage, WizardState};
