//! Interactive Creation Wizard
//!
//! Walks an artist through:
//! 1. Collection information and deployment
//! 2. Artwork information and token configuration

pub mod create_wizard;

pub use create_wizard::run_create_wizard;
