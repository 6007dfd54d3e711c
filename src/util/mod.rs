//! Shared utility functions.

pub mod encoding;
pub mod timestamp;
