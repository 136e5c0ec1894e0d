//! Services layer - business operations.
//!
//! - Gist API client
//! - Uploading the active note

pub mod gist;
pub mod upload;
