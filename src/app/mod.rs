//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (NoteFile, GistSettings, Messages)
//! - `services/` - Business operations (gist API, upload)
//! - `infrastructure/` - External integrations (host contract, FLTK host, storage, error)
//! - `plugin.rs` - The plugin the host loads

pub mod domain;
pub mod infrastructure;
pub mod plugin;
pub mod services;

// Re-exports for convenient external access
pub use domain::{GistSettings, Message, NoteFile};
pub use infrastructure::desktop::DesktopHost;
pub use infrastructure::error::{GistError, Result};
pub use infrastructure::host::Host;
pub use infrastructure::storage::DataFile;
pub use plugin::{present_upload, Command, GistPlugin, CREATE_GIST};
pub use services::gist::{CreateGist, Gist, GistApi, GitHubClient};
pub use services::upload::{prepare_upload, upload_active_document, PreparedUpload, UploadOutcome};
