//! Domain layer - plain data the plugin works with.

pub mod document;
pub mod messages;
pub mod settings;

pub use document::NoteFile;
pub use messages::Message;
pub use settings::{GistSettings, DEFAULT_BASE_URL};
