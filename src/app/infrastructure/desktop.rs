use std::fs;

use fltk::{dialog, prelude::*, text::TextBuffer, window::Window};
use serde_json::Value;

use super::buffer::buffer_text_no_leak;
use super::error::Result;
use super::host::Host;
use super::storage::DataFile;
use crate::app::domain::document::NoteFile;
use crate::ui::dialogs::gist_created::show_gist_created_dialog;
use crate::ui::main_window::APP_TITLE;

/// The FLTK window acting as the plugin's host: one open note at a time,
/// data persisted to a JSON file.
pub struct DesktopHost {
    active: Option<NoteFile>,
    buffer: TextBuffer,
    window: Window,
    store: DataFile,
}

impl DesktopHost {
    pub fn new(buffer: TextBuffer, window: Window, store: DataFile) -> Self {
        Self {
            active: None,
            buffer,
            window,
            store,
        }
    }

    /// Load a note from disk into the editor and make it the active note.
    pub fn open_note(&mut self, path: &str) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let note = NoteFile::from_path(path);

        self.buffer.set_text(&content);
        self.window
            .set_label(&format!("{} - {}", note.gist_file_name(), APP_TITLE));
        log::debug!("Opened {}", path);

        self.active = Some(note);
        Ok(())
    }
}

impl Host for DesktopHost {
    fn active_file(&self) -> Option<NoteFile> {
        self.active.clone()
    }

    fn read(&self, file: &NoteFile) -> Result<String> {
        // The open note is read from the editor so unsaved edits are included
        if self.active.as_ref() == Some(file) {
            Ok(buffer_text_no_leak(&self.buffer))
        } else {
            Ok(fs::read_to_string(file.path())?)
        }
    }

    fn load_data(&self) -> Result<Option<Value>> {
        self.store.load()
    }

    fn save_data(&mut self, data: &Value) -> Result<()> {
        self.store.save(data)
    }

    fn open_gist_modal(&mut self, url: &str) {
        show_gist_created_dialog(url);
    }

    fn notice(&mut self, message: &str) {
        dialog::message_default(message);
    }
}
