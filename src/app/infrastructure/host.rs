use serde_json::Value;

use super::error::Result;
use crate::app::domain::document::NoteFile;

/// Services the note-taking host provides to the plugin.
///
/// The plugin never owns its own lifecycle: the host constructs it, calls its
/// hooks, and hands itself in as `&mut dyn Host` whenever the plugin needs to
/// read a note, persist data, or show something.
pub trait Host {
    /// The note currently focused in the workspace, if any.
    fn active_file(&self) -> Option<NoteFile>;

    /// Full text of a note.
    fn read(&self, file: &NoteFile) -> Result<String>;

    /// The plugin's persisted data record, `None` if nothing was ever saved.
    fn load_data(&self) -> Result<Option<Value>>;

    fn save_data(&mut self, data: &Value) -> Result<()>;

    /// Show the "gist created" dialog linking to `url`.
    fn open_gist_modal(&mut self, url: &str);

    /// Transient user-visible message.
    fn notice(&mut self, message: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::app::domain::settings::GistSettings;
    use crate::app::infrastructure::error::GistError;
    use crate::app::services::gist::{CreateGist, Gist, GistApi};

    /// In-memory host: a map of notes, one optional active note, and
    /// everything shown to the user recorded for inspection.
    #[derive(Default)]
    pub struct MemoryHost {
        pub notes: HashMap<String, String>,
        pub active: Option<String>,
        pub data: Option<Value>,
        pub saves: usize,
        pub modals: Vec<String>,
        pub notices: Vec<String>,
    }

    impl MemoryHost {
        pub fn with_active_note(path: &str, text: &str) -> Self {
            let mut host = Self::default();
            host.notes.insert(path.to_string(), text.to_string());
            host.active = Some(path.to_string());
            host
        }
    }

    impl Host for MemoryHost {
        fn active_file(&self) -> Option<NoteFile> {
            self.active.as_deref().map(NoteFile::from_path)
        }

        fn read(&self, file: &NoteFile) -> Result<String> {
            let key = file.path().to_string_lossy();
            self.notes.get(&*key).cloned().ok_or_else(|| {
                GistError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no note at {}", key),
                ))
            })
        }

        fn load_data(&self) -> Result<Option<Value>> {
            Ok(self.data.clone())
        }

        fn save_data(&mut self, data: &Value) -> Result<()> {
            self.data = Some(data.clone());
            self.saves += 1;
            Ok(())
        }

        fn open_gist_modal(&mut self, url: &str) {
            self.modals.push(url.to_string());
        }

        fn notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    /// Records every create call and answers with a canned result.
    /// Clones share the call log, so a clone moved to a worker thread still
    /// reports back to the test.
    #[derive(Clone)]
    pub struct RecordingApi {
        calls: Arc<Mutex<Vec<(GistSettings, CreateGist)>>>,
        pub reply: std::result::Result<Gist, (i32, String)>,
    }

    impl RecordingApi {
        pub fn succeeding(html_url: &str) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                reply: Ok(Gist {
                    id: "g1".to_string(),
                    html_url: html_url.to_string(),
                    public: false,
                    description: None,
                    files: Default::default(),
                }),
            }
        }

        pub fn failing(status: i32, message: &str) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                reply: Err((status, message.to_string())),
            }
        }

        pub fn calls(&self) -> Vec<(GistSettings, CreateGist)> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl GistApi for RecordingApi {
        fn create_gist(&self, settings: &GistSettings, request: &CreateGist) -> Result<Gist> {
            self.calls
                .lock()
                .unwrap()
                .push((settings.clone(), request.clone()));
            match &self.reply {
                Ok(gist) => Ok(gist.clone()),
                Err((status, message)) => Err(GistError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }
}
