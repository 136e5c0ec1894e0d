use std::fmt;
use std::thread::{self, JoinHandle};

use super::domain::settings::GistSettings;
use super::infrastructure::error::Result;
use super::infrastructure::host::Host;
use super::services::gist::GistApi;
use super::services::upload::{prepare_upload, upload_active_document, PreparedUpload, UploadOutcome};

pub const CREATE_GIST: &str = "create-gist";

/// A command the plugin registers with the host's command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub id: &'static str,
    pub name: &'static str,
}

const COMMANDS: &[Command] = &[Command {
    id: CREATE_GIST,
    name: "Create Gist",
}];

/// The plugin instance. Constructed and owned by the host.
pub struct GistPlugin<A: GistApi> {
    settings: GistSettings,
    api: A,
}

impl<A: GistApi> GistPlugin<A> {
    pub fn new(api: A) -> Self {
        Self {
            settings: GistSettings::default(),
            api,
        }
    }

    pub fn settings(&self) -> &GistSettings {
        &self.settings
    }

    /// Activation hook: load persisted settings over the defaults.
    pub fn on_load(&mut self, host: &dyn Host) {
        self.settings = match host.load_data().and_then(GistSettings::from_stored) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}. Using defaults.", e);
                GistSettings::default()
            }
        };
        log::debug!("Settings loaded, API root {}", self.settings.api_root());
    }

    pub fn on_unload(&mut self) {
        log::debug!("Plugin unloaded");
    }

    pub fn commands(&self) -> &'static [Command] {
        COMMANDS
    }

    /// Run a registered command. Returns false for ids this plugin does not own.
    ///
    /// For `create-gist` the note is read here, on the caller's thread, and
    /// the API call runs on a worker thread. `on_finished` receives the result
    /// there; the host hands it back to its event loop and calls
    /// [`present_upload`]. When nothing is sent (no active note, unreadable
    /// note) the outcome is presented immediately and `on_finished` is dropped.
    pub fn execute_command<F>(&mut self, id: &str, host: &mut dyn Host, on_finished: F) -> bool
    where
        A: Clone + Send + 'static,
        F: FnOnce(Result<UploadOutcome>) + Send + 'static,
    {
        match id {
            CREATE_GIST => {
                match prepare_upload(host, &self.settings) {
                    Ok(Some(upload)) => {
                        self.spawn_upload(upload, on_finished);
                    }
                    Ok(None) => present_upload(Ok(UploadOutcome::NoActiveDocument), host),
                    Err(e) => present_upload(Err(e), host),
                }
                true
            }
            _ => false,
        }
    }

    /// Send a prepared upload from a worker thread.
    pub fn spawn_upload<F>(&self, upload: PreparedUpload, on_finished: F) -> JoinHandle<()>
    where
        A: Clone + Send + 'static,
        F: FnOnce(Result<UploadOutcome>) + Send + 'static,
    {
        let api = self.api.clone();
        thread::spawn(move || on_finished(upload.send(&api)))
    }

    /// Upload the active note on the current thread without presenting anything.
    pub fn create_gist(&self, host: &dyn Host) -> Result<UploadOutcome> {
        upload_active_document(host, &self.settings, &self.api)
    }

    /// Settings panel change hook for the token field.
    pub fn set_github_token(&mut self, value: &str, host: &mut dyn Host) -> Result<()> {
        self.settings.github_token = value.to_string();
        self.save_settings(host)
    }

    pub fn save_settings(&self, host: &mut dyn Host) -> Result<()> {
        host.save_data(&self.settings.to_stored()?)
    }
}

/// Show the outcome of an upload: the link on success, a notice otherwise.
pub fn present_upload<E: fmt::Display>(result: std::result::Result<UploadOutcome, E>, host: &mut dyn Host) {
    match result {
        Ok(UploadOutcome::Created(gist)) => host.open_gist_modal(&gist.html_url),
        Ok(UploadOutcome::NoActiveDocument) => host.notice("No active note to upload"),
        Err(e) => {
            log::error!("Failed to create gist: {}", e);
            host.notice(&format!("Failed to create gist: {}", e));
        }
    }
}
