use crate::app::domain::settings::GistSettings;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::Host;

use super::gist::{CreateGist, Gist, GistApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Created(Gist),
    /// Nothing was focused, so nothing was sent.
    NoActiveDocument,
}

/// Everything one upload needs, captured from the host up front so the
/// network call can run away from the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedUpload {
    pub name: String,
    pub settings: GistSettings,
    pub request: CreateGist,
}

impl PreparedUpload {
    /// Make the create call. Each call creates a new gist; nothing is retried.
    pub fn send(&self, api: &dyn GistApi) -> Result<UploadOutcome> {
        log::info!("Creating gist for {} via {}", self.name, self.settings.api_root());
        let gist = api.create_gist(&self.settings, &self.request)?;
        log::info!("Created gist at {}", gist.html_url);

        Ok(UploadOutcome::Created(gist))
    }
}

/// Read the active note and build its single-file private gist request.
///
/// `None` when no note is active.
pub fn prepare_upload(host: &dyn Host, settings: &GistSettings) -> Result<Option<PreparedUpload>> {
    let Some(file) = host.active_file() else {
        log::debug!("No active note, skipping upload");
        return Ok(None);
    };

    let name = file.gist_file_name();
    let content = host.read(&file)?;
    let request = CreateGist::single_file(name.as_str(), content);

    Ok(Some(PreparedUpload {
        name,
        settings: settings.clone(),
        request,
    }))
}

/// Upload the host's active note as a single-file private gist, blocking
/// until the API answers.
pub fn upload_active_document(
    host: &dyn Host,
    settings: &GistSettings,
    api: &dyn GistApi,
) -> Result<UploadOutcome> {
    match prepare_upload(host, settings)? {
        Some(upload) => upload.send(api),
        None => Ok(UploadOutcome::NoActiveDocument),
    }
}
