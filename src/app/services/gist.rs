use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app::domain::settings::GistSettings;
use crate::app::infrastructure::error::{GistError, Result};

/// Seconds before an unanswered create request is abandoned.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GistContent {
    pub content: String,
}

/// Body of `POST /gists`.
///
/// Only ever built for a single file, and always private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGist {
    files: BTreeMap<String, GistContent>,
    public: bool,
}

impl CreateGist {
    pub fn single_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut files = BTreeMap::new();
        files.insert(
            name.into(),
            GistContent {
                content: content.into(),
            },
        );
        Self {
            files,
            public: false,
        }
    }

    pub fn files(&self) -> &BTreeMap<String, GistContent> {
        &self.files
    }

    pub fn is_public(&self) -> bool {
        self.public
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GistFileInfo {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub raw_url: Option<String>,
}

/// The parts of the API's gist representation we look at.
///
/// Only `html_url` is required; compatible servers may omit the rest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gist {
    #[serde(default)]
    pub id: String,
    pub html_url: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub files: BTreeMap<String, GistFileInfo>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The one remote operation the plugin consumes.
pub trait GistApi {
    fn create_gist(&self, settings: &GistSettings, request: &CreateGist) -> Result<Gist>;
}

/// Blocking client for GitHub's REST API (and compatible servers).
#[derive(Debug, Clone)]
pub struct GitHubClient {
    user_agent: String,
    timeout_secs: u64,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self {
            user_agent: format!("note-to-gist/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl GistApi for GitHubClient {
    fn create_gist(&self, settings: &GistSettings, request: &CreateGist) -> Result<Gist> {
        let url = format!("{}/gists", settings.api_root());

        let mut http = minreq::post(&url)
            .with_header("Accept", ACCEPT)
            .with_header("User-Agent", self.user_agent.as_str())
            .with_timeout(self.timeout_secs)
            .with_json(request)?;

        // An empty token goes out unauthenticated and the API rejects it
        if settings.has_token() {
            http = http.with_header("Authorization", format!("Bearer {}", settings.github_token));
        }

        let response = http.send()?;
        let body = response.as_bytes();

        if !(200..300).contains(&response.status_code) {
            let message = serde_json::from_slice::<ApiErrorBody>(body)
                .map(|e| e.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned());
            return Err(GistError::Api {
                status: response.status_code,
                message,
            });
        }

        Ok(serde_json::from_slice(body)?)
    }
}
