use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::app::infrastructure::error::{GistError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Plugin settings as persisted by the host.
///
/// The on-disk layout is the flat record `{"githubToken": "", "baseUrl": ""}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GistSettings {
    /// Personal access token with the `gist` scope. Not validated locally.
    #[serde(default, deserialize_with = "token_or_empty")]
    pub github_token: String,

    /// API root, configurable for GitHub Enterprise and compatible servers.
    #[serde(default = "default_base_url", deserialize_with = "base_url_or_default")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

// A stored `null` counts as unset, so it only resets its own key
fn token_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn base_url_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_base_url))
}

impl Default for GistSettings {
    fn default() -> Self {
        Self {
            github_token: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl GistSettings {
    /// Merge whatever the host has stored over the defaults.
    ///
    /// Nothing stored (or a stored `null`) yields the defaults; keys missing
    /// from the stored record keep their default values.
    pub fn from_stored(data: Option<Value>) -> Result<Self> {
        match data {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value)?),
            Some(other) => Err(GistError::Settings(format!(
                "expected an object, found {}",
                other
            ))),
        }
    }

    /// The record handed to the host for persistence.
    pub fn to_stored(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Base URL without trailing slashes, ready for path joining.
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn has_token(&self) -> bool {
        !self.github_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_settings() {
        let settings = GistSettings::default();
        assert_eq!(settings.github_token, "");
        assert_eq!(settings.base_url, "https://api.github.com");
        assert!(!settings.has_token());
    }

    #[test]
    fn test_nothing_stored_uses_defaults() {
        assert_eq!(GistSettings::from_stored(None).unwrap(), GistSettings::default());
        assert_eq!(
            GistSettings::from_stored(Some(Value::Null)).unwrap(),
            GistSettings::default()
        );
    }

    #[test]
    fn test_persisted_layout() {
        let settings = GistSettings {
            github_token: "X".to_string(),
            base_url: "Y".to_string(),
        };
        let stored = settings.to_stored().unwrap();
        assert_eq!(stored, json!({"githubToken": "X", "baseUrl": "Y"}));
    }

    #[test]
    fn test_round_trip() {
        let settings = GistSettings {
            github_token: "X".to_string(),
            base_url: "Y".to_string(),
        };
        let loaded = GistSettings::from_stored(Some(settings.to_stored().unwrap())).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_record_merges_with_defaults() {
        // Older data files may only carry the token
        let loaded = GistSettings::from_stored(Some(json!({"githubToken": "abc"}))).unwrap();
        assert_eq!(loaded.github_token, "abc");
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let loaded = GistSettings::from_stored(Some(json!({
            "baseUrl": "https://ghe.example.com/api/v3",
            "somethingElse": true
        })))
        .unwrap();
        assert_eq!(loaded.github_token, "");
        assert_eq!(loaded.base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_null_token_keeps_other_keys() {
        let loaded = GistSettings::from_stored(Some(json!({
            "githubToken": null,
            "baseUrl": "https://ghe.example.com/api/v3"
        })))
        .unwrap();
        assert_eq!(loaded.github_token, "");
        assert_eq!(loaded.base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_null_base_url_uses_default() {
        let loaded = GistSettings::from_stored(Some(json!({
            "githubToken": "abc",
            "baseUrl": null
        })))
        .unwrap();
        assert_eq!(loaded.github_token, "abc");
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = GistSettings::from_stored(Some(json!([1, 2]))).unwrap_err();
        assert!(matches!(err, GistError::Settings(_)));
    }

    #[test]
    fn test_api_root_strips_trailing_slash() {
        let settings = GistSettings {
            base_url: "https://ghe.example.com/api/v3/".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.api_root(), "https://ghe.example.com/api/v3");
        assert_eq!(GistSettings::default().api_root(), "https://api.github.com");
    }
}
