//! # Dashboard configuration: `admission.toml`
//!
//! Defines the TOML configuration embedded into the web build. It names the
//! two REST bases the dashboard talks to and the storage key of the session
//! token.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! admission_url = "https://aralboyitexnikum.uz/api/backend/admission"
//! auth_url = "https://api.aralboyitexnikum.uz"
//!
//! [session]
//! token_key = "token"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AdmissionConfig`] | Top-level config with TOML parsing and the canonical filename. |
//! | [`ApiConfig`] | Base URLs for the admission resources and the login endpoint. |
//! | [`SessionConfig`] | The `localStorage` key holding the bearer token. |
//!
//! Every field has a production default so a missing or partial file is
//! equivalent to the default configuration.

use serde::Deserialize;

use crate::session::DEFAULT_TOKEN_KEY;

/// Top-level configuration stored in `admission.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdmissionConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// REST endpoint bases.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Base of the `applicants/` and `categories/` resources.
    #[serde(default = "default_admission_url")]
    pub admission_url: String,
    /// Base of the `users/login/` endpoint.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
}

/// Session token storage.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_admission_url() -> String {
    "https://aralboyitexnikum.uz/api/backend/admission".to_string()
}

fn default_auth_url() -> String {
    "https://api.aralboyitexnikum.uz".to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            admission_url: default_admission_url(),
            auth_url: default_auth_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl AdmissionConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admission.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
