//! Author identity lookup
//!
//! Generated files carry the author's name, email and profile URL. These are
//! resolved from the author's GitHub handle; a failed lookup never stops
//! generation, it only leaves attribution empty.

pub mod github;

use crate::product::ProductConfig;
use std::time::Duration;
use thiserror::Error;

pub use github::GithubIdentity;

/// Default GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variables checked for a proxy, in order of preference
const PROXY_ENV_VARS: &[&str] = &["http_proxy", "HTTP_PROXY", "https_proxy", "HTTPS_PROXY"];

/// Environment variable holding an OAuth token for the API
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Timeout for a single profile request
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Public profile of the widget author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorProfile {
    pub display_name: String,
    pub email: String,
    pub profile_url: String,
}

/// Why a profile could not be resolved
#[derive(Error, Debug)]
pub enum IdentityLookupError {
    #[error("Invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to configure HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Profile request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode profile from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Identity lookup skipped")]
    Skipped,
}

/// Outcome of an identity lookup
#[derive(Debug)]
pub enum AuthorLookup {
    Found(AuthorProfile),
    Unavailable(IdentityLookupError),
}

impl AuthorLookup {
    /// The resolved profile, or an all-empty one when the lookup failed
    pub fn profile(&self) -> AuthorProfile {
        match self {
            AuthorLookup::Found(profile) => profile.clone(),
            AuthorLookup::Unavailable(_) => AuthorProfile::default(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, AuthorLookup::Found(_))
    }

    pub fn error(&self) -> Option<&IdentityLookupError> {
        match self {
            AuthorLookup::Found(_) => None,
            AuthorLookup::Unavailable(e) => Some(e),
        }
    }
}

/// Settings for the identity client, passed in at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub proxy: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl IdentityConfig {
    pub fn new(user_agent: &str) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            proxy: None,
            user_agent: user_agent.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build the config from the process environment
    pub fn from_env<C: ProductConfig>(config: &C) -> Self {
        Self::from_vars(config, |key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source; empty values are ignored
    pub fn from_vars<C, F>(config: &C, var: F) -> Self
    where
        C: ProductConfig,
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: lookup(config.identity_api_env())
                .unwrap_or_else(|| config.identity_api_url().to_string()),
            token: lookup(TOKEN_ENV_VAR),
            proxy: PROXY_ENV_VARS.iter().find_map(|&key| lookup(key)),
            user_agent: config.user_agent().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
