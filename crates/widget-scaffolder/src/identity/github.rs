//! GitHub user profile lookup

use super::{AuthorLookup, AuthorProfile, IdentityConfig, IdentityLookupError};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use url::Url;

/// Subset of the `GET /users/{handle}` response we care about
#[derive(Debug, Clone, Default, Deserialize)]
struct GithubUser {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<GithubUser> for AuthorProfile {
    fn from(user: GithubUser) -> Self {
        AuthorProfile {
            display_name: user.name.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            profile_url: user.html_url.unwrap_or_default(),
        }
    }
}

/// Client resolving author handles against the GitHub REST API
pub struct GithubIdentity {
    config: IdentityConfig,
    client: reqwest::Client,
}

impl GithubIdentity {
    /// Create a client from explicit settings
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityLookupError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout);

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(IdentityLookupError::Client)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(IdentityLookupError::Client)?;
        Ok(Self { config, client })
    }

    /// Build `{api_url}/users/{handle}`, preserving any path on the API root
    fn user_url(&self, handle: &str) -> Result<Url, IdentityLookupError> {
        let invalid = |source| IdentityLookupError::InvalidUrl {
            url: self.config.api_url.clone(),
            source,
        };

        let mut url = Url::parse(&self.config.api_url).map_err(invalid)?;
        url.path_segments_mut()
            .map_err(|_| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("users")
            .push(handle);
        Ok(url)
    }

    /// Fetch the profile for `handle`, surfacing every failure
    pub async fn fetch(&self, handle: &str) -> Result<AuthorProfile, IdentityLookupError> {
        let url = self.user_url(handle)?;

        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.config.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|source| IdentityLookupError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(IdentityLookupError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let user: GithubUser =
            response
                .json()
                .await
                .map_err(|source| IdentityLookupError::Decode {
                    url: url.to_string(),
                    source,
                })?;
        Ok(user.into())
    }

    /// Resolve `handle`; failures come back as [`AuthorLookup::Unavailable`]
    pub async fn lookup(&self, handle: &str) -> AuthorLookup {
        match self.fetch(handle).await {
            Ok(profile) => AuthorLookup::Found(profile),
            Err(e) => AuthorLookup::Unavailable(e),
        }
    }
}

/// Build a client and resolve `handle` in one go. Never fails: a client that
/// cannot be built is reported the same way as a failed request.
pub async fn lookup_author(config: IdentityConfig, handle: &str) -> AuthorLookup {
    match GithubIdentity::new(config) {
        Ok(identity) => identity.lookup(handle).await,
        Err(e) => AuthorLookup::Unavailable(e),
    }
}
