use crate::domain::model::{GitHubUser, InvitationRequest, UserLookup};
use crate::domain::ports::GitHubApi;
use crate::utils::error::{InviteError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use url::Url;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// `GitHubApi` over HTTPS with bearer-token auth.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| InviteError::InvalidConfig {
            field: "api_base".to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InviteError::InvalidConfig {
                field: "api_base".to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| InviteError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Append `segments` to the base URL, each one percent-encoded as a single
    /// path segment, so `/`, `?`, `#` inside a handle never change the route.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base 已在 new() 排除
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// `.` and `..` are dropped by URL path normalization, so they can never name a user.
fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_organization(&self, org: &str) -> Result<StatusCode> {
        if is_dot_segment(org) {
            return Ok(StatusCode::NOT_FOUND);
        }
        let url = self.endpoint(&["orgs", org]);
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Organization lookup status: {}", response.status());
        Ok(response.status())
    }

    async fn list_invitations(&self, org: &str) -> Result<StatusCode> {
        let url = self.endpoint(&["orgs", org, "invitations"]);
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Invitation listing status: {}", response.status());
        Ok(response.status())
    }

    async fn get_user(&self, handle: &str) -> Result<UserLookup> {
        if is_dot_segment(handle) {
            return Ok(UserLookup::NotFound);
        }
        let url = self.endpoint(&["users", handle]);
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(UserLookup::NotFound);
        }
        if !status.is_success() {
            return Err(InviteError::UnexpectedStatus {
                endpoint: url.path().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<GitHubUser>(&body) {
            Ok(user) => {
                tracing::debug!("Resolved {} -> {} ({:?})", handle, user.id, user.login);
                Ok(UserLookup::Found(user.id))
            }
            Err(e) => {
                tracing::warn!("Response for {} is not a user ({}); treating as unknown", handle, e);
                Ok(UserLookup::NotFound)
            }
        }
    }

    async fn create_invitation(
        &self,
        org: &str,
        request: &InvitationRequest,
    ) -> Result<StatusCode> {
        let url = self.endpoint(&["orgs", org, "invitations"]);
        tracing::debug!("POST {} invitee_id={}", url, request.invitee_id);
        let response = self.client.post(url).json(request).send().await?;
        Ok(response.status())
    }
}
