use crate::domain::model::{InvitationRequest, UserLookup};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::StatusCode;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USERNAME_COLUMN: usize = 14;

pub trait ConfigProvider: Send + Sync {
    fn csv_path(&self) -> &str;
    fn organization(&self) -> &str;
    fn token(&self) -> &str;
    fn api_base(&self) -> &str;
    fn username_column(&self) -> usize;
    fn concurrent_requests(&self) -> usize;
}

/// The slice of the GitHub REST API this tool needs.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /orgs/{org}`
    async fn get_organization(&self, org: &str) -> Result<StatusCode>;

    /// `GET /orgs/{org}/invitations`, only used to probe the token.
    async fn list_invitations(&self, org: &str) -> Result<StatusCode>;

    /// `GET /users/{handle}`
    async fn get_user(&self, handle: &str) -> Result<UserLookup>;

    /// `POST /orgs/{org}/invitations`
    async fn create_invitation(&self, org: &str, request: &InvitationRequest)
        -> Result<StatusCode>;
}
