use crate::domain::ports::GitHubApi;
use crate::utils::error::{InviteError, Result};
use reqwest::StatusCode;
use std::path::Path;

/// Check the CSV path, the organization and the token, in that order.
///
/// The file check happens before any request is made. Transport failures are
/// reported as `InviteError::Transport`.
pub async fn validate_inputs<A>(api: &A, csv_path: &str, org: &str) -> Result<()>
where
    A: GitHubApi + ?Sized,
{
    check_csv_path(csv_path)?;

    let status = api.get_organization(org).await.map_err(into_transport)?;
    if status == StatusCode::NOT_FOUND {
        return Err(InviteError::InvalidOrganization {
            org: org.to_string(),
        });
    }

    let status = api.list_invitations(org).await.map_err(into_transport)?;
    match status {
        StatusCode::UNAUTHORIZED => return Err(InviteError::InvalidToken),
        StatusCode::FORBIDDEN => {
            tracing::warn!(
                "⚠️ Token cannot list invitations for {}; it may lack the admin:org scope",
                org
            );
        }
        _ => {}
    }

    tracing::info!("✅ Inputs validated for organization {}", org);
    Ok(())
}

/// The only check that needs no network; callers run it before building a client.
pub fn check_csv_path(csv_path: &str) -> Result<()> {
    if Path::new(csv_path).exists() {
        Ok(())
    } else {
        Err(InviteError::InvalidFile {
            path: csv_path.to_string(),
        })
    }
}

fn into_transport(err: InviteError) -> InviteError {
    match err {
        InviteError::ApiError(e) => InviteError::Transport(e),
        other => other,
    }
}
