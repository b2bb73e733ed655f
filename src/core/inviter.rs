use crate::core::fanout::bounded_fan_out;
use crate::domain::model::{InvitationFailure, InvitationReport, InvitationRequest, ResolvedUser};
use crate::domain::ports::GitHubApi;
use crate::utils::error::Result;
use crate::utils::progress::PhaseProgress;
use std::sync::Arc;

/// Send one direct-member invitation per user.
///
/// Every request is issued even when earlier ones fail; failures are collected
/// into the report instead of stopping the loop.
pub async fn send_invitations<A>(
    api: Arc<A>,
    org: &str,
    users: Vec<ResolvedUser>,
    concurrency: usize,
    progress: &PhaseProgress,
) -> Result<InvitationReport>
where
    A: GitHubApi + ?Sized + 'static,
{
    let org: Arc<str> = Arc::from(org);
    let outcomes = bounded_fan_out(api, users, concurrency, progress, move |api, user| {
        let org = Arc::clone(&org);
        async move {
            let request = InvitationRequest::direct_member(&user);
            api.create_invitation(&org, &request).await
        }
    })
    .await?;

    let mut report = InvitationReport::default();
    for (user, outcome) in outcomes {
        match outcome {
            Ok(status) if status.is_success() => {
                tracing::debug!("Invited {} ({})", user.handle, user.account_id);
                report.sent.push(user);
            }
            Ok(status) => {
                tracing::warn!("Invitation for {} returned {}", user.handle, status);
                report.failures.push(InvitationFailure {
                    handle: user.handle,
                    account_id: user.account_id,
                    reason: format!("status {}", status.as_u16()),
                });
            }
            Err(e) => {
                tracing::warn!("Invitation for {} failed: {}", user.handle, e);
                report.failures.push(InvitationFailure {
                    handle: user.handle,
                    account_id: user.account_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    report.failures.sort_by(|a, b| a.handle.cmp(&b.handle));
    Ok(report)
}
