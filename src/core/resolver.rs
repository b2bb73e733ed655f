use crate::core::fanout::bounded_fan_out;
use crate::domain::model::{AccountId, Resolution, UsernameSet};
use crate::domain::ports::GitHubApi;
use crate::utils::error::{InviteError, Result};
use crate::utils::progress::PhaseProgress;
use std::collections::HashMap;
use std::sync::Arc;

/// Look every handle up. All lookups finish before this returns; a lookup
/// that fails for any reason other than 404 aborts the phase.
pub async fn resolve_usernames<A>(
    api: Arc<A>,
    usernames: UsernameSet,
    concurrency: usize,
    progress: &PhaseProgress,
) -> Result<Resolution>
where
    A: GitHubApi + ?Sized + 'static,
{
    let outcomes = bounded_fan_out(
        api,
        usernames.into_vec(),
        concurrency,
        progress,
        |api, handle| async move { api.get_user(&handle).await },
    )
    .await?;

    let mut resolution = Resolution::default();
    for (handle, lookup) in outcomes {
        resolution.record(handle, lookup?);
    }

    // 完成順序不固定，排序後輸出才穩定
    resolution.resolved.sort_by(|a, b| a.handle.cmp(&b.handle));
    resolution.unknown.sort();
    collapse_same_account(&mut resolution);

    tracing::info!(
        "Resolved {} handle(s), {} unknown",
        resolution.resolved.len(),
        resolution.unknown.len()
    );
    Ok(resolution)
}

/// GitHub logins are case-insensitive, so `alice` and `Alice` resolve to one
/// account. Keep the first handle per account ID.
fn collapse_same_account(resolution: &mut Resolution) {
    let mut seen: HashMap<AccountId, String> = HashMap::new();
    resolution.resolved.retain(|user| match seen.get(&user.account_id) {
        Some(kept) => {
            tracing::debug!(
                "{} is the same account as {} ({}); inviting once",
                user.handle,
                kept,
                user.account_id
            );
            false
        }
        None => {
            seen.insert(user.account_id, user.handle.clone());
            true
        }
    });
}

/// The gate between resolving and inviting: any unknown handle stops the run.
pub fn require_complete(resolution: Resolution) -> Result<Resolution> {
    if resolution.is_complete() {
        Ok(resolution)
    } else {
        Err(InviteError::UnknownUsernames(resolution.unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ResolvedUser;

    fn user(handle: &str, account_id: AccountId) -> ResolvedUser {
        ResolvedUser {
            handle: handle.to_string(),
            account_id,
        }
    }

    #[test]
    fn test_case_variants_collapse_to_one_account() {
        let mut resolution = Resolution {
            resolved: vec![user("Alice", 1), user("alice", 1), user("bob", 2)],
            unknown: vec![],
        };

        collapse_same_account(&mut resolution);

        assert_eq!(resolution.resolved, vec![user("Alice", 1), user("bob", 2)]);
    }

    #[test]
    fn test_gate_rejects_unknown_handles() {
        let resolution = Resolution {
            resolved: vec![user("bob", 2)],
            unknown: vec!["ghost".to_string()],
        };

        match require_complete(resolution) {
            Err(InviteError::UnknownUsernames(handles)) => {
                assert_eq!(handles, vec!["ghost".to_string()])
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
