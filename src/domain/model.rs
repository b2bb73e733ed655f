use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Numeric identifier GitHub assigns to an account.
pub type AccountId = u64;

/// Outcome of looking a single handle up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLookup {
    Found(AccountId),
    NotFound,
}

/// Subset of the `GET /users/{handle}` payload we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub id: AccountId,
    #[serde(default)]
    pub login: Option<String>,
}

/// Deduplicated, normalized GitHub handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsernameSet {
    handles: BTreeSet<String>,
}

impl UsernameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the handle was already present.
    pub fn insert(&mut self, handle: String) -> bool {
        self.handles.insert(handle)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.handles.contains(handle)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.handles.into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    pub handle: String,
    pub account_id: AccountId,
}

/// Result of the resolve phase, before the unknown-handle gate is applied.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub resolved: Vec<ResolvedUser>,
    pub unknown: Vec<String>,
}

impl Resolution {
    pub fn record(&mut self, handle: String, lookup: UserLookup) {
        match lookup {
            UserLookup::Found(account_id) => self.resolved.push(ResolvedUser { handle, account_id }),
            UserLookup::NotFound => self.unknown.push(handle),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    DirectMember,
}

/// Body of `POST /orgs/{org}/invitations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationRequest {
    #[serde(skip)]
    pub handle: String,
    pub invitee_id: AccountId,
    pub role: MembershipRole,
}

impl InvitationRequest {
    pub fn direct_member(user: &ResolvedUser) -> Self {
        Self {
            handle: user.handle.clone(),
            invitee_id: user.account_id,
            role: MembershipRole::DirectMember,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationFailure {
    pub handle: String,
    pub account_id: AccountId,
    pub reason: String,
}

impl fmt::Display for InvitationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.handle, self.account_id, self.reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvitationReport {
    pub sent: Vec<ResolvedUser>,
    pub failures: Vec<InvitationFailure>,
}

/// What a successful run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub usernames: usize,
    pub invited: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invitation_request_payload() {
        let user = ResolvedUser {
            handle: "bob".to_string(),
            account_id: 7,
        };
        let body = serde_json::to_value(InvitationRequest::direct_member(&user)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"invitee_id": 7, "role": "direct_member"})
        );
    }

    #[test]
    fn test_resolution_record_splits_found_and_unknown() {
        let mut resolution = Resolution::default();
        resolution.record("bob".to_string(), UserLookup::Found(1));
        resolution.record("ghost".to_string(), UserLookup::NotFound);

        assert!(!resolution.is_complete());
        assert_eq!(resolution.resolved.len(), 1);
        assert_eq!(resolution.unknown, vec!["ghost".to_string()]);
    }
}
