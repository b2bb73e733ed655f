use thiserror::Error;

#[derive(Error, Debug)]
pub enum InviteError {
    #[error("Invalid file path: {path}")]
    InvalidFile { path: String },

    #[error("Invalid organization name: {org}")]
    InvalidOrganization { org: String },

    #[error("Access token was rejected by the API")]
    InvalidToken,

    #[error("Request failed while validating inputs: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid username(s): {}", .0.join(", "))]
    UnknownUsernames(Vec<String>),

    #[error("Row at line {line} has no column {column}")]
    MissingColumn { line: u64, column: usize },

    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("{} invitation(s) could not be sent", .0.len())]
    InvitationFailures(Vec<crate::domain::model::InvitationFailure>),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Background task failed: {message}")]
    Task { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl InviteError {
    /// Every failure in this tool is fatal.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InviteError::InvalidFile { path } => format!("Invalid File Path: {}", path),
            InviteError::InvalidOrganization { org } => format!("Invalid Org Name: {}", org),
            InviteError::InvalidToken => "Invalid Access Token".to_string(),
            InviteError::Transport(_) => "Something Went Wrong".to_string(),
            InviteError::UnknownUsernames(handles) => {
                format!("Invalid Username(s): {:?}", handles)
            }
            InviteError::InvitationFailures(failures) => {
                let lines: Vec<String> = failures.iter().map(|f| format!("  - {}", f)).collect();
                format!(
                    "{} invitation(s) failed:\n{}",
                    failures.len(),
                    lines.join("\n")
                )
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InviteError::InvalidFile { .. } => "Check that the CSV export path is correct",
            InviteError::InvalidOrganization { .. } => {
                "Check the organization login (not its display name)"
            }
            InviteError::InvalidToken => "Generate a new token with the admin:org scope",
            InviteError::Transport(_) | InviteError::ApiError(_) => {
                "Check network connectivity and the --api-base value"
            }
            InviteError::UnknownUsernames(_) => {
                "Fix the listed usernames in the CSV and run again; no invitations were sent"
            }
            InviteError::MissingColumn { .. } => {
                "Every row needs the GitHub username in column 15"
            }
            InviteError::UnexpectedStatus { status: 403, .. } => {
                "The API refused the request; you may be rate limited"
            }
            InviteError::InvitationFailures(_) => {
                "Invitations already sent are not rolled back; resend only the failed ones"
            }
            InviteError::InvalidConfig { .. } => "Run with --help to see valid arguments",
            _ => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, InviteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::InvitationFailure;

    #[test]
    fn test_unknown_usernames_message_lists_handles() {
        let err = InviteError::UnknownUsernames(vec!["ghost".to_string(), "nobody".to_string()]);
        assert_eq!(err.exit_code(), 1);
        let message = err.user_friendly_message();
        assert!(message.contains("ghost"));
        assert!(message.contains("nobody"));
    }

    #[test]
    fn test_invitation_failures_message() {
        let err = InviteError::InvitationFailures(vec![InvitationFailure {
            handle: "alice".to_string(),
            account_id: 42,
            reason: "status 422".to_string(),
        }]);
        assert_eq!(err.to_string(), "1 invitation(s) could not be sent");
        assert!(err.user_friendly_message().contains("alice (42): status 422"));
    }

    #[test]
    fn test_invalid_token_never_echoes_token() {
        let err = InviteError::InvalidToken;
        assert_eq!(err.user_friendly_message(), "Invalid Access Token");
    }
}
