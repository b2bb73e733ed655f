use crate::core::inviter::send_invitations;
use crate::core::reader::read_usernames;
use crate::core::resolver::{require_complete, resolve_usernames};
use crate::core::validator::validate_inputs;
use crate::domain::model::RunSummary;
use crate::domain::ports::{ConfigProvider, GitHubApi};
use crate::utils::error::{InviteError, Result};
use crate::utils::progress::PhaseProgress;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Normalize,
    Resolve,
    Invite,
    Done,
}

pub struct InviteEngine<A: GitHubApi + ?Sized, C: ConfigProvider> {
    api: Arc<A>,
    config: C,
    show_progress: bool,
}

impl<A, C> InviteEngine<A, C>
where
    A: GitHubApi + ?Sized + 'static,
    C: ConfigProvider,
{
    pub fn new(api: Arc<A>, config: C) -> Self {
        Self {
            api,
            config,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    fn progress(&self, total: usize, phase: &str) -> PhaseProgress {
        if self.show_progress {
            PhaseProgress::new(total as u64, phase)
        } else {
            PhaseProgress::hidden()
        }
    }

    fn enter(&self, stage: Stage) {
        tracing::debug!("Entering stage {:?}", stage);
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let org = self.config.organization();
        let concurrency = self.config.concurrent_requests();

        self.enter(Stage::Validate);
        validate_inputs(self.api.as_ref(), self.config.csv_path(), org).await?;

        self.enter(Stage::Normalize);
        let usernames = read_usernames(self.config.csv_path(), self.config.username_column())?;
        let total = usernames.len();
        println!("Found {} unique username(s)", total);

        self.enter(Stage::Resolve);
        println!("Retrieving User Ids...");
        let progress = self.progress(total, "Retrieving");
        let resolution =
            resolve_usernames(Arc::clone(&self.api), usernames, concurrency, &progress).await;
        progress.finish();
        let resolution = require_complete(resolution?)?;

        self.enter(Stage::Invite);
        println!("Sending Invitations...");
        let progress = self.progress(resolution.resolved.len(), "Inviting");
        let report = send_invitations(
            Arc::clone(&self.api),
            org,
            resolution.resolved,
            concurrency,
            &progress,
        )
        .await;
        progress.finish();
        let report = report?;

        if !report.failures.is_empty() {
            return Err(InviteError::InvitationFailures(report.failures));
        }

        self.enter(Stage::Done);
        println!("All done! :)");
        Ok(RunSummary {
            usernames: total,
            invited: report.sent.len(),
        })
    }
}
