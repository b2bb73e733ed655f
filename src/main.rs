use clap::Parser;
use gh_org_invite::core::validator::check_csv_path;
use gh_org_invite::domain::ports::ConfigProvider;
use gh_org_invite::utils::{logger, validation::Validate};
use gh_org_invite::{CliConfig, GitHubClient, InviteEngine};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gh-org-invite");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = check_csv_path(config.csv_path()) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let client = match GitHubClient::new(config.api_base(), config.token()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let engine = InviteEngine::new(Arc::new(client), config);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Invited {} of {} username(s)",
                summary.invited,
                summary.usernames
            );
        }
        Err(e) => {
            tracing::error!("❌ Run aborted: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
