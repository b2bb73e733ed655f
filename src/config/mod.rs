use crate::domain::ports::{ConfigProvider, DEFAULT_API_BASE, DEFAULT_USERNAME_COLUMN};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

#[derive(Clone, Parser)]
#[command(name = "gh-org-invite")]
#[command(about = "Invite the GitHub users listed in a form-submission CSV to an organization")]
pub struct CliConfig {
    #[arg(short = 'f', long = "file", help = "Path to CSV File")]
    pub file: String,

    #[arg(short = 'n', long = "name", help = "Name of GitHub Organization")]
    pub name: String,

    #[arg(short = 't', long = "token", help = "GitHub Access Token")]
    pub token: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, default_value = "1", help = "Maximum in-flight API requests")]
    pub concurrency: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

// token 不進日誌
impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("file", &self.file)
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("concurrency", &self.concurrency)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn csv_path(&self) -> &str {
        &self.file
    }

    fn organization(&self) -> &str {
        &self.name
    }

    fn token(&self) -> &str {
        &self.token
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn username_column(&self) -> usize {
        DEFAULT_USERNAME_COLUMN
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrency
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("file", &self.file)?;
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("token", &self.token)?;
        validate_url("api_base", &self.api_base)?;
        validate_positive_number("concurrency", self.concurrency, 1)?;
        Ok(())
    }
}
