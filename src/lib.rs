pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::GitHubClient;
pub use config::CliConfig;
pub use core::engine::InviteEngine;
pub use utils::error::{InviteError, Result};
