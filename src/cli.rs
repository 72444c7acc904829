use crate::actors::SearchControllerConfig;
use crate::github::API_BASE_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "repo-pinboard")]
#[command(about = "Repo Pinboard - Search GitHub repositories and pin up to three of them")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub api_url: String,

    /// Quiet period after the last keystroke before searching, in milliseconds
    #[arg(long, env = "PINBOARD_DEBOUNCE_MS", default_value_t = 400)]
    pub debounce_ms: u64,

    /// Delay before the dropdown hides after the input loses focus, in milliseconds
    #[arg(long, env = "PINBOARD_BLUR_GRACE_MS", default_value_t = 200)]
    pub blur_grace_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "PINBOARD_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// File that receives the log output
    #[arg(long, env = "PINBOARD_LOG_FILE", default_value = "repo-pinboard.log")]
    pub log_file: PathBuf,

    /// Heading shown above the search line
    #[arg(long, default_value = "GitHub Repository Search")]
    pub title: String,
}

/// Everything needed to start the widget.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_file: PathBuf,
    pub controller: SearchControllerConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            log_file: PathBuf::from("repo-pinboard.log"),
            controller: SearchControllerConfig::default(),
        }
    }
}

impl From<Cli> for WidgetConfig {
    fn from(cli: Cli) -> Self {
        Self {
            api_url: cli.api_url,
            request_timeout: Duration::from_secs(cli.timeout_secs),
            log_file: cli.log_file,
            controller: SearchControllerConfig {
                title: cli.title,
                debounce: Duration::from_millis(cli.debounce_ms),
                blur_grace: Duration::from_millis(cli.blur_grace_ms),
            },
        }
    }
}
