//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::auth::static_token::ACCESS_TOKEN_ENV;
use crate::adapter::config::DEFAULT_CLIENT_SECRETS_PATH;

/// 動画をYouTubeに限定公開でアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "yt-uploader")]
#[command(about = "Upload a video to YouTube as an unlisted video", long_about = None)]
pub struct Args {
    /// Video file to upload
    pub path: String,

    /// Video title
    #[arg(short, long)]
    pub title: String,

    /// Video description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Video tag (repeat for multiple tags)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// OAuth client secrets file
    #[arg(short, long, default_value = DEFAULT_CLIENT_SECRETS_PATH)]
    pub client_secrets: String,

    /// Pre-issued access token (skips the interactive authorization)
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Don't draw the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Dry run mode - print the metadata and don't upload
    #[arg(long)]
    pub dry_run: bool,
}
