//! yt-uploader - YouTube Video Uploader
//!
//! ローカルの動画ファイルを YouTube にアップロード

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use log::warn;
use tokio_util::sync::CancellationToken;

use yt_uploader::driver::{run_until_interrupted, Args, VideoUploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Create workflow with injected dependencies
    let workflow = VideoUploadWorkflow::from_args(&args);

    let cancel = CancellationToken::new();
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            // 割り込みを待てない場合は最後まで実行する
            warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match run_until_interrupted(workflow.execute(args, &cancel), interrupt, &cancel).await {
        Some(result) => result,
        None => {
            eprintln!("⚠ Interrupted");
            // The runtime would otherwise wait for a pending stdin read on shutdown
            std::process::exit(130);
        }
    }
}
