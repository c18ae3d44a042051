//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::{info, warn};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::adapter::auth::{OfflineFlowAuthorizer, StaticTokenAuthorizer};
use crate::adapter::config::{expand_path, DEFAULT_CLIENT_SECRETS_PATH};
use crate::adapter::repositories::local_media_repository::LocalMediaRepository;
use crate::adapter::youtube::client::{YouTubeClientFactory, DEFAULT_API_BASE_URL};
use crate::adapter::youtube::progress::ProgressMode;
use crate::application::dto::upload_settings::UploadSettings;
use crate::application::use_cases::upload_video::UploadVideoUseCase;
use crate::domain::entities::upload_request::UploadRequest;
use crate::domain::entities::video::VideoResource;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::authorizer::Authorizer;

use super::cli::Args;

/// Build the upload request from CLI arguments
pub fn upload_request_from_args(args: &Args) -> UploadRequest {
    UploadRequest::new(
        args.title.clone(),
        args.description.clone(),
        args.tags.clone(),
        expand_path(&args.path),
    )
}

/// Pick the authorization strategy for the CLI arguments
pub fn authorizer_from_args(args: &Args) -> Arc<dyn Authorizer> {
    match args.access_token.as_deref() {
        Some(token) => Arc::new(StaticTokenAuthorizer::new(token)),
        None => Arc::new(OfflineFlowAuthorizer::new(args.client_secrets.clone())),
    }
}

/// Video Upload Workflow
pub struct VideoUploadWorkflow {
    use_case: UploadVideoUseCase<dyn Authorizer, LocalMediaRepository, YouTubeClientFactory>,
    settings: UploadSettings,
}

impl VideoUploadWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(authorizer: Arc<dyn Authorizer>, progress: ProgressMode, api_base_url: &str) -> Self {
        let media_repo = Arc::new(LocalMediaRepository::new(progress));
        let video_factory = Arc::new(YouTubeClientFactory::new(api_base_url));

        Self {
            use_case: UploadVideoUseCase::new(authorizer, media_repo, video_factory),
            settings: UploadSettings::default(),
        }
    }

    /// Wire the production dependencies from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let progress = if args.no_progress {
            ProgressMode::Hidden
        } else {
            ProgressMode::Stdout
        };
        Self::new(authorizer_from_args(args), progress, DEFAULT_API_BASE_URL)
    }

    /// Run the authorize → open → upload pipeline
    pub async fn upload(
        &self,
        request: &UploadRequest,
        cancel: &CancellationToken,
    ) -> Result<(), UploaderError> {
        self.use_case.execute(request, &self.settings, cancel).await
    }

    /// Execute the upload workflow
    pub async fn execute(&self, args: Args, cancel: &CancellationToken) -> Result<()> {
        info!("Starting YouTube uploader...");
        info!("Dry run: {}", args.dry_run);

        let request = upload_request_from_args(&args);

        println!("✓ Video:");
        println!("  File: {}", request.source_path().display());
        println!("  Title: {}", request.title());
        println!("  Tags: {}", request.tags().join(", "));

        if args.dry_run {
            let payload = serde_json::to_string_pretty(&VideoResource::from_request(&request))
                .context("Failed to serialize video metadata")?;
            println!("✓ Dry-run mode (not actually uploading)");
            println!("  Would upload with metadata:");
            println!("{}", payload);
            return Ok(());
        }

        self.upload(&request, cancel)
            .await
            .with_context(|| format!("Failed to upload {}", request.source_path().display()))?;

        println!("✓ Upload complete!");
        Ok(())
    }
}

/// 実行と割り込みを競わせる
///
/// 割り込みが先に来た場合はトークンをキャンセルし、実行中の処理を破棄して `None` を返す。
/// 認可コードの入力待ちのようにトークンを見ない処理でも中断できる。
pub async fn run_until_interrupted<T>(
    run: impl Future<Output = T>,
    interrupt: impl Future<Output = ()>,
    cancel: &CancellationToken,
) -> Option<T> {
    tokio::select! {
        result = run => Some(result),
        _ = interrupt => {
            warn!("Interrupted, cancelling");
            cancel.cancel();
            None
        }
    }
}

/// ローカルの動画をYouTubeに限定公開でアップロードします。
///
/// カレントディレクトリの `client_secrets.json` を使ったofflineフローで認可し、
/// 標準出力に進捗を表示します。
///
/// # Errors
///
/// `UploaderError` の Config / Auth / File / Upload のいずれか
pub async fn upload_to_youtube(
    cancel: &CancellationToken,
    title: &str,
    description: &str,
    tags: &[String],
    path: impl AsRef<Path>,
) -> Result<(), UploaderError> {
    let request = UploadRequest::new(title, description, tags.to_vec(), path.as_ref());
    let workflow = VideoUploadWorkflow::new(
        Arc::new(OfflineFlowAuthorizer::new(DEFAULT_CLIENT_SECRETS_PATH)),
        ProgressMode::Stdout,
        DEFAULT_API_BASE_URL,
    );

    workflow.upload(&request, cancel).await
}
