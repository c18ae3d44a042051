//! # Upload Video Use Case
//!
//! 動画アップロードユースケース
//!
//! 状態は一方向にのみ遷移する:
//! `Unauthenticated → Authenticated → FileOpened → Uploading → {Done | Failed}`

use log::{info, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::dto::upload_settings::UploadSettings;
use crate::domain::entities::upload_request::UploadRequest;
use crate::domain::entities::video::VideoResource;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::authorizer::Authorizer;
use crate::domain::repositories::media_repository::MediaRepository;
use crate::domain::repositories::video_repository::VideoRepositoryFactory;

/// 動画アップロードユースケース
///
/// 認可して、ファイルを開き、1回のリクエストで送信する
pub struct UploadVideoUseCase<A, M, F>
where
    A: Authorizer + ?Sized,
    M: MediaRepository + ?Sized,
    F: VideoRepositoryFactory + ?Sized,
{
    authorizer: Arc<A>,
    media_repository: Arc<M>,
    video_factory: Arc<F>,
}

impl<A, M, F> UploadVideoUseCase<A, M, F>
where
    A: Authorizer + ?Sized,
    M: MediaRepository + ?Sized,
    F: VideoRepositoryFactory + ?Sized,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `authorizer` - 認可戦略
    /// * `media_repository` - 動画ファイルの読み出し
    /// * `video_factory` - 認可済みの動画リポジトリを作るファクトリ
    pub fn new(authorizer: Arc<A>, media_repository: Arc<M>, video_factory: Arc<F>) -> Self {
        Self {
            authorizer,
            media_repository,
            video_factory,
        }
    }

    /// 動画をアップロード
    ///
    /// # Arguments
    ///
    /// * `request` - アップロード要求
    /// * `settings` - アップロード設定
    /// * `cancel` - キャンセル用トークン
    ///
    /// # Errors
    ///
    /// いずれかのステップが失敗した時点でそのエラーを返す（リトライなし）
    pub async fn execute(
        &self,
        request: &UploadRequest,
        settings: &UploadSettings,
        cancel: &CancellationToken,
    ) -> Result<(), UploaderError> {
        // Unauthenticated → Authenticated
        info!("Authorizing with scope {}", settings.scope);
        let credentials = self.authorizer.authorize(&settings.scope).await?;
        if credentials.is_expired() {
            warn!("Access token is already expired, the upload will likely be rejected");
        }
        let repository = self.video_factory.connect(credentials).await?;

        let video = VideoResource::from_request(request);

        // Authenticated → FileOpened
        let media = self.media_repository.open(request.source_path()).await?;
        info!(
            "Opened {} ({} bytes)",
            request.source_path().display(),
            media
                .content_length
                .map_or_else(|| "unknown".to_string(), |n| n.to_string())
        );

        // FileOpened → Uploading → Done | Failed
        info!("Uploading video to YouTube");
        repository.insert(&video, media, cancel).await?;

        info!("Upload of \"{}\" finished", video.snippet.title);
        Ok(())
    }
}
