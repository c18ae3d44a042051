//! # Video Repository Trait
//!
//! 動画の挿入（アップロード）を抽象化

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::video::VideoResource;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::media_repository::MediaBody;

/// 動画リポジトリ
///
/// 認可済みのトランスポートを保持し、動画を1回だけ送信する
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// メタデータと動画本体を1回のリクエストで送信する
    ///
    /// リトライや再開は行わない。
    ///
    /// # Arguments
    ///
    /// * `video` - snippet/status のメタデータ
    /// * `media` - 動画本体
    /// * `cancel` - キャンセル用トークン（HTTP送信中のみ監視される）
    ///
    /// # Errors
    ///
    /// 通信エラー、キャンセル、プラットフォーム側の拒否で `UploaderError::Upload` を返す
    async fn insert(
        &self,
        video: &VideoResource,
        media: MediaBody,
        cancel: &CancellationToken,
    ) -> Result<(), UploaderError>;
}

/// 資格情報から動画リポジトリを作るファクトリ
#[async_trait]
pub trait VideoRepositoryFactory: Send + Sync {
    async fn connect(&self, credentials: Credentials)
        -> Result<Box<dyn VideoRepository>, UploaderError>;
}
