//! # Authorizer Trait
//!
//! 資格情報の取得を抽象化
//!
//! 対話的なofflineフロー、環境変数のトークン、テスト用のダブルなどを
//! 差し替えられるようにするためのインターフェース。

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::credentials::Credentials;
use crate::domain::errors::UploaderError;

/// YouTubeへのアップロードに必要なスコープ
pub const YOUTUBE_UPLOAD_SCOPE: &str = "https://www.googleapis.com/auth/youtube.upload";

/// 認可戦略
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// 指定スコープの資格情報を取得する
    ///
    /// # Arguments
    ///
    /// * `scope` - 要求するOAuthスコープ
    ///
    /// # Errors
    ///
    /// 設定ファイルが不正な場合は `UploaderError::Config`、
    /// コード交換に失敗した場合は `UploaderError::Auth` を返す
    async fn authorize(&self, scope: &str) -> Result<Credentials, UploaderError>;
}
