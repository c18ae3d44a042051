//! # Media Repository Trait
//!
//! アップロードする動画データの読み出しを抽象化

use async_trait::async_trait;
use std::path::Path;
use std::pin::Pin;
use tokio::io::AsyncRead;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::UploaderError;

/// 動画データのリーダー
pub type MediaReader = Pin<Box<dyn AsyncRead + Send + Sync>>;

/// アップロードする動画本体
///
/// ファイルハンドルはリーダーが所有し、drop された時点で閉じられる。
pub struct MediaBody {
    /// 動画データ
    pub reader: MediaReader,
    /// バイト数（statに失敗した場合は不明）
    pub content_length: Option<u64>,
    /// multipartのファイル名
    pub file_name: Option<String>,
}

impl MediaBody {
    pub fn new(reader: MediaReader, content_length: Option<u64>) -> Self {
        Self {
            reader,
            content_length,
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

impl std::fmt::Debug for MediaBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaBody")
            .field("content_length", &self.content_length)
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// メディアリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// 動画ファイルを開く
    ///
    /// # Errors
    ///
    /// ファイルが存在しない、または読めない場合に `UploaderError::File` を返す
    async fn open(&self, path: &Path) -> Result<MediaBody, UploaderError>;
}
