//! # Upload Request Entity
//!
//! アップロード要求（1回の実行につき1つだけ作られる）

use std::path::{Path, PathBuf};

/// アップロード要求
///
/// 呼び出し元が指定した動画のメタデータと、ローカルの動画ファイルのパス。
/// 作成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    title: String,
    description: String,
    tags: Vec<String>,
    source_path: PathBuf,
}

impl UploadRequest {
    /// 新しいアップロード要求を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use yt_uploader::domain::entities::upload_request::UploadRequest;
    ///
    /// let request = UploadRequest::new(
    ///     "Ep 1",
    ///     "Show notes",
    ///     vec!["podcast".to_string(), "ep1".to_string()],
    ///     "/tmp/ep1.mp4",
    /// );
    ///
    /// assert_eq!(request.title(), "Ep 1");
    /// assert_eq!(request.tags(), ["podcast", "ep1"]);
    /// ```
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
            source_path: source_path.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// タグ（指定された順序を保持）
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
