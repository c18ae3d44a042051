//! Local Media Repository Implementation
//!
//! MediaRepositoryのローカルファイル実装（進捗バー付き）

use async_trait::async_trait;
use log::debug;
use std::path::Path;
use tokio::fs::File;

use crate::adapter::youtube::progress::{observe_reader, ProgressMode};
use crate::domain::errors::UploaderError;
use crate::domain::repositories::media_repository::{MediaBody, MediaRepository};

/// ローカルファイルの動画を読むリポジトリ
#[derive(Debug, Default)]
pub struct LocalMediaRepository {
    progress: ProgressMode,
}

impl LocalMediaRepository {
    /// 新しいリポジトリを作成
    pub fn new(progress: ProgressMode) -> Self {
        Self { progress }
    }
}

#[async_trait]
impl MediaRepository for LocalMediaRepository {
    async fn open(&self, path: &Path) -> Result<MediaBody, UploaderError> {
        let file = File::open(path)
            .await
            .map_err(|e| UploaderError::file(path.display().to_string(), e))?;

        let total = file.metadata().await.map(|m| m.len());
        debug!("stat {}: {:?}", path.display(), total);

        let observed = observe_reader(file, total, self.progress);
        let mut body = MediaBody::new(observed.reader, observed.total);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            body = body.with_file_name(name);
        }

        Ok(body)
    }
}
