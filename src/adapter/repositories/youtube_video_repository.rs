//! YouTube Video Repository Implementation
//!
//! VideoRepositoryのYouTube Data API実装
//!
//! メタデータと動画本体を1回のmultipartリクエストで送る。
//! 失敗してもリトライや再開はしない。

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tokio_util::io::ReaderStream;
use tokio_util::sync::CancellationToken;

use crate::adapter::youtube::client::AuthorizedClient;
use crate::domain::entities::video::VideoResource;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::media_repository::MediaBody;
use crate::domain::repositories::video_repository::VideoRepository;

const DEFAULT_MEDIA_FILE_NAME: &str = "video";

/// YouTube動画リポジトリ
pub struct YouTubeVideoRepository {
    client: AuthorizedClient,
    insert_url: String,
}

impl YouTubeVideoRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: AuthorizedClient, insert_url: String) -> Self {
        Self { client, insert_url }
    }

    /// snippet と media の2パートからなるフォームを組み立てる
    fn build_form(video: &VideoResource, media: MediaBody) -> Result<Form, UploaderError> {
        let metadata = serde_json::to_string(video)
            .map_err(|e| UploaderError::Upload(format!("could not encode metadata: {}", e)))?;

        let snippet = Part::text(metadata)
            .mime_str("application/json")
            .map_err(|e| UploaderError::Upload(e.to_string()))?;

        let body = Body::wrap_stream(ReaderStream::new(media.reader));
        let media_part = match media.content_length {
            Some(len) => Part::stream_with_length(body, len),
            None => Part::stream(body),
        };
        let media_part = media_part
            .file_name(
                media
                    .file_name
                    .unwrap_or_else(|| DEFAULT_MEDIA_FILE_NAME.to_string()),
            )
            .mime_str("video/*")
            .map_err(|e| UploaderError::Upload(e.to_string()))?;

        Ok(Form::new().part("snippet", snippet).part("media", media_part))
    }
}

#[async_trait]
impl VideoRepository for YouTubeVideoRepository {
    async fn insert(
        &self,
        video: &VideoResource,
        media: MediaBody,
        cancel: &CancellationToken,
    ) -> Result<(), UploaderError> {
        let form = Self::build_form(video, media)?;

        let request = self
            .client
            .post(&self.insert_url)
            .query(&[
                ("part", VideoResource::parts()),
                ("uploadType", "multipart"),
            ])
            .multipart(form);

        debug!("POST {}", self.insert_url);

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Upload cancelled");
                return Err(UploaderError::Upload("upload cancelled".to_string()));
            }
            result = request.send() => {
                result.map_err(|e| UploaderError::Upload(e.to_string()))?
            }
        };

        let status = response.status();
        if !status.is_success() {
            // Platform rejections (quota, invalid metadata...) are returned verbatim
            let text = response.text().await.unwrap_or_default();
            warn!("YouTube rejected the upload: {}", status);
            return Err(UploaderError::Upload(format!("{}: {}", status, text)));
        }

        info!("YouTube accepted the upload ({})", status);
        Ok(())
    }
}
