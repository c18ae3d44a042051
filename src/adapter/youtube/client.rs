//! YouTube Client Abstractions
//!
//! 認可済みHTTPトランスポートとクライアントファクトリ

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};

use crate::adapter::repositories::youtube_video_repository::YouTubeVideoRepository;
use crate::domain::entities::credentials::Credentials;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::video_repository::{VideoRepository, VideoRepositoryFactory};

/// YouTube Data API のベースURL
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";

/// 動画挿入エンドポイントのパス
pub const VIDEO_INSERT_PATH: &str = "/upload/youtube/v3/videos";

/// Build the insert-video upload URL for an API base URL
pub fn video_insert_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), VIDEO_INSERT_PATH)
}

/// HTTP client that attaches the bearer token to every request
#[derive(Clone)]
pub struct AuthorizedClient {
    http: Client,
    credentials: Credentials,
}

impl AuthorizedClient {
    pub fn new(http: Client, credentials: Credentials) -> Self {
        Self { http, credentials }
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http
            .post(url)
            .bearer_auth(&self.credentials.access_token)
    }
}

/// Production implementation of VideoRepositoryFactory
pub struct YouTubeClientFactory {
    http: Client,
    base_url: String,
}

impl YouTubeClientFactory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl VideoRepositoryFactory for YouTubeClientFactory {
    async fn connect(
        &self,
        credentials: Credentials,
    ) -> Result<Box<dyn VideoRepository>, UploaderError> {
        debug!("Creating YouTube client for {}", self.base_url);
        let client = AuthorizedClient::new(self.http.clone(), credentials);
        Ok(Box::new(YouTubeVideoRepository::new(
            client,
            video_insert_url(&self.base_url),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_insert_url() {
        assert_eq!(
            video_insert_url(DEFAULT_API_BASE_URL),
            "https://www.googleapis.com/upload/youtube/v3/videos"
        );
    }

    #[test]
    fn test_video_insert_url_trailing_slash() {
        assert_eq!(
            video_insert_url("http://127.0.0.1:1234/"),
            "http://127.0.0.1:1234/upload/youtube/v3/videos"
        );
    }

    #[test]
    fn test_authorized_client_attaches_bearer() {
        let client = AuthorizedClient::new(
            Client::new(),
            Credentials::new("ya29.test", "scope"),
        );

        let request = client.post("http://localhost/videos").build().unwrap();
        let header = request.headers().get("authorization").unwrap();

        assert_eq!(header.to_str().unwrap(), "Bearer ya29.test");
    }
}
