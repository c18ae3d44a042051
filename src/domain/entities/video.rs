//! # Video Resource Entity
//!
//! 動画挿入APIに送るメタデータ（`part=snippet,status`）

use serde::Serialize;

use super::upload_request::UploadRequest;

/// 公開範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Unlisted,
}

/// アップロード時の公開範囲（呼び出し元からは変更できない）
pub const UPLOAD_VISIBILITY: Visibility = Visibility::Unlisted;

/// snippet パート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSnippet {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// status パート
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub privacy_status: Visibility,
}

/// 動画リソース（メタデータのペイロード）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoResource {
    pub snippet: VideoSnippet,
    pub status: VideoStatus,
}

impl VideoResource {
    /// アップロード要求からメタデータを組み立てます。
    ///
    /// 公開範囲は常に [`UPLOAD_VISIBILITY`]（unlisted）になります。
    ///
    /// ```
    /// use yt_uploader::domain::entities::upload_request::UploadRequest;
    /// use yt_uploader::domain::entities::video::{VideoResource, Visibility};
    ///
    /// let request = UploadRequest::new("Ep 1", "Show notes", vec![], "/tmp/ep1.mp4");
    /// let video = VideoResource::from_request(&request);
    ///
    /// assert_eq!(video.snippet.title, "Ep 1");
    /// assert_eq!(video.status.privacy_status, Visibility::Unlisted);
    /// ```
    pub fn from_request(request: &UploadRequest) -> Self {
        Self {
            snippet: VideoSnippet {
                title: request.title().to_string(),
                description: request.description().to_string(),
                tags: request.tags().to_vec(),
            },
            status: VideoStatus {
                privacy_status: UPLOAD_VISIBILITY,
            },
        }
    }

    /// 設定するリソースのパート（APIの `part` パラメータ）
    pub fn parts() -> &'static str {
        "snippet,status"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_request() -> UploadRequest {
        UploadRequest::new(
            "Ep 1",
            "Show notes",
            vec!["podcast".to_string(), "ep1".to_string()],
            "/tmp/ep1.mp4",
        )
    }

    #[test]
    fn test_from_request_copies_metadata() {
        let video = VideoResource::from_request(&create_test_request());

        assert_eq!(video.snippet.title, "Ep 1");
        assert_eq!(video.snippet.description, "Show notes");
        assert_eq!(video.snippet.tags, vec!["podcast", "ep1"]);
    }

    #[test]
    fn test_visibility_is_always_unlisted() {
        let requests = [
            create_test_request(),
            UploadRequest::new("public?", "", vec!["public".to_string()], "a.mp4"),
            UploadRequest::new("", "", vec![], "b.mp4"),
        ];

        for request in &requests {
            let video = VideoResource::from_request(request);
            assert_eq!(video.status.privacy_status, Visibility::Unlisted);
        }
    }

    #[test]
    fn test_serialized_payload_shape() {
        let video = VideoResource::from_request(&create_test_request());
        let value = serde_json::to_value(&video).unwrap();

        assert_eq!(
            value,
            json!({
                "snippet": {
                    "title": "Ep 1",
                    "description": "Show notes",
                    "tags": ["podcast", "ep1"]
                },
                "status": {
                    "privacyStatus": "unlisted"
                }
            })
        );
    }

    #[test]
    fn test_parts() {
        assert_eq!(VideoResource::parts(), "snippet,status");
    }
}
