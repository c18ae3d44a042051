//! # Upload Settings DTO
//!
//! アップロード設定のData Transfer Object

use crate::domain::repositories::authorizer::YOUTUBE_UPLOAD_SCOPE;

/// アップロード設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    /// 要求するOAuthスコープ
    pub scope: String,
}

impl UploadSettings {
    /// 新しいアップロード設定を作成します。
    ///
    /// ```
    /// use yt_uploader::application::dto::upload_settings::UploadSettings;
    ///
    /// let settings = UploadSettings::new("https://www.googleapis.com/auth/youtube");
    /// assert_eq!(settings.scope, "https://www.googleapis.com/auth/youtube");
    /// ```
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self::new(YOUTUBE_UPLOAD_SCOPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_is_upload() {
        let settings = UploadSettings::default();
        assert_eq!(
            settings.scope,
            "https://www.googleapis.com/auth/youtube.upload"
        );
    }

    #[test]
    fn test_custom_scope() {
        let settings = UploadSettings::new("custom-scope");
        assert_eq!(settings.scope, "custom-scope");
        assert_ne!(settings, UploadSettings::default());
    }
}
