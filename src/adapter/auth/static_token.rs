//! # Static Token Authorizer
//!
//! 発行済みのアクセストークンをそのまま使う（非対話）

use async_trait::async_trait;
use log::info;

use crate::domain::entities::credentials::Credentials;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::authorizer::Authorizer;

/// 環境変数でアクセストークンを渡すときの変数名
pub const ACCESS_TOKEN_ENV: &str = "YOUTUBE_ACCESS_TOKEN";

pub struct StaticTokenAuthorizer {
    access_token: String,
}

impl StaticTokenAuthorizer {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl Authorizer for StaticTokenAuthorizer {
    async fn authorize(&self, scope: &str) -> Result<Credentials, UploaderError> {
        let token = self.access_token.trim();
        if token.is_empty() {
            return Err(UploaderError::Auth("access token is empty".to_string()));
        }

        info!("Using pre-issued access token");
        Ok(Credentials::new(token, scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::authorizer::YOUTUBE_UPLOAD_SCOPE;

    #[tokio::test]
    async fn test_authorize_returns_token() {
        let authorizer = StaticTokenAuthorizer::new("ya29.static\n");
        let credentials = authorizer.authorize(YOUTUBE_UPLOAD_SCOPE).await.unwrap();

        assert_eq!(credentials.access_token, "ya29.static");
        assert_eq!(credentials.scope, YOUTUBE_UPLOAD_SCOPE);
        assert!(credentials.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_authorize_empty_token() {
        let authorizer = StaticTokenAuthorizer::new("   ");
        let err = authorizer.authorize(YOUTUBE_UPLOAD_SCOPE).await.unwrap_err();

        assert!(err.is_auth());
    }
}
