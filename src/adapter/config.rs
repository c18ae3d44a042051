//! # Client Configuration
//!
//! OAuthクライアント設定（client_secrets.json）の読み込み
//!
//! Google Cloud Console からダウンロードした JSON は、トップレベルに
//! `installed`（デスクトップアプリ）または `web` のどちらかを持つ。

use serde::Deserialize;
use std::fs;

use crate::domain::errors::UploaderError;

/// デフォルトの設定ファイル（カレントディレクトリ）
pub const DEFAULT_CLIENT_SECRETS_PATH: &str = "client_secrets.json";

const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Expands tilde in path and returns the full path
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// OAuthクライアント設定
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

fn default_auth_uri() -> String {
    DEFAULT_AUTH_URI.to_string()
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Deserialize)]
struct ClientSecretsFile {
    installed: Option<ClientConfig>,
    web: Option<ClientConfig>,
}

impl ClientConfig {
    /// ファイルから設定を読み込む
    ///
    /// # Errors
    ///
    /// 読み込みまたはパースに失敗した場合に `UploaderError::Config` を返す
    pub fn load(path: &str) -> Result<Self, UploaderError> {
        let expanded = expand_path(path);
        let content =
            fs::read_to_string(&expanded).map_err(|e| UploaderError::config(path, e))?;
        Self::from_json(&content).map_err(|reason| UploaderError::config(path, reason))
    }

    /// JSON文字列から設定をパースする
    pub fn from_json(json: &str) -> Result<Self, String> {
        let file: ClientSecretsFile = serde_json::from_str(json).map_err(|e| e.to_string())?;

        // Desktop clients take precedence over web clients
        let config = file
            .installed
            .or(file.web)
            .ok_or_else(|| "no credentials found (expected \"installed\" or \"web\")".to_string())?;

        if config.client_id.trim().is_empty() {
            return Err("client_id is empty".to_string());
        }
        if config.redirect_uris.is_empty() {
            return Err("missing redirect URL".to_string());
        }

        Ok(config)
    }

    /// 認可コードの受け取り先（最初のリダイレクトURI）
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uris.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const INSTALLED_JSON: &str = r#"{
        "installed": {
            "client_id": "123.apps.googleusercontent.com",
            "project_id": "podcast-uploads",
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "https://oauth2.googleapis.com/token",
            "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
            "client_secret": "shh",
            "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob", "http://localhost"]
        }
    }"#;

    #[test]
    fn test_from_json_installed() {
        let config = ClientConfig::from_json(INSTALLED_JSON).unwrap();

        assert_eq!(config.client_id, "123.apps.googleusercontent.com");
        assert_eq!(config.client_secret, "shh");
        assert_eq!(config.token_uri, "https://oauth2.googleapis.com/token");
        assert_eq!(config.redirect_uri(), Some("urn:ietf:wg:oauth:2.0:oob"));
    }

    #[test]
    fn test_from_json_web() {
        let json = r#"{
            "web": {
                "client_id": "456.apps.googleusercontent.com",
                "client_secret": "web-secret",
                "redirect_uris": ["https://example.com/callback"]
            }
        }"#;

        let config = ClientConfig::from_json(json).unwrap();

        assert_eq!(config.client_id, "456.apps.googleusercontent.com");
        // 省略されたURIはGoogleのデフォルト
        assert_eq!(config.auth_uri, DEFAULT_AUTH_URI);
        assert_eq!(config.token_uri, DEFAULT_TOKEN_URI);
        assert_eq!(config.redirect_uri(), Some("https://example.com/callback"));
    }

    #[test]
    fn test_from_json_no_credentials() {
        let err = ClientConfig::from_json(r#"{"service_account": {}}"#).unwrap_err();
        assert!(err.contains("no credentials found"));
    }

    #[test]
    fn test_from_json_missing_redirect() {
        let json = r#"{"installed": {"client_id": "id", "client_secret": "s"}}"#;
        let err = ClientConfig::from_json(json).unwrap_err();
        assert_eq!(err, "missing redirect URL");
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(ClientConfig::from_json("{not json").is_err());
        assert!(ClientConfig::from_json("").is_err());
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(INSTALLED_JSON.as_bytes()).unwrap();

        let config = ClientConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.client_id, "123.apps.googleusercontent.com");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = ClientConfig::load("/nonexistent/path/client_secrets.json").unwrap_err();

        assert!(err.is_config());
        assert!(err.to_string().contains("/nonexistent/path/client_secrets.json"));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"installed\": ").unwrap();

        let err = ClientConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        #[cfg(unix)]
        let home = std::env::var("HOME")
            .expect("HOME environment variable should be set on Unix systems");

        #[cfg(windows)]
        let home = std::env::var("USERPROFILE")
            .expect("USERPROFILE environment variable should be set on Windows");

        let result = expand_path("~/videos/ep1.mp4");
        let expected = format!("{}/videos/ep1.mp4", home);

        #[cfg(unix)]
        assert_eq!(result, expected);

        #[cfg(windows)]
        assert_eq!(result.replace('\\', "/"), expected.replace('\\', "/"));
    }

    #[test]
    fn test_expand_path_absolute() {
        assert_eq!(expand_path("/tmp/ep1.mp4"), "/tmp/ep1.mp4");
    }

    #[test]
    fn test_expand_path_relative() {
        assert_eq!(expand_path("client_secrets.json"), "client_secrets.json");
    }
}
