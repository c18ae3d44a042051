//! # Uploader Errors
//!
//! アップロード処理全体のエラー分類
//!
//! 各ステップで発生したエラーはここで定義された4種類のいずれかに包まれ、
//! 呼び出し元へ一度だけ返される（リトライはしない）。

use thiserror::Error;

/// アップローダーのエラー
#[derive(Debug, Error)]
pub enum UploaderError {
    /// client_secrets.json が読めない、または不正
    #[error("could not load client configuration {path}: {reason}")]
    Config { path: String, reason: String },

    /// 認可コードの取得またはトークン交換に失敗
    #[error("could not authenticate: {0}")]
    Auth(String),

    /// 動画ファイルを開けない
    #[error("could not open {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 通信エラー、またはプラットフォーム側での拒否
    #[error("could not upload: {0}")]
    Upload(String),
}

impl UploaderError {
    pub fn config(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }
}
