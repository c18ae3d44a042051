//! # Credentials Entity
//!
//! OAuthで取得したアクセストークン（ディスクには保存しない）

use chrono::{DateTime, Duration, Utc};

/// 認可済みの資格情報
#[derive(Clone)]
pub struct Credentials {
    /// APIリクエストに付与するアクセストークン
    pub access_token: String,
    /// リフレッシュトークン（offlineフローで発行された場合のみ）
    pub refresh_token: Option<String>,
    /// 有効期限
    pub expires_at: Option<DateTime<Utc>>,
    /// 許可されたスコープ
    pub scope: String,
}

impl Credentials {
    /// アクセストークンのみの資格情報を作成
    pub fn new(access_token: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: None,
            scope: scope.into(),
        }
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// `expires_in` から有効期限を設定
    pub fn expiring_in(mut self, expires_in: std::time::Duration) -> Self {
        self.expires_at = Duration::from_std(expires_in)
            .ok()
            .and_then(|d| Utc::now().checked_add_signed(d));
        self
    }

    /// 指定時刻の時点で期限切れかどうか
    ///
    /// 有効期限が不明な場合は期限切れとみなさない。
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

// Don't leak tokens into logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish()
    }
}
