//! # Offline Authorization Flow
//!
//! 認可URLを表示し、オペレーターが貼り付けた認可コードをトークンに交換する
//!
//! 取得したトークンはディスクに保存しない。

use async_trait::async_trait;
use log::{debug, info};
use oauth2::basic::{BasicClient, BasicErrorResponse};
use oauth2::reqwest::async_http_client;
use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl,
    RequestTokenError, Scope, TokenResponse, TokenUrl,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::adapter::config::ClientConfig;
use crate::domain::entities::credentials::Credentials;
use crate::domain::errors::UploaderError;
use crate::domain::repositories::authorizer::Authorizer;

/// 認可コードの入力
pub trait CodePrompt: Send + Sync {
    /// 認可URLを提示し、入力されたコードを返す
    fn prompt(&self, authorization_url: &str) -> io::Result<String>;
}

/// 標準入出力を使う入力
pub struct StdinPrompt;

#[cfg_attr(coverage_nightly, coverage(off))]
impl CodePrompt for StdinPrompt {
    fn prompt(&self, authorization_url: &str) -> io::Result<String> {
        println!("Go here: \n\t{}", authorization_url);
        print!("Then enter the code: ");
        io::stdout().flush()?;

        let mut code = String::new();
        io::stdin().lock().read_line(&mut code)?;
        Ok(code.trim().to_string())
    }
}

/// offlineフローによる認可
pub struct OfflineFlowAuthorizer {
    client_secrets_path: String,
    prompt: Arc<dyn CodePrompt>,
}

impl OfflineFlowAuthorizer {
    /// 標準入力からコードを読む認可を作成
    pub fn new(client_secrets_path: impl Into<String>) -> Self {
        Self::with_prompt(client_secrets_path, Arc::new(StdinPrompt))
    }

    pub fn with_prompt(client_secrets_path: impl Into<String>, prompt: Arc<dyn CodePrompt>) -> Self {
        Self {
            client_secrets_path: client_secrets_path.into(),
            prompt,
        }
    }

    /// 設定からOAuthクライアントを作る
    pub fn build_client(
        config: &ClientConfig,
        config_path: &str,
    ) -> Result<BasicClient, UploaderError> {
        let auth_url = AuthUrl::new(config.auth_uri.clone())
            .map_err(|e| UploaderError::config(config_path, format!("invalid auth_uri: {}", e)))?;
        let token_url = TokenUrl::new(config.token_uri.clone())
            .map_err(|e| UploaderError::config(config_path, format!("invalid token_uri: {}", e)))?;
        let redirect_uri = config
            .redirect_uri()
            .ok_or_else(|| UploaderError::config(config_path, "missing redirect URL"))?;
        let redirect_url = RedirectUrl::new(redirect_uri.to_string()).map_err(|e| {
            UploaderError::config(config_path, format!("invalid redirect URL: {}", e))
        })?;

        let client = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            Some(ClientSecret::new(config.client_secret.clone())),
            auth_url,
            Some(token_url),
        )
        // Google expects the client credentials in the form body
        .set_auth_type(AuthType::RequestBody)
        .set_redirect_uri(redirect_url);

        Ok(client)
    }

    /// 認可URLを組み立てる
    pub fn authorization_url(client: &BasicClient, scope: &str) -> String {
        let (url, _state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(scope.to_string()))
            .add_extra_param("access_type", "offline")
            .url();
        url.to_string()
    }
}

fn describe_token_error<RE>(err: RequestTokenError<RE, BasicErrorResponse>) -> String
where
    RE: std::error::Error + 'static,
{
    match err {
        RequestTokenError::ServerResponse(response) => response.to_string(),
        other => other.to_string(),
    }
}

#[async_trait]
impl Authorizer for OfflineFlowAuthorizer {
    async fn authorize(&self, scope: &str) -> Result<Credentials, UploaderError> {
        // Config errors must surface before any network call
        let config = ClientConfig::load(&self.client_secrets_path)?;
        let client = Self::build_client(&config, &self.client_secrets_path)?;

        let url = Self::authorization_url(&client, scope);
        debug!("Authorization URL: {}", url);

        // 標準入力はブロッキングなので専用スレッドで待つ
        let prompt = self.prompt.clone();
        let code = tokio::task::spawn_blocking(move || prompt.prompt(&url))
            .await
            .map_err(|e| UploaderError::Auth(format!("prompt task failed: {}", e)))?
            .map_err(|e| UploaderError::Auth(format!("could not read authorization code: {}", e)))?;

        if code.is_empty() {
            return Err(UploaderError::Auth("no authorization code entered".to_string()));
        }

        info!("Exchanging authorization code for a token");
        let token = client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(async_http_client)
            .await
            .map_err(|e| UploaderError::Auth(describe_token_error(e)))?;

        let mut credentials = Credentials::new(token.access_token().secret().clone(), scope);
        if let Some(refresh_token) = token.refresh_token() {
            credentials = credentials.with_refresh_token(refresh_token.secret().clone());
        }
        if let Some(expires_in) = token.expires_in() {
            credentials = credentials.expiring_in(expires_in);
        }

        info!("✓ Authorized ({:?})", credentials.expires_at);
        Ok(credentials)
    }
}
