//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadVideoUseCase**: 認可 → ファイルを開く → 送信

pub mod upload_video;
