//! # Domain Layer
//!
//! このモジュールはアップロード処理の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPクライアントやOAuthライブラリに依存しない
//! - 外部とのやり取りは Repository trait 越しに行う
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（UploadRequest, Credentials, VideoResource）
//! - **errors**: エラー分類（UploaderError）
//! - **repositories**: Repository trait（インターフェース定義のみ）

pub mod entities;
pub mod errors;
pub mod repositories;
