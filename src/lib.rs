//! # yt-uploader
//!
//! ローカルの動画ファイルを YouTube に限定公開（unlisted）でアップロードするツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、エラー分類、Repository trait
//! - **Application層**: アップロードのユースケース
//! - **Adapter層**: OAuth, YouTube Data API, ローカルファイルとの統合
//! - **Driver層**: CLI、依存性注入、関数エントリポイント

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use domain::errors::UploaderError;
pub use driver::workflow::upload_to_youtube;
