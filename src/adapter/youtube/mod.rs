//! YouTube Adapter Modules
//!
//! YouTube Data API 統合のためのアダプターモジュール

pub mod client;
pub mod progress;
