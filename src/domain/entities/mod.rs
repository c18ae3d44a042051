//! # Domain Entities
//!
//! ビジネスエンティティの定義

pub mod credentials;
pub mod upload_request;
pub mod video;
