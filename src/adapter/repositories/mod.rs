//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod local_media_repository;
pub mod youtube_video_repository;
