//! Authentication Module
//!
//! Authorizer trait の実装

pub mod offline_flow;
pub mod static_token;

pub use offline_flow::{CodePrompt, OfflineFlowAuthorizer, StdinPrompt};
pub use static_token::StaticTokenAuthorizer;
