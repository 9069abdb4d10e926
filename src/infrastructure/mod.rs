//! Infrastructure Layer - 基础设施层
//!
//! 提供端口的具体实现和 HTTP 接入

pub mod adapters;
pub mod http;

pub use adapters::{ElevenLabsClient, ElevenLabsClientConfig};
