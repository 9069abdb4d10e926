//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Speech Context: 文本校验、凭证、音频编码

pub mod speech;
