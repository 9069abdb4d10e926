//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：调用外部服务的操作

mod synthesize_commands;

pub mod handlers;

pub use synthesize_commands::*;
