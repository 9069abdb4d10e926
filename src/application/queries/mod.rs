//! 应用层 - 查询（读操作）

mod health_queries;

pub mod handlers;

pub use health_queries::*;
