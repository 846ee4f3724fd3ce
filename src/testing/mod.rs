//! # 测试框架模块
//!
//! 提供测试工具、fixtures 和测试辅助函数

pub mod fixtures;
pub mod helpers;
pub mod mocks;

pub use fixtures::*;
pub use helpers::*;
pub use mocks::*;
