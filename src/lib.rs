//! # Auth Backend Library
//!
//! 认证服务后端的项目管理核心：关系存储与对外项目视图之间的转换，
//! 以及在事务中执行的项目创建与更新

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod projects;
pub mod users;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Result, ServiceError};
