//! # 日志配置模块
//!
//! 基于 `tracing-subscriber` 的日志初始化，默认关闭数据库查询的详细日志

use std::env;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 根据基础级别构建默认过滤规则
#[must_use]
pub fn default_filter(log_level: Option<&str>) -> String {
    let level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!("{level},auth_backend=debug,sqlx::query=off,sea_orm::query=warn")
}

/// 初始化日志系统
///
/// `RUST_LOG` 存在时优先生效，否则使用 [`default_filter`]。
/// 重复初始化（例如在测试中）会被忽略。
pub fn init_logging(log_level: Option<&str>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(log_level).into());

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok();

    if !initialized {
        return;
    }

    if env::var("RUST_LOG").is_ok_and(|v| {
        v.contains("sqlx::query=info") || v.contains("sqlx::query=debug")
    }) {
        tracing::info!("SQLx database query logging enabled");
    } else {
        tracing::debug!("SQLx database query logging disabled");
    }
}

/// 环境变量设置指南
pub fn print_logging_help() {
    println!("日志配置指南:");
    println!("  RUST_LOG=info                      # 标准日志级别");
    println!("  RUST_LOG=debug                     # 调试级别");
    println!("  RUST_LOG=info,sqlx::query=info     # 启用数据库查询日志");
    println!("  RUST_LOG=auth_backend=trace        # 应用详细追踪");
}
