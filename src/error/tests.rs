//! # 错误处理测试

use crate::error::{Context, ErrorCategory, ServiceError};
use axum::http::StatusCode;
use std::error::Error;

#[test]
fn test_config_error_creation() {
    let err = ServiceError::config("测试配置错误");
    assert!(matches!(err, ServiceError::Config { .. }));
    assert_eq!(err.to_string(), "配置错误: 测试配置错误");
}

#[test]
fn test_config_error_with_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "文件不存在");
    let err = ServiceError::config_with_source("配置文件加载失败", io_err);

    assert!(matches!(err, ServiceError::Config { .. }));
    assert!(err.to_string().contains("配置错误: 配置文件加载失败"));
    assert!(err.source().is_some());
}

#[test]
fn test_context_trait_wraps_error() {
    let result: Result<(), std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "权限不足",
    ));

    let err = result.context("读取配置文件失败").unwrap_err();
    assert!(matches!(err, ServiceError::Context { .. }));
    assert!(err.to_string().starts_with("读取配置文件失败"));
    assert!(matches!(err.root(), ServiceError::Io { .. }));
}

#[test]
fn test_context_keeps_status_of_root() {
    let result: Result<(), ServiceError> = Err(ServiceError::not_found("project", "p-1"));
    let err = result.context("加载项目失败").unwrap_err();

    assert_eq!(err.to_http_response_parts().0, StatusCode::NOT_FOUND);
    assert_eq!(err.category(), ErrorCategory::Client);
}

#[test]
fn test_data_integrity_is_hidden_from_callers() {
    let err = ServiceError::data_integrity("managedProjectIds 不是字符串数组");

    assert_eq!(
        err.to_http_response_parts(),
        (StatusCode::INTERNAL_SERVER_ERROR, "DATA_INTEGRITY_ERROR")
    );
    assert_eq!(err.category(), ErrorCategory::Server);
    assert_eq!(err.public_message(), "Internal server error");
}

#[test]
fn test_precondition_error() {
    let err = ServiceError::precondition("只有内部管理员可以创建项目");
    assert_eq!(err.to_http_response_parts().0, StatusCode::FORBIDDEN);
    assert_eq!(err.to_string(), "前置条件不满足: 只有内部管理员可以创建项目");
    assert_eq!(err.public_message(), err.to_string());
}

#[test]
fn test_auto_conversion_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "文件不存在");
    let err: ServiceError = io_err.into();

    assert!(matches!(err, ServiceError::Io { .. }));
    assert!(err.to_string().contains("IO错误: 文件操作失败"));
}

#[test]
fn test_auto_conversion_from_toml_error() {
    let invalid_toml = "invalid = toml = syntax";
    let toml_err = toml::from_str::<toml::Value>(invalid_toml).unwrap_err();
    let err: ServiceError = toml_err.into();

    assert!(matches!(err, ServiceError::Config { .. }));
    assert!(err.to_string().contains("配置错误: TOML解析失败"));
}

#[test]
fn test_auto_conversion_from_db_error() {
    let db_err = sea_orm::DbErr::Custom("boom".to_string());
    let err: ServiceError = db_err.into();

    assert!(matches!(err, ServiceError::Database { .. }));
    assert_eq!(err.public_message(), "Internal server error");
}

#[test]
fn test_integrity_error_macro() {
    let err = crate::integrity_error!("项目 {} 缺少配置", "p-1");
    assert_eq!(err.to_string(), "数据完整性错误: 项目 p-1 缺少配置");
}
