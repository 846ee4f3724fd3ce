//! # 应用配置结构定义

use crate::ensure_config;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// JWT 密钥最短长度（字节）
pub const MIN_JWT_SECRET_LEN: usize = 16;

/// 应用主配置结构
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据库配置
    #[serde(default)]
    pub database: super::DatabaseConfig,
    /// 访问令牌配置
    #[serde(default)]
    pub auth: AuthConfig,
    /// 基础日志级别，`RUST_LOG` 优先
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// 访问令牌校验配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 签名密钥
    pub jwt_secret: String,
    /// 期望的签发者
    pub issuer: String,
    /// 期望的受众
    pub audience: String,
    /// 过期时间容差（秒）
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-every-deployment".to_string(),
            issuer: "auth-backend".to_string(),
            audience: "auth-backend".to_string(),
            leeway_seconds: 30,
        }
    }
}

impl AppConfig {
    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        ensure_config!(!self.database.url.is_empty(), "数据库URL不能为空");
        ensure_config!(
            self.database.max_connections > 0,
            "数据库最大连接数必须大于0"
        );
        ensure_config!(
            self.auth.jwt_secret.len() >= MIN_JWT_SECRET_LEN,
            "JWT密钥长度至少为 {} 字节",
            MIN_JWT_SECRET_LEN
        );
        ensure_config!(!self.auth.issuer.is_empty(), "JWT签发者不能为空");
        ensure_config!(!self.auth.audience.is_empty(), "JWT受众不能为空");
        Ok(())
    }
}
