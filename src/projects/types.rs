//! # 项目视图与请求类型
//!
//! 对外 JSON 统一使用 camelCase。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::provider_codes::{SharedProvider, StandardProvider};

/// 组装后的项目视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    /// 项目ID
    pub id: String,
    /// 显示名称
    pub display_name: String,
    /// 描述
    pub description: String,
    /// 创建时间（毫秒时间戳）
    pub created_at_millis: i64,
    /// 项目用户数
    pub user_count: u64,
    /// 是否为生产模式
    pub is_production_mode: bool,
    /// 生效的项目配置
    pub evaluated_config: ProjectConfigView,
    /// 原样透传的配置覆盖
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<Value>,
}

/// 项目配置视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfigView {
    /// 配置ID
    pub id: String,
    /// 允许 localhost 回调
    pub allow_localhost: bool,
    /// 启用账号密码登录
    pub credential_enabled: bool,
    /// OAuth 提供商，按存储顺序
    pub oauth_providers: Vec<OAuthProviderView>,
    /// 邮件服务配置
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config: Option<EmailConfigView>,
    /// 域名
    pub domains: Vec<DomainView>,
}

/// OAuth 提供商视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OAuthProviderView {
    /// 提供商ID（配置内唯一）
    pub id: String,
    /// 是否启用
    pub enabled: bool,
    /// 提供商类型及凭据
    #[serde(flatten)]
    pub kind: OAuthProviderKind,
}

/// 共享或标准提供商
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum OAuthProviderKind {
    /// 平台共享凭据
    Shared {
        /// 例如 `shared-github`
        #[serde(rename = "type")]
        provider_type: SharedProvider,
    },
    /// 客户自有凭据
    Standard {
        /// 例如 `github`
        #[serde(rename = "type")]
        provider_type: StandardProvider,
        /// OAuth client id
        client_id: String,
        /// OAuth client secret
        client_secret: String,
        /// 租户ID（Microsoft）
        #[serde(skip_serializing_if = "Option::is_none")]
        tenant_id: Option<String>,
    },
}

/// 邮件服务配置，读写共用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum EmailConfigView {
    /// 使用平台共享邮件服务
    Shared {
        /// 发件人名称
        sender_name: String,
    },
    /// 自有 SMTP 服务
    Standard {
        /// SMTP 主机
        host: String,
        /// SMTP 端口
        port: u16,
        /// 用户名
        username: String,
        /// 密码
        password: String,
        /// 发件邮箱
        sender_email: String,
        /// 发件人名称
        sender_name: String,
    },
}

impl EmailConfigView {
    /// 发件人名称
    #[must_use]
    pub fn sender_name(&self) -> &str {
        match self {
            Self::Shared { sender_name } | Self::Standard { sender_name, .. } => sender_name,
        }
    }
}

/// 域名，读写共用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainView {
    /// 域名
    pub domain: String,
    /// 回调处理路径
    pub handler_path: String,
}

/// 创建项目请求
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// 显示名称
    pub display_name: String,
    /// 描述
    #[serde(default)]
    pub description: String,
    /// 允许 localhost 回调
    #[serde(default)]
    pub allow_localhost: bool,
    /// 启用账号密码登录
    #[serde(default)]
    pub credential_enabled: bool,
}

/// 项目部分更新，缺失的字段组保持不变
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectUpdate {
    /// 新显示名称
    pub display_name: Option<String>,
    /// 新描述
    pub description: Option<String>,
    /// 生产模式开关
    pub is_production_mode: Option<bool>,
    /// 配置更新
    pub config: Option<ProjectConfigUpdate>,
}

/// 项目配置部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfigUpdate {
    /// 整体替换域名
    pub domains: Option<Vec<DomainView>>,
    /// 整体替换 OAuth 提供商
    pub oauth_providers: Option<Vec<OAuthProviderInput>>,
    /// 启用账号密码登录
    pub credential_enabled: Option<bool>,
    /// 允许 localhost 回调
    pub allow_localhost: Option<bool>,
    /// 替换邮件服务配置
    pub email_config: Option<EmailConfigView>,
}

/// 提交的 OAuth 提供商
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthProviderInput {
    /// 提供商ID
    pub id: String,
    /// 是否启用
    pub enabled: bool,
    /// 原始类型标识，提交时才分类
    #[serde(rename = "type")]
    pub provider_type: String,
    /// 标准提供商必填
    #[serde(default)]
    pub client_id: Option<String>,
    /// 标准提供商必填
    #[serde(default)]
    pub client_secret: Option<String>,
    /// 可选租户ID
    #[serde(default)]
    pub tenant_id: Option<String>,
}
