//! # OAuth 提供商代码映射
//!
//! 对外的提供商标识（`github`、`shared-github` 等）与存储中的大写枚举名之间的转换。
//! 共享（代理）与标准（客户自有凭据）两个族各自独立。

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 使用平台共享凭据的提供商
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharedProvider {
    /// GitHub
    Github,
    /// Facebook
    Facebook,
    /// Google
    Google,
    /// Microsoft
    Microsoft,
}

/// 使用客户自有凭据的提供商
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardProvider {
    /// GitHub
    Github,
    /// Facebook
    Facebook,
    /// Google
    Google,
    /// Microsoft
    Microsoft,
}

/// 存储中的代理提供商类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxiedOAuthProviderType {
    /// GITHUB
    Github,
    /// FACEBOOK
    Facebook,
    /// GOOGLE
    Google,
    /// MICROSOFT
    Microsoft,
}

/// 存储中的标准提供商类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardOAuthProviderType {
    /// GITHUB
    Github,
    /// FACEBOOK
    Facebook,
    /// GOOGLE
    Google,
    /// MICROSOFT
    Microsoft,
}

/// 提交的 `type` 字段分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCode {
    /// 共享族
    Shared(SharedProvider),
    /// 标准族
    Standard(StandardProvider),
}

impl SharedProvider {
    /// 全部取值
    pub const ALL: [Self; 4] = [Self::Github, Self::Facebook, Self::Google, Self::Microsoft];

    /// 对外标识
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "shared-github",
            Self::Facebook => "shared-facebook",
            Self::Google => "shared-google",
            Self::Microsoft => "shared-microsoft",
        }
    }

    /// 从字符串解析
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl StandardProvider {
    /// 全部取值
    pub const ALL: [Self; 4] = [Self::Github, Self::Facebook, Self::Google, Self::Microsoft];

    /// 对外标识
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Facebook => "facebook",
            Self::Google => "google",
            Self::Microsoft => "microsoft",
        }
    }

    /// 从字符串解析
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// 同一提供商的共享版本
    #[must_use]
    pub const fn shared_counterpart(self) -> SharedProvider {
        match self {
            Self::Github => SharedProvider::Github,
            Self::Facebook => SharedProvider::Facebook,
            Self::Google => SharedProvider::Google,
            Self::Microsoft => SharedProvider::Microsoft,
        }
    }
}

impl ProxiedOAuthProviderType {
    /// 存储名称
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "GITHUB",
            Self::Facebook => "FACEBOOK",
            Self::Google => "GOOGLE",
            Self::Microsoft => "MICROSOFT",
        }
    }
}

impl StandardOAuthProviderType {
    /// 存储名称
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "GITHUB",
            Self::Facebook => "FACEBOOK",
            Self::Google => "GOOGLE",
            Self::Microsoft => "MICROSOFT",
        }
    }
}

impl FromStr for SharedProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shared-github" => Ok(Self::Github),
            "shared-facebook" => Ok(Self::Facebook),
            "shared-google" => Ok(Self::Google),
            "shared-microsoft" => Ok(Self::Microsoft),
            _ => Err(format!("Unknown shared provider: {s}")),
        }
    }
}

impl FromStr for StandardProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "facebook" => Ok(Self::Facebook),
            "google" => Ok(Self::Google),
            "microsoft" => Ok(Self::Microsoft),
            _ => Err(format!("Unknown standard provider: {s}")),
        }
    }
}

impl FromStr for ProxiedOAuthProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GITHUB" => Ok(Self::Github),
            "FACEBOOK" => Ok(Self::Facebook),
            "GOOGLE" => Ok(Self::Google),
            "MICROSOFT" => Ok(Self::Microsoft),
            _ => Err(format!("Invalid proxied provider type: {s}")),
        }
    }
}

impl FromStr for StandardOAuthProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GITHUB" => Ok(Self::Github),
            "FACEBOOK" => Ok(Self::Facebook),
            "GOOGLE" => Ok(Self::Google),
            "MICROSOFT" => Ok(Self::Microsoft),
            _ => Err(format!("Invalid standard provider type: {s}")),
        }
    }
}

impl FromStr for ProviderCode {
    type Err = String;

    /// 先按共享族解析，再按标准族解析
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SharedProvider::parse(s)
            .map(Self::Shared)
            .or_else(|| StandardProvider::parse(s).map(Self::Standard))
            .ok_or_else(|| format!("Unknown OAuth provider type: {s}"))
    }
}

impl fmt::Display for SharedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StandardProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SharedProvider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for StandardProvider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 共享提供商 -> 存储类型
#[must_use]
pub const fn shared_to_proxied_type(provider: SharedProvider) -> ProxiedOAuthProviderType {
    match provider {
        SharedProvider::Github => ProxiedOAuthProviderType::Github,
        SharedProvider::Facebook => ProxiedOAuthProviderType::Facebook,
        SharedProvider::Google => ProxiedOAuthProviderType::Google,
        SharedProvider::Microsoft => ProxiedOAuthProviderType::Microsoft,
    }
}

/// 存储类型 -> 共享提供商
#[must_use]
pub const fn proxied_type_to_shared(provider_type: ProxiedOAuthProviderType) -> SharedProvider {
    match provider_type {
        ProxiedOAuthProviderType::Github => SharedProvider::Github,
        ProxiedOAuthProviderType::Facebook => SharedProvider::Facebook,
        ProxiedOAuthProviderType::Google => SharedProvider::Google,
        ProxiedOAuthProviderType::Microsoft => SharedProvider::Microsoft,
    }
}

/// 标准提供商 -> 存储类型
#[must_use]
pub const fn standard_to_storage_type(provider: StandardProvider) -> StandardOAuthProviderType {
    match provider {
        StandardProvider::Github => StandardOAuthProviderType::Github,
        StandardProvider::Facebook => StandardOAuthProviderType::Facebook,
        StandardProvider::Google => StandardOAuthProviderType::Google,
        StandardProvider::Microsoft => StandardOAuthProviderType::Microsoft,
    }
}

/// 存储类型 -> 标准提供商
#[must_use]
pub const fn storage_type_to_standard(
    provider_type: StandardOAuthProviderType,
) -> StandardProvider {
    match provider_type {
        StandardOAuthProviderType::Github => StandardProvider::Github,
        StandardOAuthProviderType::Facebook => StandardProvider::Facebook,
        StandardOAuthProviderType::Google => StandardProvider::Google,
        StandardOAuthProviderType::Microsoft => StandardProvider::Microsoft,
    }
}
