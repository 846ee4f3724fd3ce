//! # 配置管理器
//!
//! 加载 TOML 配置文件并应用 `AUTH_BACKEND_` 前缀的环境变量覆盖

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::AppConfig;
use crate::error::{Result, ServiceError};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "AUTH_BACKEND_";
/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "AUTH_BACKEND_CONFIG_PATH";

/// 配置管理器
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
    applied_overrides: usize,
}

impl ConfigManager {
    /// 创建配置管理器
    ///
    /// 优先使用 `AUTH_BACKEND_CONFIG_PATH`，否则读取 `config/config.{RUST_ENV}.toml`。
    pub fn new() -> Result<Self> {
        Self::from_file(default_config_path())
    }

    /// 从指定文件创建配置管理器，使用进程环境变量作为覆盖来源
    pub fn from_file(config_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_env(config_path, env::vars())
    }

    /// 从指定文件和给定的变量集合创建配置管理器
    pub fn from_file_with_env<I>(config_path: impl AsRef<Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config_path = config_path.as_ref();
        let mut config = Self::load_config_file(config_path)?;

        let overrides = build_env_overrides(vars);
        apply_env_overrides(&mut config, &overrides)?;
        config.validate()?;

        info!(
            path = %config_path.display(),
            env_overrides = overrides.len(),
            "配置加载完成"
        );

        Ok(Self {
            config,
            config_path: config_path.to_path_buf(),
            applied_overrides: overrides.len(),
        })
    }

    /// 获取当前配置
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 取出配置
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// 配置文件路径
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 生效的环境变量覆盖数量
    #[must_use]
    pub const fn applied_overrides(&self) -> usize {
        self.applied_overrides
    }

    /// 加载配置文件
    fn load_config_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            return Err(ServiceError::config(format!(
                "配置文件不存在: {}",
                path.display()
            )));
        }

        let config_content = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::config_with_source(format!("读取配置文件失败: {}", path.display()), e)
        })?;

        toml::from_str(&config_content).map_err(|e| {
            ServiceError::config_with_source(
                format!("TOML解析失败 - 配置文件: {}", path.display()),
                e,
            )
        })
    }
}

/// 默认配置文件路径
#[must_use]
pub fn default_config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV).map_or_else(
        |_| {
            let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
            PathBuf::from(format!("config/config.{env}.toml"))
        },
        PathBuf::from,
    )
}

/// 构建环境变量覆盖映射
///
/// 例如: `AUTH_BACKEND_DATABASE_URL` -> `database.url`
fn build_env_overrides<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let overrides: BTreeMap<String, String> = vars
        .into_iter()
        .filter(|(key, _)| key != CONFIG_PATH_ENV)
        .filter_map(|(key, value)| {
            key.strip_prefix(ENV_PREFIX)
                .map(|rest| (rest.to_lowercase().replace('_', "."), value))
        })
        .collect();

    debug!("发现 {} 个环境变量覆盖", overrides.len());
    overrides
}

/// 应用环境变量覆盖
fn apply_env_overrides(config: &mut AppConfig, overrides: &BTreeMap<String, String>) -> Result<()> {
    for (path, value) in overrides {
        debug!(
            "应用环境变量覆盖: {} = {}",
            path,
            if path.contains("secret") || path.contains("password") {
                "***"
            } else {
                value
            }
        );
        apply_override_to_config(config, path, value)?;
    }
    Ok(())
}

fn apply_override_to_config(config: &mut AppConfig, path: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = path.split('.').collect();

    match parts.as_slice() {
        ["database", "url"] => config.database.url = value.to_string(),
        ["database", "max", "connections"] => {
            config.database.max_connections = parse_number(value, "数据库最大连接数")?;
        }
        ["database", "connect", "timeout"] => {
            config.database.connect_timeout = parse_number(value, "数据库连接超时")?;
        }
        ["auth", "jwt", "secret"] => config.auth.jwt_secret = value.to_string(),
        ["auth", "issuer"] => config.auth.issuer = value.to_string(),
        ["auth", "audience"] => config.auth.audience = value.to_string(),
        ["auth", "leeway", "seconds"] => {
            config.auth.leeway_seconds = parse_number(value, "JWT时间容差")?;
        }
        ["log", "level"] => config.log_level = Some(value.to_string()),
        _ => warn!("未知的配置路径，忽略环境变量覆盖: {}", path),
    }

    Ok(())
}

fn parse_number<T>(value: &str, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .map_err(|e| ServiceError::config_with_source(format!("无效的{what}: {value}"), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = r#"
        [database]
        url = "sqlite::memory:"
        max_connections = 5

        [auth]
        jwt_secret = "file-secret-with-enough-length"
        issuer = "file-issuer"
        audience = "file-audience"
    "#;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(SAMPLE);
        let manager = ConfigManager::from_file_with_env(file.path(), Vec::new()).unwrap();

        assert_eq!(manager.config().database.max_connections, 5);
        assert_eq!(manager.config().auth.issuer, "file-issuer");
        assert_eq!(manager.applied_overrides(), 0);
    }

    #[test]
    fn test_env_overrides_win() {
        let file = write_config(SAMPLE);
        let manager = ConfigManager::from_file_with_env(
            file.path(),
            vars(&[
                ("AUTH_BACKEND_DATABASE_MAX_CONNECTIONS", "3"),
                ("AUTH_BACKEND_AUTH_ISSUER", "env-issuer"),
                ("AUTH_BACKEND_LOG_LEVEL", "debug"),
                ("AUTH_BACKEND_CONFIG_PATH", "/ignored.toml"),
                ("UNRELATED", "x"),
            ]),
        )
        .unwrap();

        let config = manager.into_config();
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.auth.issuer, "env-issuer");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_override_value_rejected() {
        let file = write_config(SAMPLE);
        let err = ConfigManager::from_file_with_env(
            file.path(),
            vars(&[("AUTH_BACKEND_DATABASE_MAX_CONNECTIONS", "many")]),
        )
        .unwrap_err();

        assert!(matches!(err, ServiceError::Config { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let file = write_config(SAMPLE);
        let err = ConfigManager::from_file_with_env(
            file.path(),
            vars(&[("AUTH_BACKEND_DATABASE_MAX_CONNECTIONS", "0")]),
        )
        .unwrap_err();

        assert!(err.to_string().contains("数据库最大连接数"));
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigManager::from_file_with_env("/nonexistent/config.toml", Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("配置文件不存在"));
    }

    #[test]
    fn test_shipped_configs_are_valid() {
        for name in ["config.dev.toml", "config.test.toml"] {
            let path = Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("config")
                .join(name);
            let result = ConfigManager::from_file_with_env(&path, Vec::new());
            assert!(result.is_ok(), "{name}: {:?}", result.err());
        }
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[database\nurl = ");
        let err = ConfigManager::from_file_with_env(file.path(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("TOML解析失败"));
    }
}
