//! # 配置管理模块
//!
//! 处理应用配置加载、验证和管理

mod app_config;
mod database;
mod manager;

pub use app_config::{AppConfig, AuthConfig, MIN_JWT_SECRET_LEN};
pub use database::DatabaseConfig;
pub use manager::{CONFIG_PATH_ENV, ConfigManager, ENV_PREFIX, default_config_path};

/// 加载配置文件（含环境变量覆盖与校验）
pub fn load_config() -> crate::error::Result<AppConfig> {
    ConfigManager::new().map(ConfigManager::into_config)
}
