//! # 数据库配置

use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// 数据库配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 数据库URL
    pub url: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 连接超时时间（秒）
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./data/auth_backend.db".to_string(),
            max_connections: 10,
            connect_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// SQLite 文件路径，内存数据库或非 SQLite 时为 `None`
    #[must_use]
    pub fn sqlite_file_path(&self) -> Option<PathBuf> {
        if self.is_memory_database() {
            return None;
        }
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or(rest);
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }

    /// 确保数据库文件及其目录存在（仅对SQLite文件数据库）
    pub fn ensure_database_path(&self) -> Result<()> {
        let Some(db_path) = self.sqlite_file_path() else {
            return Ok(());
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty())
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServiceError::config_with_source(
                    format!("无法创建数据库目录: {}", parent.display()),
                    e,
                )
            })?;
            info!(path = %parent.display(), "创建数据库目录");
        }

        if !db_path.exists() {
            create_empty_file(&db_path)?;
            info!(path = %db_path.display(), "创建数据库文件");
        }

        Ok(())
    }

    /// 检查是否为内存数据库
    #[must_use]
    pub fn is_memory_database(&self) -> bool {
        self.url.contains(":memory:")
    }

    /// 检查是否为SQLite数据库
    #[must_use]
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }
}

fn create_empty_file(path: &Path) -> Result<()> {
    std::fs::File::create(path).map_err(|e| {
        ServiceError::config_with_source(format!("无法创建数据库文件: {}", path.display()), e)
    })?;
    Ok(())
}
