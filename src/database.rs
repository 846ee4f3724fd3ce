//! # 数据库模块
//!
//! 数据库连接和迁移管理

use crate::config::DatabaseConfig;
use crate::error::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{error, info, warn};

/// 初始化数据库连接
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    info!(
        url = %config.url.chars().take(50).collect::<String>(),
        "正在连接数据库"
    );

    config.ensure_database_path()?;

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(false);
    // 内存数据库每个连接都是独立的库
    if config.is_memory_database() {
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(config.max_connections);
    }

    let db = Database::connect(options)
        .await
        .context("数据库连接失败")?;

    info!("数据库连接成功");
    Ok(db)
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> std::result::Result<(), DbErr> {
    info!("开始运行数据库迁移...");

    match ::migration::Migrator::up(db, None).await {
        Ok(()) => {
            info!("数据库迁移完成");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "数据库迁移失败");
            Err(e)
        }
    }
}

/// 检查数据库状态，返回待应用的迁移名称
pub async fn check_database_status(db: &DatabaseConnection) -> std::result::Result<Vec<String>, DbErr> {
    info!("检查数据库状态...");

    let pending: Vec<String> = ::migration::Migrator::get_pending_migrations(db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    if pending.is_empty() {
        info!("所有迁移都已应用");
    } else {
        warn!("有 {} 个待应用的迁移", pending.len());
    }

    Ok(pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        }
    }

    #[tokio::test]
    async fn test_migrations_apply_cleanly() {
        let db = init_database(&memory_config()).await.unwrap();

        let before = check_database_status(&db).await.unwrap();
        assert!(!before.is_empty());

        run_migrations(&db).await.unwrap();
        assert!(check_database_status(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("auth.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            ..DatabaseConfig::default()
        };

        let db = init_database(&config).await.unwrap();
        run_migrations(&db).await.unwrap();
        db.close().await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_migrated_file_database_reports_up_to_date() {
        let (db, _dir) = crate::testing::create_temp_db().await.unwrap();

        assert!(check_database_status(&db).await.unwrap().is_empty());
        run_migrations(&db).await.unwrap();
        assert!(check_database_status(&db).await.unwrap().is_empty());
    }
}
