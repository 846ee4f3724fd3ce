//! 应用上下文
//!
//! 统一持有跨模块共享的服务实例，便于在测试中注入替身实现。

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::auth::{AccessTokenDecoder, JwtManager};
use crate::config::AppConfig;
use crate::database::{init_database, run_migrations};
use crate::error::{Context, Result};
use crate::projects::ProjectService;
use crate::users::{ProjectUserStore, ServerUserStore};

/// 应用上下文
#[derive(Clone)]
pub struct AppContext {
    /// 应用配置
    pub config: Arc<AppConfig>,
    /// 数据库连接
    pub db: Arc<DatabaseConnection>,
    /// 项目管理服务
    pub projects: ProjectService,
}

impl AppContext {
    /// 使用现成的组件构建上下文
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        db: Arc<DatabaseConnection>,
        tokens: Arc<dyn AccessTokenDecoder>,
        users: Arc<dyn ServerUserStore>,
    ) -> Self {
        let projects = ProjectService::new(Arc::clone(&db), tokens, users);
        Self {
            config,
            db,
            projects,
        }
    }

    /// 连接数据库并装配默认组件，不执行迁移
    pub async fn connect(config: AppConfig) -> Result<Self> {
        let db = Arc::new(init_database(&config.database).await?);
        let tokens: Arc<dyn AccessTokenDecoder> = Arc::new(JwtManager::new(&config.auth));
        let users: Arc<dyn ServerUserStore> = Arc::new(ProjectUserStore::new(Arc::clone(&db)));
        Ok(Self::new(Arc::new(config), db, tokens, users))
    }

    /// 连接数据库、执行迁移并装配默认组件
    pub async fn initialize(config: AppConfig) -> Result<Self> {
        let context = Self::connect(config).await?;
        run_migrations(&context.db)
            .await
            .context("数据库迁移失败")?;
        info!("应用上下文初始化完成");
        Ok(context)
    }

    /// 关闭数据库连接
    pub async fn shutdown(self) -> Result<()> {
        let Self { db, projects, .. } = self;
        drop(projects);

        match Arc::try_unwrap(db) {
            Ok(db) => {
                db.close().await.context("关闭数据库连接失败")?;
                info!("数据库连接已关闭");
            }
            Err(_) => warn!("数据库连接仍被其他组件持有，跳过显式关闭"),
        }
        Ok(())
    }
}
