//! # 服务端用户查询

use std::sync::Arc;

use async_trait::async_trait;
use entity::project_users;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;
use serde_json::Value;

use super::metadata::{managed_project_ids, parse_server_metadata};
use crate::error::Result;

/// 带服务端元数据的用户视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    /// 用户所在项目
    pub project_id: String,
    /// 用户ID
    pub id: String,
    /// 显示名称
    pub display_name: Option<String>,
    /// 主邮箱
    pub primary_email: Option<String>,
    /// 服务端元数据
    pub server_metadata: Option<Value>,
}

impl AdminUserView {
    /// 从存储记录构建，元数据不是合法 JSON 时返回数据完整性错误
    pub fn from_model(model: project_users::Model) -> Result<Self> {
        let server_metadata = parse_server_metadata(model.server_metadata_json.as_deref())?;
        Ok(Self {
            project_id: model.project_id,
            id: model.project_user_id,
            display_name: model.display_name,
            primary_email: model.primary_email,
            server_metadata,
        })
    }

    /// 该用户可管理的项目ID
    pub fn managed_project_ids(&self) -> Result<Vec<String>> {
        managed_project_ids(self.server_metadata.as_ref())
    }
}

/// 在指定项目上下文中查找用户
#[async_trait]
pub trait ServerUserStore: Send + Sync {
    /// 不存在时返回 `None`
    async fn get_server_user(
        &self,
        context_id: &str,
        user_id: &str,
    ) -> Result<Option<AdminUserView>>;
}

/// 基于 `project_users` 表的用户查询
pub struct ProjectUserStore {
    db: Arc<DatabaseConnection>,
}

impl ProjectUserStore {
    /// 创建用户查询
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServerUserStore for ProjectUserStore {
    async fn get_server_user(
        &self,
        context_id: &str,
        user_id: &str,
    ) -> Result<Option<AdminUserView>> {
        project_users::Entity::find_by_id((context_id.to_string(), user_id.to_string()))
            .one(self.db.as_ref())
            .await?
            .map(AdminUserView::from_model)
            .transpose()
    }
}
