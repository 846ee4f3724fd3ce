//! # 测试数据 Fixtures
//!
//! 提供测试用的数据结构和预设数据

use chrono::Utc;
use entity::project_users;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use serde_json::{Value, json};

use crate::projects::{CreateProjectRequest, INTERNAL_PROJECT_ID};

/// 项目用户测试数据构建器
pub struct ProjectUserFixture {
    pub project_id: String,
    pub user_id: String,
    pub display_name: Option<String>,
    pub primary_email: Option<String>,
    pub server_metadata_json: Option<String>,
}

impl Default for ProjectUserFixture {
    fn default() -> Self {
        Self {
            project_id: INTERNAL_PROJECT_ID.to_string(),
            user_id: "admin-1".to_string(),
            display_name: Some("Test Admin".to_string()),
            primary_email: Some("admin@example.com".to_string()),
            server_metadata_json: None,
        }
    }
}

impl ProjectUserFixture {
    /// 创建新的用户 fixture（默认属于 `internal`）
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置所属项目
    #[must_use]
    pub fn project(mut self, project_id: &str) -> Self {
        self.project_id = project_id.to_string();
        self
    }

    /// 设置用户ID
    #[must_use]
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_string();
        self
    }

    /// 设置服务端元数据
    #[must_use]
    pub fn metadata(mut self, metadata: &Value) -> Self {
        self.server_metadata_json = Some(metadata.to_string());
        self
    }

    /// 设置可管理项目列表
    #[must_use]
    pub fn managing(self, project_ids: &[&str]) -> Self {
        self.metadata(&json!({ "managedProjectIds": project_ids }))
    }

    /// 设置原始元数据文本（可用于构造非法 JSON）
    #[must_use]
    pub fn raw_metadata(mut self, raw: &str) -> Self {
        self.server_metadata_json = Some(raw.to_string());
        self
    }

    /// 构建 `ActiveModel`
    #[must_use]
    pub fn build(self) -> project_users::ActiveModel {
        let now = Utc::now().naive_utc();
        project_users::ActiveModel {
            project_id: Set(self.project_id),
            project_user_id: Set(self.user_id),
            display_name: Set(self.display_name),
            primary_email: Set(self.primary_email),
            server_metadata_json: Set(self.server_metadata_json),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// 写入数据库
    pub async fn insert<C: ConnectionTrait>(self, conn: &C) -> Result<project_users::Model, DbErr> {
        self.build().insert(conn).await
    }
}

/// 默认的创建项目请求
#[must_use]
pub fn create_request(display_name: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        display_name: display_name.to_string(),
        description: format!("{display_name} description"),
        allow_localhost: true,
        credential_enabled: false,
    }
}
