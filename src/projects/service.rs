//! # 项目管理服务
//!
//! 对外暴露的项目管理操作入口

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::warn;

use super::assembler::{assemble, load_raw_project};
use super::guard::ProjectAccessGuard;
use super::types::{CreateProjectRequest, ProjectUpdate, ProjectView};
use super::{INTERNAL_PROJECT_ID, creator, reconciler};
use crate::auth::AccessTokenDecoder;
use crate::ensure_precondition;
use crate::error::Result;
use crate::users::{AdminUserView, ServerUserStore};

/// 项目管理服务
#[derive(Clone)]
pub struct ProjectService {
    db: Arc<DatabaseConnection>,
    guard: ProjectAccessGuard,
}

impl ProjectService {
    /// 创建项目管理服务
    #[must_use]
    pub fn new(
        db: Arc<DatabaseConnection>,
        tokens: Arc<dyn AccessTokenDecoder>,
        users: Arc<dyn ServerUserStore>,
    ) -> Self {
        Self {
            db,
            guard: ProjectAccessGuard::new(tokens, users),
        }
    }

    /// 数据库连接
    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// 访问令牌的持有者是否管理该项目
    pub async fn is_project_admin(&self, project_id: &str, access_token: &str) -> Result<bool> {
        self.guard.is_project_admin(project_id, access_token).await
    }

    /// 解析访问令牌对应的内部管理员
    pub async fn resolve_internal_admin(&self, access_token: &str) -> Result<Option<AdminUserView>> {
        self.guard.resolve_internal_admin(access_token).await
    }

    /// 列出管理员可管理的全部项目，按登记顺序
    pub async fn list_projects(&self, admin: &AdminUserView) -> Result<Vec<ProjectView>> {
        ensure_precondition!(
            admin.project_id == INTERNAL_PROJECT_ID,
            "只有内部项目的用户可以列出项目，当前用户属于 {}",
            admin.project_id
        );

        let mut views = Vec::new();
        for project_id in admin.managed_project_ids()? {
            match load_raw_project(self.db.as_ref(), &project_id).await? {
                Some(raw) => views.push(assemble(raw)),
                None => warn!(project_id = %project_id, admin_id = %admin.id, "可管理列表中的项目不存在，已跳过"),
            }
        }
        Ok(views)
    }

    /// 创建项目
    pub async fn create_project(
        &self,
        creator: &AdminUserView,
        request: CreateProjectRequest,
    ) -> Result<ProjectView> {
        creator::create_project(&self.db, creator, request).await
    }

    /// 读取项目视图
    pub async fn get_project(&self, project_id: &str) -> Result<Option<ProjectView>> {
        Ok(load_raw_project(self.db.as_ref(), project_id)
            .await?
            .map(assemble))
    }

    /// 部分更新项目
    pub async fn update_project(
        &self,
        project_id: &str,
        update: ProjectUpdate,
    ) -> Result<Option<ProjectView>> {
        reconciler::update_project(&self.db, project_id, update).await
    }
}
