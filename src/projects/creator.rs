//! # 项目创建

use chrono::Utc;
use entity::{project_configs, projects};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;
use uuid::Uuid;

use super::INTERNAL_PROJECT_ID;
use super::assembler::{assemble, load_raw_project};
use super::provider_codes::StandardProvider;
use super::reconciler::{ProviderSlot, insert_email_config, insert_proxied_provider};
use super::types::{CreateProjectRequest, EmailConfigView, ProjectView};
use crate::ensure_precondition;
use crate::error::{Result, ServiceError};
use crate::users::{AdminUserView, append_managed_project_id};

/// 创建项目并登记到创建者的可管理列表
///
/// 新项目总是非生产模式，带四个禁用的共享 OAuth 提供商和共享邮件服务。
pub async fn create_project(
    db: &DatabaseConnection,
    creator: &AdminUserView,
    request: CreateProjectRequest,
) -> Result<ProjectView> {
    ensure_precondition!(
        creator.project_id == INTERNAL_PROJECT_ID,
        "只有内部项目的用户可以创建项目，当前用户属于 {}",
        creator.project_id
    );
    if request.display_name.trim().is_empty() {
        return Err(ServiceError::validation(
            "项目显示名称不能为空",
            Some("displayName".to_string()),
        ));
    }

    let project_id = Uuid::new_v4().to_string();
    let config_id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    let txn = db.begin().await?;

    project_configs::ActiveModel {
        id: Set(config_id.clone()),
        allow_localhost: Set(request.allow_localhost),
        credential_enabled: Set(request.credential_enabled),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    projects::ActiveModel {
        id: Set(project_id.clone()),
        display_name: Set(request.display_name.clone()),
        description: Set(request.description),
        is_production_mode: Set(false),
        config_id: Set(config_id.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    for (position, provider) in (0_i32..).zip(StandardProvider::ALL) {
        let slot = ProviderSlot {
            id: provider.as_str(),
            enabled: false,
            position,
        };
        insert_proxied_provider(&txn, &config_id, slot, provider.shared_counterpart(), now)
            .await?;
    }

    let email_config = EmailConfigView::Shared {
        sender_name: request.display_name,
    };
    insert_email_config(&txn, &config_id, &email_config, now).await?;

    append_managed_project_id(&txn, &creator.project_id, &creator.id, &project_id).await?;

    txn.commit().await?;

    info!(project_id = %project_id, creator_id = %creator.id, "项目创建完成");

    load_raw_project(db, &project_id)
        .await?
        .map(assemble)
        .ok_or_else(|| ServiceError::internal(format!("新建项目 {project_id} 提交后无法读取")))
}
