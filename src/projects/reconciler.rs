//! # 项目更新
//!
//! 在单个事务中按字段组应用部分更新，提交后重新组装视图。

use std::collections::HashSet;

use chrono::{NaiveDateTime, Utc};
use entity::{
    email_service_configs, oauth_provider_configs, project_configs, project_domains, projects,
    proxied_email_service_configs, proxied_oauth_provider_configs,
    standard_email_service_configs, standard_oauth_provider_configs,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::{error, info};

use super::assembler::{assemble, load_raw_project};
use super::provider_codes::{
    ProviderCode, SharedProvider, StandardProvider, shared_to_proxied_type,
    standard_to_storage_type,
};
use super::types::{
    DomainView, EmailConfigView, OAuthProviderInput, ProjectConfigUpdate, ProjectUpdate,
    ProjectView,
};
use crate::error::{Result, ServiceError};

/// 应用部分更新，项目不存在时返回 `None` 且不写入任何数据
pub async fn update_project(
    db: &DatabaseConnection,
    project_id: &str,
    update: ProjectUpdate,
) -> Result<Option<ProjectView>> {
    let Some(project) = projects::Entity::find_by_id(project_id.to_string())
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    validate_update(&update)?;

    let txn = db.begin().await?;
    apply_update(&txn, project, update).await?;
    txn.commit().await?;

    info!(project_id, "项目更新已提交");

    Ok(load_raw_project(db, project_id).await?.map(assemble))
}

fn validate_update(update: &ProjectUpdate) -> Result<()> {
    if update
        .display_name
        .as_deref()
        .is_some_and(|name| name.trim().is_empty())
    {
        return Err(ServiceError::validation(
            "项目显示名称不能为空",
            Some("displayName".to_string()),
        ));
    }
    Ok(())
}

async fn apply_update<C: ConnectionTrait>(
    conn: &C,
    project: projects::Model,
    update: ProjectUpdate,
) -> Result<()> {
    let now = Utc::now().naive_utc();
    let project_id = project.id.clone();
    let config_id = project.config_id.clone();

    if let Some(config_update) = update.config {
        apply_config_update(conn, &project_id, &config_id, config_update, now).await?;
    }

    if update.is_production_mode.is_some()
        || update.display_name.is_some()
        || update.description.is_some()
    {
        let mut active: projects::ActiveModel = project.into();
        if let Some(is_production_mode) = update.is_production_mode {
            active.is_production_mode = Set(is_production_mode);
        }
        if let Some(display_name) = update.display_name {
            active.display_name = Set(display_name);
        }
        if let Some(description) = update.description {
            active.description = Set(description);
        }
        active.updated_at = Set(now);
        active.update(conn).await?;
    }

    Ok(())
}

async fn apply_config_update<C: ConnectionTrait>(
    conn: &C,
    project_id: &str,
    config_id: &str,
    update: ProjectConfigUpdate,
    now: NaiveDateTime,
) -> Result<()> {
    if let Some(domains) = update.domains {
        replace_domains(conn, config_id, domains, now).await?;
    }

    if let Some(providers) = update.oauth_providers {
        replace_oauth_providers(conn, project_id, config_id, providers, now).await?;
    }

    if update.credential_enabled.is_some() || update.allow_localhost.is_some() {
        let config = project_configs::Entity::find_by_id(config_id.to_string())
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::data_integrity(format!("项目配置 {config_id} 不存在")))?;

        let mut active: project_configs::ActiveModel = config.into();
        if let Some(credential_enabled) = update.credential_enabled {
            active.credential_enabled = Set(credential_enabled);
        }
        if let Some(allow_localhost) = update.allow_localhost {
            active.allow_localhost = Set(allow_localhost);
        }
        active.updated_at = Set(now);
        active.update(conn).await?;
    }

    if let Some(email_config) = update.email_config {
        delete_email_config(conn, config_id).await?;
        insert_email_config(conn, config_id, &email_config, now).await?;
    }

    Ok(())
}

/// 整体替换域名，重复的域名只保留第一次出现
async fn replace_domains<C: ConnectionTrait>(
    conn: &C,
    config_id: &str,
    domains: Vec<DomainView>,
    now: NaiveDateTime,
) -> Result<()> {
    project_domains::Entity::delete_many()
        .filter(project_domains::Column::ProjectConfigId.eq(config_id))
        .exec(conn)
        .await?;

    let mut seen = HashSet::new();
    for domain in domains {
        if !seen.insert(domain.domain.clone()) {
            continue;
        }
        project_domains::ActiveModel {
            id: NotSet,
            project_config_id: Set(config_id.to_string()),
            domain: Set(domain.domain),
            handler_path: Set(domain.handler_path),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;
    }
    Ok(())
}

/// 整体替换 OAuth 提供商，无法识别或不完整的条目记录错误日志后跳过
async fn replace_oauth_providers<C: ConnectionTrait>(
    conn: &C,
    project_id: &str,
    config_id: &str,
    providers: Vec<OAuthProviderInput>,
    now: NaiveDateTime,
) -> Result<()> {
    delete_oauth_providers(conn, config_id).await?;

    let mut seen = HashSet::new();
    for (position, input) in (0_i32..).zip(providers) {
        let provider_id = input.id.as_str();

        if seen.contains(provider_id) {
            error!(project_id, provider_id, "重复的 OAuth 提供商ID，已跳过");
            continue;
        }

        match input.provider_type.parse::<ProviderCode>() {
            Ok(ProviderCode::Shared(provider)) => {
                let slot = ProviderSlot {
                    id: provider_id,
                    enabled: input.enabled,
                    position,
                };
                insert_proxied_provider(conn, config_id, slot, provider, now).await?;
            }
            Ok(ProviderCode::Standard(provider)) => {
                let (Some(client_id), Some(client_secret)) = (
                    input.client_id.filter(|v| !v.is_empty()),
                    input.client_secret.filter(|v| !v.is_empty()),
                ) else {
                    error!(project_id, provider_id, "标准 OAuth 提供商缺少 clientId 或 clientSecret，已跳过");
                    continue;
                };
                let credentials = StandardCredentials {
                    client_id,
                    client_secret,
                    tenant_id: input.tenant_id,
                };
                let slot = ProviderSlot {
                    id: provider_id,
                    enabled: input.enabled,
                    position,
                };
                insert_standard_provider(conn, config_id, slot, provider, credentials, now)
                    .await?;
            }
            Err(e) => {
                error!(project_id, provider_id, error = %e, "无法识别的 OAuth 提供商类型，已跳过");
                continue;
            }
        }

        seen.insert(input.id);
    }
    Ok(())
}

/// 删除配置下的全部 OAuth 提供商（先删子记录）
async fn delete_oauth_providers<C: ConnectionTrait>(conn: &C, config_id: &str) -> Result<()> {
    proxied_oauth_provider_configs::Entity::delete_many()
        .filter(proxied_oauth_provider_configs::Column::ProjectConfigId.eq(config_id))
        .exec(conn)
        .await?;
    standard_oauth_provider_configs::Entity::delete_many()
        .filter(standard_oauth_provider_configs::Column::ProjectConfigId.eq(config_id))
        .exec(conn)
        .await?;
    oauth_provider_configs::Entity::delete_many()
        .filter(oauth_provider_configs::Column::ProjectConfigId.eq(config_id))
        .exec(conn)
        .await?;
    Ok(())
}

/// 待写入的提供商行
pub(crate) struct ProviderSlot<'a> {
    pub id: &'a str,
    pub enabled: bool,
    /// 在提交列表中的位置，决定视图中的顺序
    pub position: i32,
}

async fn insert_provider_row<C: ConnectionTrait>(
    conn: &C,
    config_id: &str,
    slot: &ProviderSlot<'_>,
    now: NaiveDateTime,
) -> Result<()> {
    oauth_provider_configs::ActiveModel {
        project_config_id: Set(config_id.to_string()),
        id: Set(slot.id.to_string()),
        enabled: Set(slot.enabled),
        position: Set(slot.position),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;
    Ok(())
}

/// 插入共享（代理）OAuth 提供商
pub(crate) async fn insert_proxied_provider<C: ConnectionTrait>(
    conn: &C,
    config_id: &str,
    slot: ProviderSlot<'_>,
    provider: SharedProvider,
    now: NaiveDateTime,
) -> Result<()> {
    insert_provider_row(conn, config_id, &slot, now).await?;
    proxied_oauth_provider_configs::ActiveModel {
        project_config_id: Set(config_id.to_string()),
        id: Set(slot.id.to_string()),
        provider_type: Set(shared_to_proxied_type(provider).as_str().to_string()),
    }
    .insert(conn)
    .await?;
    Ok(())
}

struct StandardCredentials {
    client_id: String,
    client_secret: String,
    tenant_id: Option<String>,
}

async fn insert_standard_provider<C: ConnectionTrait>(
    conn: &C,
    config_id: &str,
    slot: ProviderSlot<'_>,
    provider: StandardProvider,
    credentials: StandardCredentials,
    now: NaiveDateTime,
) -> Result<()> {
    insert_provider_row(conn, config_id, &slot, now).await?;
    standard_oauth_provider_configs::ActiveModel {
        project_config_id: Set(config_id.to_string()),
        id: Set(slot.id.to_string()),
        provider_type: Set(standard_to_storage_type(provider).as_str().to_string()),
        client_id: Set(credentials.client_id),
        client_secret: Set(credentials.client_secret),
        tenant_id: Set(credentials.tenant_id),
    }
    .insert(conn)
    .await?;
    Ok(())
}

async fn delete_email_config<C: ConnectionTrait>(conn: &C, config_id: &str) -> Result<()> {
    proxied_email_service_configs::Entity::delete_by_id(config_id.to_string())
        .exec(conn)
        .await?;
    standard_email_service_configs::Entity::delete_by_id(config_id.to_string())
        .exec(conn)
        .await?;
    email_service_configs::Entity::delete_by_id(config_id.to_string())
        .exec(conn)
        .await?;
    Ok(())
}

/// 插入邮件服务配置及对应子记录
pub(crate) async fn insert_email_config<C: ConnectionTrait>(
    conn: &C,
    config_id: &str,
    email_config: &EmailConfigView,
    now: NaiveDateTime,
) -> Result<()> {
    email_service_configs::ActiveModel {
        project_config_id: Set(config_id.to_string()),
        sender_name: Set(email_config.sender_name().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;

    match email_config {
        EmailConfigView::Shared { .. } => {
            proxied_email_service_configs::ActiveModel {
                project_config_id: Set(config_id.to_string()),
            }
            .insert(conn)
            .await?;
        }
        EmailConfigView::Standard {
            host,
            port,
            username,
            password,
            sender_email,
            ..
        } => {
            standard_email_service_configs::ActiveModel {
                project_config_id: Set(config_id.to_string()),
                host: Set(host.clone()),
                port: Set(i32::from(*port)),
                username: Set(username.clone()),
                password: Set(password.clone()),
                sender_email: Set(sender_email.clone()),
            }
            .insert(conn)
            .await?;
        }
    }
    Ok(())
}
