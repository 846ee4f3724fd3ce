//! # 项目组装
//!
//! 读取项目的完整关系记录并展开为对外视图。
//! 数据不一致的子记录只记录警告并跳过，不会导致整体失败。

use std::collections::HashMap;

use entity::{
    email_service_configs, oauth_provider_configs, project_config_overrides, project_configs,
    project_domains, project_users, projects, proxied_email_service_configs,
    proxied_oauth_provider_configs, standard_email_service_configs,
    standard_oauth_provider_configs,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;
use tracing::{debug, warn};

use super::provider_codes::{
    ProxiedOAuthProviderType, StandardOAuthProviderType, proxied_type_to_shared,
    storage_type_to_standard,
};
use super::types::{
    DomainView, EmailConfigView, OAuthProviderKind, OAuthProviderView, ProjectConfigView,
    ProjectView,
};
use crate::error::{Result, ServiceError};

/// 一个 OAuth 提供商行及其两个可选子记录
#[derive(Debug, Clone)]
pub struct RawOAuthProvider {
    /// 主记录
    pub row: oauth_provider_configs::Model,
    /// 代理子记录
    pub proxied: Option<proxied_oauth_provider_configs::Model>,
    /// 标准子记录
    pub standard: Option<standard_oauth_provider_configs::Model>,
}

/// 邮件服务配置及其两个可选子记录
#[derive(Debug, Clone)]
pub struct RawEmailConfig {
    /// 主记录
    pub row: email_service_configs::Model,
    /// 代理子记录
    pub proxied: Option<proxied_email_service_configs::Model>,
    /// 标准子记录
    pub standard: Option<standard_email_service_configs::Model>,
}

/// 项目的完整关系记录
#[derive(Debug, Clone)]
pub struct RawProjectRecord {
    /// 项目
    pub project: projects::Model,
    /// 项目配置
    pub config: project_configs::Model,
    /// 配置覆盖
    pub config_override: Option<project_config_overrides::Model>,
    /// OAuth 提供商，按 (`position`, `created_at`, `id`) 排序
    pub oauth_providers: Vec<RawOAuthProvider>,
    /// 邮件服务配置
    pub email: Option<RawEmailConfig>,
    /// 域名，按自增ID排序
    pub domains: Vec<project_domains::Model>,
    /// 项目用户数
    pub user_count: u64,
}

/// 读取项目完整记录，项目不存在时返回 `None`
pub async fn load_raw_project<C: ConnectionTrait>(
    conn: &C,
    project_id: &str,
) -> Result<Option<RawProjectRecord>> {
    let Some(project) = projects::Entity::find_by_id(project_id.to_string())
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    let config = project_configs::Entity::find_by_id(project.config_id.clone())
        .one(conn)
        .await?
        .ok_or_else(|| {
            ServiceError::data_integrity(format!(
                "项目 {} 引用的配置 {} 不存在",
                project.id, project.config_id
            ))
        })?;

    let config_override = project_config_overrides::Entity::find_by_id(project.id.clone())
        .one(conn)
        .await?;

    let oauth_providers = load_oauth_providers(conn, &config.id).await?;
    let email = load_email_config(conn, &config.id).await?;

    let domains = project_domains::Entity::find()
        .filter(project_domains::Column::ProjectConfigId.eq(config.id.as_str()))
        .order_by_asc(project_domains::Column::Id)
        .all(conn)
        .await?;

    let user_count = project_users::Entity::find()
        .filter(project_users::Column::ProjectId.eq(project.id.as_str()))
        .count(conn)
        .await?;

    Ok(Some(RawProjectRecord {
        project,
        config,
        config_override,
        oauth_providers,
        email,
        domains,
        user_count,
    }))
}

async fn load_oauth_providers<C: ConnectionTrait>(
    conn: &C,
    config_id: &str,
) -> Result<Vec<RawOAuthProvider>> {
    let rows = oauth_provider_configs::Entity::find()
        .filter(oauth_provider_configs::Column::ProjectConfigId.eq(config_id))
        .order_by_asc(oauth_provider_configs::Column::Position)
        .order_by_asc(oauth_provider_configs::Column::CreatedAt)
        .order_by_asc(oauth_provider_configs::Column::Id)
        .all(conn)
        .await?;

    let mut proxied: HashMap<String, proxied_oauth_provider_configs::Model> =
        proxied_oauth_provider_configs::Entity::find()
            .filter(proxied_oauth_provider_configs::Column::ProjectConfigId.eq(config_id))
            .all(conn)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

    let mut standard: HashMap<String, standard_oauth_provider_configs::Model> =
        standard_oauth_provider_configs::Entity::find()
            .filter(standard_oauth_provider_configs::Column::ProjectConfigId.eq(config_id))
            .all(conn)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

    Ok(rows
        .into_iter()
        .map(|row| RawOAuthProvider {
            proxied: proxied.remove(&row.id),
            standard: standard.remove(&row.id),
            row,
        })
        .collect())
}

async fn load_email_config<C: ConnectionTrait>(
    conn: &C,
    config_id: &str,
) -> Result<Option<RawEmailConfig>> {
    let Some(row) = email_service_configs::Entity::find_by_id(config_id.to_string())
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    let proxied = proxied_email_service_configs::Entity::find_by_id(config_id.to_string())
        .one(conn)
        .await?;
    let standard = standard_email_service_configs::Entity::find_by_id(config_id.to_string())
        .one(conn)
        .await?;

    Ok(Some(RawEmailConfig {
        row,
        proxied,
        standard,
    }))
}

/// 将完整记录展开为项目视图
#[must_use]
pub fn assemble(raw: RawProjectRecord) -> ProjectView {
    let project_id = raw.project.id.as_str();

    let oauth_providers = raw
        .oauth_providers
        .into_iter()
        .filter_map(|provider| assemble_oauth_provider(project_id, provider))
        .collect();

    let email_config = match raw.email {
        Some(email) => assemble_email_config(project_id, email),
        None => {
            debug!(project_id, "项目没有邮件服务配置");
            None
        }
    };

    let domains = raw
        .domains
        .into_iter()
        .map(|d| DomainView {
            domain: d.domain,
            handler_path: d.handler_path,
        })
        .collect();

    let config_override = raw
        .config_override
        .and_then(|o| match serde_json::from_str::<Value>(&o.config_json) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(project_id, error = %e, "配置覆盖不是合法的JSON，已忽略");
                None
            }
        });

    ProjectView {
        id: raw.project.id.clone(),
        display_name: raw.project.display_name,
        description: raw.project.description,
        created_at_millis: raw.project.created_at.and_utc().timestamp_millis(),
        user_count: raw.user_count,
        is_production_mode: raw.project.is_production_mode,
        evaluated_config: ProjectConfigView {
            id: raw.config.id,
            allow_localhost: raw.config.allow_localhost,
            credential_enabled: raw.config.credential_enabled,
            oauth_providers,
            email_config,
            domains,
        },
        config_override,
    }
}

fn assemble_oauth_provider(
    project_id: &str,
    provider: RawOAuthProvider,
) -> Option<OAuthProviderView> {
    let provider_id = provider.row.id.as_str();

    let kind = match (provider.proxied, provider.standard) {
        (Some(proxied), None) => match proxied.provider_type.parse::<ProxiedOAuthProviderType>() {
            Ok(stored) => OAuthProviderKind::Shared {
                provider_type: proxied_type_to_shared(stored),
            },
            Err(e) => {
                warn!(project_id, provider_id, error = %e, "无法识别的代理提供商类型，已跳过");
                return None;
            }
        },
        (None, Some(standard)) => {
            match standard.provider_type.parse::<StandardOAuthProviderType>() {
                Ok(stored) => OAuthProviderKind::Standard {
                    provider_type: storage_type_to_standard(stored),
                    client_id: standard.client_id,
                    client_secret: standard.client_secret,
                    tenant_id: standard.tenant_id,
                },
                Err(e) => {
                    warn!(project_id, provider_id, error = %e, "无法识别的标准提供商类型，已跳过");
                    return None;
                }
            }
        }
        (None, None) => {
            warn!(project_id, provider_id, "OAuth 提供商既没有代理配置也没有标准配置，已跳过");
            return None;
        }
        (Some(_), Some(_)) => {
            warn!(project_id, provider_id, "OAuth 提供商同时存在代理配置和标准配置，已跳过");
            return None;
        }
    };

    Some(OAuthProviderView {
        id: provider.row.id,
        enabled: provider.row.enabled,
        kind,
    })
}

fn assemble_email_config(project_id: &str, email: RawEmailConfig) -> Option<EmailConfigView> {
    let sender_name = email.row.sender_name;

    // 两者都存在时以标准配置为准
    if let Some(standard) = email.standard {
        let Ok(port) = u16::try_from(standard.port) else {
            warn!(project_id, port = standard.port, "邮件服务端口超出范围，已忽略邮件配置");
            return None;
        };
        return Some(EmailConfigView::Standard {
            host: standard.host,
            port,
            username: standard.username,
            password: standard.password,
            sender_email: standard.sender_email,
            sender_name,
        });
    }

    if email.proxied.is_some() {
        return Some(EmailConfigView::Shared { sender_name });
    }

    warn!(project_id, "邮件服务配置既没有代理配置也没有标准配置");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::provider_codes::{SharedProvider, StandardProvider};
    use chrono::{DateTime, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn ts(secs: i64) -> NaiveDateTime {
        DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    }

    fn provider_row(id: &str) -> oauth_provider_configs::Model {
        oauth_provider_configs::Model {
            project_config_id: "cfg".to_string(),
            id: id.to_string(),
            enabled: true,
            position: 0,
            created_at: ts(10),
            updated_at: ts(10),
        }
    }

    fn proxied(id: &str, provider_type: &str) -> proxied_oauth_provider_configs::Model {
        proxied_oauth_provider_configs::Model {
            project_config_id: "cfg".to_string(),
            id: id.to_string(),
            provider_type: provider_type.to_string(),
        }
    }

    fn standard(id: &str) -> standard_oauth_provider_configs::Model {
        standard_oauth_provider_configs::Model {
            project_config_id: "cfg".to_string(),
            id: id.to_string(),
            provider_type: "GOOGLE".to_string(),
            client_id: "cid".to_string(),
            client_secret: "secret".to_string(),
            tenant_id: None,
        }
    }

    fn email_row() -> email_service_configs::Model {
        email_service_configs::Model {
            project_config_id: "cfg".to_string(),
            sender_name: "Acme".to_string(),
            created_at: ts(10),
            updated_at: ts(10),
        }
    }

    fn raw(oauth_providers: Vec<RawOAuthProvider>, email: Option<RawEmailConfig>) -> RawProjectRecord {
        RawProjectRecord {
            project: projects::Model {
                id: "p-1".to_string(),
                display_name: "Acme".to_string(),
                description: "demo".to_string(),
                is_production_mode: false,
                config_id: "cfg".to_string(),
                created_at: ts(1_700_000_000),
                updated_at: ts(1_700_000_000),
            },
            config: project_configs::Model {
                id: "cfg".to_string(),
                allow_localhost: true,
                credential_enabled: false,
                created_at: ts(1_700_000_000),
                updated_at: ts(1_700_000_000),
            },
            config_override: None,
            oauth_providers,
            email,
            domains: vec![project_domains::Model {
                id: 1,
                project_config_id: "cfg".to_string(),
                domain: "https://acme.test".to_string(),
                handler_path: "/handler".to_string(),
                created_at: ts(10),
            }],
            user_count: 3,
        }
    }

    #[test]
    fn test_assemble_basic_fields() {
        let view = assemble(raw(Vec::new(), None));

        assert_eq!(view.id, "p-1");
        assert_eq!(view.created_at_millis, 1_700_000_000_000);
        assert_eq!(view.user_count, 3);
        assert!(view.evaluated_config.allow_localhost);
        assert!(!view.evaluated_config.credential_enabled);
        assert!(view.evaluated_config.email_config.is_none());
        assert_eq!(
            view.evaluated_config.domains,
            vec![DomainView {
                domain: "https://acme.test".to_string(),
                handler_path: "/handler".to_string(),
            }]
        );
    }

    #[test]
    fn test_inconsistent_provider_rows_are_skipped() {
        let providers = vec![
            RawOAuthProvider {
                row: provider_row("empty"),
                proxied: None,
                standard: None,
            },
            RawOAuthProvider {
                row: provider_row("github"),
                proxied: Some(proxied("github", "GITHUB")),
                standard: None,
            },
            RawOAuthProvider {
                row: provider_row("both"),
                proxied: Some(proxied("both", "GOOGLE")),
                standard: Some(standard("both")),
            },
            RawOAuthProvider {
                row: provider_row("unknown"),
                proxied: Some(proxied("unknown", "TWITTER")),
                standard: None,
            },
            RawOAuthProvider {
                row: provider_row("google"),
                proxied: None,
                standard: Some(standard("google")),
            },
        ];

        let view = assemble(raw(providers, None));
        let providers = view.evaluated_config.oauth_providers;

        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].id, "github");
        assert_eq!(
            providers[0].kind,
            OAuthProviderKind::Shared {
                provider_type: SharedProvider::Github
            }
        );
        assert_eq!(providers[1].id, "google");
        assert_eq!(
            providers[1].kind,
            OAuthProviderKind::Standard {
                provider_type: StandardProvider::Google,
                client_id: "cid".to_string(),
                client_secret: "secret".to_string(),
                tenant_id: None,
            }
        );
    }

    #[test]
    fn test_email_standard_wins_over_shared() {
        let email = RawEmailConfig {
            row: email_row(),
            proxied: Some(proxied_email_service_configs::Model {
                project_config_id: "cfg".to_string(),
            }),
            standard: Some(standard_email_service_configs::Model {
                project_config_id: "cfg".to_string(),
                host: "smtp.acme.test".to_string(),
                port: 465,
                username: "mailer".to_string(),
                password: "pw".to_string(),
                sender_email: "noreply@acme.test".to_string(),
            }),
        };

        let view = assemble(raw(Vec::new(), Some(email)));

        assert_eq!(
            view.evaluated_config.email_config,
            Some(EmailConfigView::Standard {
                host: "smtp.acme.test".to_string(),
                port: 465,
                username: "mailer".to_string(),
                password: "pw".to_string(),
                sender_email: "noreply@acme.test".to_string(),
                sender_name: "Acme".to_string(),
            })
        );
    }

    #[test]
    fn test_email_shared_and_empty() {
        let shared = RawEmailConfig {
            row: email_row(),
            proxied: Some(proxied_email_service_configs::Model {
                project_config_id: "cfg".to_string(),
            }),
            standard: None,
        };
        let view = assemble(raw(Vec::new(), Some(shared)));
        assert_eq!(
            view.evaluated_config.email_config,
            Some(EmailConfigView::Shared {
                sender_name: "Acme".to_string()
            })
        );

        let empty = RawEmailConfig {
            row: email_row(),
            proxied: None,
            standard: None,
        };
        assert!(assemble(raw(Vec::new(), Some(empty))).evaluated_config.email_config.is_none());
    }

    #[test]
    fn test_config_override_passthrough() {
        let mut record = raw(Vec::new(), None);
        record.config_override = Some(project_config_overrides::Model {
            project_id: "p-1".to_string(),
            config_json: r#"{"signUpEnabled": false}"#.to_string(),
            created_at: ts(10),
            updated_at: ts(10),
        });

        let view = assemble(record);
        assert_eq!(
            view.config_override,
            Some(serde_json::json!({"signUpEnabled": false}))
        );
    }
}
