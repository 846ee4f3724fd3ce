//! # 项目配置实体定义
//!
//! 每个项目恰好拥有一条配置记录，OAuth、邮件与域名配置都挂在配置之下

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 项目配置实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub allow_localhost: bool,
    pub credential_enabled: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
    #[sea_orm(has_many = "super::oauth_provider_configs::Entity")]
    OAuthProviderConfigs,
    #[sea_orm(has_one = "super::email_service_configs::Entity")]
    EmailServiceConfig,
    #[sea_orm(has_many = "super::project_domains::Entity")]
    ProjectDomains,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::oauth_provider_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OAuthProviderConfigs.def()
    }
}

impl Related<super::email_service_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailServiceConfig.def()
    }
}

impl Related<super::project_domains::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectDomains.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
