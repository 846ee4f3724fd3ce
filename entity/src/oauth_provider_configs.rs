//! # OAuth 提供商配置实体定义
//!
//! 以 (配置ID, 提供商标识) 为联合主键。具体凭据保存在
//! `proxied_oauth_provider_configs` 或 `standard_oauth_provider_configs` 子表中，
//! 两者必须且只能存在其一。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// OAuth 提供商配置实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "oauth_provider_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_config_id: String,
    /// 提供商标识（在同一配置内唯一）
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub enabled: bool,
    /// 提交顺序
    pub position: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_configs::Entity",
        from = "Column::ProjectConfigId",
        to = "super::project_configs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ProjectConfig,
}

impl Related<super::project_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
