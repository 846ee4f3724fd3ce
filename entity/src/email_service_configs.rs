//! # 邮件服务配置实体定义
//!
//! 每个项目配置至多一条，发送方式由 proxied / standard 子表决定

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 邮件服务配置实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "email_service_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_config_id: String,
    pub sender_name: String,
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
    #[sea_orm(has_one = "super::proxied_email_service_configs::Entity")]
    Proxied,
    #[sea_orm(has_one = "super::standard_email_service_configs::Entity")]
    Standard,
}

impl Related<super::project_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectConfig.def()
    }
}

impl Related<super::proxied_email_service_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proxied.def()
    }
}

impl Related<super::standard_email_service_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Standard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
