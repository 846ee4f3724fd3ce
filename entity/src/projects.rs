//! # 项目实体定义
//!
//! 项目（租户）基础信息表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 项目实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub is_production_mode: bool,
    pub config_id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_configs::Entity",
        from = "Column::ConfigId",
        to = "super::project_configs::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ProjectConfig,
    #[sea_orm(has_one = "super::project_config_overrides::Entity")]
    ConfigOverride,
    #[sea_orm(has_many = "super::project_users::Entity")]
    ProjectUsers,
}

impl Related<super::project_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectConfig.def()
    }
}

impl Related<super::project_config_overrides::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfigOverride.def()
    }
}

impl Related<super::project_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
