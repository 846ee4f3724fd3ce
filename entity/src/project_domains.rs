//! # 项目域名实体定义
//!
//! 自增主键仅用于保持写入顺序，(配置ID, 域名) 唯一

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 项目可信域名
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_domains")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_config_id: String,
    pub domain: String,
    pub handler_path: String,
    pub created_at: DateTime,
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
