//! # 项目用户实体定义
//!
//! 项目下的终端用户。`internal` 项目下的用户即平台管理员，
//! 其 `server_metadata_json` 中的 `managedProjectIds` 记录了可管理的项目。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 项目用户实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_user_id: String,
    pub display_name: Option<String>,
    pub primary_email: Option<String>,
    pub server_metadata_json: Option<String>, // 服务端元数据 JSON 字符串
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
