//! # SMTP 邮件发送子记录

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 客户自有 SMTP 参数
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "standard_email_service_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_config_id: String,
    pub host: String,
    pub port: i32,
    pub username: String,
    pub password: String,
    pub sender_email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::email_service_configs::Entity",
        from = "Column::ProjectConfigId",
        to = "super::email_service_configs::Column::ProjectConfigId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EmailServiceConfig,
}

impl Related<super::email_service_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailServiceConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
