//! # 共享凭据 OAuth 提供商子记录

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 使用平台共享凭据的 OAuth 提供商配置
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "proxied_oauth_provider_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_config_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub provider_type: String, // GITHUB / FACEBOOK / GOOGLE / MICROSOFT
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
