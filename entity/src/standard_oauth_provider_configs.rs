//! # 自有凭据 OAuth 提供商子记录

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 使用客户自有 client id / secret 的 OAuth 提供商配置
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "standard_oauth_provider_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_config_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub provider_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
