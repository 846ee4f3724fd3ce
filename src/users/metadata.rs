//! # 服务端元数据
//!
//! 管理员与项目之间的关系保存在管理员服务端元数据的 `managedProjectIds` 字段中。

use chrono::Utc;
use entity::project_users;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::integrity_error;

/// 元数据中记录可管理项目的键
pub const MANAGED_PROJECT_IDS_KEY: &str = "managedProjectIds";

/// 解析存储中的元数据 JSON 文本
pub fn parse_server_metadata(raw: Option<&str>) -> Result<Option<Value>> {
    raw.map(|text| {
        serde_json::from_str(text)
            .map_err(|e| ServiceError::data_integrity_with_source("服务端元数据不是合法的JSON", e))
    })
    .transpose()
}

/// 读取可管理的项目ID列表
///
/// 元数据缺失、为 `null`，或键不存在、值为 `null` 时返回空列表；
/// 元数据不是对象或值不是字符串数组时返回数据完整性错误。
pub fn managed_project_ids(metadata: Option<&Value>) -> Result<Vec<String>> {
    let object = match metadata {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(object)) => object,
        Some(_) => return Err(integrity_error!("服务端元数据必须是JSON对象")),
    };

    match object.get(MANAGED_PROJECT_IDS_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    integrity_error!("{} 必须是字符串数组", MANAGED_PROJECT_IDS_KEY)
                })
            })
            .collect(),
        Some(_) => Err(integrity_error!(
            "{} 必须是字符串数组",
            MANAGED_PROJECT_IDS_KEY
        )),
    }
}

/// 返回追加了项目ID的新元数据，其他键保持不变
pub fn with_managed_project_id(metadata: Option<&Value>, project_id: &str) -> Result<Value> {
    let mut ids = managed_project_ids(metadata)?;
    if !ids.iter().any(|id| id == project_id) {
        ids.push(project_id.to_string());
    }

    let mut object = match metadata {
        Some(Value::Object(object)) => object.clone(),
        _ => Map::new(),
    };
    object.insert(
        MANAGED_PROJECT_IDS_KEY.to_string(),
        Value::Array(ids.into_iter().map(Value::String).collect()),
    );
    Ok(Value::Object(object))
}

/// 在给定连接（通常是事务）内重新读取用户并追加可管理项目
pub async fn append_managed_project_id<C: ConnectionTrait>(
    conn: &C,
    context_id: &str,
    user_id: &str,
    project_id: &str,
) -> Result<()> {
    let user = project_users::Entity::find_by_id((context_id.to_string(), user_id.to_string()))
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("project_user", format!("{context_id}/{user_id}")))?;

    let metadata = parse_server_metadata(user.server_metadata_json.as_deref())?;
    let updated = with_managed_project_id(metadata.as_ref(), project_id)?;

    let mut active: project_users::ActiveModel = user.into();
    active.server_metadata_json = Set(Some(serde_json::to_string(&updated)?));
    active.updated_at = Set(Utc::now().naive_utc());
    active.update(conn).await?;

    debug!(user_id, project_id, "已追加可管理项目");
    Ok(())
}
