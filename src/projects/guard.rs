//! # 项目访问控制
//!
//! 只有 `internal` 上下文中、且在元数据里登记了目标项目的管理员才能操作该项目。

use std::sync::Arc;

use tracing::debug;

use super::INTERNAL_PROJECT_ID;
use crate::auth::AccessTokenDecoder;
use crate::error::Result;
use crate::users::{AdminUserView, ServerUserStore};

/// 项目访问控制
#[derive(Clone)]
pub struct ProjectAccessGuard {
    tokens: Arc<dyn AccessTokenDecoder>,
    users: Arc<dyn ServerUserStore>,
}

impl ProjectAccessGuard {
    /// 创建访问控制
    #[must_use]
    pub fn new(tokens: Arc<dyn AccessTokenDecoder>, users: Arc<dyn ServerUserStore>) -> Self {
        Self { tokens, users }
    }

    /// 解析令牌对应的内部管理员
    ///
    /// 令牌无法解码、不属于 `internal` 上下文或用户不存在时返回 `None`。
    pub async fn resolve_internal_admin(&self, access_token: &str) -> Result<Option<AdminUserView>> {
        let decoded = match self.tokens.decode_access_token(access_token) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!(error = %e, "访问令牌无法解码");
                return Ok(None);
            }
        };

        if decoded.project_id != INTERNAL_PROJECT_ID {
            debug!(project_id = %decoded.project_id, "访问令牌不属于内部项目");
            return Ok(None);
        }

        let user = self
            .users
            .get_server_user(INTERNAL_PROJECT_ID, &decoded.user_id)
            .await?;
        if user.is_none() {
            debug!(user_id = %decoded.user_id, "内部项目中不存在该用户");
        }
        Ok(user)
    }

    /// 调用方是否为该项目的管理员
    ///
    /// 元数据格式错误时返回数据完整性错误。
    pub async fn is_project_admin(&self, project_id: &str, access_token: &str) -> Result<bool> {
        let Some(admin) = self.resolve_internal_admin(access_token).await? else {
            return Ok(false);
        };

        let managed = admin.managed_project_ids()?;
        Ok(managed.iter().any(|id| id == project_id))
    }
}
