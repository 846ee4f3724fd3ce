//! # 项目用户模块
//!
//! 管理员查询与服务端元数据读写

pub mod metadata;
pub mod store;

pub use metadata::{
    MANAGED_PROJECT_IDS_KEY, append_managed_project_id, managed_project_ids,
    parse_server_metadata, with_managed_project_id,
};
pub use store::{AdminUserView, ProjectUserStore, ServerUserStore};
