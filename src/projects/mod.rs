//! # 项目管理模块
//!
//! 关系存储与对外项目视图之间的转换，以及在事务中执行的创建和更新

pub mod assembler;
pub mod creator;
pub mod guard;
pub mod provider_codes;
pub mod reconciler;
pub mod service;
pub mod types;

/// 用于管理其他所有项目的保留项目
pub const INTERNAL_PROJECT_ID: &str = "internal";

pub use assembler::{RawProjectRecord, assemble, load_raw_project};
pub use guard::ProjectAccessGuard;
pub use provider_codes::{ProviderCode, SharedProvider, StandardProvider};
pub use service::ProjectService;
pub use types::{
    CreateProjectRequest, DomainView, EmailConfigView, OAuthProviderInput, OAuthProviderKind,
    OAuthProviderView, ProjectConfigUpdate, ProjectConfigView, ProjectUpdate, ProjectView,
};
