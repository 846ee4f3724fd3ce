//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod email_service_configs;
pub mod oauth_provider_configs;
pub mod project_config_overrides;
pub mod project_configs;
pub mod project_domains;
pub mod project_users;
pub mod projects;
pub mod proxied_email_service_configs;
pub mod proxied_oauth_provider_configs;
pub mod standard_email_service_configs;
pub mod standard_oauth_provider_configs;

pub use email_service_configs::Entity as EmailServiceConfigs;
pub use oauth_provider_configs::Entity as OAuthProviderConfigs;
pub use project_config_overrides::Entity as ProjectConfigOverrides;
pub use project_configs::Entity as ProjectConfigs;
pub use project_domains::Entity as ProjectDomains;
pub use project_users::Entity as ProjectUsers;
pub use projects::Entity as Projects;
pub use proxied_email_service_configs::Entity as ProxiedEmailServiceConfigs;
pub use proxied_oauth_provider_configs::Entity as ProxiedOAuthProviderConfigs;
pub use standard_email_service_configs::Entity as StandardEmailServiceConfigs;
pub use standard_oauth_provider_configs::Entity as StandardOAuthProviderConfigs;
