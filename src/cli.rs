//! 命令行参数与命令执行

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::database::check_database_status;
use crate::error::{Context, Result, ServiceError};
use crate::projects::{CreateProjectRequest, ProjectUpdate};
use crate::users::AdminUserView;

/// Project administration for the authentication backend.
#[derive(Debug, Parser)]
#[command(name = "auth-backend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (overrides `AUTH_BACKEND_CONFIG_PATH`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base log level when `RUST_LOG` is not set.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply pending migrations.
    Migrate,

    /// Report pending migrations.
    Status,

    /// List the projects managed by the token holder.
    List {
        /// Access token of an internal administrator.
        #[arg(long)]
        token: String,
    },

    /// Show one project.
    Get {
        /// Project id.
        project_id: String,

        /// Access token of an administrator of the project.
        #[arg(long)]
        token: String,
    },

    /// Create a project.
    Create {
        /// Access token of an internal administrator.
        #[arg(long)]
        token: String,

        /// Display name.
        #[arg(long)]
        display_name: String,

        /// Description.
        #[arg(long, default_value = "")]
        description: String,

        /// Allow localhost callbacks.
        #[arg(long)]
        allow_localhost: bool,

        /// Enable credential sign-in.
        #[arg(long)]
        credential_enabled: bool,
    },

    /// Apply a partial update read from a JSON file.
    Update {
        /// Project id.
        project_id: String,

        /// Access token of an administrator of the project.
        #[arg(long)]
        token: String,

        /// JSON file containing the update.
        #[arg(long)]
        file: PathBuf,
    },
}

impl Command {
    /// 是否需要在执行前应用迁移
    #[must_use]
    pub const fn needs_migrations(&self) -> bool {
        !matches!(self, Self::Status)
    }
}

/// 执行命令，返回要输出的 JSON
pub async fn execute(context: &AppContext, command: Command) -> Result<serde_json::Value> {
    match command {
        Command::Migrate => {
            let pending = check_database_status(&context.db).await?;
            to_json(&serde_json::json!({ "applied": true, "pending": pending }))
        }
        Command::Status => {
            let pending = check_database_status(&context.db).await?;
            to_json(&serde_json::json!({ "upToDate": pending.is_empty(), "pending": pending }))
        }
        Command::List { token } => {
            let admin = require_internal_admin(context, &token).await?;
            to_json(&context.projects.list_projects(&admin).await?)
        }
        Command::Get { project_id, token } => {
            require_project_admin(context, &project_id, &token).await?;
            let view = context
                .projects
                .get_project(&project_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("project", &project_id))?;
            to_json(&view)
        }
        Command::Create {
            token,
            display_name,
            description,
            allow_localhost,
            credential_enabled,
        } => {
            let admin = require_internal_admin(context, &token).await?;
            let request = CreateProjectRequest {
                display_name,
                description,
                allow_localhost,
                credential_enabled,
            };
            to_json(&context.projects.create_project(&admin, request).await?)
        }
        Command::Update {
            project_id,
            token,
            file,
        } => {
            require_project_admin(context, &project_id, &token).await?;
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("读取更新文件失败: {}", file.display()))?;
            let update: ProjectUpdate =
                serde_json::from_str(&content).context("更新文件不是合法的项目更新")?;
            let view = context
                .projects
                .update_project(&project_id, update)
                .await?
                .ok_or_else(|| ServiceError::not_found("project", &project_id))?;
            info!(project_id = %project_id, "项目已更新");
            to_json(&view)
        }
    }
}

async fn require_internal_admin(context: &AppContext, token: &str) -> Result<AdminUserView> {
    context
        .projects
        .resolve_internal_admin(token)
        .await?
        .ok_or_else(|| ServiceError::auth("访问令牌无效或不属于内部管理员"))
}

async fn require_project_admin(context: &AppContext, project_id: &str, token: &str) -> Result<()> {
    if context.projects.is_project_admin(project_id, token).await? {
        Ok(())
    } else {
        Err(ServiceError::auth(format!("无权管理项目 {project_id}")))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "auth-backend",
            "create",
            "--token",
            "t",
            "--display-name",
            "Acme",
            "--allow-localhost",
        ])
        .unwrap();

        match cli.command {
            Command::Create {
                display_name,
                allow_localhost,
                credential_enabled,
                description,
                ..
            } => {
                assert_eq!(display_name, "Acme");
                assert!(allow_localhost);
                assert!(!credential_enabled);
                assert!(description.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_update_with_global_config() {
        let cli = Cli::try_parse_from([
            "auth-backend",
            "update",
            "p-1",
            "--token",
            "t",
            "--file",
            "update.json",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.command.needs_migrations());
        assert!(!Command::Status.needs_migrations());
    }
}
