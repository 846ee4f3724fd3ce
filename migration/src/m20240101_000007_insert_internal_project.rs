use sea_orm_migration::prelude::*;

/// 保留的内部管理项目ID
const INTERNAL_PROJECT_ID: &str = "internal";
const INTERNAL_PROJECT_CONFIG_ID: &str = "internal-project-config";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 插入内部管理项目的配置
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(ProjectConfigs::Table)
                    .columns([
                        ProjectConfigs::Id,
                        ProjectConfigs::AllowLocalhost,
                        ProjectConfigs::CredentialEnabled,
                    ])
                    .values_panic([
                        INTERNAL_PROJECT_CONFIG_ID.into(),
                        true.into(),
                        true.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        // 插入内部管理项目
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Projects::Table)
                    .columns([
                        Projects::Id,
                        Projects::DisplayName,
                        Projects::Description,
                        Projects::IsProductionMode,
                        Projects::ConfigId,
                    ])
                    .values_panic([
                        INTERNAL_PROJECT_ID.into(),
                        "Internal".into(),
                        "Administrative project used to manage all other projects".into(),
                        false.into(),
                        INTERNAL_PROJECT_CONFIG_ID.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除内部项目（项目用户等通过级联删除）
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Projects::Table)
                    .and_where(Expr::col(Projects::Id).eq(INTERNAL_PROJECT_ID))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(ProjectConfigs::Table)
                    .and_where(Expr::col(ProjectConfigs::Id).eq(INTERNAL_PROJECT_CONFIG_ID))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

// 表定义枚举
#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    DisplayName,
    Description,
    IsProductionMode,
    ConfigId,
}

#[derive(DeriveIden)]
enum ProjectConfigs {
    Table,
    Id,
    AllowLocalhost,
    CredentialEnabled,
}
