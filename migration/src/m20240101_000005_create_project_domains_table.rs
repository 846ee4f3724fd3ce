use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectDomains::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectDomains::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectDomains::ProjectConfigId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectDomains::Domain)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectDomains::HandlerPath)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectDomains::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_domains_project_config_id")
                            .from(ProjectDomains::Table, ProjectDomains::ProjectConfigId)
                            .to(ProjectConfigs::Table, ProjectConfigs::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一配置下域名唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_project_domains_config_domain")
                    .table(ProjectDomains::Table)
                    .col(ProjectDomains::ProjectConfigId)
                    .col(ProjectDomains::Domain)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectDomains::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectDomains {
    Table,
    Id,
    ProjectConfigId,
    Domain,
    HandlerPath,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectConfigs {
    Table,
    Id,
}
