use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailServiceConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailServiceConfigs::ProjectConfigId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmailServiceConfigs::SenderName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailServiceConfigs::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EmailServiceConfigs::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_service_configs_project_config_id")
                            .from(
                                EmailServiceConfigs::Table,
                                EmailServiceConfigs::ProjectConfigId,
                            )
                            .to(ProjectConfigs::Table, ProjectConfigs::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProxiedEmailServiceConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProxiedEmailServiceConfigs::ProjectConfigId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_proxied_email_service_configs_project_config_id")
                            .from(
                                ProxiedEmailServiceConfigs::Table,
                                ProxiedEmailServiceConfigs::ProjectConfigId,
                            )
                            .to(
                                EmailServiceConfigs::Table,
                                EmailServiceConfigs::ProjectConfigId,
                            )
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StandardEmailServiceConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StandardEmailServiceConfigs::ProjectConfigId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StandardEmailServiceConfigs::Host)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardEmailServiceConfigs::Port)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardEmailServiceConfigs::Username)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardEmailServiceConfigs::Password)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardEmailServiceConfigs::SenderEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_standard_email_service_configs_project_config_id")
                            .from(
                                StandardEmailServiceConfigs::Table,
                                StandardEmailServiceConfigs::ProjectConfigId,
                            )
                            .to(
                                EmailServiceConfigs::Table,
                                EmailServiceConfigs::ProjectConfigId,
                            )
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(StandardEmailServiceConfigs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProxiedEmailServiceConfigs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(EmailServiceConfigs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmailServiceConfigs {
    Table,
    ProjectConfigId,
    SenderName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProxiedEmailServiceConfigs {
    Table,
    ProjectConfigId,
}

#[derive(DeriveIden)]
enum StandardEmailServiceConfigs {
    Table,
    ProjectConfigId,
    Host,
    Port,
    Username,
    Password,
    SenderEmail,
}

#[derive(DeriveIden)]
enum ProjectConfigs {
    Table,
    Id,
}
