use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OAuthProviderConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OAuthProviderConfigs::ProjectConfigId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OAuthProviderConfigs::Id)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OAuthProviderConfigs::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(OAuthProviderConfigs::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(OAuthProviderConfigs::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(OAuthProviderConfigs::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_oauth_provider_configs")
                            .col(OAuthProviderConfigs::ProjectConfigId)
                            .col(OAuthProviderConfigs::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oauth_provider_configs_project_config_id")
                            .from(
                                OAuthProviderConfigs::Table,
                                OAuthProviderConfigs::ProjectConfigId,
                            )
                            .to(ProjectConfigs::Table, ProjectConfigs::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 共享凭据子表
        manager
            .create_table(
                Table::create()
                    .table(ProxiedOAuthProviderConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProxiedOAuthProviderConfigs::ProjectConfigId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProxiedOAuthProviderConfigs::Id)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProxiedOAuthProviderConfigs::ProviderType)
                            .string_len(30)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_proxied_oauth_provider_configs")
                            .col(ProxiedOAuthProviderConfigs::ProjectConfigId)
                            .col(ProxiedOAuthProviderConfigs::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 自有凭据子表
        manager
            .create_table(
                Table::create()
                    .table(StandardOAuthProviderConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StandardOAuthProviderConfigs::ProjectConfigId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardOAuthProviderConfigs::Id)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardOAuthProviderConfigs::ProviderType)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardOAuthProviderConfigs::ClientId)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardOAuthProviderConfigs::ClientSecret)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StandardOAuthProviderConfigs::TenantId)
                            .string_len(255)
                            .null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_standard_oauth_provider_configs")
                            .col(StandardOAuthProviderConfigs::ProjectConfigId)
                            .col(StandardOAuthProviderConfigs::Id),
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
                    .table(StandardOAuthProviderConfigs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProxiedOAuthProviderConfigs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(OAuthProviderConfigs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OAuthProviderConfigs {
    #[sea_orm(iden = "oauth_provider_configs")]
    Table,
    ProjectConfigId,
    Id,
    Enabled,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProxiedOAuthProviderConfigs {
    #[sea_orm(iden = "proxied_oauth_provider_configs")]
    Table,
    ProjectConfigId,
    Id,
    ProviderType,
}

#[derive(DeriveIden)]
enum StandardOAuthProviderConfigs {
    #[sea_orm(iden = "standard_oauth_provider_configs")]
    Table,
    ProjectConfigId,
    Id,
    ProviderType,
    ClientId,
    ClientSecret,
    TenantId,
}

#[derive(DeriveIden)]
enum ProjectConfigs {
    Table,
    Id,
}
