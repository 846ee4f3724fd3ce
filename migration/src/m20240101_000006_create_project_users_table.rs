use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectUsers::ProjectId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectUsers::ProjectUserId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectUsers::DisplayName)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProjectUsers::PrimaryEmail)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(ProjectUsers::ServerMetadataJson).text().null())
                    .col(
                        ColumnDef::new(ProjectUsers::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectUsers::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_project_users")
                            .col(ProjectUsers::ProjectId)
                            .col(ProjectUsers::ProjectUserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_users_project_id")
                            .from(ProjectUsers::Table, ProjectUsers::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectUsers {
    Table,
    ProjectId,
    ProjectUserId,
    DisplayName,
    PrimaryEmail,
    ServerMetadataJson,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
