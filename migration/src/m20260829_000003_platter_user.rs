use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlatterUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PlatterUser::Id))
                    .col(string_uniq(PlatterUser::Email))
                    .col(string_uniq(PlatterUser::Username))
                    .col(string(PlatterUser::FirstName))
                    .col(string(PlatterUser::LastName))
                    .col(timestamp(PlatterUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlatterUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlatterUser {
    Table,
    Id,
    Email,
    Username,
    FirstName,
    LastName,
    CreatedAt,
}
