use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_platter_user::PlatterUser;

static FK_SUBSCRIPTION_USER_ID: &str = "fk-subscription-user_id";
static FK_SUBSCRIPTION_AUTHOR_ID: &str = "fk-subscription-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(integer(Subscription::UserId))
                    .col(integer(Subscription::AuthorId))
                    .col(timestamp(Subscription::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(Subscription::UserId)
                            .col(Subscription::AuthorId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_USER_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::UserId)
                    .to_tbl(PlatterUser::Table)
                    .to_col(PlatterUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_AUTHOR_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::AuthorId)
                    .to_tbl(PlatterUser::Table)
                    .to_col(PlatterUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_AUTHOR_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_USER_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    UserId,
    AuthorId,
    CreatedAt,
}
