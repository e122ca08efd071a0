use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_platter_user::PlatterUser;

static IDX_RECIPE_PUB_DATE: &str = "idx-recipe-pub_date";
static FK_RECIPE_AUTHOR_ID: &str = "fk-recipe-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(integer(Recipe::AuthorId))
                    .col(string(Recipe::Name))
                    .col(text(Recipe::Image))
                    .col(text(Recipe::Text))
                    .col(integer(Recipe::CookingTime))
                    .col(timestamp(Recipe::PubDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_PUB_DATE)
                    .table(Recipe::Table)
                    .col(Recipe::PubDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_AUTHOR_ID)
                    .from_tbl(Recipe::Table)
                    .from_col(Recipe::AuthorId)
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
                    .name(FK_RECIPE_AUTHOR_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_PUB_DATE)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    AuthorId,
    Name,
    Image,
    Text,
    CookingTime,
    PubDate,
}
