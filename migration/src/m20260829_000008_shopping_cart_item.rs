use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260829_000003_platter_user::PlatterUser, m20260829_000004_recipe::Recipe};

static FK_CART_USER_ID: &str = "fk-shopping_cart_item-user_id";
static FK_CART_RECIPE_ID: &str = "fk-shopping_cart_item-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingCartItem::Table)
                    .if_not_exists()
                    .col(integer(ShoppingCartItem::UserId))
                    .col(integer(ShoppingCartItem::RecipeId))
                    .col(timestamp(ShoppingCartItem::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(ShoppingCartItem::UserId)
                            .col(ShoppingCartItem::RecipeId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CART_USER_ID)
                    .from_tbl(ShoppingCartItem::Table)
                    .from_col(ShoppingCartItem::UserId)
                    .to_tbl(PlatterUser::Table)
                    .to_col(PlatterUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CART_RECIPE_ID)
                    .from_tbl(ShoppingCartItem::Table)
                    .from_col(ShoppingCartItem::RecipeId)
                    .to_tbl(Recipe::Table)
                    .to_col(Recipe::Id)
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
                    .name(FK_CART_RECIPE_ID)
                    .table(ShoppingCartItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CART_USER_ID)
                    .table(ShoppingCartItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShoppingCartItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShoppingCartItem {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}
