pub use sea_orm_migration::prelude::*;

mod m20260829_000001_ingredient;
mod m20260829_000002_tag;
mod m20260829_000003_platter_user;
mod m20260829_000004_recipe;
mod m20260829_000005_recipe_ingredient;
mod m20260829_000006_recipe_tag;
mod m20260829_000007_favorite;
mod m20260829_000008_shopping_cart_item;
mod m20260829_000009_subscription;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_ingredient::Migration),
            Box::new(m20260829_000002_tag::Migration),
            Box::new(m20260829_000003_platter_user::Migration),
            Box::new(m20260829_000004_recipe::Migration),
            Box::new(m20260829_000005_recipe_ingredient::Migration),
            Box::new(m20260829_000006_recipe_tag::Migration),
            Box::new(m20260829_000007_favorite::Migration),
            Box::new(m20260829_000008_shopping_cart_item::Migration),
            Box::new(m20260829_000009_subscription::Migration),
        ]
    }
}
