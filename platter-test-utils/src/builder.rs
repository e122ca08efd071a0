//! Declarative test builder for test environment setup.
//!
//! Provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods chain together, with all operations queued
//! and executed during the final `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up test environments with database tables and fixture rows. Methods
/// chain together and are finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,                            // usernames
    ingredients: Vec<(String, String)>,            // (name, measurement_unit)
    tags: Vec<(String, String, String)>,           // (name, color, slug)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
            users: Vec::new(),
            ingredients: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add every core table to the test database.
    ///
    /// Creates Ingredient, Tag, PlatterUser, Recipe, RecipeIngredient,
    /// RecipeTag, Favorite, ShoppingCartItem, and Subscription, plus the
    /// composite unique index on ingredient (name, measurement_unit).
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a user fixture; email and names are derived from the username.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Queue an ingredient fixture.
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        measurement_unit: impl Into<String>,
    ) -> Self {
        self.ingredients.push((name.into(), measurement_unit.into()));
        self
    }

    /// Queue a tag fixture.
    pub fn with_tag(
        mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        self.tags.push((name.into(), color.into(), slug.into()));
        self
    }

    /// Build the test context, creating all queued tables and fixtures.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        let mut indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_core_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::PlatterUser),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeIngredient),
                schema.create_table_from_entity(entity::prelude::RecipeTag),
                schema.create_table_from_entity(entity::prelude::Favorite),
                schema.create_table_from_entity(entity::prelude::ShoppingCartItem),
                schema.create_table_from_entity(entity::prelude::Subscription),
            ]);

            indexes.push(
                Index::create()
                    .name("idx-ingredient-name-measurement_unit")
                    .table(entity::ingredient::Entity)
                    .col(entity::ingredient::Column::Name)
                    .col(entity::ingredient::Column::MeasurementUnit)
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(indexes).await?;

        for username in self.users {
            setup.users().insert_user(&username).await?;
        }

        for (name, unit) in self.ingredients {
            setup.catalog().insert_ingredient(&name, &unit).await?;
        }

        for (name, color, slug) in self.tags {
            setup.catalog().insert_tag(&name, &color, &slug).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a `TestContext` with only the listed entity tables, or none.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let mut builder = $crate::TestBuilder::new();
            $(builder = builder.with_table($entity);)+
            builder.build().await
        }
        .await
    }};
}

/// Create a `TestContext` with every core table plus any extras listed.
#[macro_export]
macro_rules! test_setup_with_core_tables {
    () => {{
        $crate::TestBuilder::new().with_core_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let mut builder = $crate::TestBuilder::new().with_core_tables();
            $(builder = builder.with_table($entity);)+
            builder.build().await
        }
        .await
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builder_creates_core_tables() {
        let result = TestBuilder::new().with_core_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn builder_chains_fixtures() {
        let result = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_ingredient("Salt", "g")
            .with_tag("Dinner", "#E26C2D", "dinner")
            .build()
            .await;
        assert!(result.is_ok());
    }
}
