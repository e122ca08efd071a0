use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::catalog::IngredientRecordDto,
    server::{
        data::ingredient::IngredientRepository,
        error::{catalog::CatalogError, Error},
    },
};

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load catalog records with get-or-create semantics.
    ///
    /// Records whose (name, measurement unit) pair already exists are skipped,
    /// so reloading the same record set is a no-op. Returns the number of
    /// ingredients created. A unique violation from a concurrent load counts
    /// as already present.
    pub async fn bootstrap(&self, records: &[IngredientRecordDto]) -> Result<usize, Error> {
        let repo = IngredientRepository::new(self.db);
        let mut created = 0;

        for record in records {
            let existing = repo
                .find_by_name_and_unit(&record.name, &record.measurement_unit)
                .await?;

            if existing.is_some() {
                continue;
            }

            match repo.create(&record.name, &record.measurement_unit).await {
                Ok(_) => created += 1,
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {}
                    _ => return Err(e.into()),
                },
            }
        }

        Ok(created)
    }

    pub async fn search(
        &self,
        name_prefix: Option<&str>,
    ) -> Result<Vec<entity::ingredient::Model>, Error> {
        let ingredients = IngredientRepository::new(self.db)
            .search(name_prefix)
            .await?;

        Ok(ingredients)
    }

    pub async fn get_ingredient(&self, id: i32) -> Result<entity::ingredient::Model, Error> {
        IngredientRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::IngredientNotFound(id).into())
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::{
        model::catalog::IngredientRecordDto,
        server::{
            error::{catalog::CatalogError, Error},
            service::ingredient::IngredientService,
        },
    };

    fn records() -> Vec<IngredientRecordDto> {
        vec![
            IngredientRecordDto {
                name: "Salt".to_string(),
                measurement_unit: "g".to_string(),
            },
            IngredientRecordDto {
                name: "Milk".to_string(),
                measurement_unit: "ml".to_string(),
            },
        ]
    }

    #[tokio::test]
    /// Expect bootstrap to create each new record exactly once
    async fn test_bootstrap_creates_records() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let service = IngredientService::new(&test.db);

        let created = service.bootstrap(&records()).await;

        assert!(created.is_ok());
        assert_eq!(created.unwrap(), 2);

        Ok(())
    }

    #[tokio::test]
    /// Expect reloading the same records to create nothing
    async fn test_bootstrap_is_idempotent() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let service = IngredientService::new(&test.db);

        service.bootstrap(&records()).await?;
        let second = service.bootstrap(&records()).await?;

        assert_eq!(second, 0);

        let all = service.search(None).await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[tokio::test]
    /// Expect the same name under a different unit to count as a new record
    async fn test_bootstrap_same_name_different_unit() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let service = IngredientService::new(&test.db);

        service.bootstrap(&records()).await?;

        let extra = vec![IngredientRecordDto {
            name: "Salt".to_string(),
            measurement_unit: "tbsp".to_string(),
        }];
        let created = service.bootstrap(&extra).await?;

        assert_eq!(created, 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404-class error for a missing ingredient
    async fn test_get_ingredient_not_found() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let service = IngredientService::new(&test.db);

        let result = service.get_ingredient(42).await;

        assert!(matches!(
            result,
            Err(Error::CatalogError(CatalogError::IngredientNotFound(42)))
        ));

        Ok(())
    }
}
