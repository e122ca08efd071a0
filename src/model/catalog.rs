use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub slug: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTagDto {
    pub name: String,
    pub color: String,
    pub slug: String,
}

/// Query filter for ingredient listing
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct IngredientSearchDto {
    /// Name prefix to search for
    pub name: Option<String>,
}

/// A single (name, measurement unit) record for the ingredient bootstrap
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientRecordDto {
    pub name: String,
    pub measurement_unit: String,
}

/// Result of an ingredient bootstrap load
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BootstrapResultDto {
    /// Number of ingredients created; records already present are skipped
    pub created: usize,
}
