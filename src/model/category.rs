use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

/// Body of category create and rename requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCategoryDto {
    pub name: String,
}
