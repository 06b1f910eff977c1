use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a single item in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (assigned by the database)
    pub id: i64,
    /// Product name
    pub name: String,
    /// Manufacturer of the product
    pub maker: String,
    /// Price in the catalog currency
    pub price: f64,
    /// Optional product image URL
    pub image_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub maker: String,
    /// Price defaults to 0.0 when the field is omitted
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub image_url: Option<String>,
}

/// DTO for replacing an existing product.
///
/// Updates are full replacements: every field is written to the stored
/// product, including a missing `image_url` which clears the stored value.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub maker: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a new product from a CreateProduct DTO and an assigned id
    pub fn new(id: i64, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            maker: input.maker,
            price: input.price,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields from an UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.maker = update.maker;
        self.price = update.price;
        self.image_url = update.image_url;
        self.updated_at = Utc::now();
    }
}
