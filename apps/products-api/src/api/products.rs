//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};
use sea_orm::DatabaseConnection;

/// Create products router
pub fn router(db: DatabaseConnection) -> Router {
    let repository = PgProductRepository::new(db);
    let service = ProductService::new(repository);
    handlers::router(service)
}
