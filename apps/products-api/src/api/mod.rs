//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use sea_orm::DatabaseConnection;

pub use health::ready_router;

/// Create all API routes
pub fn routes(db: DatabaseConnection) -> Router {
    Router::new().nest("/products", products::router(db))
}
