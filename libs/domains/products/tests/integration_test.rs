//! Integration tests for the Products domain against PostgreSQL
//!
//! These tests run the real repository over a containerized database,
//! so Docker must be available. The schema is applied through the
//! migration crate before each test database is handed out.

use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::assert_some};

fn service_for(db: &TestDatabase) -> ProductService<PgProductRepository> {
    ProductService::new(PgProductRepository::new(db.connection()))
}

fn create_input(builder: &TestDataBuilder) -> CreateProduct {
    CreateProduct {
        name: builder.name("product", "created"),
        maker: builder.name("maker", "created"),
        price: 1000.0,
        image_url: Some("http://test.com/test.jpg".to_string()),
    }
}

#[tokio::test]
async fn test_create_and_get_product() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("create_and_get");
    let service = service_for(&db);

    let created = service
        .create_product(create_input(&builder))
        .await
        .expect("create product");

    assert!(created.id >= 1);
    assert_eq!(created.name, builder.name("product", "created"));
    assert_eq!(created.price, 1000.0);

    let fetched = service.get_product(created.id).await.expect("get product");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_product_returns_not_found() {
    let db = TestDatabase::new().await;
    let service = service_for(&db);

    let err = service.get_product(9999).await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound(9999)));
}

#[tokio::test]
async fn test_update_product_replaces_all_fields() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("update");
    let service = service_for(&db);

    let created = service
        .create_product(create_input(&builder))
        .await
        .expect("create product");

    let updated = service
        .update_product(
            created.id,
            UpdateProduct {
                name: builder.name("product", "updated"),
                maker: builder.name("maker", "updated"),
                price: 2500.0,
                image_url: None,
            },
        )
        .await
        .expect("update product");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, builder.name("product", "updated"));
    assert_eq!(updated.price, 2500.0);
    // Full replacement clears fields omitted from the payload
    assert_eq!(updated.image_url, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_missing_product_returns_not_found() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("update_missing");
    let service = service_for(&db);

    let err = service
        .update_product(
            9999,
            UpdateProduct {
                name: builder.name("product", "updated"),
                maker: builder.name("maker", "updated"),
                price: 2500.0,
                image_url: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ProductError::NotFound(9999)));
}

#[tokio::test]
async fn test_delete_product_removes_row() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("delete");
    let service = service_for(&db);

    let created = service
        .create_product(create_input(&builder))
        .await
        .expect("create product");

    service
        .delete_product(created.id)
        .await
        .expect("delete product");

    let err = service.get_product(created.id).await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound(_)));

    // Second delete finds nothing
    let err = service.delete_product(created.id).await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound(_)));
}

#[tokio::test]
async fn test_list_products_ordered_by_id() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("list");
    let service = service_for(&db);

    let mut created_ids = Vec::new();
    for i in 0..3 {
        let created = service
            .create_product(CreateProduct {
                name: builder.name("product", &i.to_string()),
                maker: builder.name("maker", &i.to_string()),
                price: 100.0 * f64::from(i + 1),
                image_url: None,
            })
            .await
            .expect("create product");
        created_ids.push(created.id);
    }

    let products = service.list_products().await.expect("list products");

    assert_eq!(products.len(), 3);
    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, created_ids);
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_repository_get_by_id_returns_option() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("repo_get");
    let repo = PgProductRepository::new(db.connection());

    let created = repo
        .create(create_input(&builder))
        .await
        .expect("create product");

    let found = repo.get_by_id(created.id).await.expect("query");
    let found = assert_some(found, "product should exist after insert");
    assert_eq!(found.id, created.id);

    let missing = repo.get_by_id(created.id + 1000).await.expect("query");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_create_rejects_invalid_input_before_touching_db() {
    let db = TestDatabase::new().await;
    let service = service_for(&db);

    let err = service
        .create_product(CreateProduct {
            name: String::new(),
            maker: "maker".to_string(),
            price: 1000.0,
            image_url: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ProductError::Validation(_)));

    let products = service.list_products().await.expect("list products");
    assert!(products.is_empty());
}
