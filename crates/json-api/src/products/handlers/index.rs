//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use storefront_app::domain::products::pagination::ListProducts;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns one page of products.
///
/// Query parameters: `_page` and `_limit` (positive integers, default 1 and
/// 10), `_sort` (`createdAt`, `updatedAt`, `name` or `price`), `_order`
/// (`desc` for descending, anything else ascending) and `_expand` (present to
/// embed each product's category).
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "A page of products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid paging or sort options"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let options = ListProducts::from_query(
        req.query_text("_page").as_deref(),
        req.query_text("_limit").as_deref(),
        req.query_text("_sort").as_deref(),
        req.query_text("_order").as_deref(),
        req.has_query("_expand"),
    )?;

    let page = state
        .app
        .products
        .list_products(options)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductsResponse {
        data: page.items.into_iter().map(Into::into).collect(),
        pagination: page.pagination.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::domain::{
        categories::records::CategoryUuid,
        products::{
            MockProductsService, ProductsServiceError,
            pagination::{Pagination, ProductPage, SortField, SortOrder},
            records::{ProductUuid, ProductWithCategory},
        },
    };

    use crate::{
        errors::MessageResponse,
        products::responses::CategoryRef,
        test_helpers::{make_category, make_product, products_service, strict_products_mock},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    fn empty_page(options: ListProducts, total_items: u64) -> ProductPage {
        ProductPage {
            items: vec![],
            pagination: Pagination::new(&options, total_items),
        }
    }

    #[tokio::test]
    async fn test_index_uses_defaults() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|options| *options == ListProducts::default())
            .return_once(|options| Ok(empty_page(options, 0)));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.data.is_empty());
        assert_eq!(body.pagination.current_page, 1);
        assert_eq!(body.pagination.total_pages, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_paging_and_sorting() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|options| {
                *options
                    == ListProducts {
                        page: 3,
                        limit: 5,
                        sort: SortField::Price,
                        order: SortOrder::Desc,
                        expand: true,
                    }
            })
            .return_once(|options| Ok(empty_page(options, 11)));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let res = TestClient::get(
            "http://example.com/products?_page=3&_limit=5&_sort=price&_order=DESC&_expand",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_page_past_the_end_is_empty() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|options| options.page == 2 && options.limit == 1)
            .return_once(|options| Ok(empty_page(options, 1)));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::get("http://example.com/products?_page=2&_limit=1")
            .send(&make_service(repo))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.data.is_empty());
        assert_eq!(body.pagination.current_page, 2);
        assert_eq!(body.pagination.total_pages, 1);
        assert_eq!(body.pagination.total_items, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_embeds_expanded_categories() -> TestResult {
        let category = CategoryUuid::new();
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|options| options.expand)
            .return_once(move |options| {
                Ok(ProductPage {
                    items: vec![ProductWithCategory {
                        product: make_product(uuid, category),
                        category: Some(make_category(category, vec![uuid])),
                    }],
                    pagination: Pagination::new(&options, 1),
                })
            });

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let body: ProductsResponse = TestClient::get("http://example.com/products?_expand=true")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        let first = body.data.first().ok_or("expected one product")?;

        assert_eq!(first.id, Uuid::from(uuid));
        assert!(
            matches!(&first.category_id, CategoryRef::Expanded(embedded) if embedded.id == Uuid::from(category)),
            "expected the category to be embedded"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_sort_field_returns_400() -> TestResult {
        let mut res = TestClient::get("http://example.com/products?_sort=password")
            .send(&make_service(strict_products_mock()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.message.contains("_sort"), "message should name _sort");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_zero_limit_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products?_limit=0")
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Internal server error");

        Ok(())
    }
}
