//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductDeletedResponse},
    state::State,
};

pub(crate) const PRODUCT_DELETED: &str = "Product deleted successfully";

/// Delete Product Handler
///
/// Deleting an unknown product succeeds with `product: null`.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product identifier"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.uuid_or_400()?;

    let deleted = state
        .app
        .products
        .delete_product(product.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductDeletedResponse {
        message: PRODUCT_DELETED.to_string(),
        product: deleted.map(Into::into),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::domain::{
        categories::records::CategoryUuid,
        products::{MockProductsService, records::ProductUuid},
    };

    use crate::{
        errors::MessageResponse,
        test_helpers::{make_product, products_service, strict_products_mock},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_returns_deleted_record() -> TestResult {
        let uuid = ProductUuid::new();
        let category = CategoryUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(Some(make_product(uuid, category))));

        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete(format!("http://example.com/products/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: ProductDeletedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, PRODUCT_DELETED);
        assert_eq!(
            body.product.ok_or("expected the deleted product")?.id,
            Uuid::from(uuid)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_product_succeeds_with_null() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product().once().return_once(|_| Ok(None));

        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete(format!("http://example.com/products/{}", Uuid::now_v7()))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["message"], PRODUCT_DELETED);
        assert!(body["product"].is_null(), "expected product: null");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_malformed_uuid_returns_400() -> TestResult {
        let mut res = TestClient::delete("http://example.com/products/42")
            .send(&make_service(strict_products_mock()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "\"id\" must be a valid identifier");

        Ok(())
    }
}
