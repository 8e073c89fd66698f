//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    categories::{errors::into_api_error, responses::CategoriesResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Category Index Handler
///
/// Returns all categories, oldest first.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_api_error)?;

    Ok(Json(CategoriesResponse {
        data: categories.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::domain::{
        categories::{CategoriesServiceError, MockCategoriesService, records::CategoryUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(repo, Router::with_path("categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories_with_products() -> TestResult {
        let first = CategoryUuid::new();
        let second = CategoryUuid::new();
        let product = ProductUuid::new();

        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories().once().return_once(move || {
            Ok(vec![
                make_category(first, vec![product]),
                make_category(second, vec![]),
            ])
        });

        repo.expect_get_category().never();
        repo.expect_create_category().never();

        let mut res = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await;

        let body: CategoriesResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.data.iter().map(|category| category.id).collect::<Vec<_>>(),
            vec![Uuid::from(first), Uuid::from(second)]
        );
        assert_eq!(
            body.data.first().ok_or("expected a category")?.products,
            vec![Uuid::from(product)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() {
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(|| Err(CategoriesServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_get_category().never();
        repo.expect_create_category().never();

        let res = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
