//! Get Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    categories::{
        errors::{CATEGORY_NOT_FOUND, into_api_error},
        responses::CategoryResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Category Handler
///
/// Returns a category and the products filed under it.
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "The category"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed category identifier"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = category.uuid_or_400()?;

    let category = state
        .app
        .categories
        .get_category(category.into())
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| ApiError::not_found(CATEGORY_NOT_FOUND))?;

    Ok(Json(category.into()))
}
