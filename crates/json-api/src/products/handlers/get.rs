//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{PRODUCT_NOT_FOUND, into_api_error},
        responses::ProductResponse,
    },
    state::State,
};

/// Get Product Handler
///
/// Returns a product with its category embedded.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "The product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product identifier"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.uuid_or_400()?;

    let product = state
        .app
        .products
        .get_product(product.into())
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| ApiError::not_found(PRODUCT_NOT_FOUND))?;

    Ok(Json(product.into()))
}
