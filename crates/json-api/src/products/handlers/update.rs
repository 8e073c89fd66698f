//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::Deserialize;
use serde_json::Value;

use storefront_app::domain::{
    products::data::ProductUpdate,
    validation::{self, ValidationError},
};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{PRODUCT_NOT_FOUND, into_api_error},
        responses::ProductMessageResponse,
    },
    state::State,
};

pub(crate) const PRODUCT_UPDATED: &str = "Product updated successfully";

/// Update Product Request
///
/// Every field is optional. Keys outside the product fields are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    /// New product name
    #[salvo(schema(value_type = Option<String>))]
    pub name: Option<Value>,

    /// New price; numeric strings are accepted
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Value>,

    /// New image reference
    #[salvo(schema(value_type = Option<String>))]
    pub image: Option<Value>,

    /// New description
    #[salvo(schema(value_type = Option<String>))]
    pub desc: Option<Value>,

    /// New category
    #[salvo(schema(value_type = Option<String>, format = "uuid"))]
    pub category_id: Option<Value>,
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = ValidationError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductUpdate {
            name: validation::optional_text("name", request.name.as_ref())?,
            price: validation::optional_number("price", request.price.as_ref())?,
            image: validation::optional_text("image", request.image.as_ref())?,
            description: validation::optional_text("desc", request.desc.as_ref())?,
            category_uuid: validation::optional_identifier(
                "categoryId",
                request.category_id.as_ref(),
            )?
            .map(Into::into),
        })
    }
}

/// Update Product Handler
///
/// Replaces any subset of `name`, `price`, `image`, `desc` and `categoryId`.
/// Only value types are checked; moving a product to another category does
/// not update either category's product list.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    request_body = UpdateProductRequest,
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductMessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.uuid_or_400()?;
    let update = ProductUpdate::try_from(req.json_body_or_400::<UpdateProductRequest>().await?)?;

    let product = state
        .app
        .products
        .update_product(product.into(), update)
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| ApiError::not_found(PRODUCT_NOT_FOUND))?;

    Ok(Json(ProductMessageResponse {
        message: PRODUCT_UPDATED.to_string(),
        data: product.into(),
    }))
}
