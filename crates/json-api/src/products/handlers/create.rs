//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::Deserialize;
use serde_json::Value;

use storefront_app::domain::{
    products::data::NewProduct,
    validation::{self, Fields, ValidationError},
};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductMessageResponse},
    state::State,
};

pub(crate) const PRODUCT_CREATED: &str = "Product created successfully";

/// Create Product Request
///
/// Fields keep their raw JSON values so each one can be reported by name.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    /// The product name
    #[salvo(schema(value_type = String))]
    pub name: Option<Value>,

    /// The product price; numeric strings are accepted
    #[salvo(schema(value_type = f64))]
    pub price: Option<Value>,

    /// Image reference
    #[salvo(schema(value_type = String))]
    pub image: Option<Value>,

    /// The product description
    #[salvo(schema(value_type = String))]
    pub desc: Option<Value>,

    /// The category the product belongs to
    #[salvo(schema(value_type = String, format = "uuid"))]
    pub category_id: Option<Value>,

    #[serde(flatten)]
    #[salvo(schema(skip))]
    pub unknown: Fields,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ValidationError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let product = NewProduct {
            name: validation::required_text("name", request.name.as_ref())?,
            price: validation::required_number("price", request.price.as_ref())?,
            image: validation::required_text("image", request.image.as_ref())?,
            description: validation::required_text("desc", request.desc.as_ref())?,
            category_uuid: validation::required_identifier(
                "categoryId",
                request.category_id.as_ref(),
            )?
            .into(),
        };

        validation::no_unknown_keys(&request.unknown)?;

        Ok(product)
    }
}

/// Create Product Handler
///
/// Expects `name`, `price`, `image`, `desc` and `categoryId`, checked in that
/// order; unknown keys are rejected afterwards. The product is also added to
/// its category's product list.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    request_body = CreateProductRequest,
    responses(
        (status_code = StatusCode::OK, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductMessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = NewProduct::try_from(req.json_body_or_400::<CreateProductRequest>().await?)?;

    let product = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?;

    Ok(Json(ProductMessageResponse {
        message: PRODUCT_CREATED.to_string(),
        data: product.into(),
    }))
}
