//! Create Category Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::Deserialize;
use serde_json::Value;

use storefront_app::domain::{
    categories::data::NewCategory,
    validation::{self, Fields, ValidationError},
};

use crate::{
    categories::{errors::into_api_error, responses::CategoryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Category Request
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    /// The category name
    #[salvo(schema(value_type = String))]
    pub name: Option<Value>,

    #[serde(flatten)]
    #[salvo(schema(skip))]
    pub unknown: Fields,
}

impl TryFrom<CreateCategoryRequest> for NewCategory {
    type Error = ValidationError;

    fn try_from(request: CreateCategoryRequest) -> Result<Self, Self::Error> {
        let name = validation::required_text("name", request.name.as_ref())?;

        validation::no_unknown_keys(&request.unknown)?;

        Ok(NewCategory { name })
    }
}

/// Create Category Handler
///
/// Creates a category with no products.
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    request_body = CreateCategoryRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid category payload"),
        (status_code = StatusCode::CONFLICT, description = "Category already exists"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = NewCategory::try_from(req.json_body_or_400::<CreateCategoryRequest>().await?)?;

    let category = state
        .app
        .categories
        .create_category(category)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/categories/{}", category.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(category.into()))
}
