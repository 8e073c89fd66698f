//! Category Errors

use storefront_app::domain::categories::CategoriesServiceError;

use crate::errors::ApiError;

pub(crate) const CATEGORY_NOT_FOUND: &str = "Category not found";

pub(crate) fn into_api_error(error: CategoriesServiceError) -> ApiError {
    match error {
        CategoriesServiceError::AlreadyExists => ApiError::conflict("Category already exists"),
        CategoriesServiceError::NotFound => ApiError::not_found(CATEGORY_NOT_FOUND),
        CategoriesServiceError::InvalidData => ApiError::bad_request("Invalid category payload"),
        CategoriesServiceError::Sql(source) => {
            ApiError::internal_logged("category storage failed", &source)
        }
    }
}
