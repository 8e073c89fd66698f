//! Product Errors

use storefront_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) const PRODUCT_NOT_FOUND: &str = "Product not found";

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => ApiError::conflict("Product already exists"),
        ProductsServiceError::NotFound => ApiError::not_found(PRODUCT_NOT_FOUND),
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => ApiError::bad_request("Invalid product payload"),
        ProductsServiceError::Sql(source) => {
            ApiError::internal_logged("product storage failed", &source)
        }
    }
}
