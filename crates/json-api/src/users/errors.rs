//! User Errors

use storefront_app::domain::users::UsersServiceError;

use crate::errors::ApiError;

pub(crate) const USER_NOT_FOUND: &str = "User not found";

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::AlreadyExists => ApiError::conflict("User already exists"),
        UsersServiceError::NotFound => ApiError::not_found(USER_NOT_FOUND),
        UsersServiceError::InvalidData => ApiError::bad_request("Invalid user payload"),
        UsersServiceError::Sql(source) => {
            ApiError::internal_with_cause("user storage failed", &source)
        }
    }
}
