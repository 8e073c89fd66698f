//! Update User Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::Deserialize;
use serde_json::Value;

use storefront_app::domain::{
    users::data::ProfileUpdate,
    validation::{self, Fields, ValidationError},
};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{
        errors::{USER_NOT_FOUND, into_api_error},
        responses::UserResponse,
    },
};

/// Update User Request
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateUserRequest {
    /// The user to update
    #[serde(rename = "_id")]
    #[salvo(schema(value_type = String, format = "uuid"))]
    pub id: Option<Value>,

    /// Profile fields to merge
    #[serde(flatten)]
    pub profile: Fields,
}

impl TryFrom<UpdateUserRequest> for ProfileUpdate {
    type Error = ValidationError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        let user = validation::required_identifier("_id", request.id.as_ref())?;

        Ok(ProfileUpdate::new(user.into(), request.profile))
    }
}

/// Update User Handler
///
/// Merges every top-level field except `_id` into the profile of the user
/// named by `_id` and returns the updated user.
#[endpoint(
    tags("users"),
    summary = "Update User Profile",
    request_body = UpdateUserRequest,
    responses(
        (status_code = StatusCode::OK, description = "The updated user"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or malformed user identifier"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure, with its cause as `error`"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update = ProfileUpdate::try_from(req.json_body_or_400::<UpdateUserRequest>().await?)?;

    let user = state
        .app
        .users
        .update_user(update)
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(user.into()))
}
