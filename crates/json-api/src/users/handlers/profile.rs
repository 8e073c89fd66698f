//! User Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::Deserialize;
use serde_json::Value;

use storefront_app::domain::{
    users::records::UserUuid,
    validation::{self, ValidationError},
};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{
        errors::{USER_NOT_FOUND, into_api_error},
        responses::ProfileResponse,
    },
};

pub(crate) const PROFILE_FOUND: &str = "User profile retrieved successfully";

/// User Profile Request
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ProfileRequest {
    /// The user to look up
    #[salvo(schema(value_type = String, format = "uuid"))]
    pub id: Option<Value>,
}

impl TryFrom<ProfileRequest> for UserUuid {
    type Error = ValidationError;

    fn try_from(request: ProfileRequest) -> Result<Self, Self::Error> {
        Ok(validation::required_identifier("id", request.id.as_ref())?.into())
    }
}

/// User Profile Handler
///
/// Looks up the user named by the `id` in the request body.
#[endpoint(
    tags("users"),
    summary = "Get User Profile",
    request_body = ProfileRequest,
    responses(
        (status_code = StatusCode::OK, description = "The user's profile"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or malformed user identifier"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure, with its cause as `error`"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProfileResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = UserUuid::try_from(req.json_body_or_400::<ProfileRequest>().await?)?;

    let user = state
        .app
        .users
        .get_user(user)
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(ProfileResponse {
        message: PROFILE_FOUND.to_string(),
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::{
        errors::MessageResponse,
        test_helpers::{make_user, strict_users_mock, users_service},
    };

    use super::*;

    fn make_service(repo: MockUsersService) -> Service {
        users_service(repo, Router::with_path("user/profile").post(handler))
    }

    #[tokio::test]
    async fn test_profile_success() -> TestResult {
        let uuid = UserUuid::new();

        let mut repo = MockUsersService::new();

        repo.expect_get_user()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(Some(make_user(uuid))));

        repo.expect_create_user().never();
        repo.expect_update_user().never();

        let mut res = TestClient::post("http://example.com/user/profile")
            .json(&json!({ "id": uuid.to_string() }))
            .send(&make_service(repo))
            .await;

        let body: ProfileResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, PROFILE_FOUND);
        assert_eq!(body.user.id, Uuid::from(uuid));
        assert_eq!(body.user.profile.get("displayName"), Some(&json!("Ada")));

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_not_found() -> TestResult {
        let mut repo = MockUsersService::new();

        repo.expect_get_user().once().return_once(|_| Ok(None));

        repo.expect_create_user().never();
        repo.expect_update_user().never();

        let mut res = TestClient::post("http://example.com/user/profile")
            .json(&json!({ "id": Uuid::now_v7().to_string() }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, USER_NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_malformed_id_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/user/profile")
            .json(&json!({ "id": "abc" }))
            .send(&make_service(strict_users_mock()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "\"id\" must be a valid identifier");

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_missing_id_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/user/profile")
            .json(&json!({ "name": "Ada" }))
            .send(&make_service(strict_users_mock()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "\"id\" is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_storage_error_returns_500() -> TestResult {
        let mut repo = MockUsersService::new();

        repo.expect_get_user()
            .once()
            .return_once(|_| Err(UsersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_create_user().never();
        repo.expect_update_user().never();

        let mut res = TestClient::post("http://example.com/user/profile")
            .json(&json!({ "id": Uuid::now_v7().to_string() }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Internal server error");
        assert_eq!(body.error, Some(sqlx::Error::PoolTimedOut.to_string()));

        Ok(())
    }
}
