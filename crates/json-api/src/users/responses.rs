//! User Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use storefront_app::domain::users::records::UserRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub id: Uuid,

    /// Free-form profile fields
    #[salvo(schema(value_type = Object))]
    pub profile: Map<String, Value>,

    /// The date and time the user was created
    pub created_at: String,

    /// The date and time the profile was last updated
    pub updated_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            id: user.uuid.into(),
            profile: user.profile,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileResponse {
    /// Outcome of the request
    pub message: String,

    /// The requested user
    pub user: UserResponse,
}
