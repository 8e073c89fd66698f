//! User Records

use jiff::Timestamp;

use crate::{domain::validation::Fields, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uuid: UserUuid,

    /// Free-form profile document. Always a JSON object.
    pub profile: Fields,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
