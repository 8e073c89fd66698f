//! Users Data

use crate::domain::{users::records::UserUuid, validation::Fields};

/// Keys that belong to the record rather than the profile document.
const RESERVED_KEYS: [&str; 4] = ["_id", "id", "createdAt", "updatedAt"];

/// A shallow patch to a user's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub user: UserUuid,

    /// Top-level keys to overwrite in the stored profile.
    pub profile: Fields,
}

impl ProfileUpdate {
    /// Build a patch for `user` from the submitted fields.
    ///
    /// Identity and timestamp keys are dropped; every other key becomes part
    /// of the patch.
    #[must_use]
    pub fn new(user: UserUuid, mut profile: Fields) -> Self {
        profile.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Self { user, profile }
    }
}
