//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        users::{
            data::ProfileUpdate,
            errors::UsersServiceError,
            records::{UserRecord, UserUuid},
            repository::PgUsersRepository,
        },
        validation::Fields,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn get_user(&self, user: UserUuid) -> Result<Option<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn create_user(&self, profile: Fields) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .create_user(&mut tx, UserUuid::new(), profile)
            .await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn update_user(
        &self,
        update: ProfileUpdate,
    ) -> Result<Option<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .update_user(&mut tx, update.user, update.profile)
            .await?;

        tx.commit().await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieve a single user, if it exists.
    async fn get_user(&self, user: UserUuid) -> Result<Option<UserRecord>, UsersServiceError>;

    /// Creates a user with the given profile document.
    async fn create_user(&self, profile: Fields) -> Result<UserRecord, UsersServiceError>;

    /// Shallow-merges the patch into the stored profile.
    ///
    /// Returns `None` when no user matched.
    async fn update_user(
        &self,
        update: ProfileUpdate,
    ) -> Result<Option<UserRecord>, UsersServiceError>;
}
