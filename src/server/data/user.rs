//! User data repository.
//!
//! Users are owned by an external account system; this repository only reads them to
//! resolve comment authors.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::{HashMap, HashSet};

use crate::server::model::comment::CommentAuthor;

/// Repository providing read access to user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the authors for a set of user ids in a single query.
    ///
    /// Duplicate ids are collapsed before querying. Ids without a matching user are
    /// absent from the returned map.
    ///
    /// # Arguments
    /// - `user_ids` - User ids referenced by comments
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Authors keyed by user id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_authors<I>(&self, user_ids: I) -> Result<HashMap<String, CommentAuthor>, DbErr>
    where
        I: IntoIterator<Item = String>,
    {
        let user_ids: HashSet<String> = user_ids.into_iter().collect();
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| (user.id.clone(), CommentAuthor::from_entity(user)))
            .collect())
    }
}
