//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::{UpdateOutcome, User, UserFields, UserPatch};
use crate::Error;
#[cfg(test)]
use mockall::{automock, predicate::*};
use uuid::Uuid;

///
/// Repository for entities.
///
#[cfg_attr(test, automock)]
pub trait EntityRepository: Send + Sync {
    /// Add a new user record to the collection.
    ///
    /// Returns the persisted record with its assigned identifier.
    fn insert_user(&self, fields: UserFields) -> Result<User, Error>;

    /// Add all of the given user records to the collection as one batch.
    ///
    /// Either every record is inserted or none are.
    fn insert_users(&self, fields: Vec<UserFields>) -> Result<usize, Error>;

    /// Retrieve every user record in the collection.
    fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Retrieve the user record with the given identifier.
    fn get_user(&self, user_id: &Uuid) -> Result<User, Error>;

    /// Modify the fields present in the patch, leaving the rest unchanged.
    ///
    /// An identifier without a matching record yields a zero count rather
    /// than an error.
    fn update_user(&self, user_id: &Uuid, patch: UserPatch) -> Result<UpdateOutcome, Error>;

    /// Delete the user record with the given identifier.
    ///
    /// Returns `true` if the record was removed, `false` otherwise.
    fn delete_user(&self, user_id: &Uuid) -> Result<bool, Error>;

    /// Delete every user record in the collection.
    ///
    /// Returns the number of records that were removed.
    fn delete_all_users(&self) -> Result<u64, Error>;
}
