//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::{UpdateOutcome, User, UserFields, UserPatch};
use crate::Error;
use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::sync::Arc;
use uuid::Uuid;

mod randomuser;
mod sqlite;

pub use randomuser::RandomUserApi;

///
/// Data source for entity objects.
///
#[cfg_attr(test, automock)]
pub trait EntityDataSource: Send + Sync {
    /// Insert a new user record with a freshly assigned identifier.
    fn insert_user(&self, fields: UserFields) -> Result<User, Error>;

    /// Insert all of the given user records in a single batch, such that
    /// either every record is persisted or none are.
    fn insert_users(&self, fields: Vec<UserFields>) -> Result<usize, Error>;

    /// Retrieve every user record.
    fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Retrieve the user record with the given identifier.
    fn get_user(&self, user_id: &Uuid) -> Result<User, Error>;

    /// Modify the fields present in the patch, leaving the rest unchanged.
    ///
    /// An identifier without a matching record yields a zero count.
    fn update_user(&self, user_id: &Uuid, patch: UserPatch) -> Result<UpdateOutcome, Error>;

    /// Delete the user record with the given identifier.
    ///
    /// Returns `true` if the record was removed, `false` otherwise.
    fn delete_user(&self, user_id: &Uuid) -> Result<bool, Error>;

    /// Delete every user record, returning the number removed.
    fn delete_all_users(&self) -> Result<u64, Error>;
}

///
/// Source of randomly generated user records from a remote service.
///
#[async_trait]
pub trait RandomUserSource: Send + Sync {
    /// Retrieve a single randomly generated set of user fields.
    async fn fetch_one(&self) -> Result<UserFields, Error>;
}

///
/// Type for creating the desired type of data source.
///
pub enum DataSourceType {
    /// SQLite resident in memory, not persistent.
    SqliteMemory,
    /// SQLite stored persistently to the given file path.
    SqliteFile(String),
}

///
/// Construct a data source appripriate for the given type.
///
pub fn build_data_source(dstype: DataSourceType) -> Result<Arc<dyn EntityDataSource>, Error> {
    match dstype {
        DataSourceType::SqliteMemory => {
            let source: Arc<dyn EntityDataSource> =
                Arc::new(sqlite::SQLiteEntityDataSource::new_in_memory()?);
            Ok(source)
        }
        DataSourceType::SqliteFile(path) => {
            let source: Arc<dyn EntityDataSource> =
                Arc::new(sqlite::SQLiteEntityDataSource::new(path)?);
            Ok(source)
        }
    }
}
