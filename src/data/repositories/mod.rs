//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::EntityDataSource;
use crate::domain::entities::{UpdateOutcome, User, UserFields, UserPatch};
use crate::domain::repositories::EntityRepository;
use crate::Error;
use std::sync::Arc;
use uuid::Uuid;

///
/// Default implementation of the entity repository.
///
pub struct EntityRepositoryImpl {
    datasource: Arc<dyn EntityDataSource>,
}

impl EntityRepositoryImpl {
    pub fn new(datasource: Arc<dyn EntityDataSource>) -> Self {
        Self { datasource }
    }
}

impl EntityRepository for EntityRepositoryImpl {
    fn insert_user(&self, fields: UserFields) -> Result<User, Error> {
        self.datasource.insert_user(fields)
    }

    fn insert_users(&self, fields: Vec<UserFields>) -> Result<usize, Error> {
        self.datasource.insert_users(fields)
    }

    fn list_users(&self) -> Result<Vec<User>, Error> {
        self.datasource.list_users()
    }

    fn get_user(&self, user_id: &Uuid) -> Result<User, Error> {
        self.datasource.get_user(user_id)
    }

    fn update_user(&self, user_id: &Uuid, patch: UserPatch) -> Result<UpdateOutcome, Error> {
        self.datasource.update_user(user_id, patch)
    }

    fn delete_user(&self, user_id: &Uuid) -> Result<bool, Error> {
        self.datasource.delete_user(user_id)
    }

    fn delete_all_users(&self) -> Result<u64, Error> {
        self.datasource.delete_all_users()
    }
}
