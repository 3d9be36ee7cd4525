//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::User;
use crate::domain::repositories::EntityRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

///
/// Use case to retreive a user record from the repository.
///
pub struct FetchUser {
    records: Arc<dyn EntityRepository>,
}

impl FetchUser {
    pub fn new(records: Arc<dyn EntityRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<User, Params> for FetchUser {
    fn call(&self, params: Params) -> Result<User, Error> {
        let user = self.records.get_user(&params.user_id)?;
        Ok(user)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of user to be retrieved.
    pub user_id: Uuid,
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(user: {})", self.user_id)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl cmp::Eq for Params {}
