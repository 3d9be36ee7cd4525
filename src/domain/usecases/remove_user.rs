//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::repositories::EntityRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

///
/// Use case to remove a user record from the repository.
///
/// Returns `true` if a matching user record was removed.
///
pub struct RemoveUser {
    records: Arc<dyn EntityRepository>,
}

impl RemoveUser {
    pub fn new(records: Arc<dyn EntityRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<bool, Params> for RemoveUser {
    fn call(&self, params: Params) -> Result<bool, Error> {
        let deleted = self.records.delete_user(&params.user_id)?;
        Ok(deleted)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of user to be removed.
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
