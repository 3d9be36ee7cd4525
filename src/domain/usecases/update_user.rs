//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::{UpdateOutcome, UserPatch};
use crate::domain::repositories::EntityRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

///
/// Use case to modify some of the fields of a user record.
///
/// The outcome reports how many records were modified; an identifier that
/// matches no record yields a zero count rather than an error.
///
pub struct UpdateUser {
    records: Arc<dyn EntityRepository>,
}

impl UpdateUser {
    pub fn new(records: Arc<dyn EntityRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<UpdateOutcome, Params> for UpdateUser {
    fn call(&self, params: Params) -> Result<UpdateOutcome, Error> {
        let outcome = self.records.update_user(&params.user_id, params.patch)?;
        Ok(outcome)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of user to be updated.
    pub user_id: Uuid,
    /// Fields to be modified.
    pub patch: UserPatch,
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(user: {})", self.user_id)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id && self.patch == other.patch
    }
}

impl cmp::Eq for Params {}
