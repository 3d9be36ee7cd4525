//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::{User, UserFields};
use crate::domain::repositories::EntityRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;

///
/// Use case to create a record for a user and add to the repository.
///
pub struct CreateUser {
    records: Arc<dyn EntityRepository>,
}

impl CreateUser {
    pub fn new(records: Arc<dyn EntityRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<User, Params> for CreateUser {
    fn call(&self, params: Params) -> Result<User, Error> {
        let user = self.records.insert_user(params.fields)?;
        Ok(user)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Validated fields for the new user record.
    pub fields: UserFields,
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(user: {})", self.fields.name)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl cmp::Eq for Params {}
