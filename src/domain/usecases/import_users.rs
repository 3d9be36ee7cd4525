//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::UserFields;
use crate::domain::repositories::EntityRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;

///
/// Use case to add a batch of user records to the repository in one write.
///
/// Either the entire batch is persisted or none of it is.
///
pub struct ImportUsers {
    records: Arc<dyn EntityRepository>,
}

impl ImportUsers {
    pub fn new(records: Arc<dyn EntityRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<usize, Params> for ImportUsers {
    fn call(&self, params: Params) -> Result<usize, Error> {
        let imported = self.records.insert_users(params.fields)?;
        Ok(imported)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Validated fields for each of the new user records.
    pub fields: Vec<UserFields>,
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(users: {})", self.fields.len())
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl cmp::Eq for Params {}
