//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::User;
use crate::domain::repositories::EntityRepository;
use crate::domain::usecases::NoParams;
use anyhow::Error;
use std::sync::Arc;

///
/// Use case to retrieve every user record from the repository.
///
pub struct FetchAllUsers {
    records: Arc<dyn EntityRepository>,
}

impl FetchAllUsers {
    pub fn new(records: Arc<dyn EntityRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<Vec<User>, NoParams> for FetchAllUsers {
    fn call(&self, _params: NoParams) -> Result<Vec<User>, Error> {
        let users = self.records.list_users()?;
        Ok(users)
    }
}
