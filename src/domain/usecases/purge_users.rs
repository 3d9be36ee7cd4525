//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::repositories::EntityRepository;
use crate::domain::usecases::NoParams;
use anyhow::Error;
use std::sync::Arc;

///
/// Use case to remove every user record from the repository.
///
/// Returns the number of records that were removed.
///
pub struct PurgeUsers {
    records: Arc<dyn EntityRepository>,
}

impl PurgeUsers {
    pub fn new(records: Arc<dyn EntityRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<u64, NoParams> for PurgeUsers {
    fn call(&self, _params: NoParams) -> Result<u64, Error> {
        let deleted = self.records.delete_all_users()?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::super::UseCase;
    use super::*;
    use crate::domain::repositories::MockEntityRepository;

    #[test]
    fn test_purge_users_err() {
        // arrange
        let mut records = MockEntityRepository::new();
        records
            .expect_delete_all_users()
            .returning(|| Err(crate::Error::InternalError("oh no".into())));
        // act
        let usecase = PurgeUsers::new(Arc::new(records));
        let result = usecase.call(NoParams {});

        // assert
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "something bad happened: oh no"
        );
    }

    #[test]
    fn test_purge_users_ok() {
        // arrange
        let mut records = MockEntityRepository::new();
        records.expect_delete_all_users().returning(|| Ok(3));
        // act
        let usecase = PurgeUsers::new(Arc::new(records));
        let result = usecase.call(NoParams {});

        // assert
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 3);
    }
}
