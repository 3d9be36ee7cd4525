//
// Copyright (c) 2024 Nathan Fiedler
//
use anyhow::Error;
use std::cmp;
use std::fmt;

pub mod create_user;
pub mod fetch_all_users;
pub mod fetch_user;
pub mod import_users;
pub mod purge_users;
pub mod remove_user;
pub mod update_user;

/// `UseCase` is the interface by which all use cases are invoked.
pub trait UseCase<Type, Params> {
    fn call(&self, params: Params) -> Result<Type, Error>;
}

/// `NoParams` is the type for use cases that do not take arguments.
pub struct NoParams {}

impl fmt::Display for NoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoParams()")
    }
}

impl cmp::PartialEq for NoParams {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl cmp::Eq for NoParams {}
