//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::RandomUserSource;
use crate::domain::entities::UserFields;
use crate::Error;
use async_trait::async_trait;
use serde::Deserialize;

///
/// Source of user fields backed by the remote random user generator.
///
pub struct RandomUserApi {
    client: reqwest::Client,
    endpoint: String,
}

impl RandomUserApi {
    /// Construct a source that will query the given endpoint.
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RandomUserSource for RandomUserApi {
    async fn fetch_one(&self) -> Result<UserFields, Error> {
        let res = self.client.get(&self.endpoint).send().await?;
        if !res.status().is_success() {
            return Err(Error::ExternalStatus(res.status().as_u16()));
        }
        let envelope: ResultsEnvelope = res.json().await?;
        let generated = envelope
            .results
            .into_iter()
            .next()
            .ok_or(Error::EmptyResults)?;
        Ok(UserFields {
            name: generated.name.first,
            age: generated.dob.age,
            email: generated.email,
        })
    }
}

//
// Wire shape of the remote service response; fields we have no use for
// are simply not declared.
//
#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    results: Vec<GeneratedUser>,
}

#[derive(Debug, Deserialize)]
struct GeneratedUser {
    name: GeneratedName,
    dob: GeneratedDob,
    email: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedName {
    first: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedDob {
    age: u32,
}
