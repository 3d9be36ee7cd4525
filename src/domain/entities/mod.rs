//
// Copyright (c) 2024 Nathan Fiedler
//
use serde::{Deserialize, Serialize};
use std::cmp;
use std::fmt;
use uuid::Uuid;

///
/// User entity.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the data source.
    pub id: Uuid,
    /// Name of the user, never empty.
    pub name: String,
    /// Age of the user in years, always positive.
    pub age: u32,
    /// Email address of the user.
    pub email: String,
}

impl User {
    pub fn new(id: Uuid, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            email: fields.email,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User({})", self.id)
    }
}

impl cmp::PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for User {}

///
/// Complete set of user fields that has passed validation but has not yet
/// been assigned an identifier by the data source.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    /// Name of the user, never empty.
    pub name: String,
    /// Age of the user in years, always positive.
    pub age: u32,
    /// Email address of the user.
    pub email: String,
}

impl fmt::Display for UserFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserFields({})", self.name)
    }
}

///
/// Raw request body for creating or updating a user, fields unchecked.
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserDraft {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
}

///
/// Partial update for a user record. A field that is absent from the patch
/// is an explicit signal to leave the stored value untouched.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Merge the patch into the given fields, returning the result.
    pub fn apply(&self, fields: UserFields) -> UserFields {
        UserFields {
            name: self.name.clone().unwrap_or(fields.name),
            age: self.age.unwrap_or(fields.age),
            email: self.email.clone().unwrap_or(fields.email),
        }
    }
}

///
/// Outcome of an update operation, as reported by the data source.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Number of records modified by the update.
    pub modified_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;

    #[test]
    fn test_user_equality() -> Result<(), Error> {
        let rosa1_json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Rosa",
            "age": 44,
            "email": "rosa.moreno@example.com"
        }"#;
        let rosa1: User = serde_json::from_str(rosa1_json)?;
        let rosa2_json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Rosa Maria",
            "age": 45,
            "email": "rosa.maria@example.com"
        }"#;
        let rosa2: User = serde_json::from_str(rosa2_json)?;
        assert!(rosa1 == rosa2);
        assert!(rosa2 == rosa1);
        let diego_json = r#"{
            "id": "936da01f-9abd-4d9d-80c7-02af85c822a8",
            "name": "Rosa",
            "age": 44,
            "email": "rosa.moreno@example.com"
        }"#;
        let diego: User = serde_json::from_str(diego_json)?;
        assert!(rosa1 != diego);

        Ok(())
    }

    #[test]
    fn test_patch_apply_partial() {
        let fields = UserFields {
            name: "Rosa".into(),
            age: 44,
            email: "rosa.moreno@example.com".into(),
        };
        let patch = UserPatch {
            name: None,
            age: Some(45),
            email: None,
        };
        let merged = patch.apply(fields);
        assert_eq!(merged.name, "Rosa");
        assert_eq!(merged.age, 45);
        assert_eq!(merged.email, "rosa.moreno@example.com");
    }

    #[test]
    fn test_patch_apply_empty() {
        let fields = UserFields {
            name: "Rosa".into(),
            age: 44,
            email: "rosa.moreno@example.com".into(),
        };
        let patch = UserPatch::default();
        let merged = patch.apply(fields.clone());
        assert_eq!(merged, fields);
    }
}
