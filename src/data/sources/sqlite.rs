//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::EntityDataSource;
use crate::domain::entities::{UpdateOutcome, User, UserFields, UserPatch};
use crate::Error;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

///
/// Data source implementation backed by an SQLite database.
///
/// Records are stored document-style, one JSON body per row, keyed by an
/// identifier generated at insert time.
///
pub struct SQLiteEntityDataSource {
    // database connection
    conn: Arc<Mutex<Connection>>,
}

impl SQLiteEntityDataSource {
    /// Construct an SQLite-based data source that will be stored at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let conn = Connection::open(path)?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Construct an SQLite-based data source that will be memory resident.
    pub fn new_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl EntityDataSource for SQLiteEntityDataSource {
    fn insert_user(&self, fields: UserFields) -> Result<User, Error> {
        let db = self.conn.lock().unwrap();
        let user_id = Uuid::new_v4();
        let document = serde_json::to_string(&fields)?;
        let mut stmt = db.prepare("INSERT INTO user (id, document) VALUES (?, ?)")?;
        if stmt.execute([user_id.to_string(), document])? == 1 {
            Ok(User::new(user_id, fields))
        } else {
            // mysterious failure
            Err(Error::Database)
        }
    }

    fn insert_users(&self, fields: Vec<UserFields>) -> Result<usize, Error> {
        let mut db = self.conn.lock().unwrap();
        let count = fields.len();
        let tx = db.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO user (id, document) VALUES (?, ?)")?;
            for entry in fields {
                let document = serde_json::to_string(&entry)?;
                stmt.execute([Uuid::new_v4().to_string(), document])?;
            }
        }
        tx.commit()?;
        Ok(count)
    }

    fn list_users(&self) -> Result<Vec<User>, Error> {
        let db = self.conn.lock().unwrap();
        let mut stmt = db.prepare("SELECT id, document FROM user")?;
        let mut rows = stmt.query([])?;
        let mut users: Vec<User> = Vec::new();
        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let document: String = row.get(1)?;
            users.push(row_to_user(&id, &document)?);
        }
        Ok(users)
    }

    fn get_user(&self, user_id: &Uuid) -> Result<User, Error> {
        let db = self.conn.lock().unwrap();
        let mut stmt = db.prepare("SELECT id, document FROM user WHERE id = ?")?;
        let mut rows = stmt.query([user_id.to_string()])?;
        if let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let document: String = row.get(1)?;
            row_to_user(&id, &document)
        } else {
            Err(Error::UserNotFound(user_id.to_string()))
        }
    }

    fn update_user(&self, user_id: &Uuid, patch: UserPatch) -> Result<UpdateOutcome, Error> {
        let db = self.conn.lock().unwrap();
        let document: Option<String> = {
            let mut stmt = db.prepare("SELECT document FROM user WHERE id = ?")?;
            let mut rows = stmt.query([user_id.to_string()])?;
            match rows.next()? {
                Some(row) => Some(row.get(0)?),
                None => None,
            }
        };
        if let Some(document) = document {
            let fields: UserFields = serde_json::from_str(&document)?;
            let merged = serde_json::to_string(&patch.apply(fields))?;
            let mut stmt = db.prepare("UPDATE user SET document = ? WHERE id = ?")?;
            let modified = stmt.execute([merged, user_id.to_string()])?;
            Ok(UpdateOutcome {
                modified_count: modified as u64,
            })
        } else {
            // no matching record is not an error, only a zero count
            Ok(UpdateOutcome { modified_count: 0 })
        }
    }

    fn delete_user(&self, user_id: &Uuid) -> Result<bool, Error> {
        let db = self.conn.lock().unwrap();
        // need 'RETURNING' otherwise the query rows will be empty
        let mut stmt = db.prepare("DELETE FROM user WHERE id = ? RETURNING id")?;
        let mut rows = stmt.query([user_id.to_string()])?;
        if rows.next()?.is_some() {
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn delete_all_users(&self) -> Result<u64, Error> {
        let db = self.conn.lock().unwrap();
        let deleted = db.execute("DELETE FROM user", ())?;
        Ok(deleted as u64)
    }
}

//
// Turn a database row back into a user entity.
//
fn row_to_user(id: &str, document: &str) -> Result<User, Error> {
    let fields: UserFields = serde_json::from_str(document)?;
    let user_id =
        Uuid::parse_str(id).map_err(|e| Error::InternalError(format!("bad record id: {}", e)))?;
    Ok(User::new(user_id, fields))
}

//
// Create the database tables if they do not exist.
//
fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS user (
            id TEXT PRIMARY KEY,
            document TEXT NOT NULL
        )",
        (),
    )?;
    Ok(())
}
