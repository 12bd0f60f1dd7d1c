//! SQLite Storage Gateway
//!
//! [`SqliteGateway`] opens one fresh connection per request. The returned
//! [`SqliteStorage`] handle implements the repository traits and must be
//! released with [`SqliteStorage::close`]; dropping it also releases the
//! connection. Concurrent handles on the same file are arbitrated by
//! SQLite's own locking.

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use kernel::id::{EntryId, UserId};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tokio::sync::Mutex;

use crate::domain::entity::{
    entry::{Entry, NewEntry},
    user::{NewUser, User},
};
use crate::domain::repository::{EntryRepository, UserRepository};
use crate::error::{BlogError, BlogResult};

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at TEXT NOT NULL,
        name TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

const CREATE_ENTRIES: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES users(id),
        title TEXT NOT NULL,
        body TEXT NOT NULL
    )
"#;

const CREATE_ENTRIES_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS entries_user_id ON entries (user_id)";

/// Opens per-request storage handles
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    options: SqliteConnectOptions,
    open_handles: Arc<AtomicUsize>,
}

impl SqliteGateway {
    pub fn new(options: SqliteConnectOptions) -> Self {
        Self {
            options: options.create_if_missing(true),
            open_handles: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Parse a `sqlite:` URL
    pub fn from_url(url: &str) -> BlogResult<Self> {
        let options = SqliteConnectOptions::from_str(url).map_err(BlogError::StorageUnavailable)?;
        Ok(Self::new(options))
    }

    /// Open a fresh connection and make sure the tables exist
    pub async fn open(&self) -> BlogResult<SqliteStorage> {
        let conn = self
            .options
            .connect()
            .await
            .map_err(BlogError::StorageUnavailable)?;

        let storage = SqliteStorage {
            conn: Mutex::new(conn),
            _lease: HandleLease::acquire(&self.open_handles),
        };

        if let Err(e) = storage.ensure_tables().await {
            if let Err(close_err) = storage.close().await {
                tracing::warn!(error = %close_err, "Failed to close storage after schema error");
            }
            return Err(BlogError::StorageUnavailable(e));
        }

        Ok(storage)
    }

    /// Number of handles opened by this gateway and not yet released
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }
}

/// Counts a handle as open until dropped
#[derive(Debug)]
struct HandleLease(Arc<AtomicUsize>);

impl HandleLease {
    fn acquire(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter.clone())
    }
}

impl Drop for HandleLease {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// One request's storage handle
pub struct SqliteStorage {
    conn: Mutex<SqliteConnection>,
    _lease: HandleLease,
}

impl SqliteStorage {
    async fn ensure_tables(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.conn.lock().await;
        for statement in [CREATE_USERS, CREATE_ENTRIES, CREATE_ENTRIES_USER_INDEX] {
            sqlx::query(statement).execute(&mut *conn).await?;
        }
        Ok(())
    }

    /// Close the connection. Consumes the handle, so it runs at most once.
    pub async fn close(self) -> BlogResult<()> {
        self.conn
            .into_inner()
            .close()
            .await
            .map_err(BlogError::StorageUnavailable)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    created_at: DateTime<Utc>,
    name: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::from_i64(self.id),
            created_at: self.created_at,
            name: self.name,
            password: self.password,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EntryRow {
    id: i64,
    created_at: DateTime<Utc>,
    user_id: i64,
    title: String,
    body: String,
}

impl EntryRow {
    fn into_entry(self) -> Entry {
        Entry {
            id: EntryId::from_i64(self.id),
            created_at: self.created_at,
            user_id: UserId::from_i64(self.user_id),
            title: self.title,
            body: self.body,
        }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteStorage {
    async fn create_user(&self, user: &NewUser) -> BlogResult<User> {
        let mut conn = self.conn.lock().await;

        let result = sqlx::query("INSERT INTO users (created_at, name, password) VALUES (?, ?, ?)")
            .bind(user.created_at)
            .bind(&user.name)
            .bind(&user.password)
            .execute(&mut *conn)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    BlogError::UserNameTaken
                }
                other => BlogError::QueryFailed(other),
            })?;

        Ok(user
            .clone()
            .into_user(UserId::from_i64(result.last_insert_rowid())))
    }

    async fn find_by_credentials(&self, name: &str, password: &str) -> BlogResult<Option<User>> {
        let mut conn = self.conn.lock().await;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, created_at, name, password
            FROM users
            WHERE name = ? AND password = ?
            "#,
        )
        .bind(name)
        .bind(password)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_name(&self, name: &str) -> BlogResult<Option<User>> {
        let mut conn = self.conn.lock().await;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, created_at, name, password
            FROM users
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_name(&self, name: &str) -> BlogResult<bool> {
        let mut conn = self.conn.lock().await;

        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE name = ?)")
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;

        Ok(exists != 0)
    }
}

// ============================================================================
// Entry Repository Implementation
// ============================================================================

impl EntryRepository for SqliteStorage {
    async fn create_entry(&self, entry: &NewEntry) -> BlogResult<Entry> {
        let mut conn = self.conn.lock().await;

        let result = sqlx::query(
            "INSERT INTO entries (created_at, user_id, title, body) VALUES (?, ?, ?, ?)",
        )
        .bind(entry.created_at())
        .bind(entry.user_id().get())
        .bind(entry.title())
        .bind(entry.body())
        .execute(&mut *conn)
        .await?;

        Ok(entry
            .clone()
            .into_entry(EntryId::from_i64(result.last_insert_rowid())))
    }

    async fn list_by_user(&self, user_id: UserId) -> BlogResult<Vec<Entry>> {
        let mut conn = self.conn.lock().await;

        let rows = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, created_at, user_id, title, body
            FROM entries
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id.get())
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(EntryRow::into_entry).collect())
    }
}
