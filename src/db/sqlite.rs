use crate::db::models::{DbImage, DbUser, NewImage, NewUser};
use crate::db::schema::SQLITE_INIT;
use crate::error::ImagebookError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Result of an insert that may lose the username race.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertUserOutcome {
    Created(DbUser),
    UsernameTaken,
}

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool on `database_url`, creating the file if needed, and apply the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, ImagebookError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_opts)
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ImagebookError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert an image. `user_fk` is stored as given; it is not checked against `user`.
    pub async fn insert_image(&self, image: NewImage) -> Result<DbImage, ImagebookError> {
        let row = sqlx::query_as::<_, DbImage>(
            r#"INSERT INTO image (url, name, user_fk) VALUES (?, ?, ?)
               RETURNING id, url, name, user_fk"#,
        )
        .bind(image.url)
        .bind(image.name)
        .bind(image.user_fk)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_images(&self) -> Result<Vec<DbImage>, ImagebookError> {
        let rows = sqlx::query_as::<_, DbImage>(
            "SELECT id, url, name, user_fk FROM image ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_image_by_id(&self, id: i64) -> Result<Option<DbImage>, ImagebookError> {
        let row = sqlx::query_as::<_, DbImage>(
            "SELECT id, url, name, user_fk FROM image WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_images_for_user(&self, user_id: i64) -> Result<Vec<DbImage>, ImagebookError> {
        let rows = sqlx::query_as::<_, DbImage>(
            "SELECT id, url, name, user_fk FROM image WHERE user_fk = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a user whose password is already hashed. The UNIQUE index on
    /// `username` decides the race between concurrent identical sign-ups.
    pub async fn insert_user(&self, user: NewUser) -> Result<InsertUserOutcome, ImagebookError> {
        let res = sqlx::query_as::<_, DbUser>(
            r#"INSERT INTO "user" (username, password) VALUES (?, ?)
               RETURNING id, username, password"#,
        )
        .bind(user.username)
        .bind(user.password_hash)
        .fetch_one(&self.pool)
        .await;

        match res {
            Ok(row) => Ok(InsertUserOutcome::Created(row)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(InsertUserOutcome::UsernameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DbUser>, ImagebookError> {
        let row = sqlx::query_as::<_, DbUser>(
            r#"SELECT id, username, password FROM "user" WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<DbUser>, ImagebookError> {
        let row = sqlx::query_as::<_, DbUser>(
            r#"SELECT id, username, password FROM "user" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a user and every image it owns in one transaction. Foreign-key
    /// enforcement is off, so this is where the cascade happens; it also sweeps
    /// images whose `user_fk` was dangling before the user existed.
    /// Returns false when no such user exists.
    pub async fn delete_user(&self, id: i64) -> Result<bool, ImagebookError> {
        let mut tx = self.pool.begin().await?;

        let images = sqlx::query("DELETE FROM image WHERE user_fk = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let users = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        debug!(user_id = id, images, "deleted user");
        Ok(users > 0)
    }
}
