//! SQL DDL for initializing the user/image storage.

/// SQLite schema with:
/// - `user.username` UNIQUE, the real guard against concurrent duplicate sign-ups
/// - `image.user_fk` nullable. The `REFERENCES` clause documents the relation;
///   connections run with foreign-key enforcement off, so a dangling value is
///   stored as given and `Storage::delete_user` performs the cascade
/// - index on `image(user_fk)` for the per-user image fetch
///
/// `user` is quoted since it is a keyword in most SQL dialects.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS image (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL,
    name TEXT NOT NULL,
    user_fk INTEGER NULL REFERENCES "user"(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_image_user_fk ON image(user_fk);
"#;
