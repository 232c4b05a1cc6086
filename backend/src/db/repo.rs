use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::db::models::User;

pub const DEMO_USERS: &[&str] = &[
    "alice",
    "alicia",
    "bob",
    "bob_builder",
    "carol",
    "dave",
    "eve",
    "mallory",
    "trent",
];

// Seeded next to the users so that reading it through a search box is visible.
const DEMO_SECRETS: &[(i64, &str, &str)] = &[
    (1, "alice", "hunter2"),
    (2, "bob", "correct horse battery staple"),
    (3, "trent", "root:toor"),
];

pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS secrets (
            id INTEGER PRIMARY KEY,
            owner TEXT NOT NULL,
            secret TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts the demo users and secrets. Safe to run on every start.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for username in DEMO_USERS {
        sqlx::query("INSERT OR IGNORE INTO users (username) VALUES (?)")
            .bind(username)
            .execute(pool)
            .await?;
    }

    for (id, owner, secret) in DEMO_SECRETS {
        sqlx::query("INSERT OR IGNORE INTO secrets (id, owner, secret) VALUES (?, ?, ?)")
            .bind(id)
            .bind(owner)
            .bind(secret)
            .execute(pool)
            .await?;
    }

    Ok(())
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Substring search that pastes `term` straight into the SQL text.
///
/// WARNING: injectable on purpose. A quote in `term` ends the string literal
/// and everything after it is parsed as SQL. Kept only to demonstrate the
/// attack; see [`search_users_protected`] for the correct form.
pub async fn search_users_vulnerable(
    pool: &SqlitePool,
    term: &str,
) -> Result<Vec<User>, sqlx::Error> {
    let sql = "SELECT id, username FROM users WHERE username LIKE '%".to_owned() + term + "%'";
    debug!(%sql, "executing concatenated query");

    sqlx::query_as::<_, User>(&sql).fetch_all(pool).await
}

/// Case-insensitive substring search with `term` sent as a bound parameter.
/// The term can only ever be a value, never part of the statement.
pub async fn search_users_protected(
    pool: &SqlitePool,
    term: &str,
) -> Result<Vec<User>, sqlx::Error> {
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT id, username FROM users WHERE username LIKE '%' || ");
    qb.push_bind(escape_like(term));
    qb.push(" || '%' ESCAPE '\\'");
    debug!(sql = qb.sql(), "executing bound query");

    qb.build_query_as::<User>().fetch_all(pool).await
}

/// Escapes `LIKE` wildcards so the term matches literally under `ESCAPE '\'`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
