//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        surname TEXT NOT NULL,
        age INTEGER NOT NULL
    )
"#;

const INSERT_USER: &str = r#"
    INSERT INTO users (name, surname, age)
    VALUES ($1, $2, $3)
    RETURNING id
"#;

const UPSERT_USER: &str = r#"
    INSERT INTO users (id, name, surname, age)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO UPDATE
    SET name = EXCLUDED.name, surname = EXCLUDED.surname, age = EXCLUDED.age
"#;

const SELECT_USER_BY_ID: &str = r#"
    SELECT id, name, surname, age
    FROM users
    WHERE id = $1
"#;

const SELECT_ALL_USERS: &str = r#"
    SELECT id, name, surname, age
    FROM users
    ORDER BY id
"#;

const DELETE_USER_BY_ID: &str = "DELETE FROM users WHERE id = $1";

/// How `save` writes a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveStatement {
    /// New record; the database assigns the id
    Insert,
    /// Record already has an id
    Upsert(UserId),
}

fn save_statement(user: &User) -> SaveStatement {
    match user.id() {
        Some(id) => SaveStatement::Upsert(id),
        None => SaveStatement::Insert,
    }
}

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table when it is missing
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        Ok(())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let id: i64 = sqlx::query_scalar(INSERT_USER)
            .bind(user.name())
            .bind(user.surname())
            .bind(user.age())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert user: {}", e)))?;

        Ok(user.assign_id(UserId::new(id)))
    }

    async fn upsert(&self, id: UserId, user: User) -> Result<User, DomainError> {
        sqlx::query(UPSERT_USER)
            .bind(id.value())
            .bind(user.name())
            .bind(user.surname())
            .bind(user.age())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to save user {}: {}", id, e)))?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: User) -> Result<User, DomainError> {
        match save_statement(&user) {
            SaveStatement::Upsert(id) => self.upsert(id, user).await,
            SaveStatement::Insert => self.insert(user).await,
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(SELECT_USER_BY_ID)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(SELECT_ALL_USERS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError> {
        sqlx::query(DELETE_USER_BY_ID)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(())
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?;
    let surname: String = row
        .try_get("surname")
        .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?;
    let age: i32 = row
        .try_get("age")
        .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?;

    Ok(User::with_id(UserId::new(id), name, surname, age))
}
