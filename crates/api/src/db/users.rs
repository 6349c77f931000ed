//! User repository for database operations.
//!
//! Password hashes live in the same table but are never part of the `User`
//! domain type; the auth service fetches them through dedicated methods.

use sqlx::{PgConnection, PgPool};

use nuru_core::{Currency, Email, UserId, UserRole};

use super::{RepositoryError, conflict_on_unique};
use crate::models::User;

const USER_COLUMNS: &str = "id, name, email, phone, role, country, preferred_currency, \
                            created_at, updated_at";

/// Fields required to insert a new user row.
#[derive(Debug)]
pub struct NewUser<'n> {
    pub name: &'n str,
    pub email: &'n Email,
    pub phone: Option<&'n str>,
    pub password_hash: &'n str,
    pub role: UserRole,
    pub country: &'n str,
    pub preferred_currency: Currency,
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_user: NewUser<'_>) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users \
                 (name, email, phone, password_hash, role, country, preferred_currency) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(new_user.name)
        .bind(new_user.email.as_str())
        .bind(new_user.phone)
        .bind(new_user.password_hash)
        .bind(new_user.role)
        .bind(new_user.country)
        .bind(new_user.preferred_currency)
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "email already registered"))?;

        Ok(user)
    }

    /// Get a user and their password hash by email, for login.
    ///
    /// Returns `None` if no user has that email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct Row {
            #[sqlx(flatten)]
            user: User,
            password_hash: String,
        }

        let row = sqlx::query_as::<_, Row>(&format!(
            "SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| (r.user, r.password_hash)))
    }

    /// Get a user's password hash by ID, for password changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(&self, id: UserId) -> Result<Option<String>, RepositoryError> {
        let hash: Option<(String,)> =
            sqlx::query_as("SELECT password_hash FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(hash.map(|(h,)| h))
    }

    /// Replace a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_password(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $1, updated_at = NOW() WHERE id = $2")
                .bind(password_hash)
                .bind(id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// List customer accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_customers(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = 'customer' ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Count customer accounts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_customers(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = 'customer'")
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }
}

/// Lock a user's row for the duration of the surrounding transaction.
///
/// All cart and checkout mutations for a user take this lock first, which
/// serializes concurrent requests from the same account.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the user doesn't exist.
/// Returns `RepositoryError::Database` for other database errors.
pub(crate) async fn lock(conn: &mut PgConnection, id: UserId) -> Result<(), RepositoryError> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(conn)
        .await?;

    if row.is_none() {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

/// Bump a user's `updated_at` inside a transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub(crate) async fn touch(conn: &mut PgConnection, id: UserId) -> Result<(), RepositoryError> {
    sqlx::query("UPDATE users SET updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(())
}
