use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

use crate::utils::database;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Role::Admin => String::from("admin"),
            Role::User => String::from("user"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("'{}' is not a valid Role", s)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_email_verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    EmailAlreadyInUse,
    UnexpectedError,
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, username, email, password_hash, role, address, phone)
        VALUES ($1, $2, $3, $4, 'user', $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.username)
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(payload.address)
    .bind(payload.phone)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::EmailAlreadyInUse;
        }
        tracing::error!("Error occurred while creating a user account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user by email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching users: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_password_by_email<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
    password_hash: String,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users
        SET
            password_hash = $2,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE email = $1
        RETURNING *
        ",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating user password: {}", err);
        Error::UnexpectedError
    })
}

pub fn is_admin(role: &Role) -> bool {
    *role == Role::Admin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: String::from("01HZX0000000000000000000"),
            username: String::from("bat"),
            email: String::from("bat@example.com"),
            password_hash: String::from("$2b$10$secret"),
            role: Role::User,
            address: None,
            phone: Some(String::from("99112233")),
            is_email_verified: false,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        };

        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("password_hash").is_none());
        assert_eq!(value["role"], "user");
        assert_eq!(value["email"], "bat@example.com");
    }

    #[test]
    fn roles_parse_from_lowercase_names() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert!("ADMIN".parse::<Role>().is_err());
        assert!(is_admin(&Role::Admin));
        assert!(!is_admin(&Role::User));
    }
}
