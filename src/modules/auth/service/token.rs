use crate::{
    modules::user::repository::{Role, User},
    types::AuthContext,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    pub id: String,
    pub role: Role,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    InvalidToken,
}

type Result<T> = std::result::Result<T, Error>;

pub fn sign(auth: &AuthContext, user: &User) -> Result<String> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        id: user.id.clone(),
        role: user.role,
        email: user.email.clone(),
        iat,
        exp: iat + auth.jwt_expires_in,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign token: {}", err);
        Error::UnexpectedError
    })
}

pub fn verify(auth: &AuthContext, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::debug!("Rejected token: {}", err);
        Error::InvalidToken
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_context(secret: &str) -> AuthContext {
        AuthContext {
            jwt_secret: secret.to_string(),
            jwt_expires_in: 3600,
        }
    }

    fn user(role: Role) -> User {
        User {
            id: String::from("01J0000000000000000000USER"),
            username: String::from("saraa"),
            email: String::from("saraa@example.com"),
            password_hash: String::new(),
            role,
            address: None,
            phone: None,
            is_email_verified: false,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn signed_token_carries_identity() {
        let ctx = auth_context("secret");
        let token = sign(&ctx, &user(Role::Admin)).unwrap();

        let claims = verify(&ctx, &token).unwrap();

        assert_eq!(claims.id, "01J0000000000000000000USER");
        assert_eq!(claims.email, "saraa@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = sign(&auth_context("secret"), &user(Role::User)).unwrap();

        assert_eq!(
            verify(&auth_context("other"), &token).unwrap_err(),
            Error::InvalidToken
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let ctx = AuthContext {
            jwt_secret: String::from("secret"),
            jwt_expires_in: -3600,
        };
        let token = sign(&ctx, &user(Role::User)).unwrap();

        assert_eq!(verify(&ctx, &token).unwrap_err(), Error::InvalidToken);
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            verify(&auth_context("secret"), "not-a-token").unwrap_err(),
            Error::InvalidToken
        );
    }
}
