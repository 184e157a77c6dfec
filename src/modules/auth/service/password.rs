const COST: u32 = 10;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn hash(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, COST))
        .await
        .map_err(|err| {
            tracing::error!("Password hashing task failed: {}", err);
            Error::UnexpectedError
        })?
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::UnexpectedError
        })
}

pub async fn verify(password: String, hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|err| {
            tracing::error!("Password verification task failed: {}", err);
            Error::UnexpectedError
        })?
        .map_err(|err| {
            tracing::error!("Failed to verify password: {}", err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let hashed = hash(String::from("secret1")).await.unwrap();

        assert_ne!(hashed, "secret1");
        assert!(verify(String::from("secret1"), hashed.clone()).await.unwrap());
        assert!(!verify(String::from("secret2"), hashed).await.unwrap());
    }
}
