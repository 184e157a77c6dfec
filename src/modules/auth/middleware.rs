use super::service::token::{self, Claims};
use crate::{modules::user, types::Context, utils::response};
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::Response,
    RequestPartsExt,
};
use axum_extra::{typed_header::TypedHeaderRejectionReason, TypedHeader};
use headers::{authorization::Bearer, Authorization};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize, Clone, Debug)]
pub struct Auth {
    pub user: Claims,
}

/// Raw bearer token of a request, without verifying it.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

async fn get_claims_from_request(parts: &mut Parts) -> Result<Claims, Response> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|err| {
            tracing::error!("Context missing from request extensions: {}", err);
            response::message(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        })?;

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|rejection| match rejection.reason() {
            TypedHeaderRejectionReason::Missing => {
                response::message(StatusCode::UNAUTHORIZED, "No token")
            }
            _ => response::message(StatusCode::UNAUTHORIZED, "Bad auth header"),
        })?;

    token::verify(&ctx.auth, bearer.token())
        .map_err(|_| response::message(StatusCode::UNAUTHORIZED, "Invalid token"))
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        get_claims_from_request(parts)
            .await
            .map(|user| Self { user })
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct AdminAuth {
    pub user: Claims,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let user = get_claims_from_request(parts).await?;

        if !user::repository::is_admin(&user.role) {
            return Err(response::message(StatusCode::FORBIDDEN, "Forbidden"));
        }

        Ok(Self { user })
    }
}

impl Auth {
    pub fn is_admin(&self) -> bool {
        user::repository::is_admin(&self.user.role)
    }
}
