#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use food_delivery_backend::{
    modules::{
        auth::service::token,
        order::repository::OrderStatus,
        user::repository::{Role, User},
    },
    types::{
        database::DatabaseConnection, AppContext, AppEnvironment, AuthContext, Context,
        MailContext, PaymentContext, StorageContext,
    },
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn context(db_conn: DatabaseConnection) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 8000,
            url: String::from("http://127.0.0.1:8000"),
        },
        db_conn,
        auth: AuthContext {
            jwt_secret: String::from("test-secret"),
            jwt_expires_in: 3600,
        },
        // Nothing listens here, so every mail delivery fails.
        mail: MailContext {
            host: String::from("127.0.0.1"),
            sender: String::from("Food Delivery <no-reply@example.com>"),
            user: String::from("mailer"),
            password: String::from("secret"),
        },
        storage: StorageContext {
            upload_dir: std::env::temp_dir(),
        },
        payment: PaymentContext {
            order_paid_status: OrderStatus::Confirmed,
        },
    })
}

pub fn sign(ctx: &Context, user: &User) -> String {
    match token::sign(&ctx.auth, user) {
        Ok(token) => token,
        Err(err) => panic!("failed to sign test token: {:?}", err),
    }
}

pub fn token_for(ctx: &Context, role: Role) -> String {
    let user = User {
        id: String::from("01J0000000000000000000USER"),
        username: String::from("tester"),
        email: String::from("tester@example.com"),
        password_hash: String::new(),
        role,
        address: None,
        phone: None,
        is_email_verified: false,
        created_at: Utc::now().naive_utc(),
        updated_at: None,
    };

    sign(ctx, &user)
}

pub fn bearer(token: &str) -> Option<String> {
    Some(format!("Bearer {}", token))
}

pub async fn send(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn request(method: &str, uri: &str, authorization: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(authorization) = authorization {
        builder = builder.header(header::AUTHORIZATION, authorization);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn get(uri: &str, authorization: Option<String>) -> Request<Body> {
    request("GET", uri, authorization)
}
