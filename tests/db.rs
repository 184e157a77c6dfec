mod common;

use axum::{http::StatusCode, Router};
use chrono::{Duration, Utc};
use common::{bearer, context, get, json_request, request, send, sign};
use food_delivery_backend::{
    app,
    modules::{
        auth::{repository::otp as otp_repository, service::otp},
        category::repository as category,
        menu_item::repository as menu_item,
        restaurant::repository as restaurant,
        user::repository::{self as user, Role, User},
    },
    types::database::DatabaseConnection,
};
use serde_json::{json, Value};
use sqlx::{types::BigDecimal, PgPool};
use std::str::FromStr;

struct Fixture {
    pool: PgPool,
    router: Router,
    token: String,
}

impl Fixture {
    async fn new(pool: PgPool) -> Self {
        let ctx = context(DatabaseConnection { pool: pool.clone() });
        let eater = seed_user(&pool, "eater@example.com", "not-a-hash").await;
        let token = sign(&ctx, &eater);
        Self {
            pool,
            router: app::router(ctx),
            token,
        }
    }

    async fn add(&self, menu_item_id: &str, quantity: Value) -> (StatusCode, Value) {
        send(
            self.router.clone(),
            json_request(
                "POST",
                "/api/cart",
                Some(&self.token),
                json!({ "menu_item_id": menu_item_id, "quantity": quantity }),
            ),
        )
        .await
    }

    async fn cart(&self) -> Value {
        let (status, body) = send(self.router.clone(), get("/api/cart", bearer(&self.token))).await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    async fn checkout(&self) -> (StatusCode, Value) {
        send(self.router.clone(), checkout_request(&self.token)).await
    }

    async fn place_order(&self) -> String {
        let (restaurant_id, category_id) = seed_catalog(&self.pool, "Grill").await;
        let item = seed_menu_item(&self.pool, &restaurant_id, &category_id, "Burger", "12.00").await;
        assert_eq!(self.add(&item.id, json!(1)).await.0, StatusCode::CREATED);

        let (status, body) = self.checkout().await;
        assert_eq!(status, StatusCode::CREATED);
        body["order"]["id"].as_str().unwrap().to_string()
    }
}

fn checkout_request(token: &str) -> axum::http::Request<axum::body::Body> {
    json_request(
        "POST",
        "/api/orders",
        Some(token),
        json!({ "delivery_address": "Peace Ave 12", "phone": "99112233" }),
    )
}

fn decimal(value: &Value) -> BigDecimal {
    match value.as_str() {
        Some(raw) => BigDecimal::from_str(raw).unwrap(),
        None => panic!("expected a decimal string, got {}", value),
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn seed_user(pool: &PgPool, email: &str, password_hash: &str) -> User {
    user::create(
        pool,
        user::CreateUserPayload {
            username: String::from("tester"),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            address: None,
            phone: None,
        },
    )
    .await
    .unwrap_or_else(|_| panic!("failed to seed user {}", email))
}

async fn seed_admin(pool: &PgPool) -> User {
    let admin = seed_user(pool, "admin@example.com", "not-a-hash").await;
    sqlx::query("UPDATE users SET role = 'admin' WHERE id = $1")
        .bind(&admin.id)
        .execute(pool)
        .await
        .unwrap();
    User {
        role: Role::Admin,
        ..admin
    }
}

async fn seed_catalog(pool: &PgPool, name: &str) -> (String, String) {
    let restaurant = restaurant::create(
        pool,
        restaurant::CreateRestaurantPayload {
            owner_user_id: None,
            name: name.to_string(),
            description: None,
            address: None,
            phone: None,
            image_path: None,
        },
    )
    .await
    .unwrap_or_else(|_| panic!("failed to seed restaurant {}", name));

    let category = category::create(pool, format!("{} specials", name))
        .await
        .unwrap_or_else(|_| panic!("failed to seed category for {}", name));

    (restaurant.id, category.id)
}

async fn seed_menu_item(
    pool: &PgPool,
    restaurant_id: &str,
    category_id: &str,
    name: &str,
    price: &str,
) -> menu_item::MenuItem {
    menu_item::create(
        pool,
        menu_item::CreateMenuItemPayload {
            restaurant_id: restaurant_id.to_string(),
            category_id: category_id.to_string(),
            name: name.to_string(),
            description: None,
            price: BigDecimal::from_str(price).unwrap(),
            image_path: None,
        },
    )
    .await
    .unwrap_or_else(|_| panic!("failed to seed menu item {}", name))
}

async fn seed_otp(pool: &PgPool, email: &str, code: &str, expires_in: Duration) {
    otp_repository::create(
        pool,
        otp_repository::CreateOtpPayload {
            email: email.to_string(),
            code_hash: otp::generate_hash(code),
            purpose: otp::RESET_PASSWORD.to_string(),
            expires_at: (Utc::now() + expires_in).naive_utc(),
        },
    )
    .await
    .unwrap_or_else(|_| panic!("failed to seed otp for {}", email));
}

#[sqlx::test]
async fn a_cart_that_was_never_created_is_empty(pool: PgPool) {
    let fixture = Fixture::new(pool).await;

    let cart = fixture.cart().await;

    assert_eq!(cart["cart_id"], Value::Null);
    assert_eq!(cart["items"], json!([]));
    assert_eq!(decimal(&cart["total_amount"]), BigDecimal::from(0));
}

#[sqlx::test]
async fn adding_an_item_twice_accumulates_and_refreshes_the_price(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let (restaurant_id, category_id) = seed_catalog(&fixture.pool, "Noodle Bar").await;
    let item = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Ramen", "4.50").await;

    let (status, first) = fixture.add(&item.id, json!(2)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["quantity"], 2);
    assert_eq!(decimal(&first["unit_price"]), BigDecimal::from_str("4.50").unwrap());

    menu_item::update_by_id(
        &fixture.pool,
        item.id.clone(),
        menu_item::UpdateMenuItemPayload {
            price: Some(BigDecimal::from_str("5.00").unwrap()),
            ..Default::default()
        },
    )
    .await
    .unwrap_or_else(|_| panic!("failed to reprice menu item"));

    let (status, second) = fixture.add(&item.id, json!("3")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["quantity"], 5);
    assert_eq!(decimal(&second["unit_price"]), BigDecimal::from_str("5.00").unwrap());

    let cart = fixture.cart().await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(decimal(&cart["total_amount"]), BigDecimal::from(25));
}

#[sqlx::test]
async fn accumulated_quantities_stop_at_the_column_limit(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let (restaurant_id, category_id) = seed_catalog(&fixture.pool, "Bulk").await;
    let item = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Rice", "1.00").await;

    assert_eq!(fixture.add(&item.id, json!(i32::MAX)).await.0, StatusCode::CREATED);

    let (status, body) = fixture.add(&item.id, json!(1)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "quantity is too large");

    let cart = fixture.cart().await;
    assert_eq!(cart["items"][0]["quantity"], i32::MAX);
}

#[sqlx::test]
async fn checkout_snapshots_the_cart_and_empties_it(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let (restaurant_id, category_id) = seed_catalog(&fixture.pool, "Deli").await;
    let soup = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Soup", "4.50").await;
    let pie = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Pie", "10.25").await;
    fixture.add(&soup.id, json!(2)).await;
    fixture.add(&pie.id, json!(1)).await;

    let (status, body) = fixture.checkout().await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order created");
    assert_eq!(body["order"]["status"], "pending");
    assert_eq!(body["order"]["phone"], "99112233");
    assert_eq!(body["order"]["restaurant_id"], restaurant_id.as_str());
    assert_eq!(decimal(&body["order"]["total_amount"]), BigDecimal::from_str("19.25").unwrap());

    let cart = fixture.cart().await;
    assert!(cart["cart_id"].is_string());
    assert_eq!(cart["items"], json!([]));

    let order_id = body["order"]["id"].as_str().unwrap();
    let (status, detail) = send(
        fixture.router.clone(),
        get(&format!("/api/orders/{}", order_id), bearer(&fixture.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["restaurant"]["id"], restaurant_id.as_str());

    let items = detail["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let sum = items
        .iter()
        .map(|item| decimal(&item["line_total"]))
        .fold(BigDecimal::from(0), |acc, line| acc + line);
    assert_eq!(sum, decimal(&detail["order"]["total_amount"]));
}

#[sqlx::test]
async fn checkout_with_an_unavailable_item_changes_nothing(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let (restaurant_id, category_id) = seed_catalog(&fixture.pool, "Cafe").await;
    let tea = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Tea", "2.00").await;
    let cake = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Cake", "6.00").await;
    fixture.add(&tea.id, json!(1)).await;
    fixture.add(&cake.id, json!(1)).await;
    menu_item::deactivate_by_id(&fixture.pool, cake.id.clone())
        .await
        .unwrap_or_else(|_| panic!("failed to deactivate menu item"));

    let (status, body) = fixture.checkout().await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Some items are not available");
    assert_eq!(count(&fixture.pool, "orders").await, 0);
    assert_eq!(count(&fixture.pool, "order_items").await, 0);
    assert_eq!(fixture.cart().await["items"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn checkout_rejects_carts_spanning_restaurants(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let (north, north_category) = seed_catalog(&fixture.pool, "North").await;
    let (south, south_category) = seed_catalog(&fixture.pool, "South").await;
    let dumpling = seed_menu_item(&fixture.pool, &north, &north_category, "Dumpling", "3.00").await;
    let taco = seed_menu_item(&fixture.pool, &south, &south_category, "Taco", "3.50").await;
    fixture.add(&dumpling.id, json!(1)).await;
    fixture.add(&taco.id, json!(1)).await;

    let (status, body) = fixture.checkout().await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cart must contain items from one restaurant only");
    assert_eq!(count(&fixture.pool, "orders").await, 0);
    assert_eq!(fixture.cart().await["items"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn concurrent_checkouts_of_one_cart_create_a_single_order(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let (restaurant_id, category_id) = seed_catalog(&fixture.pool, "Pizzeria").await;
    let pizza = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Pizza", "9.00").await;
    let rounds = 10;

    for round in 0..rounds {
        assert_eq!(fixture.add(&pizza.id, json!(1)).await.0, StatusCode::CREATED);

        let (first, second) = tokio::join!(
            send(fixture.router.clone(), checkout_request(&fixture.token)),
            send(fixture.router.clone(), checkout_request(&fixture.token)),
        );

        let mut statuses = vec![first.0.as_u16(), second.0.as_u16()];
        statuses.sort();
        assert_eq!(statuses, vec![201, 400], "round {}", round);

        let rejected = if first.0 == StatusCode::BAD_REQUEST {
            first.1
        } else {
            second.1
        };
        assert_eq!(rejected["message"], "Cart is empty", "round {}", round);
    }

    assert_eq!(count(&fixture.pool, "orders").await, rounds);
    assert_eq!(count(&fixture.pool, "order_items").await, rounds);
}

#[sqlx::test]
async fn cancelling_twice_reports_the_order_as_cancelled(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let order_id = fixture.place_order().await;
    let uri = format!("/api/orders/{}/cancel", order_id);

    let (status, body) = send(fixture.router.clone(), request("PUT", &uri, bearer(&fixture.token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order cancelled");
    assert_eq!(body["order"]["status"], "cancelled");

    let (status, body) = send(fixture.router.clone(), request("PUT", &uri, bearer(&fixture.token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Order is already cancelled");
}

#[sqlx::test]
async fn concurrent_payments_settle_an_order_once(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let order_id = fixture.place_order().await;
    let uri = format!("/api/payments/{}/pay", order_id);
    let pay = || json_request("POST", &uri, Some(&fixture.token), json!({ "method": "CARD" }));

    let (first, second) = tokio::join!(
        send(fixture.router.clone(), pay()),
        send(fixture.router.clone(), pay()),
    );

    let mut statuses = vec![first.0.as_u16(), second.0.as_u16()];
    statuses.sort();
    assert_eq!(statuses, vec![200, 400]);
    assert_eq!(count(&fixture.pool, "payments").await, 1);

    let (status, body) = send(
        fixture.router.clone(),
        get(&format!("/api/payments/{}", order_id), bearer(&fixture.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payment"]["status"], "paid");
    assert_eq!(body["order"]["status"], "confirmed");
}

#[sqlx::test]
async fn reset_codes_verify_once_and_expire(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let email = "eater@example.com";
    let verify = |code: &str| {
        json_request("POST", "/api/auth/verify-otp", None, json!({ "email": email, "otp": code }))
    };
    seed_otp(&fixture.pool, email, "123456", Duration::minutes(otp::VALIDITY_MINUTES)).await;

    let (status, body) = send(fixture.router.clone(), verify("654321")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid OTP");

    let (status, body) = send(fixture.router.clone(), verify("123456")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OTP verified");

    let (status, body) = send(fixture.router.clone(), verify("123456")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "OTP already used");

    seed_otp(&fixture.pool, email, "222222", Duration::minutes(-1)).await;
    let (status, body) = send(fixture.router.clone(), verify("222222")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "OTP expired");
}

#[sqlx::test]
async fn a_reset_code_changes_the_password_once(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let email = "eater@example.com";
    let reset = || {
        json_request(
            "POST",
            "/api/auth/reset-password",
            None,
            json!({ "email": email, "otp": "111111", "newPassword": "fresh-secret" }),
        )
    };
    seed_otp(&fixture.pool, email, "111111", Duration::minutes(otp::VALIDITY_MINUTES)).await;

    let (status, body) = send(fixture.router.clone(), reset()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password updated successfully");

    let (status, body) = send(
        fixture.router.clone(),
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": email, "password": "fresh-secret" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());

    let (status, body) = send(fixture.router.clone(), reset()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "OTP already used");
}

#[sqlx::test]
async fn forgot_password_answers_generically_when_mail_fails(pool: PgPool) {
    let fixture = Fixture::new(pool).await;

    let (status, body) = send(
        fixture.router.clone(),
        json_request(
            "POST",
            "/api/auth/forgot-password",
            None,
            json!({ "email": "eater@example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "If the email exists, OTP has been sent");
    assert_eq!(count(&fixture.pool, "otps").await, 1);
}

#[sqlx::test]
async fn soft_deleted_rows_leave_public_listings(pool: PgPool) {
    let fixture = Fixture::new(pool).await;
    let ctx = context(DatabaseConnection {
        pool: fixture.pool.clone(),
    });
    let admin = sign(&ctx, &seed_admin(&fixture.pool).await);
    let (restaurant_id, category_id) = seed_catalog(&fixture.pool, "Bistro").await;
    let item = seed_menu_item(&fixture.pool, &restaurant_id, &category_id, "Quiche", "7.00").await;

    let ids = |body: &Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|row| row["id"].as_str().unwrap().to_string())
            .collect()
    };
    let call = |method: &str, uri: &str, token: &str| {
        send(fixture.router.clone(), request(method, uri, bearer(token)))
    };

    let (status, body) = call("DELETE", &format!("/api/menu-items/{}", item.id), &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted (soft)");

    let (_, listed) = send(fixture.router.clone(), get("/api/menu-items", None)).await;
    assert!(!ids(&listed).contains(&item.id));
    let (status, _) = send(
        fixture.router.clone(),
        get(&format!("/api/menu-items/{}", item.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = call("GET", &format!("/api/menu-items/{}", item.id), &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_available"], false);

    let (status, _) = call("DELETE", &format!("/api/categories/{}", category_id), &admin).await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = call("GET", "/api/categories", &admin).await;
    assert!(!ids(&listed).contains(&category_id));
    let (_, listed) = call("GET", "/api/categories?all=true", &admin).await;
    assert!(ids(&listed).contains(&category_id));

    let (status, _) = call("DELETE", &format!("/api/restaurants/{}", restaurant_id), &admin).await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = send(fixture.router.clone(), get("/api/restaurants", None)).await;
    assert!(!ids(&listed).contains(&restaurant_id));
    let (_, listed) = call("GET", "/api/restaurants?all=true", &admin).await;
    assert!(ids(&listed).contains(&restaurant_id));
}
