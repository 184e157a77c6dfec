pub use crate::utils::database;
use crate::modules::order::repository::OrderStatus;
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;
use uri_parser::parse_uri;
use urlencoding::decode;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
}

#[derive(Clone)]
pub struct MailContext {
    pub host: String,
    pub sender: String,
    pub user: String,
    pub password: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub upload_dir: PathBuf,
}

#[derive(Clone)]
pub struct PaymentContext {
    pub order_paid_status: OrderStatus,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
    pub mail: MailContext,
    pub storage: StorageContext,
    pub payment: PaymentContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
}

#[derive(Clone)]
pub struct MailConfig {
    pub sender: String,
    pub uri: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub upload_dir: String,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub order_paid_status: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
    pub storage: StorageConfig,
    pub payment: PaymentConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET not set");
        let jwt_expires_in = env::var("JWT_EXPIRES_IN")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRES_IN, expected a number of seconds");
        let mail_sender = env::var("MAIL_SENDER").expect("MAIL_SENDER not set");
        let mail_uri = env::var("MAIL_URI").expect("MAIL_URI not set");
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let order_paid_status =
            env::var("ORDER_PAID_STATUS").unwrap_or_else(|_| "confirmed".to_string());

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expires_in,
            },
            mail: MailConfig {
                sender: mail_sender,
                uri: mail_uri,
            },
            storage: StorageConfig { upload_dir },
            payment: PaymentConfig { order_paid_status },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

pub fn parse_mail_uri(sender: String, uri: &str) -> MailContext {
    let parsed_mail_uri = parse_uri(uri).expect("Invalid mail uri");
    let host = parsed_mail_uri.host.expect("Invalid mail host").to_string();
    let mail_user = parsed_mail_uri.user.expect("Invalid mail user");
    let password = decode(mail_user.password.expect("Invalid mail password"))
        .expect("Invalid mail password")
        .to_string();
    let user = decode(mail_user.name)
        .expect("Invalid mail user")
        .to_string();

    MailContext {
        host,
        sender,
        user,
        password,
    }
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        let order_paid_status = self
            .payment
            .order_paid_status
            .parse::<OrderStatus>()
            .expect("Invalid ORDER_PAID_STATUS");

        let upload_dir = PathBuf::from(self.storage.upload_dir);
        tokio::fs::create_dir_all(&upload_dir)
            .await
            .expect("Failed to create upload directory");

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            auth: AuthContext {
                jwt_secret: self.auth.jwt_secret,
                jwt_expires_in: self.auth.jwt_expires_in,
            },
            mail: parse_mail_uri(self.mail.sender, &self.mail.uri),
            storage: StorageContext { upload_dir },
            payment: PaymentContext { order_paid_status },
        }
    }
}
