use crate::{
    modules::{self, log, storage},
    types::{Config, Context, ToContext},
    utils::response,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, services::ServeDir, trace};

async fn banner() -> impl IntoResponse {
    "Food delivery API is running"
}

async fn not_found() -> impl IntoResponse {
    response::message(StatusCode::NOT_FOUND, "Route not found")
}

/// Builds the complete HTTP surface around an existing context.
pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .route("/", get(banner))
        .nest("/api", modules::get_router())
        .nest_service(
            storage::PUBLIC_PREFIX,
            ServeDir::new(ctx.storage.upload_dir.clone()),
        )
        .fallback(not_found)
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn_with_state(
            ctx.clone(),
            log::middleware::record_errors,
        ))
        .layer(Extension(ctx.clone()))
        .layer(DefaultBodyLimit::max(1024 * 1024 * 10))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(cors::Any),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);
        let router = router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address)
            .await
            .unwrap_or_else(|err| panic!("Failed to bind {}: {}", address, err));

        tracing::info!("App is running on {}", self.ctx.app.url);

        if let Err(err) = axum::serve(listener, self.router).await {
            tracing::error!("Server stopped: {}", err);
        }
    }
}
