//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table from config (history strategy, matching options)
//! - Create Axum Router with API handlers and the page fallback
//! - Wire up middleware (request ID, tracing, timeout, CORS)
//! - Serve until a signal or the shutdown broadcast fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::error::Result;
use crate::http::cors::cors_layer;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::{api, pages};
use crate::lifecycle::shutdown_signal;
use crate::routing::{route_table, RouterConfig};
use crate::stocks::StockBook;
use crate::views::ViewRenderer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<RouterConfig>,
    pub book: Arc<StockBook>,
    pub views: Arc<ViewRenderer>,
}

/// HTTP server for the stock application.
pub struct AppServer {
    router: Router,
    config: AppConfig,
    routes: Arc<RouterConfig>,
}

impl AppServer {
    /// Create a server over the demo stock data.
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_book(config, StockBook::demo())
    }

    pub fn with_book(config: AppConfig, book: StockBook) -> Result<Self> {
        let table = route_table().routes().clone().with_options(config.matching)?;
        let routes = Arc::new(RouterConfig::new(config.history.clone(), table));

        tracing::info!(
            routes = routes.routes().len(),
            history = ?routes.history(),
            "Route table initialised"
        );

        let state = AppState {
            router: routes.clone(),
            book: Arc::new(book),
            views: Arc::new(ViewRenderer::new()?),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            routes,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(api::health))
            .route("/api/records", get(api::records))
            .route("/api/stocks/{ticker}", get(api::stock))
            .fallback(pages::page)
            .with_state(state)
            .layer(cors_layer(&config.cors))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http",
                    method = %req.method(),
                    uri = %req.uri(),
                    request_id = %req.headers().request_id()
                )
            }))
            .layer(set_request_id_layer())
    }

    /// A clone of the Axum router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn routes(&self) -> &RouterConfig {
        &self.routes
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::result::Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {},
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    },
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{HistoryStrategy, MatchOptions};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    async fn fetch(server: &AppServer, uri: &str) -> (StatusCode, String) {
        let response = server
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_pages_resolve_through_route_table() {
        let server = AppServer::new(AppConfig::default()).unwrap();

        let (status, body) = fetch(&server, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Stocks</h1>"));

        let (status, body) = fetch(&server, "/stock/MSFT").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("+0.8%"));

        let (status, body) = fetch(&server, "/about").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));

        let (status, _) = fetch(&server, "/stock/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_base_is_honoured() {
        let mut config = AppConfig::default();
        config.history = HistoryStrategy::Web { base: "/app".into() };
        let server = AppServer::new(config).unwrap();
        assert_eq!(
            server.routes().history(),
            &HistoryStrategy::Web { base: "/app".into() }
        );
        assert_eq!(server.routes().routes(), route_table().routes());

        let (status, _) = fetch(&server, "/app/stock/AAPL").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = fetch(&server, "/stock/AAPL").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_strict_matching_from_config() {
        let mut config = AppConfig::default();
        config.matching = MatchOptions {
            sensitive: false,
            strict: true,
        };
        let server = AppServer::new(config).unwrap();
        assert!(server.routes().routes().options().strict);

        let (status, _) = fetch(&server, "/stock/AAPL/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_takes_precedence_over_pages() {
        let server = AppServer::new(AppConfig::default()).unwrap();

        let (status, body) = fetch(&server, "/api/stocks/googl").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["price"], 2800.0);
        assert_eq!(json["change"], "-0.5%");

        let (_, body) = fetch(&server, "/api/stocks/NOPE").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Ticker not found"}));
    }

    #[tokio::test]
    async fn test_non_get_page_request_rejected() {
        let server = AppServer::new(AppConfig::default()).unwrap();
        let response = server
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/stock/AAPL")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_request_id_assigned() {
        let server = AppServer::new(AppConfig::default()).unwrap();
        let response = server
            .router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = response.headers().request_id();
        assert_ne!(id, "unknown");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
