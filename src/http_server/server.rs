//! # HTTP Server
//!
//! Combines the entity and report routers behind one listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::HttpConfig;

use super::cliente_routes::cliente_routes;
use super::empleado_routes::empleado_routes;
use super::facturacion_routes::facturacion_routes;
use super::producto_routes::producto_routes;
use super::proveedor_routes::proveedor_routes;
use super::report_routes::report_routes;
use super::sede_routes::sede_routes;
use super::ApiState;

const WELCOME: &str = "Bienvenido a la API de NAGGA";

/// Welcome message body
#[derive(Debug, Serialize)]
struct WelcomeResponse {
    message: String,
}

async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME.to_string(),
    })
}

/// HTTP server for the NAGGA API
pub struct HttpServer {
    config: HttpConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(state: Arc<ApiState>) -> Self {
        Self::with_config(HttpConfig::default(), state)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpConfig, state: Arc<ApiState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpConfig, state: Arc<ApiState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(root_handler))
            .merge(sede_routes(state.clone()))
            .merge(cliente_routes(state.clone()))
            .merge(empleado_routes(state.clone()))
            .merge(proveedor_routes(state.clone()))
            .merge(producto_routes(state.clone()))
            .merge(facturacion_routes(state.clone()))
            .merge(report_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        tracing::info!(%addr, "starting NAGGA API server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
