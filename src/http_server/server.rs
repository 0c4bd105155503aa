//! HTTP server
//!
//! Binds the listener and serves the employee routes. Request handling is
//! synchronous end-to-end: each request completes its repository round-trip
//! before a response is produced, and no background tasks are spawned.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::repository::EmployeeRepository;

use super::config::ServerConfig;
use super::employee_routes::{employee_routes, AppState};

/// HTTP server for the employee record service
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given repository with custom configuration
    pub fn new(repository: Arc<dyn EmployeeRepository>, config: ServerConfig) -> Self {
        let router = Self::build_router(repository, &config);
        Self { config, router }
    }

    fn build_router(repository: Arc<dyn EmployeeRepository>, config: &ServerConfig) -> Router {
        let state = Arc::new(AppState::new(repository));

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

        employee_routes(state).layer(cors)
    }

    /// The socket address the server will bind
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
