//! HTTP server core implementation

use crate::auth::AuthSystem;
use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::routes::health::health_check;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{BackendError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Connects storage, runs migrations, and assembles the shared state.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = Arc::new(StorageLayer::new(&config.database).await?);
        let auth = AuthSystem::new(&config.auth, Arc::clone(&storage));
        let state = AppState::new(config.clone(), auth, storage);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors_config = &state.config.server.cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }
            cors = cors.allow_any_method().allow_any_header();
        }

        App::new()
            .app_data(state)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "GrazeLog-RS")))
            .route("/health", web::get().to(health_check))
            .configure(routes::auth::configure_routes)
            .configure(routes::users::configure_routes)
            .configure(routes::teams::configure_routes)
            .configure(routes::memberships::configure_routes)
            .configure(routes::herds::configure_routes)
            .configure(routes::plots::configure_routes)
            .configure(routes::cow_censuses::configure_routes)
            .configure(routes::dung_censuses::configure_routes)
            .configure(routes::forage_quality_censuses::configure_routes)
            .configure(routes::forage_quantity_censuses::configure_routes)
            .configure(routes::sync::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| {
                warn!("Failed to bind {}: {}", bind_addr, e);
                BackendError::server(format!("Cannot bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| BackendError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
