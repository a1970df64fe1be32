//! HTTP server
//!
//! Server construction, shared application state, the authorization
//! middleware gates, and the route handlers.

pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
