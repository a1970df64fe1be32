//! # GrazeLog-RS
//!
//! REST backend for collecting and managing agricultural grazing survey
//! data. Teams of ranchers record herds, plots of land, and four kinds of
//! field census (cow body condition, dung ratings, forage quality, forage
//! quantity), each optionally attached to a photo record.
//!
//! Every protected route is gated by a two-tier role model:
//!
//! - **User scopes** (`Unverified`, `User`, `Admin`) attached to accounts,
//! - **Team scopes** (`User`, `Contributor`, `Owner`) attached to
//!   memberships binding a user to a team,
//!
//! resolved through recursive subscope checks in [`auth::scopes`] and
//! enforced by the middleware gates in [`server::middleware`].
//!
//! ## Running
//!
//! ```rust,no_run
//! use grazelog_rs::config::Config;
//! use grazelog_rs::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None)?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use utils::error::{BackendError, Result};
