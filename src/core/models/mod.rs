//! Core data models
//!
//! Domain structures for users, teams, memberships, and the survey
//! entities. Storage entities convert to and from these models at the
//! database boundary.

pub mod census;
pub mod herd;
pub mod photo;
pub mod plot;
pub mod team;
pub mod user;

pub use census::*;
pub use herd::Herd;
pub use photo::Photo;
pub use plot::Plot;
pub use team::{Membership, Team, TeamScope};
pub use user::{User, UserScope};
