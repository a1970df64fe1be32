//! Database entities
//!
//! SeaORM models mirroring the relational schema. Each entity converts to
//! and from the domain model at the storage boundary.

pub mod cow_census;
pub mod dung_census;
pub mod forage_quality_census;
pub mod forage_quantity_census;
pub mod herd;
pub mod membership;
pub mod photo;
pub mod plot;
pub mod team;
pub mod user;
pub mod verification_code;

pub use cow_census::Entity as CowCensus;
pub use dung_census::Entity as DungCensus;
pub use forage_quality_census::Entity as ForageQualityCensus;
pub use forage_quantity_census::Entity as ForageQuantityCensus;
pub use herd::Entity as Herd;
pub use membership::Entity as Membership;
pub use photo::Entity as Photo;
pub use plot::Entity as Plot;
pub use team::Entity as Team;
pub use user::Entity as User;
pub use verification_code::Entity as VerificationCode;
