//! Core domain types
//!
//! This module contains the domain data structures shared between the HTTP
//! surface and the storage layer.

pub mod models;
