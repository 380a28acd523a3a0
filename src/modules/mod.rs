//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence adapters the feature services talk to.

pub mod store;
