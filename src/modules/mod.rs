//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the document store backing the catalog.

pub mod store;
