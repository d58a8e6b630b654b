//! Color Comfort - contrast and reading comfort for color palettes
//!
//! HTTP API and CLI around the `comfort-engine` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
