//! API module for moviestore
//!
//! This module contains the HTTP endpoints and server setup. Handlers reach
//! the store only through [`Models`](crate::db::Models).

pub mod health;
pub mod movies;
pub mod server;

use std::sync::Arc;

use crate::{config::Config, db::Models};

pub use health::healthcheck_handler;
pub use server::{create_router, create_server, shutdown_signal};

/// Path prefix for every route
pub const API_VERSION: &str = "v1";

/// Shared state handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Model implementations
    pub models: Models,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Arc<Config>, models: Models) -> Self {
        Self { config, models }
    }
}
