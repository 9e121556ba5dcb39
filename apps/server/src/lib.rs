//! Breeding management REST API
//!
//! Handlers in [`api`] translate HTTP requests into calls on the per-domain
//! service traits in [`services`]. The traits are implemented by the
//! middleware adapter in [`db`]; measurement values pass through
//! [`breeding_validator`] before they are accepted.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
