//! Middleware adapter
//!
//! The breeding database and its managers live outside this service. The
//! adapter here answers the service traits from in-process tables that are
//! seeded from a JSON fixture at startup.

mod memory;
mod seed;

pub use memory::InMemoryMiddleware;
pub use seed::{FavoriteLocation, SeedData};
