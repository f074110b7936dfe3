//! API Module
//!
//! HTTP handlers and routing for the catalogue REST API.
//!
//! # Endpoints
//! - `GET|POST /api/v1/album` - List or create albums
//! - `GET|PUT|DELETE /api/v1/album/:id` - Read (cached), replace or delete an album
//! - `GET|POST /api/v1/artist`, `GET /api/v1/artist/:id` - Artists
//! - `POST /api/v1/cache/cleanup` - Sweep the album cache now
//! - `GET /api/v1/cache/state` - Current cache contents
//! - `GET /api/v1/cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
