//! Album Cache - catalogue service with a cache-aside entity cache
//!
//! Album reads are served from an in-memory cache with sliding TTL expiry,
//! writes go to the backing store first and then refresh or drop the cached
//! copy, and a background task sweeps idle entries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
