//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache sweep: evicts idle cache entries every TTL period

mod sweeper;

pub use sweeper::{spawn_sweep_task, SweeperHandle};
