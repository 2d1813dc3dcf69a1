//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Purge: Removes expired cached results and stale rate-window timestamps

mod cleanup;

pub use cleanup::spawn_cleanup_task;
