//! Classroom AI - content orchestration for a teacher dashboard
//!
//! Generates lesson plans, learning pathways, image analyses and
//! visualization recommendations through a cached, rate-limited, retried
//! completion pipeline that always yields a usable result once the remote
//! call succeeds.

pub mod analytics;
pub mod api;
pub mod cache;
pub mod config;
pub mod documents;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod provider;
pub mod resilience;
pub mod tasks;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use error::{OrchestratorError, Result};
pub use orchestrator::Orchestrator;
pub use tasks::spawn_cleanup_task;
