//! API Module
//!
//! HTTP handlers and routing that expose the orchestrator to UI call sites.
//!
//! # Endpoints
//! - `POST /lesson-plan` - Generate a lesson plan
//! - `POST /learning-pathway` - Generate a learning pathway for a student
//! - `POST /content-analysis` - Analyse an uploaded image
//! - `POST /visualizations` - Recommend visual aids for some content
//! - `DELETE /cache` - Drop cached results
//! - `GET /stats` - Cache and rate-limit diagnostics
//! - `GET /rate-limit` - Rate-limit status
//! - `POST /feedback/summary` - Aggregate lesson feedback
//! - `POST|GET /documents/:owner_id`, `DELETE /documents/:owner_id/:document_id`
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
