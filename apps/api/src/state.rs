use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::curation::pipeline::CurationPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Process-wide pipeline; its verification cache is shared by every request.
    pub pipeline: Arc<CurationPipeline>,
}
