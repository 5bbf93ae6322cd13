use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The skill dictionary and education pattern set are process-wide statics
/// (see `entities`), so the only per-process state carried here is config.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
