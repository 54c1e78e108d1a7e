//! HTTP API module for the AWS check service
//!
//! # Endpoints
//! - `GET /health` — liveness probe
//! - `GET /aws-check` — lists DynamoDB tables and S3 buckets

pub mod handlers;
mod middleware;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::probe::{BucketLister, TableLister};

pub use middleware::REQUEST_ID_HEADER;

/// Application state shared with endpoints
///
/// Built once during bootstrap, never mutated afterwards.
pub struct AppState {
    pub tables: Arc<dyn TableLister>,
    pub buckets: Arc<dyn BucketLister>,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/aws-check", get(handlers::aws_check))
        .layer(axum::middleware::from_fn(middleware::request_id_layer))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::probe::ListResult;
    use futures_util::FutureExt;
    use futures_util::future::BoxFuture;

    struct Unreachable;

    impl TableLister for Unreachable {
        fn list_tables(&self) -> BoxFuture<'_, ListResult> {
            async { Err(ProbeError::Service("unreachable".to_string())) }.boxed()
        }
    }

    impl BucketLister for Unreachable {
        fn list_buckets(&self) -> BoxFuture<'_, ListResult> {
            async { Err(ProbeError::Service("unreachable".to_string())) }.boxed()
        }
    }

    #[test]
    fn test_create_router() {
        let app_state = Arc::new(AppState {
            tables: Arc::new(Unreachable),
            buckets: Arc::new(Unreachable),
        });

        let _router = create_router(app_state);
        // If we get here without panicking, the router was created successfully
    }

    #[tokio::test]
    async fn test_app_state_holds_only_providers() {
        let state = AppState {
            tables: Arc::new(Unreachable),
            buckets: Arc::new(Unreachable),
        };

        assert!(state.tables.list_tables().await.is_err());
        assert!(state.buckets.list_buckets().await.is_err());
    }
}
