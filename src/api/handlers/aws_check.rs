// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::AppState;
use crate::error::ProbeError;
use crate::probe::{self, ProbeReport};

/// Deadline shared by both provider calls of one `/aws-check` run
pub const AWS_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// GET /aws-check
///
/// Lists DynamoDB tables and S3 buckets and reports each outcome as text.
/// Provider failures are part of the body, the status is always 200.
///
/// The probe runs on its own task, so a client hanging up does not cancel
/// the calls; only [`AWS_CHECK_TIMEOUT`] does.
pub async fn aws_check(State(state): State<Arc<AppState>>) -> Response {
    let probe = tokio::spawn(async move {
        probe::run(
            state.tables.as_ref(),
            state.buckets.as_ref(),
            AWS_CHECK_TIMEOUT,
        )
        .await
    });

    let report = match probe.await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("aws-check probe task failed: {}", e);
            let failed = || Err(ProbeError::Service(format!("probe task failed: {e}")));
            ProbeReport {
                tables: failed(),
                buckets: failed(),
            }
        }
    };

    if report.is_healthy() {
        tracing::debug!("aws-check succeeded for both providers");
    } else {
        tracing::warn!("aws-check reported provider errors");
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report.render(),
    )
        .into_response()
}
