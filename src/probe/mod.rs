// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Connectivity probe behind `/aws-check`
//!
//! The router only depends on two "list" capabilities. The SDK clients
//! implement them in [`crate::aws`]; tests substitute fakes.

mod report;

use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::time::Instant;

use crate::error::ProbeError;

pub use report::ProbeReport;

/// Result of a single list call
pub type ListResult = Result<Vec<String>, ProbeError>;

/// Anything that can list tabular-database tables
pub trait TableLister: Send + Sync {
    fn list_tables(&self) -> BoxFuture<'_, ListResult>;
}

/// Anything that can list storage buckets
pub trait BucketLister: Send + Sync {
    fn list_buckets(&self) -> BoxFuture<'_, ListResult>;
}

/// Runs both list calls concurrently under one shared deadline.
///
/// A call still pending at the deadline yields [`ProbeError::Timeout`];
/// neither call can suppress the other's result.
pub async fn run(
    tables: &dyn TableLister,
    buckets: &dyn BucketLister,
    timeout: Duration,
) -> ProbeReport {
    let deadline = Instant::now() + timeout;

    let (tables, buckets) = tokio::join!(
        bounded(deadline, timeout, tables.list_tables()),
        bounded(deadline, timeout, buckets.list_buckets()),
    );

    ProbeReport { tables, buckets }
}

async fn bounded(
    deadline: Instant,
    timeout: Duration,
    call: BoxFuture<'_, ListResult>,
) -> ListResult {
    tokio::time::timeout_at(deadline, call)
        .await
        .unwrap_or(Err(ProbeError::Timeout(timeout)))
}
