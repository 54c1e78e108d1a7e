// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # AWS Check
//!
//! Small HTTP service that confirms AWS connectivity and credentials.
//!
//! It exposes a liveness probe and a diagnostic endpoint which lists
//! DynamoDB tables and S3 buckets, reporting each provider's outcome as
//! plain text.
//!
//! ## Main modules
//! - `api`: HTTP router, handlers and middleware
//! - `aws`: SDK bootstrap and SDK-backed list capabilities
//! - `config`: configuration management
//! - `error`: error types
//! - `probe`: the timeout-bounded probe and its text report
//! - `prelude`: commonly used types and traits

mod api;
mod aws;
mod config;
mod error;
mod probe;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, StaticCredentials, defaults, env_vars};

/// Application error types and result alias
pub use error::{AppError, ProbeError, Result};

/// HTTP API router and state
pub use api::handlers::AWS_CHECK_TIMEOUT;
pub use api::{AppState, REQUEST_ID_HEADER, create_router};

/// AWS client bootstrap
pub use aws::{AwsClients, bucket_names};

/// Provider capabilities and probe report
pub use probe::{BucketLister, ListResult, ProbeReport, TableLister};
