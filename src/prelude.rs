// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use aws_check::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, StaticCredentials};
pub use crate::error::{AppError, ProbeError, Result};

// HTTP
pub use crate::api::{AppState, create_router};

// Providers
pub use crate::aws::AwsClients;
pub use crate::probe::{BucketLister, ListResult, ProbeReport, TableLister};
