// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod aws_check;
mod health;

pub use aws_check::{AWS_CHECK_TIMEOUT, aws_check};
pub use health::health_check;
