// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Plain-text rendering of a probe run

use std::fmt::{self, Write as _};

use super::ListResult;

/// Outcome of one `/aws-check` run, one result per provider
#[derive(Debug)]
pub struct ProbeReport {
    pub tables: ListResult,
    pub buckets: ListResult,
}

impl ProbeReport {
    /// Renders the report as the `/aws-check` response body.
    ///
    /// DynamoDB always comes first, then S3, separated by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        write_section(&mut out, "Dynamo", "tables", &self.tables);
        out.push('\n');
        write_section(&mut out, "S3", "buckets", &self.buckets);
        out
    }

    /// True when both calls succeeded
    pub fn is_healthy(&self) -> bool {
        self.tables.is_ok() && self.buckets.is_ok()
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn write_section(out: &mut String, provider: &str, noun: &str, result: &ListResult) {
    // Writing into a String cannot fail
    match result {
        Ok(names) => {
            let _ = writeln!(out, "{provider} err: none");
            let _ = writeln!(out, "{provider} {noun}: [{}]", names.join(", "));
        }
        Err(e) => {
            let _ = writeln!(out, "{provider} err: {e}");
        }
    }
}
