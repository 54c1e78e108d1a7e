// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use aws_check::defaults;
use std::net::TcpListener;
use std::process::Command;

fn run_with(vars: &[(&str, &str)]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aws-check"));
    cmd.env_clear().env("RUST_LOG", "info");
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

#[test]
fn invalid_endpoint_override_exits_non_zero() {
    let output = run_with(&[
        ("AWS_DEFAULT_REGION", "us-east-1"),
        ("AWS_ENDPOINT_URL", "ftp://localstack:4566"),
    ]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Invalid endpoint override"),
        "stdout: {stdout}"
    );
    assert!(!stdout.contains("starting on"), "stdout: {stdout}");
}

#[test]
fn invalid_region_exits_non_zero() {
    let output = run_with(&[("AWS_DEFAULT_REGION", "Not A Region")]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid region"), "stdout: {stdout}");
    assert!(!stdout.contains("starting on"), "stdout: {stdout}");
}

#[test]
fn unresolvable_region_exits_non_zero() {
    // No region variable, no profile, no instance metadata
    let output = run_with(&[("AWS_EC2_METADATA_DISABLED", "true")]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No AWS region"), "stdout: {stdout}");
    assert!(!stdout.contains("starting on"), "stdout: {stdout}");
}

#[test]
fn occupied_port_exits_non_zero() {
    // Whoever holds the port, the service must not be able to bind it
    let _held = TcpListener::bind(defaults::SERVER_ADDR).ok();

    let output = run_with(&[
        ("AWS_DEFAULT_REGION", "us-east-1"),
        ("AWS_EC2_METADATA_DISABLED", "true"),
    ]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to bind address"), "stdout: {stdout}");
    assert!(!stdout.contains("starting on"), "stdout: {stdout}");
}
