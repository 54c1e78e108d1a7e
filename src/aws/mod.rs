// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! AWS SDK bootstrap and the SDK-backed list capabilities
//!
//! Both clients are built once from a single resolved [`SdkConfig`] and are
//! shared read-only for the lifetime of the process.

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::DisplayErrorContext as DynamoErrorContext;
use aws_sdk_s3::error::DisplayErrorContext as S3ErrorContext;
use aws_sdk_s3::types::Bucket;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::error::{AppError, ProbeError, Result};
use crate::probe::{BucketLister, ListResult, TableLister};

/// Long-lived provider client handles
#[derive(Clone, Debug)]
pub struct AwsClients {
    pub dynamodb: aws_sdk_dynamodb::Client,
    pub s3: aws_sdk_s3::Client,
}

impl AwsClients {
    /// Resolves the SDK configuration and constructs both clients.
    ///
    /// With an endpoint override every call targets that address, and S3
    /// switches to path-style addressing so emulators on a bare
    /// `host:port` can serve bucket requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when no region can be resolved.
    pub async fn load(config: &Config) -> Result<Self> {
        let sdk_config = resolve_sdk_config(config).await?;

        let dynamodb = aws_sdk_dynamodb::Client::new(&sdk_config);

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
        if config.endpoint_url.is_some() {
            s3_config = s3_config.force_path_style(true);
        }
        let s3 = aws_sdk_s3::Client::from_conf(s3_config.build());

        Ok(Self { dynamodb, s3 })
    }
}

async fn resolve_sdk_config(config: &Config) -> Result<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        tracing::info!("Using endpoint override {}", endpoint);
        loader = loader.endpoint_url(endpoint.clone());
    }

    if let Some(creds) = &config.credentials {
        tracing::debug!("Using static credentials for {}", creds.access_key_id);
        loader = loader.credentials_provider(Credentials::new(
            creds.access_key_id.clone(),
            creds.secret_access_key.expose_secret().to_string(),
            None,
            None,
            "environment-static",
        ));
    }

    let sdk_config = loader.load().await;

    match sdk_config.region() {
        Some(region) => tracing::info!("Resolved AWS region {}", region),
        None => {
            return Err(AppError::Config(
                "No AWS region could be resolved; set AWS_DEFAULT_REGION".to_string(),
            ));
        }
    }

    Ok(sdk_config)
}

impl TableLister for aws_sdk_dynamodb::Client {
    fn list_tables(&self) -> BoxFuture<'_, ListResult> {
        async move {
            let output = aws_sdk_dynamodb::Client::list_tables(self)
                .send()
                .await
                .map_err(|e| service_error(DynamoErrorContext(&e).to_string()))?;
            Ok(output.table_names.unwrap_or_default())
        }
        .boxed()
    }
}

impl BucketLister for aws_sdk_s3::Client {
    fn list_buckets(&self) -> BoxFuture<'_, ListResult> {
        async move {
            let output = aws_sdk_s3::Client::list_buckets(self)
                .send()
                .await
                .map_err(|e| service_error(S3ErrorContext(&e).to_string()))?;
            Ok(bucket_names(output.buckets()))
        }
        .boxed()
    }
}

/// Names of the listed buckets, skipping entries without one
pub fn bucket_names(buckets: &[Bucket]) -> Vec<String> {
    buckets
        .iter()
        .filter_map(|b| b.name().map(str::to_owned))
        .collect()
}

fn service_error(message: String) -> ProbeError {
    tracing::warn!("Provider call failed: {}", message);
    ProbeError::Service(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticCredentials;
    use secrecy::SecretString;

    #[test]
    fn test_bucket_names_skip_unnamed() {
        let buckets = vec![
            Bucket::builder().name("uploads").build(),
            Bucket::builder().build(),
            Bucket::builder().name("backups").build(),
        ];

        assert_eq!(bucket_names(&buckets), vec!["uploads", "backups"]);
    }

    #[test]
    fn test_bucket_names_empty() {
        assert!(bucket_names(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_load_applies_region_to_both_clients() {
        let config = Config {
            region: Some("ap-northeast-1".to_string()),
            endpoint_url: Some("http://localhost:4566".to_string()),
            credentials: Some(StaticCredentials {
                access_key_id: "test".to_string(),
                secret_access_key: SecretString::new("test".to_string().into()),
            }),
            ..Config::default()
        };

        let clients = AwsClients::load(&config).await.unwrap();

        let dynamo_region = clients.dynamodb.config().region().map(|r| r.to_string());
        let s3_region = clients.s3.config().region().map(|r| r.to_string());
        assert_eq!(dynamo_region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(s3_region.as_deref(), Some("ap-northeast-1"));
    }
}
