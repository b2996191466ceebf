use crate::{DatabaseProvider, DbInstanceDescriptor, ProviderError};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_rds::error::DisplayErrorContext;
use aws_sdk_rds::Client;
use tracing::{error, info};

/// AWS RDS implementation of [`DatabaseProvider`].
pub struct RdsProvider {
    client: Client,
}

impl RdsProvider {
    /// Build a client from the ambient AWS environment (execution-role
    /// credentials, region from AWS_REGION). Auth and transport retries are
    /// the SDK's concern.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
        }
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DatabaseProvider for RdsProvider {
    async fn describe_instance(
        &self,
        instance_id: &str,
    ) -> Result<DbInstanceDescriptor, ProviderError> {
        info!("[RDS API] DescribeDBInstances: id={}", instance_id);
        let output = self
            .client
            .describe_db_instances()
            .db_instance_identifier(instance_id)
            .send()
            .await
            .map_err(|err| {
                let err = err.into_service_error();
                if err.is_db_instance_not_found_fault() {
                    ProviderError::InstanceNotFound(instance_id.to_string())
                } else {
                    error!(
                        "[RDS API] DescribeDBInstances failed: {}",
                        DisplayErrorContext(&err)
                    );
                    ProviderError::Service(DisplayErrorContext(&err).to_string())
                }
            })?;

        let instance = output
            .db_instances()
            .first()
            .ok_or_else(|| ProviderError::InstanceNotFound(instance_id.to_string()))?;

        Ok(DbInstanceDescriptor {
            identifier: instance
                .db_instance_identifier()
                .unwrap_or(instance_id)
                .to_string(),
            status: instance.db_instance_status().unwrap_or_default().to_string(),
            engine: instance.engine().unwrap_or_default().to_string(),
            cluster_identifier: instance.db_cluster_identifier().map(str::to_string),
        })
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<(), ProviderError> {
        info!("[RDS API] StopDBInstance: id={}", instance_id);
        self.client
            .stop_db_instance()
            .db_instance_identifier(instance_id)
            .send()
            .await
            .map_err(|err| {
                error!("[RDS API] StopDBInstance failed: {}", DisplayErrorContext(&err));
                ProviderError::Service(DisplayErrorContext(&err).to_string())
            })?;
        Ok(())
    }

    async fn stop_cluster(&self, cluster_id: &str) -> Result<(), ProviderError> {
        info!("[RDS API] StopDBCluster: id={}", cluster_id);
        self.client
            .stop_db_cluster()
            .db_cluster_identifier(cluster_id)
            .send()
            .await
            .map_err(|err| {
                error!("[RDS API] StopDBCluster failed: {}", DisplayErrorContext(&err));
                ProviderError::Service(DisplayErrorContext(&err).to_string())
            })?;
        Ok(())
    }
}
