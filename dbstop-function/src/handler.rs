use crate::config::Config;
use dbstop_providers::{DatabaseProvider, EngineFamily, ProviderError};
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Body returned to the invoker on every normal completion, including the
/// idle "nothing to stop" path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub result: String,
}

impl FunctionResponse {
    pub fn complete() -> Self {
        Self {
            status_code: 200,
            result: "Function complete!".to_string(),
        }
    }
}

/// What the handler did with the stop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// Aurora-family instance: the owning cluster was told to stop.
    ClusterStopIssued { cluster_id: String },
    /// Standalone engine: the instance itself was told to stop.
    InstanceStopIssued { instance_id: String },
    /// Status was not "available"; no command issued. A normal outcome,
    /// not an error.
    NotStoppable { status: String },
}

/// Core stop sequence: describe, gate on status, branch on engine family,
/// issue at most one stop command. Does not wait for the stop to finish.
pub async fn stop_database(
    provider: &dyn DatabaseProvider,
    instance_id: &str,
) -> Result<StopOutcome, ProviderError> {
    info!("Preparing to stop database instance {}...", instance_id);

    let descriptor = provider.describe_instance(instance_id).await?;
    info!(
        "Instance info: {}",
        serde_json::to_string_pretty(&descriptor).unwrap_or_default()
    );
    info!(
        "Instance {} ({}) current status = {}",
        descriptor.identifier, descriptor.engine, descriptor.status
    );

    if !descriptor.is_stoppable() {
        info!("Database is in a state that cannot be stopped.");
        return Ok(StopOutcome::NotStoppable {
            status: descriptor.status,
        });
    }

    info!("Issuing stop command...");
    match descriptor.engine_family() {
        EngineFamily::AuroraCluster => {
            // Aurora is stopped as a unit, by cluster identifier.
            let cluster_id = descriptor.cluster_identifier.ok_or_else(|| {
                ProviderError::Service(format!(
                    "aurora instance '{}' reported no cluster identifier",
                    descriptor.identifier
                ))
            })?;
            provider.stop_cluster(&cluster_id).await?;
            info!("Stop command issued to cluster {}.", cluster_id);
            Ok(StopOutcome::ClusterStopIssued { cluster_id })
        }
        EngineFamily::Standalone => {
            provider.stop_instance(instance_id).await?;
            info!("Stop command issued to database.");
            Ok(StopOutcome::InstanceStopIssued {
                instance_id: instance_id.to_string(),
            })
        }
    }
}

/// Lambda entry point. The event payload is opaque and unused; the target
/// instance comes from configuration.
pub async fn function_handler(
    provider: &dyn DatabaseProvider,
    config: &Config,
    _event: LambdaEvent<Value>,
) -> Result<FunctionResponse, Error> {
    stop_database(provider, &config.instance_id).await?;
    Ok(FunctionResponse::complete())
}
