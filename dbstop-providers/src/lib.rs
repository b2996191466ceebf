use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by a database provider. Both kinds propagate unmodified
/// to the invocation's caller: no retry, no local recovery.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The identifier did not resolve to an existing instance.
    #[error("database instance '{0}' not found")]
    InstanceNotFound(String),
    /// Any remote-call failure (network, auth, throttling, malformed response).
    #[error("database service call failed: {0}")]
    Service(String),
}

/// Engine families that determine the shape of the stop command. Aurora
/// engines are stopped at the cluster level; everything else per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineFamily {
    AuroraCluster,
    Standalone,
}

impl EngineFamily {
    pub fn classify(engine: &str) -> Self {
        match engine {
            "aurora-postgres" | "aurora-mysql" => EngineFamily::AuroraCluster,
            _ => EngineFamily::Standalone,
        }
    }
}

/// Snapshot of a managed database instance, fetched fresh on every
/// invocation and discarded afterwards. Never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbInstanceDescriptor {
    pub identifier: String,
    /// Provider-defined status string ("available", "stopped", "stopping",
    /// "starting", "backing-up", ...).
    pub status: String,
    pub engine: String,
    /// Present only for clustered engines.
    pub cluster_identifier: Option<String>,
}

impl DbInstanceDescriptor {
    pub fn engine_family(&self) -> EngineFamily {
        EngineFamily::classify(&self.engine)
    }

    /// "available" is the single status from which the remote service
    /// accepts a stop command.
    pub fn is_stoppable(&self) -> bool {
        self.status == "available"
    }
}

#[async_trait]
pub trait DatabaseProvider: Send + Sync {
    /// Fetch the current descriptor for an instance.
    async fn describe_instance(
        &self,
        instance_id: &str,
    ) -> Result<DbInstanceDescriptor, ProviderError>;

    /// Issue a stop command for a standalone instance. Fire-and-forget:
    /// returns once the service has accepted the command.
    async fn stop_instance(&self, instance_id: &str) -> Result<(), ProviderError>;

    /// Issue a stop command for the owning cluster of a clustered engine.
    async fn stop_cluster(&self, cluster_id: &str) -> Result<(), ProviderError>;
}

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "rds")]
pub mod rds;
