use crate::{DatabaseProvider, DbInstanceDescriptor, ProviderError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory provider for tests: serves canned descriptors and records every
/// stop command it is asked to issue.
#[derive(Default)]
pub struct MockProvider {
    instances: HashMap<String, DbInstanceDescriptor>,
    describe_failure: Option<ProviderError>,
    stopped_instances: Mutex<Vec<String>>,
    stopped_clusters: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instance(mut self, descriptor: DbInstanceDescriptor) -> Self {
        self.instances
            .insert(descriptor.identifier.clone(), descriptor);
        self
    }

    /// Arm describe_instance to fail with the given error instead of
    /// serving a descriptor.
    pub fn with_describe_failure(mut self, err: ProviderError) -> Self {
        self.describe_failure = Some(err);
        self
    }

    pub fn stopped_instances(&self) -> Vec<String> {
        self.stopped_instances.lock().unwrap().clone()
    }

    pub fn stopped_clusters(&self) -> Vec<String> {
        self.stopped_clusters.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatabaseProvider for MockProvider {
    async fn describe_instance(
        &self,
        instance_id: &str,
    ) -> Result<DbInstanceDescriptor, ProviderError> {
        if let Some(err) = &self.describe_failure {
            return Err(err.clone());
        }
        self.instances
            .get(instance_id)
            .cloned()
            .ok_or_else(|| ProviderError::InstanceNotFound(instance_id.to_string()))
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<(), ProviderError> {
        self.stopped_instances
            .lock()
            .unwrap()
            .push(instance_id.to_string());
        Ok(())
    }

    async fn stop_cluster(&self, cluster_id: &str) -> Result<(), ProviderError> {
        self.stopped_clusters
            .lock()
            .unwrap()
            .push(cluster_id.to_string());
        Ok(())
    }
}
