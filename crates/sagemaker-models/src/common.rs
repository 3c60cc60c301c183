//! Value objects shared across several operations.

use sagemaker_types::ShapeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A metadata tag attached to a SageMaker resource.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Tag {
    /// Creates a new `Tag` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tag key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Replaces the value of `Key`, clearing it when `None`.
    pub fn set_key(&mut self, value: Option<String>) {
        self.key = value;
    }

    /// Sets `Key`, returning the record for chaining.
    #[must_use]
    pub fn with_key(mut self, value: impl Into<String>) -> Self {
        self.key = Some(value.into());
        self
    }

    /// The tag value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replaces the value of `Value`, clearing it when `None`.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets `Value`, returning the record for chaining.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Key", self.key.as_deref())
            .field("Value", self.value.as_deref())
            .finish()
    }
}

/// Where training and job artifacts are written.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output_path: Option<String>,
}

impl OutputDataConfig {
    /// Creates a new `OutputDataConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// KMS key that encrypts the artifacts at rest.
    #[must_use]
    pub fn kms_key_id(&self) -> Option<&str> {
        self.kms_key_id.as_deref()
    }

    /// Replaces the value of `KmsKeyId`, clearing it when `None`.
    pub fn set_kms_key_id(&mut self, value: Option<String>) {
        self.kms_key_id = value;
    }

    /// Sets `KmsKeyId`, returning the record for chaining.
    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    /// S3 prefix the artifacts are written under.
    #[must_use]
    pub fn s3_output_path(&self) -> Option<&str> {
        self.s3_output_path.as_deref()
    }

    /// Replaces the value of `S3OutputPath`, clearing it when `None`.
    pub fn set_s3_output_path(&mut self, value: Option<String>) {
        self.s3_output_path = value;
    }

    /// Sets `S3OutputPath`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_output_path(mut self, value: impl Into<String>) -> Self {
        self.s3_output_path = Some(value.into());
        self
    }
}

impl fmt::Display for OutputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("S3OutputPath", self.s3_output_path.as_deref())
            .finish()
    }
}

/// Limits on how long a job may run.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoppingCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_runtime_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_wait_time_in_seconds: Option<i32>,
}

impl StoppingCondition {
    /// Creates a new `StoppingCondition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum running time before the job is stopped.
    #[must_use]
    pub fn max_runtime_in_seconds(&self) -> Option<i32> {
        self.max_runtime_in_seconds
    }

    /// Replaces the value of `MaxRuntimeInSeconds`, clearing it when `None`.
    pub fn set_max_runtime_in_seconds(&mut self, value: Option<i32>) {
        self.max_runtime_in_seconds = value;
    }

    /// Sets `MaxRuntimeInSeconds`, returning the record for chaining.
    #[must_use]
    pub fn with_max_runtime_in_seconds(mut self, value: i32) -> Self {
        self.max_runtime_in_seconds = Some(value);
        self
    }

    /// Maximum wait for a managed spot job, including runtime.
    #[must_use]
    pub fn max_wait_time_in_seconds(&self) -> Option<i32> {
        self.max_wait_time_in_seconds
    }

    /// Replaces the value of `MaxWaitTimeInSeconds`, clearing it when `None`.
    pub fn set_max_wait_time_in_seconds(&mut self, value: Option<i32>) {
        self.max_wait_time_in_seconds = value;
    }

    /// Sets `MaxWaitTimeInSeconds`, returning the record for chaining.
    #[must_use]
    pub fn with_max_wait_time_in_seconds(mut self, value: i32) -> Self {
        self.max_wait_time_in_seconds = Some(value);
        self
    }
}

impl fmt::Display for StoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxRuntimeInSeconds", self.max_runtime_in_seconds.as_ref())
            .field("MaxWaitTimeInSeconds", self.max_wait_time_in_seconds.as_ref())
            .finish()
    }
}

/// VPC the job or model containers are placed in.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnets: Option<Vec<String>>,
}

impl VpcConfig {
    /// Creates a new `VpcConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Security groups applied to the network interfaces.
    #[must_use]
    pub fn security_group_ids(&self) -> Option<&[String]> {
        self.security_group_ids.as_deref()
    }

    /// Replaces the whole `SecurityGroupIds` sequence, clearing it when `None`.
    pub fn set_security_group_ids(&mut self, value: Option<Vec<String>>) {
        self.security_group_ids = value;
    }

    /// Appends to `SecurityGroupIds`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_security_group_ids`](Self::set_security_group_ids) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_security_group_ids<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// Subnets the network interfaces are created in.
    #[must_use]
    pub fn subnets(&self) -> Option<&[String]> {
        self.subnets.as_deref()
    }

    /// Replaces the whole `Subnets` sequence, clearing it when `None`.
    pub fn set_subnets(&mut self, value: Option<Vec<String>>) {
        self.subnets = value;
    }

    /// Appends to `Subnets`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_subnets`](Self::set_subnets) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_subnets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for VpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("SecurityGroupIds", self.security_group_ids.as_deref())
            .field_list("Subnets", self.subnets.as_deref())
            .finish()
    }
}

/// Network isolation and traffic encryption settings for a job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vpc_config: Option<VpcConfig>,
}

impl NetworkConfig {
    /// Creates a new `NetworkConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enable_inter_container_traffic_encryption(&self) -> Option<bool> {
        self.enable_inter_container_traffic_encryption
    }

    /// Replaces the value of `EnableInterContainerTrafficEncryption`, clearing it when `None`.
    pub fn set_enable_inter_container_traffic_encryption(&mut self, value: Option<bool>) {
        self.enable_inter_container_traffic_encryption = value;
    }

    /// Sets `EnableInterContainerTrafficEncryption`, returning the record for chaining.
    #[must_use]
    pub fn with_enable_inter_container_traffic_encryption(mut self, value: bool) -> Self {
        self.enable_inter_container_traffic_encryption = Some(value);
        self
    }

    #[must_use]
    pub fn enable_network_isolation(&self) -> Option<bool> {
        self.enable_network_isolation
    }

    /// Replaces the value of `EnableNetworkIsolation`, clearing it when `None`.
    pub fn set_enable_network_isolation(&mut self, value: Option<bool>) {
        self.enable_network_isolation = value;
    }

    /// Sets `EnableNetworkIsolation`, returning the record for chaining.
    #[must_use]
    pub fn with_enable_network_isolation(mut self, value: bool) -> Self {
        self.enable_network_isolation = Some(value);
        self
    }

    #[must_use]
    pub fn vpc_config(&self) -> Option<&VpcConfig> {
        self.vpc_config.as_ref()
    }

    /// Replaces the value of `VpcConfig`, clearing it when `None`.
    pub fn set_vpc_config(&mut self, value: Option<VpcConfig>) {
        self.vpc_config = value;
    }

    /// Sets `VpcConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_vpc_config(mut self, value: VpcConfig) -> Self {
        self.vpc_config = Some(value);
        self
    }
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("EnableInterContainerTrafficEncryption", self.enable_inter_container_traffic_encryption.as_ref())
            .field("EnableNetworkIsolation", self.enable_network_isolation.as_ref())
            .field("VpcConfig", self.vpc_config.as_ref())
            .finish()
    }
}

/// Associates a job with an experiment and trial.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExperimentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    experiment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trial_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trial_component_display_name: Option<String>,
}

impl ExperimentConfig {
    /// Creates a new `ExperimentConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn experiment_name(&self) -> Option<&str> {
        self.experiment_name.as_deref()
    }

    /// Replaces the value of `ExperimentName`, clearing it when `None`.
    pub fn set_experiment_name(&mut self, value: Option<String>) {
        self.experiment_name = value;
    }

    /// Sets `ExperimentName`, returning the record for chaining.
    #[must_use]
    pub fn with_experiment_name(mut self, value: impl Into<String>) -> Self {
        self.experiment_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn trial_name(&self) -> Option<&str> {
        self.trial_name.as_deref()
    }

    /// Replaces the value of `TrialName`, clearing it when `None`.
    pub fn set_trial_name(&mut self, value: Option<String>) {
        self.trial_name = value;
    }

    /// Sets `TrialName`, returning the record for chaining.
    #[must_use]
    pub fn with_trial_name(mut self, value: impl Into<String>) -> Self {
        self.trial_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn trial_component_display_name(&self) -> Option<&str> {
        self.trial_component_display_name.as_deref()
    }

    /// Replaces the value of `TrialComponentDisplayName`, clearing it when `None`.
    pub fn set_trial_component_display_name(&mut self, value: Option<String>) {
        self.trial_component_display_name = value;
    }

    /// Sets `TrialComponentDisplayName`, returning the record for chaining.
    #[must_use]
    pub fn with_trial_component_display_name(mut self, value: impl Into<String>) -> Self {
        self.trial_component_display_name = Some(value.into());
        self
    }
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ExperimentName", self.experiment_name.as_deref())
            .field("TrialName", self.trial_name.as_deref())
            .field("TrialComponentDisplayName", self.trial_component_display_name.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_with_subnets_appends_across_calls() {
        let config = VpcConfig::new()
            .with_subnets(["subnet-a", "subnet-b"])
            .with_subnets(["subnet-a", "subnet-b"]);
        assert_eq!(
            config.subnets(),
            Some(["subnet-a", "subnet-b", "subnet-a", "subnet-b"].map(String::from).as_slice()),
        );
    }

    #[test]
    fn test_set_subnets_replaces_wholesale() {
        let mut config = VpcConfig::new().with_subnets(["subnet-a", "subnet-b"]);
        config.set_subnets(Some(vec!["subnet-c".to_string()]));
        assert_eq!(config.subnets(), Some(["subnet-c".to_string()].as_slice()));
        config.set_subnets(None);
        assert_eq!(config.subnets(), None);
    }

    #[test]
    fn test_tag_display_skips_absent_value() {
        let tag = Tag::new().with_key("stage");
        assert_eq!(tag.to_string(), "{Key: stage}");
    }

    #[test]
    fn test_equal_builds_agree_on_equality_and_hash() {
        let a = StoppingCondition::new().with_max_runtime_in_seconds(3600);
        let b = StoppingCondition::new().with_max_runtime_in_seconds(3600);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, StoppingCondition::new());
    }
}
