//! Shapes for the AutoML operations.

use crate::common::{Tag, VpcConfig};
use chrono::{DateTime, Utc};
use sagemaker_types::{SageMakerError, ShapeFormatter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// S3 location of an AutoML input channel.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlS3DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
}

impl AutoMlS3DataSource {
    /// Creates a new `AutoMlS3DataSource` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How the data is laid out; one of the `AutoMlS3DataType` values.
    #[must_use]
    pub fn s3_data_type(&self) -> Option<&str> {
        self.s3_data_type.as_deref()
    }

    /// Replaces the value of `S3DataType`, clearing it when `None`.
    pub fn set_s3_data_type(&mut self, value: Option<String>) {
        self.s3_data_type = value;
    }

    /// Sets `S3DataType`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_data_type(mut self, value: impl Into<String>) -> Self {
        self.s3_data_type = Some(value.into());
        self
    }

    /// URI of the manifest file or prefix.
    #[must_use]
    pub fn s3_uri(&self) -> Option<&str> {
        self.s3_uri.as_deref()
    }

    /// Replaces the value of `S3Uri`, clearing it when `None`.
    pub fn set_s3_uri(&mut self, value: Option<String>) {
        self.s3_uri = value;
    }

    /// Sets `S3Uri`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_uri(mut self, value: impl Into<String>) -> Self {
        self.s3_uri = Some(value.into());
        self
    }
}

impl fmt::Display for AutoMlS3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataType", self.s3_data_type.as_deref())
            .field("S3Uri", self.s3_uri.as_deref())
            .finish()
    }
}

/// Data source for an AutoML input channel.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_source: Option<AutoMlS3DataSource>,
}

impl AutoMlDataSource {
    /// Creates a new `AutoMlDataSource` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn s3_data_source(&self) -> Option<&AutoMlS3DataSource> {
        self.s3_data_source.as_ref()
    }

    /// Replaces the value of `S3DataSource`, clearing it when `None`.
    pub fn set_s3_data_source(&mut self, value: Option<AutoMlS3DataSource>) {
        self.s3_data_source = value;
    }

    /// Sets `S3DataSource`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_data_source(mut self, value: AutoMlS3DataSource) -> Self {
        self.s3_data_source = Some(value);
        self
    }
}

impl fmt::Display for AutoMlDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataSource", self.s3_data_source.as_ref())
            .finish()
    }
}

/// One input channel of an AutoML job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_source: Option<AutoMlDataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compression_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_attribute_name: Option<String>,
}

impl AutoMlChannel {
    /// Creates a new `AutoMlChannel` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data_source(&self) -> Option<&AutoMlDataSource> {
        self.data_source.as_ref()
    }

    /// Replaces the value of `DataSource`, clearing it when `None`.
    pub fn set_data_source(&mut self, value: Option<AutoMlDataSource>) {
        self.data_source = value;
    }

    /// Sets `DataSource`, returning the record for chaining.
    #[must_use]
    pub fn with_data_source(mut self, value: AutoMlDataSource) -> Self {
        self.data_source = Some(value);
        self
    }

    /// One of the `CompressionType` values.
    #[must_use]
    pub fn compression_type(&self) -> Option<&str> {
        self.compression_type.as_deref()
    }

    /// Replaces the value of `CompressionType`, clearing it when `None`.
    pub fn set_compression_type(&mut self, value: Option<String>) {
        self.compression_type = value;
    }

    /// Sets `CompressionType`, returning the record for chaining.
    #[must_use]
    pub fn with_compression_type(mut self, value: impl Into<String>) -> Self {
        self.compression_type = Some(value.into());
        self
    }

    /// Column the job predicts.
    #[must_use]
    pub fn target_attribute_name(&self) -> Option<&str> {
        self.target_attribute_name.as_deref()
    }

    /// Replaces the value of `TargetAttributeName`, clearing it when `None`.
    pub fn set_target_attribute_name(&mut self, value: Option<String>) {
        self.target_attribute_name = value;
    }

    /// Sets `TargetAttributeName`, returning the record for chaining.
    #[must_use]
    pub fn with_target_attribute_name(mut self, value: impl Into<String>) -> Self {
        self.target_attribute_name = Some(value.into());
        self
    }
}

impl fmt::Display for AutoMlChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DataSource", self.data_source.as_ref())
            .field("CompressionType", self.compression_type.as_deref())
            .field("TargetAttributeName", self.target_attribute_name.as_deref())
            .finish()
    }
}

/// Where AutoML artifacts are written.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlOutputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output_path: Option<String>,
}

impl AutoMlOutputDataConfig {
    /// Creates a new `AutoMlOutputDataConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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

impl fmt::Display for AutoMlOutputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("S3OutputPath", self.s3_output_path.as_deref())
            .finish()
    }
}

/// Metric an AutoML job optimizes.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlJobObjective {
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
}

impl AutoMlJobObjective {
    /// Creates a new `AutoMlJobObjective` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `AutoMlMetricEnum` values.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Replaces the value of `MetricName`, clearing it when `None`.
    pub fn set_metric_name(&mut self, value: Option<String>) {
        self.metric_name = value;
    }

    /// Sets `MetricName`, returning the record for chaining.
    #[must_use]
    pub fn with_metric_name(mut self, value: impl Into<String>) -> Self {
        self.metric_name = Some(value.into());
        self
    }
}

impl fmt::Display for AutoMlJobObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MetricName", self.metric_name.as_deref())
            .finish()
    }
}

/// Bounds at which an AutoML job stops exploring.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlJobCompletionCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_candidates: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_runtime_per_training_job_in_seconds: Option<i32>,
    #[serde(rename = "MaxAutoMLJobRuntimeInSeconds", skip_serializing_if = "Option::is_none")]
    max_auto_ml_job_runtime_in_seconds: Option<i32>,
}

impl AutoMlJobCompletionCriteria {
    /// Creates a new `AutoMlJobCompletionCriteria` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_candidates(&self) -> Option<i32> {
        self.max_candidates
    }

    /// Replaces the value of `MaxCandidates`, clearing it when `None`.
    pub fn set_max_candidates(&mut self, value: Option<i32>) {
        self.max_candidates = value;
    }

    /// Sets `MaxCandidates`, returning the record for chaining.
    #[must_use]
    pub fn with_max_candidates(mut self, value: i32) -> Self {
        self.max_candidates = Some(value);
        self
    }

    #[must_use]
    pub fn max_runtime_per_training_job_in_seconds(&self) -> Option<i32> {
        self.max_runtime_per_training_job_in_seconds
    }

    /// Replaces the value of `MaxRuntimePerTrainingJobInSeconds`, clearing it when `None`.
    pub fn set_max_runtime_per_training_job_in_seconds(&mut self, value: Option<i32>) {
        self.max_runtime_per_training_job_in_seconds = value;
    }

    /// Sets `MaxRuntimePerTrainingJobInSeconds`, returning the record for chaining.
    #[must_use]
    pub fn with_max_runtime_per_training_job_in_seconds(mut self, value: i32) -> Self {
        self.max_runtime_per_training_job_in_seconds = Some(value);
        self
    }

    #[must_use]
    pub fn max_auto_ml_job_runtime_in_seconds(&self) -> Option<i32> {
        self.max_auto_ml_job_runtime_in_seconds
    }

    /// Replaces the value of `MaxAutoMLJobRuntimeInSeconds`, clearing it when `None`.
    pub fn set_max_auto_ml_job_runtime_in_seconds(&mut self, value: Option<i32>) {
        self.max_auto_ml_job_runtime_in_seconds = value;
    }

    /// Sets `MaxAutoMLJobRuntimeInSeconds`, returning the record for chaining.
    #[must_use]
    pub fn with_max_auto_ml_job_runtime_in_seconds(mut self, value: i32) -> Self {
        self.max_auto_ml_job_runtime_in_seconds = Some(value);
        self
    }
}

impl fmt::Display for AutoMlJobCompletionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxCandidates", self.max_candidates.as_ref())
            .field("MaxRuntimePerTrainingJobInSeconds", self.max_runtime_per_training_job_in_seconds.as_ref())
            .field("MaxAutoMLJobRuntimeInSeconds", self.max_auto_ml_job_runtime_in_seconds.as_ref())
            .finish()
    }
}

/// Encryption and network settings for an AutoML job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlSecurityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    volume_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vpc_config: Option<VpcConfig>,
}

impl AutoMlSecurityConfig {
    /// Creates a new `AutoMlSecurityConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn volume_kms_key_id(&self) -> Option<&str> {
        self.volume_kms_key_id.as_deref()
    }

    /// Replaces the value of `VolumeKmsKeyId`, clearing it when `None`.
    pub fn set_volume_kms_key_id(&mut self, value: Option<String>) {
        self.volume_kms_key_id = value;
    }

    /// Sets `VolumeKmsKeyId`, returning the record for chaining.
    #[must_use]
    pub fn with_volume_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.volume_kms_key_id = Some(value.into());
        self
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

impl fmt::Display for AutoMlSecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .field("EnableInterContainerTrafficEncryption", self.enable_inter_container_traffic_encryption.as_ref())
            .field("VpcConfig", self.vpc_config.as_ref())
            .finish()
    }
}

/// Tuning knobs for a whole AutoML job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlJobConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    completion_criteria: Option<AutoMlJobCompletionCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    security_config: Option<AutoMlSecurityConfig>,
}

impl AutoMlJobConfig {
    /// Creates a new `AutoMlJobConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn completion_criteria(&self) -> Option<&AutoMlJobCompletionCriteria> {
        self.completion_criteria.as_ref()
    }

    /// Replaces the value of `CompletionCriteria`, clearing it when `None`.
    pub fn set_completion_criteria(&mut self, value: Option<AutoMlJobCompletionCriteria>) {
        self.completion_criteria = value;
    }

    /// Sets `CompletionCriteria`, returning the record for chaining.
    #[must_use]
    pub fn with_completion_criteria(mut self, value: AutoMlJobCompletionCriteria) -> Self {
        self.completion_criteria = Some(value);
        self
    }

    #[must_use]
    pub fn security_config(&self) -> Option<&AutoMlSecurityConfig> {
        self.security_config.as_ref()
    }

    /// Replaces the value of `SecurityConfig`, clearing it when `None`.
    pub fn set_security_config(&mut self, value: Option<AutoMlSecurityConfig>) {
        self.security_config = value;
    }

    /// Sets `SecurityConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_security_config(mut self, value: AutoMlSecurityConfig) -> Self {
        self.security_config = Some(value);
        self
    }
}

impl fmt::Display for AutoMlJobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CompletionCriteria", self.completion_criteria.as_ref())
            .field("SecurityConfig", self.security_config.as_ref())
            .finish()
    }
}

/// Input for the CreateAutoMLJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAutoMlJobRequest {
    #[serde(rename = "AutoMLJobName", skip_serializing_if = "Option::is_none")]
    auto_ml_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_data_config: Option<Vec<AutoMlChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_data_config: Option<AutoMlOutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem_type: Option<String>,
    #[serde(rename = "AutoMLJobObjective", skip_serializing_if = "Option::is_none")]
    auto_ml_job_objective: Option<AutoMlJobObjective>,
    #[serde(rename = "AutoMLJobConfig", skip_serializing_if = "Option::is_none")]
    auto_ml_job_config: Option<AutoMlJobConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generate_candidate_definitions_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl CreateAutoMlJobRequest {
    /// Creates a new `CreateAutoMlJobRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the job; must be unique per account and region.
    #[must_use]
    pub fn auto_ml_job_name(&self) -> Option<&str> {
        self.auto_ml_job_name.as_deref()
    }

    /// Replaces the value of `AutoMLJobName`, clearing it when `None`.
    pub fn set_auto_ml_job_name(&mut self, value: Option<String>) {
        self.auto_ml_job_name = value;
    }

    /// Sets `AutoMLJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_auto_ml_job_name(mut self, value: impl Into<String>) -> Self {
        self.auto_ml_job_name = Some(value.into());
        self
    }

    /// Input channels; similar to the ones used by CreateTrainingJob.
    #[must_use]
    pub fn input_data_config(&self) -> Option<&[AutoMlChannel]> {
        self.input_data_config.as_deref()
    }

    /// Replaces the whole `InputDataConfig` sequence, clearing it when `None`.
    pub fn set_input_data_config(&mut self, value: Option<Vec<AutoMlChannel>>) {
        self.input_data_config = value;
    }

    /// Appends to `InputDataConfig`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_input_data_config`](Self::set_input_data_config) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_input_data_config(mut self, items: impl IntoIterator<Item = AutoMlChannel>) -> Self {
        self.input_data_config.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn output_data_config(&self) -> Option<&AutoMlOutputDataConfig> {
        self.output_data_config.as_ref()
    }

    /// Replaces the value of `OutputDataConfig`, clearing it when `None`.
    pub fn set_output_data_config(&mut self, value: Option<AutoMlOutputDataConfig>) {
        self.output_data_config = value;
    }

    /// Sets `OutputDataConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_output_data_config(mut self, value: AutoMlOutputDataConfig) -> Self {
        self.output_data_config = Some(value);
        self
    }

    /// One of the `ProblemType` values; inferred from the data when absent.
    #[must_use]
    pub fn problem_type(&self) -> Option<&str> {
        self.problem_type.as_deref()
    }

    /// Replaces the value of `ProblemType`, clearing it when `None`.
    pub fn set_problem_type(&mut self, value: Option<String>) {
        self.problem_type = value;
    }

    /// Sets `ProblemType`, returning the record for chaining.
    #[must_use]
    pub fn with_problem_type(mut self, value: impl Into<String>) -> Self {
        self.problem_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn auto_ml_job_objective(&self) -> Option<&AutoMlJobObjective> {
        self.auto_ml_job_objective.as_ref()
    }

    /// Replaces the value of `AutoMLJobObjective`, clearing it when `None`.
    pub fn set_auto_ml_job_objective(&mut self, value: Option<AutoMlJobObjective>) {
        self.auto_ml_job_objective = value;
    }

    /// Sets `AutoMLJobObjective`, returning the record for chaining.
    #[must_use]
    pub fn with_auto_ml_job_objective(mut self, value: AutoMlJobObjective) -> Self {
        self.auto_ml_job_objective = Some(value);
        self
    }

    #[must_use]
    pub fn auto_ml_job_config(&self) -> Option<&AutoMlJobConfig> {
        self.auto_ml_job_config.as_ref()
    }

    /// Replaces the value of `AutoMLJobConfig`, clearing it when `None`.
    pub fn set_auto_ml_job_config(&mut self, value: Option<AutoMlJobConfig>) {
        self.auto_ml_job_config = value;
    }

    /// Sets `AutoMLJobConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_auto_ml_job_config(mut self, value: AutoMlJobConfig) -> Self {
        self.auto_ml_job_config = Some(value);
        self
    }

    /// Role the service assumes to access the data.
    #[must_use]
    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    /// Replaces the value of `RoleArn`, clearing it when `None`.
    pub fn set_role_arn(&mut self, value: Option<String>) {
        self.role_arn = value;
    }

    /// Sets `RoleArn`, returning the record for chaining.
    #[must_use]
    pub fn with_role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn generate_candidate_definitions_only(&self) -> Option<bool> {
        self.generate_candidate_definitions_only
    }

    /// Replaces the value of `GenerateCandidateDefinitionsOnly`, clearing it when `None`.
    pub fn set_generate_candidate_definitions_only(&mut self, value: Option<bool>) {
        self.generate_candidate_definitions_only = value;
    }

    /// Sets `GenerateCandidateDefinitionsOnly`, returning the record for chaining.
    #[must_use]
    pub fn with_generate_candidate_definitions_only(mut self, value: bool) -> Self {
        self.generate_candidate_definitions_only = Some(value);
        self
    }

    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// Replaces the whole `Tags` sequence, clearing it when `None`.
    pub fn set_tags(&mut self, value: Option<Vec<Tag>>) {
        self.tags = value;
    }

    /// Appends to `Tags`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_tags`](Self::set_tags) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_tags(mut self, items: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(items);
        self
    }
}

impl fmt::Display for CreateAutoMlJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("AutoMLJobName", self.auto_ml_job_name.as_deref())
            .field_list("InputDataConfig", self.input_data_config.as_deref())
            .field("OutputDataConfig", self.output_data_config.as_ref())
            .field("ProblemType", self.problem_type.as_deref())
            .field("AutoMLJobObjective", self.auto_ml_job_objective.as_ref())
            .field("AutoMLJobConfig", self.auto_ml_job_config.as_ref())
            .field("RoleArn", self.role_arn.as_deref())
            .field("GenerateCandidateDefinitionsOnly", self.generate_candidate_definitions_only.as_ref())
            .field_list("Tags", self.tags.as_deref())
            .finish()
    }
}

/// Output of the CreateAutoMLJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAutoMlJobResult {
    #[serde(rename = "AutoMLJobArn", skip_serializing_if = "Option::is_none")]
    auto_ml_job_arn: Option<String>,
}

impl CreateAutoMlJobResult {
    /// Creates a new `CreateAutoMlJobResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ARN the service assigned to the job.
    #[must_use]
    pub fn auto_ml_job_arn(&self) -> Option<&str> {
        self.auto_ml_job_arn.as_deref()
    }

    /// Replaces the value of `AutoMLJobArn`, clearing it when `None`.
    pub fn set_auto_ml_job_arn(&mut self, value: Option<String>) {
        self.auto_ml_job_arn = value;
    }

    /// Sets `AutoMLJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_auto_ml_job_arn(mut self, value: impl Into<String>) -> Self {
        self.auto_ml_job_arn = Some(value.into());
        self
    }
}

impl fmt::Display for CreateAutoMlJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("AutoMLJobArn", self.auto_ml_job_arn.as_deref())
            .finish()
    }
}

/// Value a candidate achieved for the job objective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinalAutoMlJobObjectiveMetric {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    metric_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f32>,
}

impl FinalAutoMlJobObjectiveMetric {
    /// Creates a new `FinalAutoMlJobObjectiveMetric` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `AutoMlJobObjectiveType` values.
    #[must_use]
    pub fn metric_type(&self) -> Option<&str> {
        self.metric_type.as_deref()
    }

    /// Replaces the value of `Type`, clearing it when `None`.
    pub fn set_metric_type(&mut self, value: Option<String>) {
        self.metric_type = value;
    }

    /// Sets `Type`, returning the record for chaining.
    #[must_use]
    pub fn with_metric_type(mut self, value: impl Into<String>) -> Self {
        self.metric_type = Some(value.into());
        self
    }

    /// One of the `AutoMlMetricEnum` values.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Replaces the value of `MetricName`, clearing it when `None`.
    pub fn set_metric_name(&mut self, value: Option<String>) {
        self.metric_name = value;
    }

    /// Sets `MetricName`, returning the record for chaining.
    #[must_use]
    pub fn with_metric_name(mut self, value: impl Into<String>) -> Self {
        self.metric_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> Option<f32> {
        self.value
    }

    /// Replaces the value of `Value`, clearing it when `None`.
    pub fn set_value(&mut self, value: Option<f32>) {
        self.value = value;
    }

    /// Sets `Value`, returning the record for chaining.
    #[must_use]
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }
}

impl fmt::Display for FinalAutoMlJobObjectiveMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Type", self.metric_type.as_deref())
            .field("MetricName", self.metric_name.as_deref())
            .field("Value", self.value.as_ref())
            .finish()
    }
}

impl Hash for FinalAutoMlJobObjectiveMetric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.metric_type.hash(state);
        self.metric_name.hash(state);
        self.value.map(f32::to_bits).hash(state);
    }
}

/// One job run while producing a candidate.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlCandidateStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_step_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_step_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_step_name: Option<String>,
}

impl AutoMlCandidateStep {
    /// Creates a new `AutoMlCandidateStep` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `CandidateStepType` values.
    #[must_use]
    pub fn candidate_step_type(&self) -> Option<&str> {
        self.candidate_step_type.as_deref()
    }

    /// Replaces the value of `CandidateStepType`, clearing it when `None`.
    pub fn set_candidate_step_type(&mut self, value: Option<String>) {
        self.candidate_step_type = value;
    }

    /// Sets `CandidateStepType`, returning the record for chaining.
    #[must_use]
    pub fn with_candidate_step_type(mut self, value: impl Into<String>) -> Self {
        self.candidate_step_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn candidate_step_arn(&self) -> Option<&str> {
        self.candidate_step_arn.as_deref()
    }

    /// Replaces the value of `CandidateStepArn`, clearing it when `None`.
    pub fn set_candidate_step_arn(&mut self, value: Option<String>) {
        self.candidate_step_arn = value;
    }

    /// Sets `CandidateStepArn`, returning the record for chaining.
    #[must_use]
    pub fn with_candidate_step_arn(mut self, value: impl Into<String>) -> Self {
        self.candidate_step_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn candidate_step_name(&self) -> Option<&str> {
        self.candidate_step_name.as_deref()
    }

    /// Replaces the value of `CandidateStepName`, clearing it when `None`.
    pub fn set_candidate_step_name(&mut self, value: Option<String>) {
        self.candidate_step_name = value;
    }

    /// Sets `CandidateStepName`, returning the record for chaining.
    #[must_use]
    pub fn with_candidate_step_name(mut self, value: impl Into<String>) -> Self {
        self.candidate_step_name = Some(value.into());
        self
    }
}

impl fmt::Display for AutoMlCandidateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CandidateStepType", self.candidate_step_type.as_deref())
            .field("CandidateStepArn", self.candidate_step_arn.as_deref())
            .field("CandidateStepName", self.candidate_step_name.as_deref())
            .finish()
    }
}

/// Container that serves inference for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlContainerDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<HashMap<String, String>>,
}

impl AutoMlContainerDefinition {
    /// Creates a new `AutoMlContainerDefinition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ECR image the container runs.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Replaces the value of `Image`, clearing it when `None`.
    pub fn set_image(&mut self, value: Option<String>) {
        self.image = value;
    }

    /// Sets `Image`, returning the record for chaining.
    #[must_use]
    pub fn with_image(mut self, value: impl Into<String>) -> Self {
        self.image = Some(value.into());
        self
    }

    /// S3 location of the model artifacts.
    #[must_use]
    pub fn model_data_url(&self) -> Option<&str> {
        self.model_data_url.as_deref()
    }

    /// Replaces the value of `ModelDataUrl`, clearing it when `None`.
    pub fn set_model_data_url(&mut self, value: Option<String>) {
        self.model_data_url = value;
    }

    /// Sets `ModelDataUrl`, returning the record for chaining.
    #[must_use]
    pub fn with_model_data_url(mut self, value: impl Into<String>) -> Self {
        self.model_data_url = Some(value.into());
        self
    }

    #[must_use]
    pub fn environment(&self) -> Option<&HashMap<String, String>> {
        self.environment.as_ref()
    }

    /// Replaces the whole `Environment` map, clearing it when `None`.
    pub fn set_environment(&mut self, value: Option<HashMap<String, String>>) {
        self.environment = value;
    }

    /// Sets `Environment` wholesale, returning the record for chaining.
    #[must_use]
    pub fn with_environment(mut self, value: HashMap<String, String>) -> Self {
        self.environment = Some(value);
        self
    }

    /// Adds a single `Environment` entry, initializing the map if absent.
    ///
    /// # Errors
    /// Returns [`SageMakerError::DuplicateKey`] when the key is already
    /// present; the existing entry is left untouched.
    pub fn add_environment_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, SageMakerError> {
        let key = key.into();
        let map = self.environment.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(SageMakerError::duplicate_key(key));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets `Environment` to absent.
    pub fn clear_environment_entries(&mut self) {
        self.environment = None;
    }
}

impl fmt::Display for AutoMlContainerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Image", self.image.as_deref())
            .field("ModelDataUrl", self.model_data_url.as_deref())
            .field_map("Environment", self.environment.as_ref())
            .finish()
    }
}

impl Hash for AutoMlContainerDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.image.hash(state);
        self.model_data_url.hash(state);
        match &self.environment {
            None => state.write_u8(0),
            Some(map) => {
                state.write_u8(1);
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                entries.hash(state);
            }
        }
    }
}

/// A candidate model produced by an AutoML job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoMlCandidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_name: Option<String>,
    #[serde(rename = "FinalAutoMLJobObjectiveMetric", skip_serializing_if = "Option::is_none")]
    final_auto_ml_job_objective_metric: Option<FinalAutoMlJobObjectiveMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    objective_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_steps: Option<Vec<AutoMlCandidateStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inference_containers: Option<Vec<AutoMlContainerDefinition>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_reason: Option<String>,
}

impl AutoMlCandidate {
    /// Creates a new `AutoMlCandidate` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn candidate_name(&self) -> Option<&str> {
        self.candidate_name.as_deref()
    }

    /// Replaces the value of `CandidateName`, clearing it when `None`.
    pub fn set_candidate_name(&mut self, value: Option<String>) {
        self.candidate_name = value;
    }

    /// Sets `CandidateName`, returning the record for chaining.
    #[must_use]
    pub fn with_candidate_name(mut self, value: impl Into<String>) -> Self {
        self.candidate_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn final_auto_ml_job_objective_metric(&self) -> Option<&FinalAutoMlJobObjectiveMetric> {
        self.final_auto_ml_job_objective_metric.as_ref()
    }

    /// Replaces the value of `FinalAutoMLJobObjectiveMetric`, clearing it when `None`.
    pub fn set_final_auto_ml_job_objective_metric(&mut self, value: Option<FinalAutoMlJobObjectiveMetric>) {
        self.final_auto_ml_job_objective_metric = value;
    }

    /// Sets `FinalAutoMLJobObjectiveMetric`, returning the record for chaining.
    #[must_use]
    pub fn with_final_auto_ml_job_objective_metric(mut self, value: FinalAutoMlJobObjectiveMetric) -> Self {
        self.final_auto_ml_job_objective_metric = Some(value);
        self
    }

    /// One of the `ObjectiveStatus` values.
    #[must_use]
    pub fn objective_status(&self) -> Option<&str> {
        self.objective_status.as_deref()
    }

    /// Replaces the value of `ObjectiveStatus`, clearing it when `None`.
    pub fn set_objective_status(&mut self, value: Option<String>) {
        self.objective_status = value;
    }

    /// Sets `ObjectiveStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_objective_status(mut self, value: impl Into<String>) -> Self {
        self.objective_status = Some(value.into());
        self
    }

    /// Steps in the order they ran.
    #[must_use]
    pub fn candidate_steps(&self) -> Option<&[AutoMlCandidateStep]> {
        self.candidate_steps.as_deref()
    }

    /// Replaces the whole `CandidateSteps` sequence, clearing it when `None`.
    pub fn set_candidate_steps(&mut self, value: Option<Vec<AutoMlCandidateStep>>) {
        self.candidate_steps = value;
    }

    /// Appends to `CandidateSteps`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_candidate_steps`](Self::set_candidate_steps) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_candidate_steps(mut self, items: impl IntoIterator<Item = AutoMlCandidateStep>) -> Self {
        self.candidate_steps.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// One of the `CandidateStatus` values.
    #[must_use]
    pub fn candidate_status(&self) -> Option<&str> {
        self.candidate_status.as_deref()
    }

    /// Replaces the value of `CandidateStatus`, clearing it when `None`.
    pub fn set_candidate_status(&mut self, value: Option<String>) {
        self.candidate_status = value;
    }

    /// Sets `CandidateStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_candidate_status(mut self, value: impl Into<String>) -> Self {
        self.candidate_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn inference_containers(&self) -> Option<&[AutoMlContainerDefinition]> {
        self.inference_containers.as_deref()
    }

    /// Replaces the whole `InferenceContainers` sequence, clearing it when `None`.
    pub fn set_inference_containers(&mut self, value: Option<Vec<AutoMlContainerDefinition>>) {
        self.inference_containers = value;
    }

    /// Appends to `InferenceContainers`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_inference_containers`](Self::set_inference_containers) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_inference_containers(mut self, items: impl IntoIterator<Item = AutoMlContainerDefinition>) -> Self {
        self.inference_containers.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.creation_time
    }

    /// Replaces the value of `CreationTime`, clearing it when `None`.
    pub fn set_creation_time(&mut self, value: Option<DateTime<Utc>>) {
        self.creation_time = value;
    }

    /// Sets `CreationTime`, returning the record for chaining.
    #[must_use]
    pub fn with_creation_time(mut self, value: DateTime<Utc>) -> Self {
        self.creation_time = Some(value);
        self
    }

    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Replaces the value of `EndTime`, clearing it when `None`.
    pub fn set_end_time(&mut self, value: Option<DateTime<Utc>>) {
        self.end_time = value;
    }

    /// Sets `EndTime`, returning the record for chaining.
    #[must_use]
    pub fn with_end_time(mut self, value: DateTime<Utc>) -> Self {
        self.end_time = Some(value);
        self
    }

    #[must_use]
    pub fn last_modified_time(&self) -> Option<DateTime<Utc>> {
        self.last_modified_time
    }

    /// Replaces the value of `LastModifiedTime`, clearing it when `None`.
    pub fn set_last_modified_time(&mut self, value: Option<DateTime<Utc>>) {
        self.last_modified_time = value;
    }

    /// Sets `LastModifiedTime`, returning the record for chaining.
    #[must_use]
    pub fn with_last_modified_time(mut self, value: DateTime<Utc>) -> Self {
        self.last_modified_time = Some(value);
        self
    }

    /// Set only when the candidate failed.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// Replaces the value of `FailureReason`, clearing it when `None`.
    pub fn set_failure_reason(&mut self, value: Option<String>) {
        self.failure_reason = value;
    }

    /// Sets `FailureReason`, returning the record for chaining.
    #[must_use]
    pub fn with_failure_reason(mut self, value: impl Into<String>) -> Self {
        self.failure_reason = Some(value.into());
        self
    }
}

impl fmt::Display for AutoMlCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CandidateName", self.candidate_name.as_deref())
            .field("FinalAutoMLJobObjectiveMetric", self.final_auto_ml_job_objective_metric.as_ref())
            .field("ObjectiveStatus", self.objective_status.as_deref())
            .field_list("CandidateSteps", self.candidate_steps.as_deref())
            .field("CandidateStatus", self.candidate_status.as_deref())
            .field_list("InferenceContainers", self.inference_containers.as_deref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("EndTime", self.end_time.as_ref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .field("FailureReason", self.failure_reason.as_deref())
            .finish()
    }
}

/// Input for the ListCandidatesForAutoMLJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCandidatesForAutoMlJobRequest {
    #[serde(rename = "AutoMLJobName", skip_serializing_if = "Option::is_none")]
    auto_ml_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_equals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_name_equals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListCandidatesForAutoMlJobRequest {
    /// Creates a new `ListCandidatesForAutoMlJobRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn auto_ml_job_name(&self) -> Option<&str> {
        self.auto_ml_job_name.as_deref()
    }

    /// Replaces the value of `AutoMLJobName`, clearing it when `None`.
    pub fn set_auto_ml_job_name(&mut self, value: Option<String>) {
        self.auto_ml_job_name = value;
    }

    /// Sets `AutoMLJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_auto_ml_job_name(mut self, value: impl Into<String>) -> Self {
        self.auto_ml_job_name = Some(value.into());
        self
    }

    /// Keeps only candidates with this `CandidateStatus`.
    #[must_use]
    pub fn status_equals(&self) -> Option<&str> {
        self.status_equals.as_deref()
    }

    /// Replaces the value of `StatusEquals`, clearing it when `None`.
    pub fn set_status_equals(&mut self, value: Option<String>) {
        self.status_equals = value;
    }

    /// Sets `StatusEquals`, returning the record for chaining.
    #[must_use]
    pub fn with_status_equals(mut self, value: impl Into<String>) -> Self {
        self.status_equals = Some(value.into());
        self
    }

    #[must_use]
    pub fn candidate_name_equals(&self) -> Option<&str> {
        self.candidate_name_equals.as_deref()
    }

    /// Replaces the value of `CandidateNameEquals`, clearing it when `None`.
    pub fn set_candidate_name_equals(&mut self, value: Option<String>) {
        self.candidate_name_equals = value;
    }

    /// Sets `CandidateNameEquals`, returning the record for chaining.
    #[must_use]
    pub fn with_candidate_name_equals(mut self, value: impl Into<String>) -> Self {
        self.candidate_name_equals = Some(value.into());
        self
    }

    /// One of the `SortOrder` values.
    #[must_use]
    pub fn sort_order(&self) -> Option<&str> {
        self.sort_order.as_deref()
    }

    /// Replaces the value of `SortOrder`, clearing it when `None`.
    pub fn set_sort_order(&mut self, value: Option<String>) {
        self.sort_order = value;
    }

    /// Sets `SortOrder`, returning the record for chaining.
    #[must_use]
    pub fn with_sort_order(mut self, value: impl Into<String>) -> Self {
        self.sort_order = Some(value.into());
        self
    }

    /// One of the `CandidateSortBy` values.
    #[must_use]
    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    /// Replaces the value of `SortBy`, clearing it when `None`.
    pub fn set_sort_by(&mut self, value: Option<String>) {
        self.sort_by = value;
    }

    /// Sets `SortBy`, returning the record for chaining.
    #[must_use]
    pub fn with_sort_by(mut self, value: impl Into<String>) -> Self {
        self.sort_by = Some(value.into());
        self
    }

    /// Page size, between 1 and 100.
    #[must_use]
    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    /// Replaces the value of `MaxResults`, clearing it when `None`.
    pub fn set_max_results(&mut self, value: Option<i32>) {
        self.max_results = value;
    }

    /// Sets `MaxResults`, returning the record for chaining.
    #[must_use]
    pub fn with_max_results(mut self, value: i32) -> Self {
        self.max_results = Some(value);
        self
    }

    /// Continuation token from a previous page.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Replaces the value of `NextToken`, clearing it when `None`.
    pub fn set_next_token(&mut self, value: Option<String>) {
        self.next_token = value;
    }

    /// Sets `NextToken`, returning the record for chaining.
    #[must_use]
    pub fn with_next_token(mut self, value: impl Into<String>) -> Self {
        self.next_token = Some(value.into());
        self
    }
}

impl fmt::Display for ListCandidatesForAutoMlJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("AutoMLJobName", self.auto_ml_job_name.as_deref())
            .field("StatusEquals", self.status_equals.as_deref())
            .field("CandidateNameEquals", self.candidate_name_equals.as_deref())
            .field("SortOrder", self.sort_order.as_deref())
            .field("SortBy", self.sort_by.as_deref())
            .field("MaxResults", self.max_results.as_ref())
            .field("NextToken", self.next_token.as_deref())
            .finish()
    }
}

/// Output of the ListCandidatesForAutoMLJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCandidatesForAutoMlJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<Vec<AutoMlCandidate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListCandidatesForAutoMlJobResult {
    /// Creates a new `ListCandidatesForAutoMlJobResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn candidates(&self) -> Option<&[AutoMlCandidate]> {
        self.candidates.as_deref()
    }

    /// Replaces the whole `Candidates` sequence, clearing it when `None`.
    pub fn set_candidates(&mut self, value: Option<Vec<AutoMlCandidate>>) {
        self.candidates = value;
    }

    /// Appends to `Candidates`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_candidates`](Self::set_candidates) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_candidates(mut self, items: impl IntoIterator<Item = AutoMlCandidate>) -> Self {
        self.candidates.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// Present when more results are available.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Replaces the value of `NextToken`, clearing it when `None`.
    pub fn set_next_token(&mut self, value: Option<String>) {
        self.next_token = value;
    }

    /// Sets `NextToken`, returning the record for chaining.
    #[must_use]
    pub fn with_next_token(mut self, value: impl Into<String>) -> Self {
        self.next_token = Some(value.into());
        self
    }
}

impl fmt::Display for ListCandidatesForAutoMlJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("Candidates", self.candidates.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagemaker_types::ProblemType;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher as _;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_request_uses_service_wire_casing() {
        let request = CreateAutoMlJobRequest::new()
            .with_auto_ml_job_name("churn")
            .with_problem_type(ProblemType::BinaryClassification)
            .with_role_arn("arn:aws:iam::123456789012:role/automl");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["AutoMLJobName"], "churn");
        assert_eq!(json["ProblemType"], "BinaryClassification");
        assert_eq!(json["RoleArn"], "arn:aws:iam::123456789012:role/automl");
        assert!(json.get("AutoMLJobObjective").is_none());
    }

    #[test]
    fn test_enum_and_raw_string_build_equal_records() {
        let typed = CreateAutoMlJobRequest::new().with_problem_type(ProblemType::Regression);
        let raw = CreateAutoMlJobRequest::new().with_problem_type("Regression");
        assert_eq!(typed, raw);
        assert_eq!(typed.problem_type(), Some("Regression"));
    }

    #[test]
    fn test_metric_value_hashes_by_bit_pattern() {
        let a = FinalAutoMlJobObjectiveMetric::new()
            .with_metric_name("F1")
            .with_value(0.82);
        let b = FinalAutoMlJobObjectiveMetric::new()
            .with_metric_name("F1")
            .with_value(0.82);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, b.clone().with_value(0.83));
    }

    #[test]
    fn test_container_environment_rejects_duplicate_keys() {
        let mut container = AutoMlContainerDefinition::new();
        container.add_environment_entry("MODEL_DIR", "/opt/ml/model").unwrap();
        let err = container
            .add_environment_entry("MODEL_DIR", "/tmp/model")
            .unwrap_err();
        assert_eq!(err.to_string(), "Duplicated keys (MODEL_DIR) are provided");
        // The original entry survives the rejected insert.
        assert_eq!(
            container.environment().unwrap().get("MODEL_DIR").map(String::as_str),
            Some("/opt/ml/model"),
        );
        container.clear_environment_entries();
        assert_eq!(container.environment(), None);
    }

    #[test]
    fn test_with_input_data_config_appends() {
        let channel = |name: &str| {
            AutoMlChannel::new().with_target_attribute_name(name)
        };
        let request = CreateAutoMlJobRequest::new()
            .with_input_data_config([channel("label")])
            .with_input_data_config([channel("label2")]);
        assert_eq!(request.input_data_config().unwrap().len(), 2);
    }
}
