//! Shapes for the CreateProcessingJob operation.

use crate::common::{ExperimentConfig, NetworkConfig, Tag};
use sagemaker_types::{SageMakerError, ShapeFormatter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// S3 location a processing container reads from.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingS3Input {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_distribution_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_compression_type: Option<String>,
}

impl ProcessingS3Input {
    /// Creates a new `ProcessingS3Input` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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

    /// Path inside the container the data is made available at.
    #[must_use]
    pub fn local_path(&self) -> Option<&str> {
        self.local_path.as_deref()
    }

    /// Replaces the value of `LocalPath`, clearing it when `None`.
    pub fn set_local_path(&mut self, value: Option<String>) {
        self.local_path = value;
    }

    /// Sets `LocalPath`, returning the record for chaining.
    #[must_use]
    pub fn with_local_path(mut self, value: impl Into<String>) -> Self {
        self.local_path = Some(value.into());
        self
    }

    /// One of the `ProcessingS3DataType` values.
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

    /// One of the `ProcessingS3InputMode` values.
    #[must_use]
    pub fn s3_input_mode(&self) -> Option<&str> {
        self.s3_input_mode.as_deref()
    }

    /// Replaces the value of `S3InputMode`, clearing it when `None`.
    pub fn set_s3_input_mode(&mut self, value: Option<String>) {
        self.s3_input_mode = value;
    }

    /// Sets `S3InputMode`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_input_mode(mut self, value: impl Into<String>) -> Self {
        self.s3_input_mode = Some(value.into());
        self
    }

    /// One of the `ProcessingS3DataDistributionType` values.
    #[must_use]
    pub fn s3_data_distribution_type(&self) -> Option<&str> {
        self.s3_data_distribution_type.as_deref()
    }

    /// Replaces the value of `S3DataDistributionType`, clearing it when `None`.
    pub fn set_s3_data_distribution_type(&mut self, value: Option<String>) {
        self.s3_data_distribution_type = value;
    }

    /// Sets `S3DataDistributionType`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_data_distribution_type(mut self, value: impl Into<String>) -> Self {
        self.s3_data_distribution_type = Some(value.into());
        self
    }

    /// One of the `ProcessingS3CompressionType` values.
    #[must_use]
    pub fn s3_compression_type(&self) -> Option<&str> {
        self.s3_compression_type.as_deref()
    }

    /// Replaces the value of `S3CompressionType`, clearing it when `None`.
    pub fn set_s3_compression_type(&mut self, value: Option<String>) {
        self.s3_compression_type = value;
    }

    /// Sets `S3CompressionType`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_compression_type(mut self, value: impl Into<String>) -> Self {
        self.s3_compression_type = Some(value.into());
        self
    }
}

impl fmt::Display for ProcessingS3Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", self.s3_uri.as_deref())
            .field("LocalPath", self.local_path.as_deref())
            .field("S3DataType", self.s3_data_type.as_deref())
            .field("S3InputMode", self.s3_input_mode.as_deref())
            .field("S3DataDistributionType", self.s3_data_distribution_type.as_deref())
            .field("S3CompressionType", self.s3_compression_type.as_deref())
            .finish()
    }
}

/// One input a processing job downloads.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    input_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_input: Option<ProcessingS3Input>,
}

impl ProcessingInput {
    /// Creates a new `ProcessingInput` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input_name(&self) -> Option<&str> {
        self.input_name.as_deref()
    }

    /// Replaces the value of `InputName`, clearing it when `None`.
    pub fn set_input_name(&mut self, value: Option<String>) {
        self.input_name = value;
    }

    /// Sets `InputName`, returning the record for chaining.
    #[must_use]
    pub fn with_input_name(mut self, value: impl Into<String>) -> Self {
        self.input_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn s3_input(&self) -> Option<&ProcessingS3Input> {
        self.s3_input.as_ref()
    }

    /// Replaces the value of `S3Input`, clearing it when `None`.
    pub fn set_s3_input(&mut self, value: Option<ProcessingS3Input>) {
        self.s3_input = value;
    }

    /// Sets `S3Input`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_input(mut self, value: ProcessingS3Input) -> Self {
        self.s3_input = Some(value);
        self
    }
}

impl fmt::Display for ProcessingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InputName", self.input_name.as_deref())
            .field("S3Input", self.s3_input.as_ref())
            .finish()
    }
}

/// S3 location a processing container writes to.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingS3Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_upload_mode: Option<String>,
}

impl ProcessingS3Output {
    /// Creates a new `ProcessingS3Output` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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

    /// Path inside the container the job uploads from.
    #[must_use]
    pub fn local_path(&self) -> Option<&str> {
        self.local_path.as_deref()
    }

    /// Replaces the value of `LocalPath`, clearing it when `None`.
    pub fn set_local_path(&mut self, value: Option<String>) {
        self.local_path = value;
    }

    /// Sets `LocalPath`, returning the record for chaining.
    #[must_use]
    pub fn with_local_path(mut self, value: impl Into<String>) -> Self {
        self.local_path = Some(value.into());
        self
    }

    /// One of the `ProcessingS3UploadMode` values.
    #[must_use]
    pub fn s3_upload_mode(&self) -> Option<&str> {
        self.s3_upload_mode.as_deref()
    }

    /// Replaces the value of `S3UploadMode`, clearing it when `None`.
    pub fn set_s3_upload_mode(&mut self, value: Option<String>) {
        self.s3_upload_mode = value;
    }

    /// Sets `S3UploadMode`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_upload_mode(mut self, value: impl Into<String>) -> Self {
        self.s3_upload_mode = Some(value.into());
        self
    }
}

impl fmt::Display for ProcessingS3Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", self.s3_uri.as_deref())
            .field("LocalPath", self.local_path.as_deref())
            .field("S3UploadMode", self.s3_upload_mode.as_deref())
            .finish()
    }
}

/// One output a processing job uploads.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output: Option<ProcessingS3Output>,
}

impl ProcessingOutput {
    /// Creates a new `ProcessingOutput` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    /// Replaces the value of `OutputName`, clearing it when `None`.
    pub fn set_output_name(&mut self, value: Option<String>) {
        self.output_name = value;
    }

    /// Sets `OutputName`, returning the record for chaining.
    #[must_use]
    pub fn with_output_name(mut self, value: impl Into<String>) -> Self {
        self.output_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn s3_output(&self) -> Option<&ProcessingS3Output> {
        self.s3_output.as_ref()
    }

    /// Replaces the value of `S3Output`, clearing it when `None`.
    pub fn set_s3_output(&mut self, value: Option<ProcessingS3Output>) {
        self.s3_output = value;
    }

    /// Sets `S3Output`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_output(mut self, value: ProcessingS3Output) -> Self {
        self.s3_output = Some(value);
        self
    }
}

impl fmt::Display for ProcessingOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OutputName", self.output_name.as_deref())
            .field("S3Output", self.s3_output.as_ref())
            .finish()
    }
}

/// All outputs of a processing job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    outputs: Option<Vec<ProcessingOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
}

impl ProcessingOutputConfig {
    /// Creates a new `ProcessingOutputConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn outputs(&self) -> Option<&[ProcessingOutput]> {
        self.outputs.as_deref()
    }

    /// Replaces the whole `Outputs` sequence, clearing it when `None`.
    pub fn set_outputs(&mut self, value: Option<Vec<ProcessingOutput>>) {
        self.outputs = value;
    }

    /// Appends to `Outputs`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_outputs`](Self::set_outputs) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_outputs(mut self, items: impl IntoIterator<Item = ProcessingOutput>) -> Self {
        self.outputs.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// KMS key that encrypts the outputs at rest.
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
}

impl fmt::Display for ProcessingOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("Outputs", self.outputs.as_deref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .finish()
    }
}

/// Instances backing a processing job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingClusterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume_kms_key_id: Option<String>,
}

impl ProcessingClusterConfig {
    /// Creates a new `ProcessingClusterConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn instance_count(&self) -> Option<i32> {
        self.instance_count
    }

    /// Replaces the value of `InstanceCount`, clearing it when `None`.
    pub fn set_instance_count(&mut self, value: Option<i32>) {
        self.instance_count = value;
    }

    /// Sets `InstanceCount`, returning the record for chaining.
    #[must_use]
    pub fn with_instance_count(mut self, value: i32) -> Self {
        self.instance_count = Some(value);
        self
    }

    /// One of the `ProcessingInstanceType` values.
    #[must_use]
    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    /// Replaces the value of `InstanceType`, clearing it when `None`.
    pub fn set_instance_type(&mut self, value: Option<String>) {
        self.instance_type = value;
    }

    /// Sets `InstanceType`, returning the record for chaining.
    #[must_use]
    pub fn with_instance_type(mut self, value: impl Into<String>) -> Self {
        self.instance_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn volume_size_in_gb(&self) -> Option<i32> {
        self.volume_size_in_gb
    }

    /// Replaces the value of `VolumeSizeInGB`, clearing it when `None`.
    pub fn set_volume_size_in_gb(&mut self, value: Option<i32>) {
        self.volume_size_in_gb = value;
    }

    /// Sets `VolumeSizeInGB`, returning the record for chaining.
    #[must_use]
    pub fn with_volume_size_in_gb(mut self, value: i32) -> Self {
        self.volume_size_in_gb = Some(value);
        self
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
}

impl fmt::Display for ProcessingClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InstanceCount", self.instance_count.as_ref())
            .field("InstanceType", self.instance_type.as_deref())
            .field("VolumeSizeInGB", self.volume_size_in_gb.as_ref())
            .field("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .finish()
    }
}

/// Compute resources for a processing job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster_config: Option<ProcessingClusterConfig>,
}

impl ProcessingResources {
    /// Creates a new `ProcessingResources` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cluster_config(&self) -> Option<&ProcessingClusterConfig> {
        self.cluster_config.as_ref()
    }

    /// Replaces the value of `ClusterConfig`, clearing it when `None`.
    pub fn set_cluster_config(&mut self, value: Option<ProcessingClusterConfig>) {
        self.cluster_config = value;
    }

    /// Sets `ClusterConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_cluster_config(mut self, value: ProcessingClusterConfig) -> Self {
        self.cluster_config = Some(value);
        self
    }
}

impl fmt::Display for ProcessingResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ClusterConfig", self.cluster_config.as_ref())
            .finish()
    }
}

/// Time limit for a processing job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingStoppingCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_runtime_in_seconds: Option<i32>,
}

impl ProcessingStoppingCondition {
    /// Creates a new `ProcessingStoppingCondition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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
}

impl fmt::Display for ProcessingStoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxRuntimeInSeconds", self.max_runtime_in_seconds.as_ref())
            .finish()
    }
}

/// Container a processing job runs.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    image_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_entrypoint: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_arguments: Option<Vec<String>>,
}

impl AppSpecification {
    /// Creates a new `AppSpecification` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn image_uri(&self) -> Option<&str> {
        self.image_uri.as_deref()
    }

    /// Replaces the value of `ImageUri`, clearing it when `None`.
    pub fn set_image_uri(&mut self, value: Option<String>) {
        self.image_uri = value;
    }

    /// Sets `ImageUri`, returning the record for chaining.
    #[must_use]
    pub fn with_image_uri(mut self, value: impl Into<String>) -> Self {
        self.image_uri = Some(value.into());
        self
    }

    /// Entrypoint override for the container.
    #[must_use]
    pub fn container_entrypoint(&self) -> Option<&[String]> {
        self.container_entrypoint.as_deref()
    }

    /// Replaces the whole `ContainerEntrypoint` sequence, clearing it when `None`.
    pub fn set_container_entrypoint(&mut self, value: Option<Vec<String>>) {
        self.container_entrypoint = value;
    }

    /// Appends to `ContainerEntrypoint`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_container_entrypoint`](Self::set_container_entrypoint) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_container_entrypoint<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.container_entrypoint
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// Arguments passed to the entrypoint.
    #[must_use]
    pub fn container_arguments(&self) -> Option<&[String]> {
        self.container_arguments.as_deref()
    }

    /// Replaces the whole `ContainerArguments` sequence, clearing it when `None`.
    pub fn set_container_arguments(&mut self, value: Option<Vec<String>>) {
        self.container_arguments = value;
    }

    /// Appends to `ContainerArguments`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_container_arguments`](Self::set_container_arguments) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_container_arguments<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.container_arguments
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for AppSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ImageUri", self.image_uri.as_deref())
            .field_list("ContainerEntrypoint", self.container_entrypoint.as_deref())
            .field_list("ContainerArguments", self.container_arguments.as_deref())
            .finish()
    }
}

/// Input for the CreateProcessingJob operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProcessingJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_inputs: Option<Vec<ProcessingInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_output_config: Option<ProcessingOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_resources: Option<ProcessingResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopping_condition: Option<ProcessingStoppingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_specification: Option<AppSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network_config: Option<NetworkConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    experiment_config: Option<ExperimentConfig>,
}

impl CreateProcessingJobRequest {
    /// Creates a new `CreateProcessingJobRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn processing_inputs(&self) -> Option<&[ProcessingInput]> {
        self.processing_inputs.as_deref()
    }

    /// Replaces the whole `ProcessingInputs` sequence, clearing it when `None`.
    pub fn set_processing_inputs(&mut self, value: Option<Vec<ProcessingInput>>) {
        self.processing_inputs = value;
    }

    /// Appends to `ProcessingInputs`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_processing_inputs`](Self::set_processing_inputs) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_processing_inputs(mut self, items: impl IntoIterator<Item = ProcessingInput>) -> Self {
        self.processing_inputs.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn processing_output_config(&self) -> Option<&ProcessingOutputConfig> {
        self.processing_output_config.as_ref()
    }

    /// Replaces the value of `ProcessingOutputConfig`, clearing it when `None`.
    pub fn set_processing_output_config(&mut self, value: Option<ProcessingOutputConfig>) {
        self.processing_output_config = value;
    }

    /// Sets `ProcessingOutputConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_processing_output_config(mut self, value: ProcessingOutputConfig) -> Self {
        self.processing_output_config = Some(value);
        self
    }

    /// Name of the job; must be unique per account and region.
    #[must_use]
    pub fn processing_job_name(&self) -> Option<&str> {
        self.processing_job_name.as_deref()
    }

    /// Replaces the value of `ProcessingJobName`, clearing it when `None`.
    pub fn set_processing_job_name(&mut self, value: Option<String>) {
        self.processing_job_name = value;
    }

    /// Sets `ProcessingJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_processing_job_name(mut self, value: impl Into<String>) -> Self {
        self.processing_job_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn processing_resources(&self) -> Option<&ProcessingResources> {
        self.processing_resources.as_ref()
    }

    /// Replaces the value of `ProcessingResources`, clearing it when `None`.
    pub fn set_processing_resources(&mut self, value: Option<ProcessingResources>) {
        self.processing_resources = value;
    }

    /// Sets `ProcessingResources`, returning the record for chaining.
    #[must_use]
    pub fn with_processing_resources(mut self, value: ProcessingResources) -> Self {
        self.processing_resources = Some(value);
        self
    }

    #[must_use]
    pub fn stopping_condition(&self) -> Option<&ProcessingStoppingCondition> {
        self.stopping_condition.as_ref()
    }

    /// Replaces the value of `StoppingCondition`, clearing it when `None`.
    pub fn set_stopping_condition(&mut self, value: Option<ProcessingStoppingCondition>) {
        self.stopping_condition = value;
    }

    /// Sets `StoppingCondition`, returning the record for chaining.
    #[must_use]
    pub fn with_stopping_condition(mut self, value: ProcessingStoppingCondition) -> Self {
        self.stopping_condition = Some(value);
        self
    }

    #[must_use]
    pub fn app_specification(&self) -> Option<&AppSpecification> {
        self.app_specification.as_ref()
    }

    /// Replaces the value of `AppSpecification`, clearing it when `None`.
    pub fn set_app_specification(&mut self, value: Option<AppSpecification>) {
        self.app_specification = value;
    }

    /// Sets `AppSpecification`, returning the record for chaining.
    #[must_use]
    pub fn with_app_specification(mut self, value: AppSpecification) -> Self {
        self.app_specification = Some(value);
        self
    }

    /// Environment variables set in the container.
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

    #[must_use]
    pub fn network_config(&self) -> Option<&NetworkConfig> {
        self.network_config.as_ref()
    }

    /// Replaces the value of `NetworkConfig`, clearing it when `None`.
    pub fn set_network_config(&mut self, value: Option<NetworkConfig>) {
        self.network_config = value;
    }

    /// Sets `NetworkConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_network_config(mut self, value: NetworkConfig) -> Self {
        self.network_config = Some(value);
        self
    }

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

    #[must_use]
    pub fn experiment_config(&self) -> Option<&ExperimentConfig> {
        self.experiment_config.as_ref()
    }

    /// Replaces the value of `ExperimentConfig`, clearing it when `None`.
    pub fn set_experiment_config(&mut self, value: Option<ExperimentConfig>) {
        self.experiment_config = value;
    }

    /// Sets `ExperimentConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_experiment_config(mut self, value: ExperimentConfig) -> Self {
        self.experiment_config = Some(value);
        self
    }
}

impl fmt::Display for CreateProcessingJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("ProcessingInputs", self.processing_inputs.as_deref())
            .field("ProcessingOutputConfig", self.processing_output_config.as_ref())
            .field("ProcessingJobName", self.processing_job_name.as_deref())
            .field("ProcessingResources", self.processing_resources.as_ref())
            .field("StoppingCondition", self.stopping_condition.as_ref())
            .field("AppSpecification", self.app_specification.as_ref())
            .field_map("Environment", self.environment.as_ref())
            .field("NetworkConfig", self.network_config.as_ref())
            .field("RoleArn", self.role_arn.as_deref())
            .field_list("Tags", self.tags.as_deref())
            .field("ExperimentConfig", self.experiment_config.as_ref())
            .finish()
    }
}

impl Hash for CreateProcessingJobRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.processing_inputs.hash(state);
        self.processing_output_config.hash(state);
        self.processing_job_name.hash(state);
        self.processing_resources.hash(state);
        self.stopping_condition.hash(state);
        self.app_specification.hash(state);
        match &self.environment {
            None => state.write_u8(0),
            Some(map) => {
                state.write_u8(1);
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                entries.hash(state);
            }
        }
        self.network_config.hash(state);
        self.role_arn.hash(state);
        self.tags.hash(state);
        self.experiment_config.hash(state);
    }
}

/// Output of the CreateProcessingJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProcessingJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_job_arn: Option<String>,
}

impl CreateProcessingJobResult {
    /// Creates a new `CreateProcessingJobResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn processing_job_arn(&self) -> Option<&str> {
        self.processing_job_arn.as_deref()
    }

    /// Replaces the value of `ProcessingJobArn`, clearing it when `None`.
    pub fn set_processing_job_arn(&mut self, value: Option<String>) {
        self.processing_job_arn = value;
    }

    /// Sets `ProcessingJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_processing_job_arn(mut self, value: impl Into<String>) -> Self {
        self.processing_job_arn = Some(value.into());
        self
    }
}

impl fmt::Display for CreateProcessingJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ProcessingJobArn", self.processing_job_arn.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagemaker_types::{ProcessingInstanceType, SageMakerError};

    #[test]
    fn test_cluster_volume_size_keeps_service_casing() {
        let cluster = ProcessingClusterConfig::new()
            .with_instance_count(2)
            .with_instance_type(ProcessingInstanceType::MlM5Xlarge)
            .with_volume_size_in_gb(30);
        let json = serde_json::to_value(&cluster).unwrap();
        assert_eq!(json["VolumeSizeInGB"], 30);
        assert_eq!(json["InstanceType"], "ml.m5.xlarge");
    }

    #[test]
    fn test_environment_entry_rejects_duplicates() {
        let mut request = CreateProcessingJobRequest::new();
        request.add_environment_entry("MODE", "baseline").unwrap();
        let err = request.add_environment_entry("MODE", "candidate").unwrap_err();
        assert!(matches!(err, SageMakerError::DuplicateKey { .. }));
    }

    #[test]
    fn test_with_processing_inputs_appends() {
        let input = |name: &str| ProcessingInput::new().with_input_name(name);
        let request = CreateProcessingJobRequest::new()
            .with_processing_inputs([input("train")])
            .with_processing_inputs([input("validation")]);
        let inputs = request.processing_inputs().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[1].input_name(), Some("validation"));
    }
}
