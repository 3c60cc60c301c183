//! Shapes for the model monitoring operations.

use crate::common::NetworkConfig;
use chrono::{DateTime, Utc};
use sagemaker_types::{SageMakerError, ShapeFormatter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Cron schedule a monitoring job runs on.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_expression: Option<String>,
}

impl ScheduleConfig {
    /// Creates a new `ScheduleConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cron expression, e.g. `cron(0 * ? * * *)` for hourly.
    #[must_use]
    pub fn schedule_expression(&self) -> Option<&str> {
        self.schedule_expression.as_deref()
    }

    /// Replaces the value of `ScheduleExpression`, clearing it when `None`.
    pub fn set_schedule_expression(&mut self, value: Option<String>) {
        self.schedule_expression = value;
    }

    /// Sets `ScheduleExpression`, returning the record for chaining.
    #[must_use]
    pub fn with_schedule_expression(mut self, value: impl Into<String>) -> Self {
        self.schedule_expression = Some(value.into());
        self
    }
}

impl fmt::Display for ScheduleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ScheduleExpression", self.schedule_expression.as_deref())
            .finish()
    }
}

/// Baseline constraints the monitoring job validates against.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringConstraintsResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
}

impl MonitoringConstraintsResource {
    /// Creates a new `MonitoringConstraintsResource` with every field absent.
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
}

impl fmt::Display for MonitoringConstraintsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", self.s3_uri.as_deref())
            .finish()
    }
}

/// Baseline statistics the monitoring job compares against.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringStatisticsResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
}

impl MonitoringStatisticsResource {
    /// Creates a new `MonitoringStatisticsResource` with every field absent.
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
}

impl fmt::Display for MonitoringStatisticsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", self.s3_uri.as_deref())
            .finish()
    }
}

/// Baseline resources for a monitoring job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringBaselineConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    constraints_resource: Option<MonitoringConstraintsResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics_resource: Option<MonitoringStatisticsResource>,
}

impl MonitoringBaselineConfig {
    /// Creates a new `MonitoringBaselineConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn constraints_resource(&self) -> Option<&MonitoringConstraintsResource> {
        self.constraints_resource.as_ref()
    }

    /// Replaces the value of `ConstraintsResource`, clearing it when `None`.
    pub fn set_constraints_resource(&mut self, value: Option<MonitoringConstraintsResource>) {
        self.constraints_resource = value;
    }

    /// Sets `ConstraintsResource`, returning the record for chaining.
    #[must_use]
    pub fn with_constraints_resource(mut self, value: MonitoringConstraintsResource) -> Self {
        self.constraints_resource = Some(value);
        self
    }

    #[must_use]
    pub fn statistics_resource(&self) -> Option<&MonitoringStatisticsResource> {
        self.statistics_resource.as_ref()
    }

    /// Replaces the value of `StatisticsResource`, clearing it when `None`.
    pub fn set_statistics_resource(&mut self, value: Option<MonitoringStatisticsResource>) {
        self.statistics_resource = value;
    }

    /// Sets `StatisticsResource`, returning the record for chaining.
    #[must_use]
    pub fn with_statistics_resource(mut self, value: MonitoringStatisticsResource) -> Self {
        self.statistics_resource = Some(value);
        self
    }
}

impl fmt::Display for MonitoringBaselineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ConstraintsResource", self.constraints_resource.as_ref())
            .field("StatisticsResource", self.statistics_resource.as_ref())
            .finish()
    }
}

/// Endpoint whose captured traffic is monitored.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_distribution_type: Option<String>,
}

impl EndpointInput {
    /// Creates a new `EndpointInput` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn endpoint_name(&self) -> Option<&str> {
        self.endpoint_name.as_deref()
    }

    /// Replaces the value of `EndpointName`, clearing it when `None`.
    pub fn set_endpoint_name(&mut self, value: Option<String>) {
        self.endpoint_name = value;
    }

    /// Sets `EndpointName`, returning the record for chaining.
    #[must_use]
    pub fn with_endpoint_name(mut self, value: impl Into<String>) -> Self {
        self.endpoint_name = Some(value.into());
        self
    }

    /// Path inside the container the captured data is made available at.
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
}

impl fmt::Display for EndpointInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("EndpointName", self.endpoint_name.as_deref())
            .field("LocalPath", self.local_path.as_deref())
            .field("S3InputMode", self.s3_input_mode.as_deref())
            .field("S3DataDistributionType", self.s3_data_distribution_type.as_deref())
            .finish()
    }
}

/// One input of a monitoring job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_input: Option<EndpointInput>,
}

impl MonitoringInput {
    /// Creates a new `MonitoringInput` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn endpoint_input(&self) -> Option<&EndpointInput> {
        self.endpoint_input.as_ref()
    }

    /// Replaces the value of `EndpointInput`, clearing it when `None`.
    pub fn set_endpoint_input(&mut self, value: Option<EndpointInput>) {
        self.endpoint_input = value;
    }

    /// Sets `EndpointInput`, returning the record for chaining.
    #[must_use]
    pub fn with_endpoint_input(mut self, value: EndpointInput) -> Self {
        self.endpoint_input = Some(value);
        self
    }
}

impl fmt::Display for MonitoringInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("EndpointInput", self.endpoint_input.as_ref())
            .finish()
    }
}

/// S3 location monitoring results are uploaded to.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringS3Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_upload_mode: Option<String>,
}

impl MonitoringS3Output {
    /// Creates a new `MonitoringS3Output` with every field absent.
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

impl fmt::Display for MonitoringS3Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", self.s3_uri.as_deref())
            .field("LocalPath", self.local_path.as_deref())
            .field("S3UploadMode", self.s3_upload_mode.as_deref())
            .finish()
    }
}

/// One output of a monitoring job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output: Option<MonitoringS3Output>,
}

impl MonitoringOutput {
    /// Creates a new `MonitoringOutput` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn s3_output(&self) -> Option<&MonitoringS3Output> {
        self.s3_output.as_ref()
    }

    /// Replaces the value of `S3Output`, clearing it when `None`.
    pub fn set_s3_output(&mut self, value: Option<MonitoringS3Output>) {
        self.s3_output = value;
    }

    /// Sets `S3Output`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_output(mut self, value: MonitoringS3Output) -> Self {
        self.s3_output = Some(value);
        self
    }
}

impl fmt::Display for MonitoringOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Output", self.s3_output.as_ref())
            .finish()
    }
}

/// All outputs of a monitoring job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_outputs: Option<Vec<MonitoringOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
}

impl MonitoringOutputConfig {
    /// Creates a new `MonitoringOutputConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn monitoring_outputs(&self) -> Option<&[MonitoringOutput]> {
        self.monitoring_outputs.as_deref()
    }

    /// Replaces the whole `MonitoringOutputs` sequence, clearing it when `None`.
    pub fn set_monitoring_outputs(&mut self, value: Option<Vec<MonitoringOutput>>) {
        self.monitoring_outputs = value;
    }

    /// Appends to `MonitoringOutputs`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_monitoring_outputs`](Self::set_monitoring_outputs) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_monitoring_outputs(mut self, items: impl IntoIterator<Item = MonitoringOutput>) -> Self {
        self.monitoring_outputs.get_or_insert_with(Vec::new).extend(items);
        self
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
}

impl fmt::Display for MonitoringOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("MonitoringOutputs", self.monitoring_outputs.as_deref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .finish()
    }
}

/// Instances backing a monitoring job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringClusterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume_kms_key_id: Option<String>,
}

impl MonitoringClusterConfig {
    /// Creates a new `MonitoringClusterConfig` with every field absent.
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

impl fmt::Display for MonitoringClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InstanceCount", self.instance_count.as_ref())
            .field("InstanceType", self.instance_type.as_deref())
            .field("VolumeSizeInGB", self.volume_size_in_gb.as_ref())
            .field("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .finish()
    }
}

/// Compute resources for a monitoring job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster_config: Option<MonitoringClusterConfig>,
}

impl MonitoringResources {
    /// Creates a new `MonitoringResources` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cluster_config(&self) -> Option<&MonitoringClusterConfig> {
        self.cluster_config.as_ref()
    }

    /// Replaces the value of `ClusterConfig`, clearing it when `None`.
    pub fn set_cluster_config(&mut self, value: Option<MonitoringClusterConfig>) {
        self.cluster_config = value;
    }

    /// Sets `ClusterConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_cluster_config(mut self, value: MonitoringClusterConfig) -> Self {
        self.cluster_config = Some(value);
        self
    }
}

impl fmt::Display for MonitoringResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ClusterConfig", self.cluster_config.as_ref())
            .finish()
    }
}

/// Container a monitoring job runs.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringAppSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    image_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_entrypoint: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_preprocessor_source_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_analytics_processor_source_uri: Option<String>,
}

impl MonitoringAppSpecification {
    /// Creates a new `MonitoringAppSpecification` with every field absent.
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

    /// Script applied to each record before analysis.
    #[must_use]
    pub fn record_preprocessor_source_uri(&self) -> Option<&str> {
        self.record_preprocessor_source_uri.as_deref()
    }

    /// Replaces the value of `RecordPreprocessorSourceUri`, clearing it when `None`.
    pub fn set_record_preprocessor_source_uri(&mut self, value: Option<String>) {
        self.record_preprocessor_source_uri = value;
    }

    /// Sets `RecordPreprocessorSourceUri`, returning the record for chaining.
    #[must_use]
    pub fn with_record_preprocessor_source_uri(mut self, value: impl Into<String>) -> Self {
        self.record_preprocessor_source_uri = Some(value.into());
        self
    }

    /// Script applied after the built-in analysis.
    #[must_use]
    pub fn post_analytics_processor_source_uri(&self) -> Option<&str> {
        self.post_analytics_processor_source_uri.as_deref()
    }

    /// Replaces the value of `PostAnalyticsProcessorSourceUri`, clearing it when `None`.
    pub fn set_post_analytics_processor_source_uri(&mut self, value: Option<String>) {
        self.post_analytics_processor_source_uri = value;
    }

    /// Sets `PostAnalyticsProcessorSourceUri`, returning the record for chaining.
    #[must_use]
    pub fn with_post_analytics_processor_source_uri(mut self, value: impl Into<String>) -> Self {
        self.post_analytics_processor_source_uri = Some(value.into());
        self
    }
}

impl fmt::Display for MonitoringAppSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ImageUri", self.image_uri.as_deref())
            .field_list("ContainerEntrypoint", self.container_entrypoint.as_deref())
            .field_list("ContainerArguments", self.container_arguments.as_deref())
            .field("RecordPreprocessorSourceUri", self.record_preprocessor_source_uri.as_deref())
            .field("PostAnalyticsProcessorSourceUri", self.post_analytics_processor_source_uri.as_deref())
            .finish()
    }
}

/// Time limit for a monitoring job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringStoppingCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_runtime_in_seconds: Option<i32>,
}

impl MonitoringStoppingCondition {
    /// Creates a new `MonitoringStoppingCondition` with every field absent.
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

impl fmt::Display for MonitoringStoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxRuntimeInSeconds", self.max_runtime_in_seconds.as_ref())
            .finish()
    }
}

/// Everything one monitoring execution runs with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringJobDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    baseline_config: Option<MonitoringBaselineConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_inputs: Option<Vec<MonitoringInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_output_config: Option<MonitoringOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_resources: Option<MonitoringResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_app_specification: Option<MonitoringAppSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopping_condition: Option<MonitoringStoppingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network_config: Option<NetworkConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
}

impl MonitoringJobDefinition {
    /// Creates a new `MonitoringJobDefinition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn baseline_config(&self) -> Option<&MonitoringBaselineConfig> {
        self.baseline_config.as_ref()
    }

    /// Replaces the value of `BaselineConfig`, clearing it when `None`.
    pub fn set_baseline_config(&mut self, value: Option<MonitoringBaselineConfig>) {
        self.baseline_config = value;
    }

    /// Sets `BaselineConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_baseline_config(mut self, value: MonitoringBaselineConfig) -> Self {
        self.baseline_config = Some(value);
        self
    }

    #[must_use]
    pub fn monitoring_inputs(&self) -> Option<&[MonitoringInput]> {
        self.monitoring_inputs.as_deref()
    }

    /// Replaces the whole `MonitoringInputs` sequence, clearing it when `None`.
    pub fn set_monitoring_inputs(&mut self, value: Option<Vec<MonitoringInput>>) {
        self.monitoring_inputs = value;
    }

    /// Appends to `MonitoringInputs`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_monitoring_inputs`](Self::set_monitoring_inputs) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_monitoring_inputs(mut self, items: impl IntoIterator<Item = MonitoringInput>) -> Self {
        self.monitoring_inputs.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn monitoring_output_config(&self) -> Option<&MonitoringOutputConfig> {
        self.monitoring_output_config.as_ref()
    }

    /// Replaces the value of `MonitoringOutputConfig`, clearing it when `None`.
    pub fn set_monitoring_output_config(&mut self, value: Option<MonitoringOutputConfig>) {
        self.monitoring_output_config = value;
    }

    /// Sets `MonitoringOutputConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_output_config(mut self, value: MonitoringOutputConfig) -> Self {
        self.monitoring_output_config = Some(value);
        self
    }

    #[must_use]
    pub fn monitoring_resources(&self) -> Option<&MonitoringResources> {
        self.monitoring_resources.as_ref()
    }

    /// Replaces the value of `MonitoringResources`, clearing it when `None`.
    pub fn set_monitoring_resources(&mut self, value: Option<MonitoringResources>) {
        self.monitoring_resources = value;
    }

    /// Sets `MonitoringResources`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_resources(mut self, value: MonitoringResources) -> Self {
        self.monitoring_resources = Some(value);
        self
    }

    #[must_use]
    pub fn monitoring_app_specification(&self) -> Option<&MonitoringAppSpecification> {
        self.monitoring_app_specification.as_ref()
    }

    /// Replaces the value of `MonitoringAppSpecification`, clearing it when `None`.
    pub fn set_monitoring_app_specification(&mut self, value: Option<MonitoringAppSpecification>) {
        self.monitoring_app_specification = value;
    }

    /// Sets `MonitoringAppSpecification`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_app_specification(mut self, value: MonitoringAppSpecification) -> Self {
        self.monitoring_app_specification = Some(value);
        self
    }

    #[must_use]
    pub fn stopping_condition(&self) -> Option<&MonitoringStoppingCondition> {
        self.stopping_condition.as_ref()
    }

    /// Replaces the value of `StoppingCondition`, clearing it when `None`.
    pub fn set_stopping_condition(&mut self, value: Option<MonitoringStoppingCondition>) {
        self.stopping_condition = value;
    }

    /// Sets `StoppingCondition`, returning the record for chaining.
    #[must_use]
    pub fn with_stopping_condition(mut self, value: MonitoringStoppingCondition) -> Self {
        self.stopping_condition = Some(value);
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
}

impl fmt::Display for MonitoringJobDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("BaselineConfig", self.baseline_config.as_ref())
            .field_list("MonitoringInputs", self.monitoring_inputs.as_deref())
            .field("MonitoringOutputConfig", self.monitoring_output_config.as_ref())
            .field("MonitoringResources", self.monitoring_resources.as_ref())
            .field("MonitoringAppSpecification", self.monitoring_app_specification.as_ref())
            .field("StoppingCondition", self.stopping_condition.as_ref())
            .field_map("Environment", self.environment.as_ref())
            .field("NetworkConfig", self.network_config.as_ref())
            .field("RoleArn", self.role_arn.as_deref())
            .finish()
    }
}

impl Hash for MonitoringJobDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.baseline_config.hash(state);
        self.monitoring_inputs.hash(state);
        self.monitoring_output_config.hash(state);
        self.monitoring_resources.hash(state);
        self.monitoring_app_specification.hash(state);
        self.stopping_condition.hash(state);
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
    }
}

/// Schedule plus the job it runs.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringScheduleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_config: Option<ScheduleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_job_definition: Option<MonitoringJobDefinition>,
}

impl MonitoringScheduleConfig {
    /// Creates a new `MonitoringScheduleConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn schedule_config(&self) -> Option<&ScheduleConfig> {
        self.schedule_config.as_ref()
    }

    /// Replaces the value of `ScheduleConfig`, clearing it when `None`.
    pub fn set_schedule_config(&mut self, value: Option<ScheduleConfig>) {
        self.schedule_config = value;
    }

    /// Sets `ScheduleConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_schedule_config(mut self, value: ScheduleConfig) -> Self {
        self.schedule_config = Some(value);
        self
    }

    #[must_use]
    pub fn monitoring_job_definition(&self) -> Option<&MonitoringJobDefinition> {
        self.monitoring_job_definition.as_ref()
    }

    /// Replaces the value of `MonitoringJobDefinition`, clearing it when `None`.
    pub fn set_monitoring_job_definition(&mut self, value: Option<MonitoringJobDefinition>) {
        self.monitoring_job_definition = value;
    }

    /// Sets `MonitoringJobDefinition`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_job_definition(mut self, value: MonitoringJobDefinition) -> Self {
        self.monitoring_job_definition = Some(value);
        self
    }
}

impl fmt::Display for MonitoringScheduleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ScheduleConfig", self.schedule_config.as_ref())
            .field("MonitoringJobDefinition", self.monitoring_job_definition.as_ref())
            .finish()
    }
}

/// Summary of one monitoring execution.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringExecutionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    scheduled_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_execution_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_reason: Option<String>,
}

impl MonitoringExecutionSummary {
    /// Creates a new `MonitoringExecutionSummary` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn monitoring_schedule_name(&self) -> Option<&str> {
        self.monitoring_schedule_name.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleName`, clearing it when `None`.
    pub fn set_monitoring_schedule_name(&mut self, value: Option<String>) {
        self.monitoring_schedule_name = value;
    }

    /// Sets `MonitoringScheduleName`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_name(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn scheduled_time(&self) -> Option<DateTime<Utc>> {
        self.scheduled_time
    }

    /// Replaces the value of `ScheduledTime`, clearing it when `None`.
    pub fn set_scheduled_time(&mut self, value: Option<DateTime<Utc>>) {
        self.scheduled_time = value;
    }

    /// Sets `ScheduledTime`, returning the record for chaining.
    #[must_use]
    pub fn with_scheduled_time(mut self, value: DateTime<Utc>) -> Self {
        self.scheduled_time = Some(value);
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

    /// One of the `ExecutionStatus` values.
    #[must_use]
    pub fn monitoring_execution_status(&self) -> Option<&str> {
        self.monitoring_execution_status.as_deref()
    }

    /// Replaces the value of `MonitoringExecutionStatus`, clearing it when `None`.
    pub fn set_monitoring_execution_status(&mut self, value: Option<String>) {
        self.monitoring_execution_status = value;
    }

    /// Sets `MonitoringExecutionStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_execution_status(mut self, value: impl Into<String>) -> Self {
        self.monitoring_execution_status = Some(value.into());
        self
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

    #[must_use]
    pub fn endpoint_name(&self) -> Option<&str> {
        self.endpoint_name.as_deref()
    }

    /// Replaces the value of `EndpointName`, clearing it when `None`.
    pub fn set_endpoint_name(&mut self, value: Option<String>) {
        self.endpoint_name = value;
    }

    /// Sets `EndpointName`, returning the record for chaining.
    #[must_use]
    pub fn with_endpoint_name(mut self, value: impl Into<String>) -> Self {
        self.endpoint_name = Some(value.into());
        self
    }

    /// Set only when the execution failed.
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

impl fmt::Display for MonitoringExecutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MonitoringScheduleName", self.monitoring_schedule_name.as_deref())
            .field("ScheduledTime", self.scheduled_time.as_ref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .field("MonitoringExecutionStatus", self.monitoring_execution_status.as_deref())
            .field("ProcessingJobArn", self.processing_job_arn.as_deref())
            .field("EndpointName", self.endpoint_name.as_deref())
            .field("FailureReason", self.failure_reason.as_deref())
            .finish()
    }
}

/// Input for the DescribeMonitoringSchedule operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeMonitoringScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_name: Option<String>,
}

impl DescribeMonitoringScheduleRequest {
    /// Creates a new `DescribeMonitoringScheduleRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn monitoring_schedule_name(&self) -> Option<&str> {
        self.monitoring_schedule_name.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleName`, clearing it when `None`.
    pub fn set_monitoring_schedule_name(&mut self, value: Option<String>) {
        self.monitoring_schedule_name = value;
    }

    /// Sets `MonitoringScheduleName`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_name(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_name = Some(value.into());
        self
    }
}

impl fmt::Display for DescribeMonitoringScheduleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MonitoringScheduleName", self.monitoring_schedule_name.as_deref())
            .finish()
    }
}

/// Output of the DescribeMonitoringSchedule operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeMonitoringScheduleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_reason: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_config: Option<MonitoringScheduleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_monitoring_execution_summary: Option<MonitoringExecutionSummary>,
}

impl DescribeMonitoringScheduleResult {
    /// Creates a new `DescribeMonitoringScheduleResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn monitoring_schedule_arn(&self) -> Option<&str> {
        self.monitoring_schedule_arn.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleArn`, clearing it when `None`.
    pub fn set_monitoring_schedule_arn(&mut self, value: Option<String>) {
        self.monitoring_schedule_arn = value;
    }

    /// Sets `MonitoringScheduleArn`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_arn(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn monitoring_schedule_name(&self) -> Option<&str> {
        self.monitoring_schedule_name.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleName`, clearing it when `None`.
    pub fn set_monitoring_schedule_name(&mut self, value: Option<String>) {
        self.monitoring_schedule_name = value;
    }

    /// Sets `MonitoringScheduleName`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_name(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_name = Some(value.into());
        self
    }

    /// One of the `ScheduleStatus` values.
    #[must_use]
    pub fn monitoring_schedule_status(&self) -> Option<&str> {
        self.monitoring_schedule_status.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleStatus`, clearing it when `None`.
    pub fn set_monitoring_schedule_status(&mut self, value: Option<String>) {
        self.monitoring_schedule_status = value;
    }

    /// Sets `MonitoringScheduleStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_status(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_status = Some(value.into());
        self
    }

    /// Set only when the schedule failed.
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

    #[must_use]
    pub fn monitoring_schedule_config(&self) -> Option<&MonitoringScheduleConfig> {
        self.monitoring_schedule_config.as_ref()
    }

    /// Replaces the value of `MonitoringScheduleConfig`, clearing it when `None`.
    pub fn set_monitoring_schedule_config(&mut self, value: Option<MonitoringScheduleConfig>) {
        self.monitoring_schedule_config = value;
    }

    /// Sets `MonitoringScheduleConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_config(mut self, value: MonitoringScheduleConfig) -> Self {
        self.monitoring_schedule_config = Some(value);
        self
    }

    #[must_use]
    pub fn endpoint_name(&self) -> Option<&str> {
        self.endpoint_name.as_deref()
    }

    /// Replaces the value of `EndpointName`, clearing it when `None`.
    pub fn set_endpoint_name(&mut self, value: Option<String>) {
        self.endpoint_name = value;
    }

    /// Sets `EndpointName`, returning the record for chaining.
    #[must_use]
    pub fn with_endpoint_name(mut self, value: impl Into<String>) -> Self {
        self.endpoint_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn last_monitoring_execution_summary(&self) -> Option<&MonitoringExecutionSummary> {
        self.last_monitoring_execution_summary.as_ref()
    }

    /// Replaces the value of `LastMonitoringExecutionSummary`, clearing it when `None`.
    pub fn set_last_monitoring_execution_summary(&mut self, value: Option<MonitoringExecutionSummary>) {
        self.last_monitoring_execution_summary = value;
    }

    /// Sets `LastMonitoringExecutionSummary`, returning the record for chaining.
    #[must_use]
    pub fn with_last_monitoring_execution_summary(mut self, value: MonitoringExecutionSummary) -> Self {
        self.last_monitoring_execution_summary = Some(value);
        self
    }
}

impl fmt::Display for DescribeMonitoringScheduleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MonitoringScheduleArn", self.monitoring_schedule_arn.as_deref())
            .field("MonitoringScheduleName", self.monitoring_schedule_name.as_deref())
            .field("MonitoringScheduleStatus", self.monitoring_schedule_status.as_deref())
            .field("FailureReason", self.failure_reason.as_deref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .field("MonitoringScheduleConfig", self.monitoring_schedule_config.as_ref())
            .field("EndpointName", self.endpoint_name.as_deref())
            .field("LastMonitoringExecutionSummary", self.last_monitoring_execution_summary.as_ref())
            .finish()
    }
}

/// Summary row returned by ListMonitoringSchedules.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringScheduleSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_arn: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_name: Option<String>,
}

impl MonitoringScheduleSummary {
    /// Creates a new `MonitoringScheduleSummary` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn monitoring_schedule_name(&self) -> Option<&str> {
        self.monitoring_schedule_name.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleName`, clearing it when `None`.
    pub fn set_monitoring_schedule_name(&mut self, value: Option<String>) {
        self.monitoring_schedule_name = value;
    }

    /// Sets `MonitoringScheduleName`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_name(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn monitoring_schedule_arn(&self) -> Option<&str> {
        self.monitoring_schedule_arn.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleArn`, clearing it when `None`.
    pub fn set_monitoring_schedule_arn(&mut self, value: Option<String>) {
        self.monitoring_schedule_arn = value;
    }

    /// Sets `MonitoringScheduleArn`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_arn(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_arn = Some(value.into());
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

    /// One of the `ScheduleStatus` values.
    #[must_use]
    pub fn monitoring_schedule_status(&self) -> Option<&str> {
        self.monitoring_schedule_status.as_deref()
    }

    /// Replaces the value of `MonitoringScheduleStatus`, clearing it when `None`.
    pub fn set_monitoring_schedule_status(&mut self, value: Option<String>) {
        self.monitoring_schedule_status = value;
    }

    /// Sets `MonitoringScheduleStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_monitoring_schedule_status(mut self, value: impl Into<String>) -> Self {
        self.monitoring_schedule_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn endpoint_name(&self) -> Option<&str> {
        self.endpoint_name.as_deref()
    }

    /// Replaces the value of `EndpointName`, clearing it when `None`.
    pub fn set_endpoint_name(&mut self, value: Option<String>) {
        self.endpoint_name = value;
    }

    /// Sets `EndpointName`, returning the record for chaining.
    #[must_use]
    pub fn with_endpoint_name(mut self, value: impl Into<String>) -> Self {
        self.endpoint_name = Some(value.into());
        self
    }
}

impl fmt::Display for MonitoringScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MonitoringScheduleName", self.monitoring_schedule_name.as_deref())
            .field("MonitoringScheduleArn", self.monitoring_schedule_arn.as_deref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .field("MonitoringScheduleStatus", self.monitoring_schedule_status.as_deref())
            .field("EndpointName", self.endpoint_name.as_deref())
            .finish()
    }
}

/// Input for the ListMonitoringSchedules operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMonitoringSchedulesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_contains: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time_before: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time_after: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time_before: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_equals: Option<String>,
}

impl ListMonitoringSchedulesRequest {
    /// Creates a new `ListMonitoringSchedulesRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only schedules attached to this endpoint.
    #[must_use]
    pub fn endpoint_name(&self) -> Option<&str> {
        self.endpoint_name.as_deref()
    }

    /// Replaces the value of `EndpointName`, clearing it when `None`.
    pub fn set_endpoint_name(&mut self, value: Option<String>) {
        self.endpoint_name = value;
    }

    /// Sets `EndpointName`, returning the record for chaining.
    #[must_use]
    pub fn with_endpoint_name(mut self, value: impl Into<String>) -> Self {
        self.endpoint_name = Some(value.into());
        self
    }

    /// One of the `MonitoringScheduleSortKey` values.
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

    #[must_use]
    pub fn name_contains(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }

    /// Replaces the value of `NameContains`, clearing it when `None`.
    pub fn set_name_contains(&mut self, value: Option<String>) {
        self.name_contains = value;
    }

    /// Sets `NameContains`, returning the record for chaining.
    #[must_use]
    pub fn with_name_contains(mut self, value: impl Into<String>) -> Self {
        self.name_contains = Some(value.into());
        self
    }

    #[must_use]
    pub fn creation_time_before(&self) -> Option<DateTime<Utc>> {
        self.creation_time_before
    }

    /// Replaces the value of `CreationTimeBefore`, clearing it when `None`.
    pub fn set_creation_time_before(&mut self, value: Option<DateTime<Utc>>) {
        self.creation_time_before = value;
    }

    /// Sets `CreationTimeBefore`, returning the record for chaining.
    #[must_use]
    pub fn with_creation_time_before(mut self, value: DateTime<Utc>) -> Self {
        self.creation_time_before = Some(value);
        self
    }

    #[must_use]
    pub fn creation_time_after(&self) -> Option<DateTime<Utc>> {
        self.creation_time_after
    }

    /// Replaces the value of `CreationTimeAfter`, clearing it when `None`.
    pub fn set_creation_time_after(&mut self, value: Option<DateTime<Utc>>) {
        self.creation_time_after = value;
    }

    /// Sets `CreationTimeAfter`, returning the record for chaining.
    #[must_use]
    pub fn with_creation_time_after(mut self, value: DateTime<Utc>) -> Self {
        self.creation_time_after = Some(value);
        self
    }

    #[must_use]
    pub fn last_modified_time_before(&self) -> Option<DateTime<Utc>> {
        self.last_modified_time_before
    }

    /// Replaces the value of `LastModifiedTimeBefore`, clearing it when `None`.
    pub fn set_last_modified_time_before(&mut self, value: Option<DateTime<Utc>>) {
        self.last_modified_time_before = value;
    }

    /// Sets `LastModifiedTimeBefore`, returning the record for chaining.
    #[must_use]
    pub fn with_last_modified_time_before(mut self, value: DateTime<Utc>) -> Self {
        self.last_modified_time_before = Some(value);
        self
    }

    #[must_use]
    pub fn last_modified_time_after(&self) -> Option<DateTime<Utc>> {
        self.last_modified_time_after
    }

    /// Replaces the value of `LastModifiedTimeAfter`, clearing it when `None`.
    pub fn set_last_modified_time_after(&mut self, value: Option<DateTime<Utc>>) {
        self.last_modified_time_after = value;
    }

    /// Sets `LastModifiedTimeAfter`, returning the record for chaining.
    #[must_use]
    pub fn with_last_modified_time_after(mut self, value: DateTime<Utc>) -> Self {
        self.last_modified_time_after = Some(value);
        self
    }

    /// Keeps only schedules with this `ScheduleStatus`.
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
}

impl fmt::Display for ListMonitoringSchedulesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("EndpointName", self.endpoint_name.as_deref())
            .field("SortBy", self.sort_by.as_deref())
            .field("SortOrder", self.sort_order.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .field("MaxResults", self.max_results.as_ref())
            .field("NameContains", self.name_contains.as_deref())
            .field("CreationTimeBefore", self.creation_time_before.as_ref())
            .field("CreationTimeAfter", self.creation_time_after.as_ref())
            .field("LastModifiedTimeBefore", self.last_modified_time_before.as_ref())
            .field("LastModifiedTimeAfter", self.last_modified_time_after.as_ref())
            .field("StatusEquals", self.status_equals.as_deref())
            .finish()
    }
}

/// Output of the ListMonitoringSchedules operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMonitoringSchedulesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    monitoring_schedule_summaries: Option<Vec<MonitoringScheduleSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListMonitoringSchedulesResult {
    /// Creates a new `ListMonitoringSchedulesResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn monitoring_schedule_summaries(&self) -> Option<&[MonitoringScheduleSummary]> {
        self.monitoring_schedule_summaries.as_deref()
    }

    /// Replaces the whole `MonitoringScheduleSummaries` sequence, clearing it when `None`.
    pub fn set_monitoring_schedule_summaries(&mut self, value: Option<Vec<MonitoringScheduleSummary>>) {
        self.monitoring_schedule_summaries = value;
    }

    /// Appends to `MonitoringScheduleSummaries`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_monitoring_schedule_summaries`](Self::set_monitoring_schedule_summaries) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_monitoring_schedule_summaries(mut self, items: impl IntoIterator<Item = MonitoringScheduleSummary>) -> Self {
        self.monitoring_schedule_summaries.get_or_insert_with(Vec::new).extend(items);
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

impl fmt::Display for ListMonitoringSchedulesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("MonitoringScheduleSummaries", self.monitoring_schedule_summaries.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sagemaker_types::{ProcessingS3UploadMode, SageMakerError, ScheduleStatus};

    fn sample_schedule_config() -> MonitoringScheduleConfig {
        MonitoringScheduleConfig::new()
            .with_schedule_config(ScheduleConfig::new().with_schedule_expression("cron(0 * ? * * *)"))
            .with_monitoring_job_definition(
                MonitoringJobDefinition::new()
                    .with_monitoring_inputs([MonitoringInput::new().with_endpoint_input(
                        EndpointInput::new().with_endpoint_name("churn-endpoint"),
                    )])
                    .with_monitoring_output_config(
                        MonitoringOutputConfig::new().with_monitoring_outputs([
                            MonitoringOutput::new().with_s3_output(
                                MonitoringS3Output::new()
                                    .with_s3_uri("s3://monitoring/churn")
                                    .with_s3_upload_mode(ProcessingS3UploadMode::EndOfJob),
                            ),
                        ]),
                    )
                    .with_monitoring_resources(
                        MonitoringResources::new().with_cluster_config(
                            MonitoringClusterConfig::new()
                                .with_instance_count(1)
                                .with_volume_size_in_gb(20),
                        ),
                    )
                    .with_role_arn("arn:aws:iam::123456789012:role/monitoring"),
            )
    }

    #[test]
    fn test_schedule_round_trips_through_json() {
        let result = DescribeMonitoringScheduleResult::new()
            .with_monitoring_schedule_name("churn-hourly")
            .with_monitoring_schedule_status(ScheduleStatus::Scheduled)
            .with_creation_time(Utc.timestamp_opt(1_585_000_000, 0).unwrap())
            .with_monitoring_schedule_config(sample_schedule_config());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["MonitoringScheduleStatus"], "Scheduled");
        assert_eq!(json["CreationTime"], 1_585_000_000);
        let back: DescribeMonitoringScheduleResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_cluster_volume_size_keeps_service_casing() {
        let cluster = MonitoringClusterConfig::new().with_volume_size_in_gb(20);
        let json = serde_json::to_value(&cluster).unwrap();
        assert_eq!(json["VolumeSizeInGB"], 20);
    }

    #[test]
    fn test_job_definition_environment_rejects_duplicates() {
        let mut definition = MonitoringJobDefinition::new();
        definition.add_environment_entry("THRESHOLD", "0.8").unwrap();
        let err = definition.add_environment_entry("THRESHOLD", "0.9").unwrap_err();
        assert!(matches!(err, SageMakerError::DuplicateKey { .. }));
    }

    #[test]
    fn test_list_request_display_skips_absent_filters() {
        let request = ListMonitoringSchedulesRequest::new()
            .with_endpoint_name("churn-endpoint")
            .with_max_results(10);
        assert_eq!(
            request.to_string(),
            "{EndpointName: churn-endpoint, MaxResults: 10}",
        );
    }
}
