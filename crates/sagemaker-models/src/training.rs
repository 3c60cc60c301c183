//! Shapes for the training job operations.
//!
//! `CreateTrainingJobRequest` carries everything a training run needs;
//! `TrainingJob` is the full read model of one run, including its secondary
//! status history and final metrics.

use crate::common::{ExperimentConfig, OutputDataConfig, StoppingCondition, Tag, VpcConfig};
use chrono::{DateTime, Utc};
use sagemaker_types::{SageMakerError, ShapeFormatter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Regex that extracts one training metric from the algorithm logs.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    regex: Option<String>,
}

impl MetricDefinition {
    /// Creates a new `MetricDefinition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replaces the value of `Name`, clearing it when `None`.
    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    /// Sets `Name`, returning the record for chaining.
    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    #[must_use]
    pub fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    /// Replaces the value of `Regex`, clearing it when `None`.
    pub fn set_regex(&mut self, value: Option<String>) {
        self.regex = value;
    }

    /// Sets `Regex`, returning the record for chaining.
    #[must_use]
    pub fn with_regex(mut self, value: impl Into<String>) -> Self {
        self.regex = Some(value.into());
        self
    }
}

impl fmt::Display for MetricDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", self.name.as_deref())
            .field("Regex", self.regex.as_deref())
            .finish()
    }
}

/// Algorithm container and how its metrics are captured.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    training_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    training_input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_definitions: Option<Vec<MetricDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_sage_maker_metrics_time_series: Option<bool>,
}

impl AlgorithmSpecification {
    /// Creates a new `AlgorithmSpecification` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ECR image of the training algorithm.
    #[must_use]
    pub fn training_image(&self) -> Option<&str> {
        self.training_image.as_deref()
    }

    /// Replaces the value of `TrainingImage`, clearing it when `None`.
    pub fn set_training_image(&mut self, value: Option<String>) {
        self.training_image = value;
    }

    /// Sets `TrainingImage`, returning the record for chaining.
    #[must_use]
    pub fn with_training_image(mut self, value: impl Into<String>) -> Self {
        self.training_image = Some(value.into());
        self
    }

    /// Marketplace algorithm to use instead of a raw image.
    #[must_use]
    pub fn algorithm_name(&self) -> Option<&str> {
        self.algorithm_name.as_deref()
    }

    /// Replaces the value of `AlgorithmName`, clearing it when `None`.
    pub fn set_algorithm_name(&mut self, value: Option<String>) {
        self.algorithm_name = value;
    }

    /// Sets `AlgorithmName`, returning the record for chaining.
    #[must_use]
    pub fn with_algorithm_name(mut self, value: impl Into<String>) -> Self {
        self.algorithm_name = Some(value.into());
        self
    }

    /// One of the `TrainingInputMode` values.
    #[must_use]
    pub fn training_input_mode(&self) -> Option<&str> {
        self.training_input_mode.as_deref()
    }

    /// Replaces the value of `TrainingInputMode`, clearing it when `None`.
    pub fn set_training_input_mode(&mut self, value: Option<String>) {
        self.training_input_mode = value;
    }

    /// Sets `TrainingInputMode`, returning the record for chaining.
    #[must_use]
    pub fn with_training_input_mode(mut self, value: impl Into<String>) -> Self {
        self.training_input_mode = Some(value.into());
        self
    }

    #[must_use]
    pub fn metric_definitions(&self) -> Option<&[MetricDefinition]> {
        self.metric_definitions.as_deref()
    }

    /// Replaces the whole `MetricDefinitions` sequence, clearing it when `None`.
    pub fn set_metric_definitions(&mut self, value: Option<Vec<MetricDefinition>>) {
        self.metric_definitions = value;
    }

    /// Appends to `MetricDefinitions`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_metric_definitions`](Self::set_metric_definitions) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_metric_definitions(mut self, items: impl IntoIterator<Item = MetricDefinition>) -> Self {
        self.metric_definitions.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn enable_sage_maker_metrics_time_series(&self) -> Option<bool> {
        self.enable_sage_maker_metrics_time_series
    }

    /// Replaces the value of `EnableSageMakerMetricsTimeSeries`, clearing it when `None`.
    pub fn set_enable_sage_maker_metrics_time_series(&mut self, value: Option<bool>) {
        self.enable_sage_maker_metrics_time_series = value;
    }

    /// Sets `EnableSageMakerMetricsTimeSeries`, returning the record for chaining.
    #[must_use]
    pub fn with_enable_sage_maker_metrics_time_series(mut self, value: bool) -> Self {
        self.enable_sage_maker_metrics_time_series = Some(value);
        self
    }
}

impl fmt::Display for AlgorithmSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingImage", self.training_image.as_deref())
            .field("AlgorithmName", self.algorithm_name.as_deref())
            .field("TrainingInputMode", self.training_input_mode.as_deref())
            .field_list("MetricDefinitions", self.metric_definitions.as_deref())
            .field("EnableSageMakerMetricsTimeSeries", self.enable_sage_maker_metrics_time_series.as_ref())
            .finish()
    }
}

/// S3 location a training channel reads from.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_distribution_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_names: Option<Vec<String>>,
}

impl S3DataSource {
    /// Creates a new `S3DataSource` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `S3DataType` values.
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

    /// One of the `S3DataDistribution` values.
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

    /// Attributes read from an augmented manifest.
    #[must_use]
    pub fn attribute_names(&self) -> Option<&[String]> {
        self.attribute_names.as_deref()
    }

    /// Replaces the whole `AttributeNames` sequence, clearing it when `None`.
    pub fn set_attribute_names(&mut self, value: Option<Vec<String>>) {
        self.attribute_names = value;
    }

    /// Appends to `AttributeNames`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_attribute_names`](Self::set_attribute_names) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_attribute_names<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for S3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataType", self.s3_data_type.as_deref())
            .field("S3Uri", self.s3_uri.as_deref())
            .field("S3DataDistributionType", self.s3_data_distribution_type.as_deref())
            .field_list("AttributeNames", self.attribute_names.as_deref())
            .finish()
    }
}

/// File system a training channel mounts.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSystemDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_system_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_system_access_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_system_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    directory_path: Option<String>,
}

impl FileSystemDataSource {
    /// Creates a new `FileSystemDataSource` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn file_system_id(&self) -> Option<&str> {
        self.file_system_id.as_deref()
    }

    /// Replaces the value of `FileSystemId`, clearing it when `None`.
    pub fn set_file_system_id(&mut self, value: Option<String>) {
        self.file_system_id = value;
    }

    /// Sets `FileSystemId`, returning the record for chaining.
    #[must_use]
    pub fn with_file_system_id(mut self, value: impl Into<String>) -> Self {
        self.file_system_id = Some(value.into());
        self
    }

    /// One of the `FileSystemAccessMode` values.
    #[must_use]
    pub fn file_system_access_mode(&self) -> Option<&str> {
        self.file_system_access_mode.as_deref()
    }

    /// Replaces the value of `FileSystemAccessMode`, clearing it when `None`.
    pub fn set_file_system_access_mode(&mut self, value: Option<String>) {
        self.file_system_access_mode = value;
    }

    /// Sets `FileSystemAccessMode`, returning the record for chaining.
    #[must_use]
    pub fn with_file_system_access_mode(mut self, value: impl Into<String>) -> Self {
        self.file_system_access_mode = Some(value.into());
        self
    }

    /// One of the `FileSystemType` values.
    #[must_use]
    pub fn file_system_type(&self) -> Option<&str> {
        self.file_system_type.as_deref()
    }

    /// Replaces the value of `FileSystemType`, clearing it when `None`.
    pub fn set_file_system_type(&mut self, value: Option<String>) {
        self.file_system_type = value;
    }

    /// Sets `FileSystemType`, returning the record for chaining.
    #[must_use]
    pub fn with_file_system_type(mut self, value: impl Into<String>) -> Self {
        self.file_system_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn directory_path(&self) -> Option<&str> {
        self.directory_path.as_deref()
    }

    /// Replaces the value of `DirectoryPath`, clearing it when `None`.
    pub fn set_directory_path(&mut self, value: Option<String>) {
        self.directory_path = value;
    }

    /// Sets `DirectoryPath`, returning the record for chaining.
    #[must_use]
    pub fn with_directory_path(mut self, value: impl Into<String>) -> Self {
        self.directory_path = Some(value.into());
        self
    }
}

impl fmt::Display for FileSystemDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("FileSystemId", self.file_system_id.as_deref())
            .field("FileSystemAccessMode", self.file_system_access_mode.as_deref())
            .field("FileSystemType", self.file_system_type.as_deref())
            .field("DirectoryPath", self.directory_path.as_deref())
            .finish()
    }
}

/// Where a training channel's data lives.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_source: Option<S3DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_system_data_source: Option<FileSystemDataSource>,
}

impl DataSource {
    /// Creates a new `DataSource` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn s3_data_source(&self) -> Option<&S3DataSource> {
        self.s3_data_source.as_ref()
    }

    /// Replaces the value of `S3DataSource`, clearing it when `None`.
    pub fn set_s3_data_source(&mut self, value: Option<S3DataSource>) {
        self.s3_data_source = value;
    }

    /// Sets `S3DataSource`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_data_source(mut self, value: S3DataSource) -> Self {
        self.s3_data_source = Some(value);
        self
    }

    #[must_use]
    pub fn file_system_data_source(&self) -> Option<&FileSystemDataSource> {
        self.file_system_data_source.as_ref()
    }

    /// Replaces the value of `FileSystemDataSource`, clearing it when `None`.
    pub fn set_file_system_data_source(&mut self, value: Option<FileSystemDataSource>) {
        self.file_system_data_source = value;
    }

    /// Sets `FileSystemDataSource`, returning the record for chaining.
    #[must_use]
    pub fn with_file_system_data_source(mut self, value: FileSystemDataSource) -> Self {
        self.file_system_data_source = Some(value);
        self
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataSource", self.s3_data_source.as_ref())
            .field("FileSystemDataSource", self.file_system_data_source.as_ref())
            .finish()
    }
}

/// Seeded shuffle applied to a channel's records each epoch.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShuffleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
}

impl ShuffleConfig {
    /// Creates a new `ShuffleConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    /// Replaces the value of `Seed`, clearing it when `None`.
    pub fn set_seed(&mut self, value: Option<i64>) {
        self.seed = value;
    }

    /// Sets `Seed`, returning the record for chaining.
    #[must_use]
    pub fn with_seed(mut self, value: i64) -> Self {
        self.seed = Some(value);
        self
    }
}

impl fmt::Display for ShuffleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Seed", self.seed.as_ref())
            .finish()
    }
}

/// One named input channel of a training job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Channel {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_source: Option<DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compression_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_wrapper_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shuffle_config: Option<ShuffleConfig>,
}

impl Channel {
    /// Creates a new `Channel` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn channel_name(&self) -> Option<&str> {
        self.channel_name.as_deref()
    }

    /// Replaces the value of `ChannelName`, clearing it when `None`.
    pub fn set_channel_name(&mut self, value: Option<String>) {
        self.channel_name = value;
    }

    /// Sets `ChannelName`, returning the record for chaining.
    #[must_use]
    pub fn with_channel_name(mut self, value: impl Into<String>) -> Self {
        self.channel_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn data_source(&self) -> Option<&DataSource> {
        self.data_source.as_ref()
    }

    /// Replaces the value of `DataSource`, clearing it when `None`.
    pub fn set_data_source(&mut self, value: Option<DataSource>) {
        self.data_source = value;
    }

    /// Sets `DataSource`, returning the record for chaining.
    #[must_use]
    pub fn with_data_source(mut self, value: DataSource) -> Self {
        self.data_source = Some(value);
        self
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Replaces the value of `ContentType`, clearing it when `None`.
    pub fn set_content_type(&mut self, value: Option<String>) {
        self.content_type = value;
    }

    /// Sets `ContentType`, returning the record for chaining.
    #[must_use]
    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
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

    /// One of the `RecordWrapper` values.
    #[must_use]
    pub fn record_wrapper_type(&self) -> Option<&str> {
        self.record_wrapper_type.as_deref()
    }

    /// Replaces the value of `RecordWrapperType`, clearing it when `None`.
    pub fn set_record_wrapper_type(&mut self, value: Option<String>) {
        self.record_wrapper_type = value;
    }

    /// Sets `RecordWrapperType`, returning the record for chaining.
    #[must_use]
    pub fn with_record_wrapper_type(mut self, value: impl Into<String>) -> Self {
        self.record_wrapper_type = Some(value.into());
        self
    }

    /// Overrides the algorithm-level `TrainingInputMode` for this channel.
    #[must_use]
    pub fn input_mode(&self) -> Option<&str> {
        self.input_mode.as_deref()
    }

    /// Replaces the value of `InputMode`, clearing it when `None`.
    pub fn set_input_mode(&mut self, value: Option<String>) {
        self.input_mode = value;
    }

    /// Sets `InputMode`, returning the record for chaining.
    #[must_use]
    pub fn with_input_mode(mut self, value: impl Into<String>) -> Self {
        self.input_mode = Some(value.into());
        self
    }

    #[must_use]
    pub fn shuffle_config(&self) -> Option<&ShuffleConfig> {
        self.shuffle_config.as_ref()
    }

    /// Replaces the value of `ShuffleConfig`, clearing it when `None`.
    pub fn set_shuffle_config(&mut self, value: Option<ShuffleConfig>) {
        self.shuffle_config = value;
    }

    /// Sets `ShuffleConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_shuffle_config(mut self, value: ShuffleConfig) -> Self {
        self.shuffle_config = Some(value);
        self
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ChannelName", self.channel_name.as_deref())
            .field("DataSource", self.data_source.as_ref())
            .field("ContentType", self.content_type.as_deref())
            .field("CompressionType", self.compression_type.as_deref())
            .field("RecordWrapperType", self.record_wrapper_type.as_deref())
            .field("InputMode", self.input_mode.as_deref())
            .field("ShuffleConfig", self.shuffle_config.as_ref())
            .finish()
    }
}

/// Instances and storage backing a training job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_count: Option<i32>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume_kms_key_id: Option<String>,
}

impl ResourceConfig {
    /// Creates a new `ResourceConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `TrainingInstanceType` values.
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

impl fmt::Display for ResourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InstanceType", self.instance_type.as_deref())
            .field("InstanceCount", self.instance_count.as_ref())
            .field("VolumeSizeInGB", self.volume_size_in_gb.as_ref())
            .field("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .finish()
    }
}

/// Where managed spot training checkpoints are stored.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckpointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
}

impl CheckpointConfig {
    /// Creates a new `CheckpointConfig` with every field absent.
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

    /// Path inside the container, `/opt/ml/checkpoints` by default.
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
}

impl fmt::Display for CheckpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", self.s3_uri.as_deref())
            .field("LocalPath", self.local_path.as_deref())
            .finish()
    }
}

/// One tensor collection the debug hook saves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_parameters: Option<HashMap<String, String>>,
}

impl CollectionConfiguration {
    /// Creates a new `CollectionConfiguration` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn collection_name(&self) -> Option<&str> {
        self.collection_name.as_deref()
    }

    /// Replaces the value of `CollectionName`, clearing it when `None`.
    pub fn set_collection_name(&mut self, value: Option<String>) {
        self.collection_name = value;
    }

    /// Sets `CollectionName`, returning the record for chaining.
    #[must_use]
    pub fn with_collection_name(mut self, value: impl Into<String>) -> Self {
        self.collection_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn collection_parameters(&self) -> Option<&HashMap<String, String>> {
        self.collection_parameters.as_ref()
    }

    /// Replaces the whole `CollectionParameters` map, clearing it when `None`.
    pub fn set_collection_parameters(&mut self, value: Option<HashMap<String, String>>) {
        self.collection_parameters = value;
    }

    /// Sets `CollectionParameters` wholesale, returning the record for chaining.
    #[must_use]
    pub fn with_collection_parameters(mut self, value: HashMap<String, String>) -> Self {
        self.collection_parameters = Some(value);
        self
    }

    /// Adds a single `CollectionParameters` entry, initializing the map if absent.
    ///
    /// # Errors
    /// Returns [`SageMakerError::DuplicateKey`] when the key is already
    /// present; the existing entry is left untouched.
    pub fn add_collection_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, SageMakerError> {
        let key = key.into();
        let map = self.collection_parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(SageMakerError::duplicate_key(key));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets `CollectionParameters` to absent.
    pub fn clear_collection_parameters_entries(&mut self) {
        self.collection_parameters = None;
    }
}

impl fmt::Display for CollectionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CollectionName", self.collection_name.as_deref())
            .field_map("CollectionParameters", self.collection_parameters.as_ref())
            .finish()
    }
}

impl Hash for CollectionConfiguration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.collection_name.hash(state);
        match &self.collection_parameters {
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

/// Debug hook storage and tensor collection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebugHookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hook_parameters: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_configurations: Option<Vec<CollectionConfiguration>>,
}

impl DebugHookConfig {
    /// Creates a new `DebugHookConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    #[must_use]
    pub fn hook_parameters(&self) -> Option<&HashMap<String, String>> {
        self.hook_parameters.as_ref()
    }

    /// Replaces the whole `HookParameters` map, clearing it when `None`.
    pub fn set_hook_parameters(&mut self, value: Option<HashMap<String, String>>) {
        self.hook_parameters = value;
    }

    /// Sets `HookParameters` wholesale, returning the record for chaining.
    #[must_use]
    pub fn with_hook_parameters(mut self, value: HashMap<String, String>) -> Self {
        self.hook_parameters = Some(value);
        self
    }

    /// Adds a single `HookParameters` entry, initializing the map if absent.
    ///
    /// # Errors
    /// Returns [`SageMakerError::DuplicateKey`] when the key is already
    /// present; the existing entry is left untouched.
    pub fn add_hook_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, SageMakerError> {
        let key = key.into();
        let map = self.hook_parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(SageMakerError::duplicate_key(key));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets `HookParameters` to absent.
    pub fn clear_hook_parameters_entries(&mut self) {
        self.hook_parameters = None;
    }

    #[must_use]
    pub fn collection_configurations(&self) -> Option<&[CollectionConfiguration]> {
        self.collection_configurations.as_deref()
    }

    /// Replaces the whole `CollectionConfigurations` sequence, clearing it when `None`.
    pub fn set_collection_configurations(&mut self, value: Option<Vec<CollectionConfiguration>>) {
        self.collection_configurations = value;
    }

    /// Appends to `CollectionConfigurations`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_collection_configurations`](Self::set_collection_configurations) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_collection_configurations(mut self, items: impl IntoIterator<Item = CollectionConfiguration>) -> Self {
        self.collection_configurations.get_or_insert_with(Vec::new).extend(items);
        self
    }
}

impl fmt::Display for DebugHookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("LocalPath", self.local_path.as_deref())
            .field("S3OutputPath", self.s3_output_path.as_deref())
            .field_map("HookParameters", self.hook_parameters.as_ref())
            .field_list("CollectionConfigurations", self.collection_configurations.as_deref())
            .finish()
    }
}

impl Hash for DebugHookConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_path.hash(state);
        self.s3_output_path.hash(state);
        match &self.hook_parameters {
            None => state.write_u8(0),
            Some(map) => {
                state.write_u8(1);
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                entries.hash(state);
            }
        }
        self.collection_configurations.hash(state);
    }
}

/// One debug rule evaluated against the emitted tensors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebugRuleConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_evaluator_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_parameters: Option<HashMap<String, String>>,
}

impl DebugRuleConfiguration {
    /// Creates a new `DebugRuleConfiguration` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule_configuration_name(&self) -> Option<&str> {
        self.rule_configuration_name.as_deref()
    }

    /// Replaces the value of `RuleConfigurationName`, clearing it when `None`.
    pub fn set_rule_configuration_name(&mut self, value: Option<String>) {
        self.rule_configuration_name = value;
    }

    /// Sets `RuleConfigurationName`, returning the record for chaining.
    #[must_use]
    pub fn with_rule_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.rule_configuration_name = Some(value.into());
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

    #[must_use]
    pub fn rule_evaluator_image(&self) -> Option<&str> {
        self.rule_evaluator_image.as_deref()
    }

    /// Replaces the value of `RuleEvaluatorImage`, clearing it when `None`.
    pub fn set_rule_evaluator_image(&mut self, value: Option<String>) {
        self.rule_evaluator_image = value;
    }

    /// Sets `RuleEvaluatorImage`, returning the record for chaining.
    #[must_use]
    pub fn with_rule_evaluator_image(mut self, value: impl Into<String>) -> Self {
        self.rule_evaluator_image = Some(value.into());
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
    pub fn rule_parameters(&self) -> Option<&HashMap<String, String>> {
        self.rule_parameters.as_ref()
    }

    /// Replaces the whole `RuleParameters` map, clearing it when `None`.
    pub fn set_rule_parameters(&mut self, value: Option<HashMap<String, String>>) {
        self.rule_parameters = value;
    }

    /// Sets `RuleParameters` wholesale, returning the record for chaining.
    #[must_use]
    pub fn with_rule_parameters(mut self, value: HashMap<String, String>) -> Self {
        self.rule_parameters = Some(value);
        self
    }

    /// Adds a single `RuleParameters` entry, initializing the map if absent.
    ///
    /// # Errors
    /// Returns [`SageMakerError::DuplicateKey`] when the key is already
    /// present; the existing entry is left untouched.
    pub fn add_rule_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, SageMakerError> {
        let key = key.into();
        let map = self.rule_parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(SageMakerError::duplicate_key(key));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets `RuleParameters` to absent.
    pub fn clear_rule_parameters_entries(&mut self) {
        self.rule_parameters = None;
    }
}

impl fmt::Display for DebugRuleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("RuleConfigurationName", self.rule_configuration_name.as_deref())
            .field("LocalPath", self.local_path.as_deref())
            .field("S3OutputPath", self.s3_output_path.as_deref())
            .field("RuleEvaluatorImage", self.rule_evaluator_image.as_deref())
            .field("InstanceType", self.instance_type.as_deref())
            .field("VolumeSizeInGB", self.volume_size_in_gb.as_ref())
            .field_map("RuleParameters", self.rule_parameters.as_ref())
            .finish()
    }
}

impl Hash for DebugRuleConfiguration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rule_configuration_name.hash(state);
        self.local_path.hash(state);
        self.s3_output_path.hash(state);
        self.rule_evaluator_image.hash(state);
        self.instance_type.hash(state);
        self.volume_size_in_gb.hash(state);
        match &self.rule_parameters {
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

/// Where TensorBoard event files are uploaded.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TensorBoardOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output_path: Option<String>,
}

impl TensorBoardOutputConfig {
    /// Creates a new `TensorBoardOutputConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

impl fmt::Display for TensorBoardOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("LocalPath", self.local_path.as_deref())
            .field("S3OutputPath", self.s3_output_path.as_deref())
            .finish()
    }
}

/// Latest evaluation state of one debug rule.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebugRuleEvaluationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_evaluation_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_evaluation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_details: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
}

impl DebugRuleEvaluationStatus {
    /// Creates a new `DebugRuleEvaluationStatus` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule_configuration_name(&self) -> Option<&str> {
        self.rule_configuration_name.as_deref()
    }

    /// Replaces the value of `RuleConfigurationName`, clearing it when `None`.
    pub fn set_rule_configuration_name(&mut self, value: Option<String>) {
        self.rule_configuration_name = value;
    }

    /// Sets `RuleConfigurationName`, returning the record for chaining.
    #[must_use]
    pub fn with_rule_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.rule_configuration_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn rule_evaluation_job_arn(&self) -> Option<&str> {
        self.rule_evaluation_job_arn.as_deref()
    }

    /// Replaces the value of `RuleEvaluationJobArn`, clearing it when `None`.
    pub fn set_rule_evaluation_job_arn(&mut self, value: Option<String>) {
        self.rule_evaluation_job_arn = value;
    }

    /// Sets `RuleEvaluationJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_rule_evaluation_job_arn(mut self, value: impl Into<String>) -> Self {
        self.rule_evaluation_job_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn rule_evaluation_status(&self) -> Option<&str> {
        self.rule_evaluation_status.as_deref()
    }

    /// Replaces the value of `RuleEvaluationStatus`, clearing it when `None`.
    pub fn set_rule_evaluation_status(&mut self, value: Option<String>) {
        self.rule_evaluation_status = value;
    }

    /// Sets `RuleEvaluationStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_rule_evaluation_status(mut self, value: impl Into<String>) -> Self {
        self.rule_evaluation_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn status_details(&self) -> Option<&str> {
        self.status_details.as_deref()
    }

    /// Replaces the value of `StatusDetails`, clearing it when `None`.
    pub fn set_status_details(&mut self, value: Option<String>) {
        self.status_details = value;
    }

    /// Sets `StatusDetails`, returning the record for chaining.
    #[must_use]
    pub fn with_status_details(mut self, value: impl Into<String>) -> Self {
        self.status_details = Some(value.into());
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
}

impl fmt::Display for DebugRuleEvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("RuleConfigurationName", self.rule_configuration_name.as_deref())
            .field("RuleEvaluationJobArn", self.rule_evaluation_job_arn.as_deref())
            .field("RuleEvaluationStatus", self.rule_evaluation_status.as_deref())
            .field("StatusDetails", self.status_details.as_deref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .finish()
    }
}

/// S3 location of the trained model artifacts.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelArtifacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_model_artifacts: Option<String>,
}

impl ModelArtifacts {
    /// Creates a new `ModelArtifacts` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn s3_model_artifacts(&self) -> Option<&str> {
        self.s3_model_artifacts.as_deref()
    }

    /// Replaces the value of `S3ModelArtifacts`, clearing it when `None`.
    pub fn set_s3_model_artifacts(&mut self, value: Option<String>) {
        self.s3_model_artifacts = value;
    }

    /// Sets `S3ModelArtifacts`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_model_artifacts(mut self, value: impl Into<String>) -> Self {
        self.s3_model_artifacts = Some(value.into());
        self
    }
}

impl fmt::Display for ModelArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3ModelArtifacts", self.s3_model_artifacts.as_deref())
            .finish()
    }
}

/// One step in a training job's secondary status history.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondaryStatusTransition {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_message: Option<String>,
}

impl SecondaryStatusTransition {
    /// Creates a new `SecondaryStatusTransition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `SecondaryStatus` values.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replaces the value of `Status`, clearing it when `None`.
    pub fn set_status(&mut self, value: Option<String>) {
        self.status = value;
    }

    /// Sets `Status`, returning the record for chaining.
    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Replaces the value of `StartTime`, clearing it when `None`.
    pub fn set_start_time(&mut self, value: Option<DateTime<Utc>>) {
        self.start_time = value;
    }

    /// Sets `StartTime`, returning the record for chaining.
    #[must_use]
    pub fn with_start_time(mut self, value: DateTime<Utc>) -> Self {
        self.start_time = Some(value);
        self
    }

    /// Absent while this is the current status.
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
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Replaces the value of `StatusMessage`, clearing it when `None`.
    pub fn set_status_message(&mut self, value: Option<String>) {
        self.status_message = value;
    }

    /// Sets `StatusMessage`, returning the record for chaining.
    #[must_use]
    pub fn with_status_message(mut self, value: impl Into<String>) -> Self {
        self.status_message = Some(value.into());
        self
    }
}

impl fmt::Display for SecondaryStatusTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Status", self.status.as_deref())
            .field("StartTime", self.start_time.as_ref())
            .field("EndTime", self.end_time.as_ref())
            .field("StatusMessage", self.status_message.as_deref())
            .finish()
    }
}

/// One observed value of a training metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricData {
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f32>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
}

impl MetricData {
    /// Creates a new `MetricData` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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

    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Replaces the value of `Timestamp`, clearing it when `None`.
    pub fn set_timestamp(&mut self, value: Option<DateTime<Utc>>) {
        self.timestamp = value;
    }

    /// Sets `Timestamp`, returning the record for chaining.
    #[must_use]
    pub fn with_timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.timestamp = Some(value);
        self
    }
}

impl fmt::Display for MetricData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MetricName", self.metric_name.as_deref())
            .field("Value", self.value.as_ref())
            .field("Timestamp", self.timestamp.as_ref())
            .finish()
    }
}

impl Hash for MetricData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.metric_name.hash(state);
        self.value.map(f32::to_bits).hash(state);
        self.timestamp.hash(state);
    }
}

/// Input for the CreateTrainingJob operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrainingJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hyper_parameters: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm_specification: Option<AlgorithmSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_data_config: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_config: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopping_condition: Option<StoppingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkpoint_config: Option<CheckpointConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_hook_config: Option<DebugHookConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_rule_configurations: Option<Vec<DebugRuleConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tensor_board_output_config: Option<TensorBoardOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    experiment_config: Option<ExperimentConfig>,
}

impl CreateTrainingJobRequest {
    /// Creates a new `CreateTrainingJobRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn training_job_name(&self) -> Option<&str> {
        self.training_job_name.as_deref()
    }

    /// Replaces the value of `TrainingJobName`, clearing it when `None`.
    pub fn set_training_job_name(&mut self, value: Option<String>) {
        self.training_job_name = value;
    }

    /// Sets `TrainingJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_training_job_name(mut self, value: impl Into<String>) -> Self {
        self.training_job_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn hyper_parameters(&self) -> Option<&HashMap<String, String>> {
        self.hyper_parameters.as_ref()
    }

    /// Replaces the whole `HyperParameters` map, clearing it when `None`.
    pub fn set_hyper_parameters(&mut self, value: Option<HashMap<String, String>>) {
        self.hyper_parameters = value;
    }

    /// Sets `HyperParameters` wholesale, returning the record for chaining.
    #[must_use]
    pub fn with_hyper_parameters(mut self, value: HashMap<String, String>) -> Self {
        self.hyper_parameters = Some(value);
        self
    }

    /// Adds a single `HyperParameters` entry, initializing the map if absent.
    ///
    /// # Errors
    /// Returns [`SageMakerError::DuplicateKey`] when the key is already
    /// present; the existing entry is left untouched.
    pub fn add_hyper_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, SageMakerError> {
        let key = key.into();
        let map = self.hyper_parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(SageMakerError::duplicate_key(key));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets `HyperParameters` to absent.
    pub fn clear_hyper_parameters_entries(&mut self) {
        self.hyper_parameters = None;
    }

    #[must_use]
    pub fn algorithm_specification(&self) -> Option<&AlgorithmSpecification> {
        self.algorithm_specification.as_ref()
    }

    /// Replaces the value of `AlgorithmSpecification`, clearing it when `None`.
    pub fn set_algorithm_specification(&mut self, value: Option<AlgorithmSpecification>) {
        self.algorithm_specification = value;
    }

    /// Sets `AlgorithmSpecification`, returning the record for chaining.
    #[must_use]
    pub fn with_algorithm_specification(mut self, value: AlgorithmSpecification) -> Self {
        self.algorithm_specification = Some(value);
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
    pub fn input_data_config(&self) -> Option<&[Channel]> {
        self.input_data_config.as_deref()
    }

    /// Replaces the whole `InputDataConfig` sequence, clearing it when `None`.
    pub fn set_input_data_config(&mut self, value: Option<Vec<Channel>>) {
        self.input_data_config = value;
    }

    /// Appends to `InputDataConfig`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_input_data_config`](Self::set_input_data_config) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_input_data_config(mut self, items: impl IntoIterator<Item = Channel>) -> Self {
        self.input_data_config.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn output_data_config(&self) -> Option<&OutputDataConfig> {
        self.output_data_config.as_ref()
    }

    /// Replaces the value of `OutputDataConfig`, clearing it when `None`.
    pub fn set_output_data_config(&mut self, value: Option<OutputDataConfig>) {
        self.output_data_config = value;
    }

    /// Sets `OutputDataConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_output_data_config(mut self, value: OutputDataConfig) -> Self {
        self.output_data_config = Some(value);
        self
    }

    #[must_use]
    pub fn resource_config(&self) -> Option<&ResourceConfig> {
        self.resource_config.as_ref()
    }

    /// Replaces the value of `ResourceConfig`, clearing it when `None`.
    pub fn set_resource_config(&mut self, value: Option<ResourceConfig>) {
        self.resource_config = value;
    }

    /// Sets `ResourceConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_resource_config(mut self, value: ResourceConfig) -> Self {
        self.resource_config = Some(value);
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

    #[must_use]
    pub fn stopping_condition(&self) -> Option<&StoppingCondition> {
        self.stopping_condition.as_ref()
    }

    /// Replaces the value of `StoppingCondition`, clearing it when `None`.
    pub fn set_stopping_condition(&mut self, value: Option<StoppingCondition>) {
        self.stopping_condition = value;
    }

    /// Sets `StoppingCondition`, returning the record for chaining.
    #[must_use]
    pub fn with_stopping_condition(mut self, value: StoppingCondition) -> Self {
        self.stopping_condition = Some(value);
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
    pub fn enable_managed_spot_training(&self) -> Option<bool> {
        self.enable_managed_spot_training
    }

    /// Replaces the value of `EnableManagedSpotTraining`, clearing it when `None`.
    pub fn set_enable_managed_spot_training(&mut self, value: Option<bool>) {
        self.enable_managed_spot_training = value;
    }

    /// Sets `EnableManagedSpotTraining`, returning the record for chaining.
    #[must_use]
    pub fn with_enable_managed_spot_training(mut self, value: bool) -> Self {
        self.enable_managed_spot_training = Some(value);
        self
    }

    #[must_use]
    pub fn checkpoint_config(&self) -> Option<&CheckpointConfig> {
        self.checkpoint_config.as_ref()
    }

    /// Replaces the value of `CheckpointConfig`, clearing it when `None`.
    pub fn set_checkpoint_config(&mut self, value: Option<CheckpointConfig>) {
        self.checkpoint_config = value;
    }

    /// Sets `CheckpointConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_checkpoint_config(mut self, value: CheckpointConfig) -> Self {
        self.checkpoint_config = Some(value);
        self
    }

    #[must_use]
    pub fn debug_hook_config(&self) -> Option<&DebugHookConfig> {
        self.debug_hook_config.as_ref()
    }

    /// Replaces the value of `DebugHookConfig`, clearing it when `None`.
    pub fn set_debug_hook_config(&mut self, value: Option<DebugHookConfig>) {
        self.debug_hook_config = value;
    }

    /// Sets `DebugHookConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_debug_hook_config(mut self, value: DebugHookConfig) -> Self {
        self.debug_hook_config = Some(value);
        self
    }

    #[must_use]
    pub fn debug_rule_configurations(&self) -> Option<&[DebugRuleConfiguration]> {
        self.debug_rule_configurations.as_deref()
    }

    /// Replaces the whole `DebugRuleConfigurations` sequence, clearing it when `None`.
    pub fn set_debug_rule_configurations(&mut self, value: Option<Vec<DebugRuleConfiguration>>) {
        self.debug_rule_configurations = value;
    }

    /// Appends to `DebugRuleConfigurations`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_debug_rule_configurations`](Self::set_debug_rule_configurations) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_debug_rule_configurations(mut self, items: impl IntoIterator<Item = DebugRuleConfiguration>) -> Self {
        self.debug_rule_configurations.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn tensor_board_output_config(&self) -> Option<&TensorBoardOutputConfig> {
        self.tensor_board_output_config.as_ref()
    }

    /// Replaces the value of `TensorBoardOutputConfig`, clearing it when `None`.
    pub fn set_tensor_board_output_config(&mut self, value: Option<TensorBoardOutputConfig>) {
        self.tensor_board_output_config = value;
    }

    /// Sets `TensorBoardOutputConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_tensor_board_output_config(mut self, value: TensorBoardOutputConfig) -> Self {
        self.tensor_board_output_config = Some(value);
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

impl fmt::Display for CreateTrainingJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingJobName", self.training_job_name.as_deref())
            .field_map("HyperParameters", self.hyper_parameters.as_ref())
            .field("AlgorithmSpecification", self.algorithm_specification.as_ref())
            .field("RoleArn", self.role_arn.as_deref())
            .field_list("InputDataConfig", self.input_data_config.as_deref())
            .field("OutputDataConfig", self.output_data_config.as_ref())
            .field("ResourceConfig", self.resource_config.as_ref())
            .field("VpcConfig", self.vpc_config.as_ref())
            .field("StoppingCondition", self.stopping_condition.as_ref())
            .field_list("Tags", self.tags.as_deref())
            .field("EnableNetworkIsolation", self.enable_network_isolation.as_ref())
            .field("EnableInterContainerTrafficEncryption", self.enable_inter_container_traffic_encryption.as_ref())
            .field("EnableManagedSpotTraining", self.enable_managed_spot_training.as_ref())
            .field("CheckpointConfig", self.checkpoint_config.as_ref())
            .field("DebugHookConfig", self.debug_hook_config.as_ref())
            .field_list("DebugRuleConfigurations", self.debug_rule_configurations.as_deref())
            .field("TensorBoardOutputConfig", self.tensor_board_output_config.as_ref())
            .field("ExperimentConfig", self.experiment_config.as_ref())
            .finish()
    }
}

impl Hash for CreateTrainingJobRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.training_job_name.hash(state);
        match &self.hyper_parameters {
            None => state.write_u8(0),
            Some(map) => {
                state.write_u8(1);
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                entries.hash(state);
            }
        }
        self.algorithm_specification.hash(state);
        self.role_arn.hash(state);
        self.input_data_config.hash(state);
        self.output_data_config.hash(state);
        self.resource_config.hash(state);
        self.vpc_config.hash(state);
        self.stopping_condition.hash(state);
        self.tags.hash(state);
        self.enable_network_isolation.hash(state);
        self.enable_inter_container_traffic_encryption.hash(state);
        self.enable_managed_spot_training.hash(state);
        self.checkpoint_config.hash(state);
        self.debug_hook_config.hash(state);
        self.debug_rule_configurations.hash(state);
        self.tensor_board_output_config.hash(state);
        self.experiment_config.hash(state);
    }
}

/// Output of the CreateTrainingJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrainingJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    training_job_arn: Option<String>,
}

impl CreateTrainingJobResult {
    /// Creates a new `CreateTrainingJobResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn training_job_arn(&self) -> Option<&str> {
        self.training_job_arn.as_deref()
    }

    /// Replaces the value of `TrainingJobArn`, clearing it when `None`.
    pub fn set_training_job_arn(&mut self, value: Option<String>) {
        self.training_job_arn = value;
    }

    /// Sets `TrainingJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_training_job_arn(mut self, value: impl Into<String>) -> Self {
        self.training_job_arn = Some(value.into());
        self
    }
}

impl fmt::Display for CreateTrainingJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingJobArn", self.training_job_arn.as_deref())
            .finish()
    }
}

/// Full read model of one training run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    training_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tuning_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labeling_job_arn: Option<String>,
    #[serde(rename = "AutoMLJobArn", skip_serializing_if = "Option::is_none")]
    auto_ml_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_artifacts: Option<ModelArtifacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    training_job_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hyper_parameters: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm_specification: Option<AlgorithmSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_data_config: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_config: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopping_condition: Option<StoppingCondition>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    training_start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    training_end_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_status_transitions: Option<Vec<SecondaryStatusTransition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_metric_data_list: Option<Vec<MetricData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkpoint_config: Option<CheckpointConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    training_time_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    billable_time_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_hook_config: Option<DebugHookConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    experiment_config: Option<ExperimentConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_rule_configurations: Option<Vec<DebugRuleConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tensor_board_output_config: Option<TensorBoardOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_rule_evaluation_statuses: Option<Vec<DebugRuleEvaluationStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl TrainingJob {
    /// Creates a new `TrainingJob` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn training_job_name(&self) -> Option<&str> {
        self.training_job_name.as_deref()
    }

    /// Replaces the value of `TrainingJobName`, clearing it when `None`.
    pub fn set_training_job_name(&mut self, value: Option<String>) {
        self.training_job_name = value;
    }

    /// Sets `TrainingJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_training_job_name(mut self, value: impl Into<String>) -> Self {
        self.training_job_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn training_job_arn(&self) -> Option<&str> {
        self.training_job_arn.as_deref()
    }

    /// Replaces the value of `TrainingJobArn`, clearing it when `None`.
    pub fn set_training_job_arn(&mut self, value: Option<String>) {
        self.training_job_arn = value;
    }

    /// Sets `TrainingJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_training_job_arn(mut self, value: impl Into<String>) -> Self {
        self.training_job_arn = Some(value.into());
        self
    }

    /// Set when the run was launched by a tuning job.
    #[must_use]
    pub fn tuning_job_arn(&self) -> Option<&str> {
        self.tuning_job_arn.as_deref()
    }

    /// Replaces the value of `TuningJobArn`, clearing it when `None`.
    pub fn set_tuning_job_arn(&mut self, value: Option<String>) {
        self.tuning_job_arn = value;
    }

    /// Sets `TuningJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_tuning_job_arn(mut self, value: impl Into<String>) -> Self {
        self.tuning_job_arn = Some(value.into());
        self
    }

    /// Set when the run was launched by a labeling job.
    #[must_use]
    pub fn labeling_job_arn(&self) -> Option<&str> {
        self.labeling_job_arn.as_deref()
    }

    /// Replaces the value of `LabelingJobArn`, clearing it when `None`.
    pub fn set_labeling_job_arn(&mut self, value: Option<String>) {
        self.labeling_job_arn = value;
    }

    /// Sets `LabelingJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_labeling_job_arn(mut self, value: impl Into<String>) -> Self {
        self.labeling_job_arn = Some(value.into());
        self
    }

    /// Set when the run was launched by an AutoML job.
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

    #[must_use]
    pub fn model_artifacts(&self) -> Option<&ModelArtifacts> {
        self.model_artifacts.as_ref()
    }

    /// Replaces the value of `ModelArtifacts`, clearing it when `None`.
    pub fn set_model_artifacts(&mut self, value: Option<ModelArtifacts>) {
        self.model_artifacts = value;
    }

    /// Sets `ModelArtifacts`, returning the record for chaining.
    #[must_use]
    pub fn with_model_artifacts(mut self, value: ModelArtifacts) -> Self {
        self.model_artifacts = Some(value);
        self
    }

    /// One of the `TrainingJobStatus` values.
    #[must_use]
    pub fn training_job_status(&self) -> Option<&str> {
        self.training_job_status.as_deref()
    }

    /// Replaces the value of `TrainingJobStatus`, clearing it when `None`.
    pub fn set_training_job_status(&mut self, value: Option<String>) {
        self.training_job_status = value;
    }

    /// Sets `TrainingJobStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_training_job_status(mut self, value: impl Into<String>) -> Self {
        self.training_job_status = Some(value.into());
        self
    }

    /// One of the `SecondaryStatus` values.
    #[must_use]
    pub fn secondary_status(&self) -> Option<&str> {
        self.secondary_status.as_deref()
    }

    /// Replaces the value of `SecondaryStatus`, clearing it when `None`.
    pub fn set_secondary_status(&mut self, value: Option<String>) {
        self.secondary_status = value;
    }

    /// Sets `SecondaryStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_secondary_status(mut self, value: impl Into<String>) -> Self {
        self.secondary_status = Some(value.into());
        self
    }

    /// Set only when the job failed.
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
    pub fn hyper_parameters(&self) -> Option<&HashMap<String, String>> {
        self.hyper_parameters.as_ref()
    }

    /// Replaces the whole `HyperParameters` map, clearing it when `None`.
    pub fn set_hyper_parameters(&mut self, value: Option<HashMap<String, String>>) {
        self.hyper_parameters = value;
    }

    /// Sets `HyperParameters` wholesale, returning the record for chaining.
    #[must_use]
    pub fn with_hyper_parameters(mut self, value: HashMap<String, String>) -> Self {
        self.hyper_parameters = Some(value);
        self
    }

    /// Adds a single `HyperParameters` entry, initializing the map if absent.
    ///
    /// # Errors
    /// Returns [`SageMakerError::DuplicateKey`] when the key is already
    /// present; the existing entry is left untouched.
    pub fn add_hyper_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, SageMakerError> {
        let key = key.into();
        let map = self.hyper_parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(SageMakerError::duplicate_key(key));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets `HyperParameters` to absent.
    pub fn clear_hyper_parameters_entries(&mut self) {
        self.hyper_parameters = None;
    }

    #[must_use]
    pub fn algorithm_specification(&self) -> Option<&AlgorithmSpecification> {
        self.algorithm_specification.as_ref()
    }

    /// Replaces the value of `AlgorithmSpecification`, clearing it when `None`.
    pub fn set_algorithm_specification(&mut self, value: Option<AlgorithmSpecification>) {
        self.algorithm_specification = value;
    }

    /// Sets `AlgorithmSpecification`, returning the record for chaining.
    #[must_use]
    pub fn with_algorithm_specification(mut self, value: AlgorithmSpecification) -> Self {
        self.algorithm_specification = Some(value);
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
    pub fn input_data_config(&self) -> Option<&[Channel]> {
        self.input_data_config.as_deref()
    }

    /// Replaces the whole `InputDataConfig` sequence, clearing it when `None`.
    pub fn set_input_data_config(&mut self, value: Option<Vec<Channel>>) {
        self.input_data_config = value;
    }

    /// Appends to `InputDataConfig`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_input_data_config`](Self::set_input_data_config) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_input_data_config(mut self, items: impl IntoIterator<Item = Channel>) -> Self {
        self.input_data_config.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn output_data_config(&self) -> Option<&OutputDataConfig> {
        self.output_data_config.as_ref()
    }

    /// Replaces the value of `OutputDataConfig`, clearing it when `None`.
    pub fn set_output_data_config(&mut self, value: Option<OutputDataConfig>) {
        self.output_data_config = value;
    }

    /// Sets `OutputDataConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_output_data_config(mut self, value: OutputDataConfig) -> Self {
        self.output_data_config = Some(value);
        self
    }

    #[must_use]
    pub fn resource_config(&self) -> Option<&ResourceConfig> {
        self.resource_config.as_ref()
    }

    /// Replaces the value of `ResourceConfig`, clearing it when `None`.
    pub fn set_resource_config(&mut self, value: Option<ResourceConfig>) {
        self.resource_config = value;
    }

    /// Sets `ResourceConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_resource_config(mut self, value: ResourceConfig) -> Self {
        self.resource_config = Some(value);
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

    #[must_use]
    pub fn stopping_condition(&self) -> Option<&StoppingCondition> {
        self.stopping_condition.as_ref()
    }

    /// Replaces the value of `StoppingCondition`, clearing it when `None`.
    pub fn set_stopping_condition(&mut self, value: Option<StoppingCondition>) {
        self.stopping_condition = value;
    }

    /// Sets `StoppingCondition`, returning the record for chaining.
    #[must_use]
    pub fn with_stopping_condition(mut self, value: StoppingCondition) -> Self {
        self.stopping_condition = Some(value);
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
    pub fn training_start_time(&self) -> Option<DateTime<Utc>> {
        self.training_start_time
    }

    /// Replaces the value of `TrainingStartTime`, clearing it when `None`.
    pub fn set_training_start_time(&mut self, value: Option<DateTime<Utc>>) {
        self.training_start_time = value;
    }

    /// Sets `TrainingStartTime`, returning the record for chaining.
    #[must_use]
    pub fn with_training_start_time(mut self, value: DateTime<Utc>) -> Self {
        self.training_start_time = Some(value);
        self
    }

    #[must_use]
    pub fn training_end_time(&self) -> Option<DateTime<Utc>> {
        self.training_end_time
    }

    /// Replaces the value of `TrainingEndTime`, clearing it when `None`.
    pub fn set_training_end_time(&mut self, value: Option<DateTime<Utc>>) {
        self.training_end_time = value;
    }

    /// Sets `TrainingEndTime`, returning the record for chaining.
    #[must_use]
    pub fn with_training_end_time(mut self, value: DateTime<Utc>) -> Self {
        self.training_end_time = Some(value);
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
    pub fn secondary_status_transitions(&self) -> Option<&[SecondaryStatusTransition]> {
        self.secondary_status_transitions.as_deref()
    }

    /// Replaces the whole `SecondaryStatusTransitions` sequence, clearing it when `None`.
    pub fn set_secondary_status_transitions(&mut self, value: Option<Vec<SecondaryStatusTransition>>) {
        self.secondary_status_transitions = value;
    }

    /// Appends to `SecondaryStatusTransitions`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_secondary_status_transitions`](Self::set_secondary_status_transitions) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_secondary_status_transitions(mut self, items: impl IntoIterator<Item = SecondaryStatusTransition>) -> Self {
        self.secondary_status_transitions.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn final_metric_data_list(&self) -> Option<&[MetricData]> {
        self.final_metric_data_list.as_deref()
    }

    /// Replaces the whole `FinalMetricDataList` sequence, clearing it when `None`.
    pub fn set_final_metric_data_list(&mut self, value: Option<Vec<MetricData>>) {
        self.final_metric_data_list = value;
    }

    /// Appends to `FinalMetricDataList`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_final_metric_data_list`](Self::set_final_metric_data_list) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_final_metric_data_list(mut self, items: impl IntoIterator<Item = MetricData>) -> Self {
        self.final_metric_data_list.get_or_insert_with(Vec::new).extend(items);
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
    pub fn enable_managed_spot_training(&self) -> Option<bool> {
        self.enable_managed_spot_training
    }

    /// Replaces the value of `EnableManagedSpotTraining`, clearing it when `None`.
    pub fn set_enable_managed_spot_training(&mut self, value: Option<bool>) {
        self.enable_managed_spot_training = value;
    }

    /// Sets `EnableManagedSpotTraining`, returning the record for chaining.
    #[must_use]
    pub fn with_enable_managed_spot_training(mut self, value: bool) -> Self {
        self.enable_managed_spot_training = Some(value);
        self
    }

    #[must_use]
    pub fn checkpoint_config(&self) -> Option<&CheckpointConfig> {
        self.checkpoint_config.as_ref()
    }

    /// Replaces the value of `CheckpointConfig`, clearing it when `None`.
    pub fn set_checkpoint_config(&mut self, value: Option<CheckpointConfig>) {
        self.checkpoint_config = value;
    }

    /// Sets `CheckpointConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_checkpoint_config(mut self, value: CheckpointConfig) -> Self {
        self.checkpoint_config = Some(value);
        self
    }

    #[must_use]
    pub fn training_time_in_seconds(&self) -> Option<i32> {
        self.training_time_in_seconds
    }

    /// Replaces the value of `TrainingTimeInSeconds`, clearing it when `None`.
    pub fn set_training_time_in_seconds(&mut self, value: Option<i32>) {
        self.training_time_in_seconds = value;
    }

    /// Sets `TrainingTimeInSeconds`, returning the record for chaining.
    #[must_use]
    pub fn with_training_time_in_seconds(mut self, value: i32) -> Self {
        self.training_time_in_seconds = Some(value);
        self
    }

    /// Billed seconds; lower than training time when spot capacity was interrupted.
    #[must_use]
    pub fn billable_time_in_seconds(&self) -> Option<i32> {
        self.billable_time_in_seconds
    }

    /// Replaces the value of `BillableTimeInSeconds`, clearing it when `None`.
    pub fn set_billable_time_in_seconds(&mut self, value: Option<i32>) {
        self.billable_time_in_seconds = value;
    }

    /// Sets `BillableTimeInSeconds`, returning the record for chaining.
    #[must_use]
    pub fn with_billable_time_in_seconds(mut self, value: i32) -> Self {
        self.billable_time_in_seconds = Some(value);
        self
    }

    #[must_use]
    pub fn debug_hook_config(&self) -> Option<&DebugHookConfig> {
        self.debug_hook_config.as_ref()
    }

    /// Replaces the value of `DebugHookConfig`, clearing it when `None`.
    pub fn set_debug_hook_config(&mut self, value: Option<DebugHookConfig>) {
        self.debug_hook_config = value;
    }

    /// Sets `DebugHookConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_debug_hook_config(mut self, value: DebugHookConfig) -> Self {
        self.debug_hook_config = Some(value);
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

    #[must_use]
    pub fn debug_rule_configurations(&self) -> Option<&[DebugRuleConfiguration]> {
        self.debug_rule_configurations.as_deref()
    }

    /// Replaces the whole `DebugRuleConfigurations` sequence, clearing it when `None`.
    pub fn set_debug_rule_configurations(&mut self, value: Option<Vec<DebugRuleConfiguration>>) {
        self.debug_rule_configurations = value;
    }

    /// Appends to `DebugRuleConfigurations`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_debug_rule_configurations`](Self::set_debug_rule_configurations) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_debug_rule_configurations(mut self, items: impl IntoIterator<Item = DebugRuleConfiguration>) -> Self {
        self.debug_rule_configurations.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn tensor_board_output_config(&self) -> Option<&TensorBoardOutputConfig> {
        self.tensor_board_output_config.as_ref()
    }

    /// Replaces the value of `TensorBoardOutputConfig`, clearing it when `None`.
    pub fn set_tensor_board_output_config(&mut self, value: Option<TensorBoardOutputConfig>) {
        self.tensor_board_output_config = value;
    }

    /// Sets `TensorBoardOutputConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_tensor_board_output_config(mut self, value: TensorBoardOutputConfig) -> Self {
        self.tensor_board_output_config = Some(value);
        self
    }

    #[must_use]
    pub fn debug_rule_evaluation_statuses(&self) -> Option<&[DebugRuleEvaluationStatus]> {
        self.debug_rule_evaluation_statuses.as_deref()
    }

    /// Replaces the whole `DebugRuleEvaluationStatuses` sequence, clearing it when `None`.
    pub fn set_debug_rule_evaluation_statuses(&mut self, value: Option<Vec<DebugRuleEvaluationStatus>>) {
        self.debug_rule_evaluation_statuses = value;
    }

    /// Appends to `DebugRuleEvaluationStatuses`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_debug_rule_evaluation_statuses`](Self::set_debug_rule_evaluation_statuses) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_debug_rule_evaluation_statuses(mut self, items: impl IntoIterator<Item = DebugRuleEvaluationStatus>) -> Self {
        self.debug_rule_evaluation_statuses.get_or_insert_with(Vec::new).extend(items);
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

impl fmt::Display for TrainingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingJobName", self.training_job_name.as_deref())
            .field("TrainingJobArn", self.training_job_arn.as_deref())
            .field("TuningJobArn", self.tuning_job_arn.as_deref())
            .field("LabelingJobArn", self.labeling_job_arn.as_deref())
            .field("AutoMLJobArn", self.auto_ml_job_arn.as_deref())
            .field("ModelArtifacts", self.model_artifacts.as_ref())
            .field("TrainingJobStatus", self.training_job_status.as_deref())
            .field("SecondaryStatus", self.secondary_status.as_deref())
            .field("FailureReason", self.failure_reason.as_deref())
            .field_map("HyperParameters", self.hyper_parameters.as_ref())
            .field("AlgorithmSpecification", self.algorithm_specification.as_ref())
            .field("RoleArn", self.role_arn.as_deref())
            .field_list("InputDataConfig", self.input_data_config.as_deref())
            .field("OutputDataConfig", self.output_data_config.as_ref())
            .field("ResourceConfig", self.resource_config.as_ref())
            .field("VpcConfig", self.vpc_config.as_ref())
            .field("StoppingCondition", self.stopping_condition.as_ref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("TrainingStartTime", self.training_start_time.as_ref())
            .field("TrainingEndTime", self.training_end_time.as_ref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .field_list("SecondaryStatusTransitions", self.secondary_status_transitions.as_deref())
            .field_list("FinalMetricDataList", self.final_metric_data_list.as_deref())
            .field("EnableNetworkIsolation", self.enable_network_isolation.as_ref())
            .field("EnableInterContainerTrafficEncryption", self.enable_inter_container_traffic_encryption.as_ref())
            .field("EnableManagedSpotTraining", self.enable_managed_spot_training.as_ref())
            .field("CheckpointConfig", self.checkpoint_config.as_ref())
            .field("TrainingTimeInSeconds", self.training_time_in_seconds.as_ref())
            .field("BillableTimeInSeconds", self.billable_time_in_seconds.as_ref())
            .field("DebugHookConfig", self.debug_hook_config.as_ref())
            .field("ExperimentConfig", self.experiment_config.as_ref())
            .field_list("DebugRuleConfigurations", self.debug_rule_configurations.as_deref())
            .field("TensorBoardOutputConfig", self.tensor_board_output_config.as_ref())
            .field_list("DebugRuleEvaluationStatuses", self.debug_rule_evaluation_statuses.as_deref())
            .field_list("Tags", self.tags.as_deref())
            .finish()
    }
}

impl Hash for TrainingJob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.training_job_name.hash(state);
        self.training_job_arn.hash(state);
        self.tuning_job_arn.hash(state);
        self.labeling_job_arn.hash(state);
        self.auto_ml_job_arn.hash(state);
        self.model_artifacts.hash(state);
        self.training_job_status.hash(state);
        self.secondary_status.hash(state);
        self.failure_reason.hash(state);
        match &self.hyper_parameters {
            None => state.write_u8(0),
            Some(map) => {
                state.write_u8(1);
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                entries.hash(state);
            }
        }
        self.algorithm_specification.hash(state);
        self.role_arn.hash(state);
        self.input_data_config.hash(state);
        self.output_data_config.hash(state);
        self.resource_config.hash(state);
        self.vpc_config.hash(state);
        self.stopping_condition.hash(state);
        self.creation_time.hash(state);
        self.training_start_time.hash(state);
        self.training_end_time.hash(state);
        self.last_modified_time.hash(state);
        self.secondary_status_transitions.hash(state);
        self.final_metric_data_list.hash(state);
        self.enable_network_isolation.hash(state);
        self.enable_inter_container_traffic_encryption.hash(state);
        self.enable_managed_spot_training.hash(state);
        self.checkpoint_config.hash(state);
        self.training_time_in_seconds.hash(state);
        self.billable_time_in_seconds.hash(state);
        self.debug_hook_config.hash(state);
        self.experiment_config.hash(state);
        self.debug_rule_configurations.hash(state);
        self.tensor_board_output_config.hash(state);
        self.debug_rule_evaluation_statuses.hash(state);
        self.tags.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sagemaker_types::{
        S3DataDistribution, S3DataType, SecondaryStatus, TrainingInputMode, TrainingInstanceType,
        TrainingJobStatus,
    };
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn training_request() -> CreateTrainingJobRequest {
        let mut request = CreateTrainingJobRequest::new()
            .with_training_job_name("churn-xgb")
            .with_algorithm_specification(
                AlgorithmSpecification::new()
                    .with_training_image("123456789012.dkr.ecr.us-east-1.amazonaws.com/xgboost:1")
                    .with_training_input_mode(TrainingInputMode::File)
                    .with_metric_definitions([MetricDefinition::new()
                        .with_name("validation:auc")
                        .with_regex("validation-auc=([0-9\\.]+)")]),
            )
            .with_role_arn("arn:aws:iam::123456789012:role/training")
            .with_input_data_config([Channel::new()
                .with_channel_name("train")
                .with_data_source(DataSource::new().with_s3_data_source(
                    S3DataSource::new()
                        .with_s3_data_type(S3DataType::S3Prefix)
                        .with_s3_uri("s3://training-data/churn/")
                        .with_s3_data_distribution_type(S3DataDistribution::FullyReplicated),
                ))
                .with_shuffle_config(ShuffleConfig::new().with_seed(42))])
            .with_resource_config(
                ResourceConfig::new()
                    .with_instance_type(TrainingInstanceType::MlM5Xlarge)
                    .with_instance_count(1)
                    .with_volume_size_in_gb(50),
            );
        request.add_hyper_parameters_entry("max_depth", "6").unwrap();
        request.add_hyper_parameters_entry("eta", "0.2").unwrap();
        request
    }

    #[test]
    fn test_request_uses_service_wire_casing() {
        let json = serde_json::to_value(training_request()).unwrap();
        assert_eq!(json["TrainingJobName"], "churn-xgb");
        assert_eq!(json["HyperParameters"]["max_depth"], "6");
        assert_eq!(json["AlgorithmSpecification"]["TrainingInputMode"], "File");
        assert_eq!(json["ResourceConfig"]["VolumeSizeInGB"], 50);
        assert_eq!(json["InputDataConfig"][0]["ShuffleConfig"]["Seed"], 42);
        assert!(json.get("EnableManagedSpotTraining").is_none());
    }

    #[test]
    fn test_hyper_parameters_reject_duplicate_keys() {
        let mut request = training_request();
        let err = request.add_hyper_parameters_entry("eta", "0.3").unwrap_err();
        assert_eq!(err.to_string(), "Duplicated keys (eta) are provided");
        assert_eq!(
            request.hyper_parameters().unwrap().get("eta").map(String::as_str),
            Some("0.2"),
        );
        request.clear_hyper_parameters_entries();
        assert_eq!(request.hyper_parameters(), None);
    }

    #[test]
    fn test_identically_built_requests_agree_on_equality_and_hash() {
        assert_eq!(training_request(), training_request());
        assert_eq!(hash_of(&training_request()), hash_of(&training_request()));
        assert_ne!(
            training_request(),
            training_request().with_enable_managed_spot_training(true),
        );
    }

    #[test]
    fn test_with_input_data_config_appends() {
        let request = training_request()
            .with_input_data_config([Channel::new().with_channel_name("validation")]);
        let channels = request.input_data_config().unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[1].channel_name(), Some("validation"));
    }

    #[test]
    fn test_training_job_read_model_round_trips_through_json() {
        let job = TrainingJob::new()
            .with_training_job_name("churn-xgb")
            .with_training_job_arn(
                "arn:aws:sagemaker:us-east-1:123456789012:training-job/churn-xgb",
            )
            .with_auto_ml_job_arn("arn:aws:sagemaker:us-east-1:123456789012:automl-job/churn")
            .with_training_job_status(TrainingJobStatus::Completed)
            .with_secondary_status(SecondaryStatus::Completed)
            .with_model_artifacts(
                ModelArtifacts::new()
                    .with_s3_model_artifacts("s3://training-output/churn-xgb/model.tar.gz"),
            )
            .with_creation_time(Utc.timestamp_opt(1_590_000_000, 0).unwrap())
            .with_training_start_time(Utc.timestamp_opt(1_590_000_060, 0).unwrap())
            .with_secondary_status_transitions([SecondaryStatusTransition::new()
                .with_status(SecondaryStatus::Training)
                .with_start_time(Utc.timestamp_opt(1_590_000_060, 0).unwrap())
                .with_status_message("Training image download completed.")])
            .with_final_metric_data_list([MetricData::new()
                .with_metric_name("validation:auc")
                .with_value(0.91)
                .with_timestamp(Utc.timestamp_opt(1_590_003_600, 0).unwrap())])
            .with_training_time_in_seconds(3540)
            .with_billable_time_in_seconds(3540);
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(
            json["AutoMLJobArn"],
            "arn:aws:sagemaker:us-east-1:123456789012:automl-job/churn",
        );
        assert_eq!(json["FinalMetricDataList"][0]["MetricName"], "validation:auc");
        let back: TrainingJob = serde_json::from_value(json).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn test_spot_transition_display_omits_open_end_time() {
        let transition = SecondaryStatusTransition::new()
            .with_status(SecondaryStatus::Interrupted)
            .with_start_time(Utc.timestamp_opt(1_590_001_000, 0).unwrap());
        let rendered = transition.to_string();
        assert!(rendered.starts_with("{Status: Interrupted, StartTime: "));
        assert!(!rendered.contains("EndTime"));
    }
}
