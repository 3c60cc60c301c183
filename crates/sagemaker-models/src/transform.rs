//! Shapes for batch transform configuration.
//!
//! `TransformJobDefinition` is embedded in model package validation profiles;
//! `DataProcessing` controls how transform output is joined back to input.

use sagemaker_types::{SageMakerError, ShapeFormatter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Controls which input fields reach the model and how output is joined.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataProcessing {
    #[serde(skip_serializing_if = "Option::is_none")]
    input_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    join_source: Option<String>,
}

impl DataProcessing {
    /// Creates a new `DataProcessing` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// JSONPath applied to each input record before inference.
    #[must_use]
    pub fn input_filter(&self) -> Option<&str> {
        self.input_filter.as_deref()
    }

    /// Replaces the value of `InputFilter`, clearing it when `None`.
    pub fn set_input_filter(&mut self, value: Option<String>) {
        self.input_filter = value;
    }

    /// Sets `InputFilter`, returning the record for chaining.
    #[must_use]
    pub fn with_input_filter(mut self, value: impl Into<String>) -> Self {
        self.input_filter = Some(value.into());
        self
    }

    /// JSONPath applied to each joined record before upload.
    #[must_use]
    pub fn output_filter(&self) -> Option<&str> {
        self.output_filter.as_deref()
    }

    /// Replaces the value of `OutputFilter`, clearing it when `None`.
    pub fn set_output_filter(&mut self, value: Option<String>) {
        self.output_filter = value;
    }

    /// Sets `OutputFilter`, returning the record for chaining.
    #[must_use]
    pub fn with_output_filter(mut self, value: impl Into<String>) -> Self {
        self.output_filter = Some(value.into());
        self
    }

    /// One of the `JoinSource` values.
    #[must_use]
    pub fn join_source(&self) -> Option<&str> {
        self.join_source.as_deref()
    }

    /// Replaces the value of `JoinSource`, clearing it when `None`.
    pub fn set_join_source(&mut self, value: Option<String>) {
        self.join_source = value;
    }

    /// Sets `JoinSource`, returning the record for chaining.
    #[must_use]
    pub fn with_join_source(mut self, value: impl Into<String>) -> Self {
        self.join_source = Some(value.into());
        self
    }
}

impl fmt::Display for DataProcessing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InputFilter", self.input_filter.as_deref())
            .field("OutputFilter", self.output_filter.as_deref())
            .field("JoinSource", self.join_source.as_deref())
            .finish()
    }
}

/// S3 location of transform input.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformS3DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
}

impl TransformS3DataSource {
    /// Creates a new `TransformS3DataSource` with every field absent.
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
}

impl fmt::Display for TransformS3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataType", self.s3_data_type.as_deref())
            .field("S3Uri", self.s3_uri.as_deref())
            .finish()
    }
}

/// Data source of a transform job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_data_source: Option<TransformS3DataSource>,
}

impl TransformDataSource {
    /// Creates a new `TransformDataSource` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn s3_data_source(&self) -> Option<&TransformS3DataSource> {
        self.s3_data_source.as_ref()
    }

    /// Replaces the value of `S3DataSource`, clearing it when `None`.
    pub fn set_s3_data_source(&mut self, value: Option<TransformS3DataSource>) {
        self.s3_data_source = value;
    }

    /// Sets `S3DataSource`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_data_source(mut self, value: TransformS3DataSource) -> Self {
        self.s3_data_source = Some(value);
        self
    }
}

impl fmt::Display for TransformDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataSource", self.s3_data_source.as_ref())
            .finish()
    }
}

/// Input channel of a transform job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_source: Option<TransformDataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compression_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    split_type: Option<String>,
}

impl TransformInput {
    /// Creates a new `TransformInput` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data_source(&self) -> Option<&TransformDataSource> {
        self.data_source.as_ref()
    }

    /// Replaces the value of `DataSource`, clearing it when `None`.
    pub fn set_data_source(&mut self, value: Option<TransformDataSource>) {
        self.data_source = value;
    }

    /// Sets `DataSource`, returning the record for chaining.
    #[must_use]
    pub fn with_data_source(mut self, value: TransformDataSource) -> Self {
        self.data_source = Some(value);
        self
    }

    /// MIME type of the input data.
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

    /// One of the `SplitType` values.
    #[must_use]
    pub fn split_type(&self) -> Option<&str> {
        self.split_type.as_deref()
    }

    /// Replaces the value of `SplitType`, clearing it when `None`.
    pub fn set_split_type(&mut self, value: Option<String>) {
        self.split_type = value;
    }

    /// Sets `SplitType`, returning the record for chaining.
    #[must_use]
    pub fn with_split_type(mut self, value: impl Into<String>) -> Self {
        self.split_type = Some(value.into());
        self
    }
}

impl fmt::Display for TransformInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DataSource", self.data_source.as_ref())
            .field("ContentType", self.content_type.as_deref())
            .field("CompressionType", self.compression_type.as_deref())
            .field("SplitType", self.split_type.as_deref())
            .finish()
    }
}

/// Where transform results are stored.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assemble_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
}

impl TransformOutput {
    /// Creates a new `TransformOutput` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// MIME type the results are requested in.
    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// Replaces the value of `Accept`, clearing it when `None`.
    pub fn set_accept(&mut self, value: Option<String>) {
        self.accept = value;
    }

    /// Sets `Accept`, returning the record for chaining.
    #[must_use]
    pub fn with_accept(mut self, value: impl Into<String>) -> Self {
        self.accept = Some(value.into());
        self
    }

    /// One of the `AssemblyType` values.
    #[must_use]
    pub fn assemble_with(&self) -> Option<&str> {
        self.assemble_with.as_deref()
    }

    /// Replaces the value of `AssembleWith`, clearing it when `None`.
    pub fn set_assemble_with(&mut self, value: Option<String>) {
        self.assemble_with = value;
    }

    /// Sets `AssembleWith`, returning the record for chaining.
    #[must_use]
    pub fn with_assemble_with(mut self, value: impl Into<String>) -> Self {
        self.assemble_with = Some(value.into());
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

impl fmt::Display for TransformOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3OutputPath", self.s3_output_path.as_deref())
            .field("Accept", self.accept.as_deref())
            .field("AssembleWith", self.assemble_with.as_deref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .finish()
    }
}

/// Instances backing a transform job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume_kms_key_id: Option<String>,
}

impl TransformResources {
    /// Creates a new `TransformResources` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `TransformInstanceType` values.
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

impl fmt::Display for TransformResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InstanceType", self.instance_type.as_deref())
            .field("InstanceCount", self.instance_count.as_ref())
            .field("VolumeKmsKeyId", self.volume_kms_key_id.as_deref())
            .finish()
    }
}

/// Transform job run to validate a model package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformJobDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_concurrent_transforms: Option<i32>,
    #[serde(rename = "MaxPayloadInMB", skip_serializing_if = "Option::is_none")]
    max_payload_in_mb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    batch_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform_input: Option<TransformInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform_output: Option<TransformOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform_resources: Option<TransformResources>,
}

impl TransformJobDefinition {
    /// Creates a new `TransformJobDefinition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_concurrent_transforms(&self) -> Option<i32> {
        self.max_concurrent_transforms
    }

    /// Replaces the value of `MaxConcurrentTransforms`, clearing it when `None`.
    pub fn set_max_concurrent_transforms(&mut self, value: Option<i32>) {
        self.max_concurrent_transforms = value;
    }

    /// Sets `MaxConcurrentTransforms`, returning the record for chaining.
    #[must_use]
    pub fn with_max_concurrent_transforms(mut self, value: i32) -> Self {
        self.max_concurrent_transforms = Some(value);
        self
    }

    #[must_use]
    pub fn max_payload_in_mb(&self) -> Option<i32> {
        self.max_payload_in_mb
    }

    /// Replaces the value of `MaxPayloadInMB`, clearing it when `None`.
    pub fn set_max_payload_in_mb(&mut self, value: Option<i32>) {
        self.max_payload_in_mb = value;
    }

    /// Sets `MaxPayloadInMB`, returning the record for chaining.
    #[must_use]
    pub fn with_max_payload_in_mb(mut self, value: i32) -> Self {
        self.max_payload_in_mb = Some(value);
        self
    }

    /// One of the `BatchStrategy` values.
    #[must_use]
    pub fn batch_strategy(&self) -> Option<&str> {
        self.batch_strategy.as_deref()
    }

    /// Replaces the value of `BatchStrategy`, clearing it when `None`.
    pub fn set_batch_strategy(&mut self, value: Option<String>) {
        self.batch_strategy = value;
    }

    /// Sets `BatchStrategy`, returning the record for chaining.
    #[must_use]
    pub fn with_batch_strategy(mut self, value: impl Into<String>) -> Self {
        self.batch_strategy = Some(value.into());
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
    pub fn transform_input(&self) -> Option<&TransformInput> {
        self.transform_input.as_ref()
    }

    /// Replaces the value of `TransformInput`, clearing it when `None`.
    pub fn set_transform_input(&mut self, value: Option<TransformInput>) {
        self.transform_input = value;
    }

    /// Sets `TransformInput`, returning the record for chaining.
    #[must_use]
    pub fn with_transform_input(mut self, value: TransformInput) -> Self {
        self.transform_input = Some(value);
        self
    }

    #[must_use]
    pub fn transform_output(&self) -> Option<&TransformOutput> {
        self.transform_output.as_ref()
    }

    /// Replaces the value of `TransformOutput`, clearing it when `None`.
    pub fn set_transform_output(&mut self, value: Option<TransformOutput>) {
        self.transform_output = value;
    }

    /// Sets `TransformOutput`, returning the record for chaining.
    #[must_use]
    pub fn with_transform_output(mut self, value: TransformOutput) -> Self {
        self.transform_output = Some(value);
        self
    }

    #[must_use]
    pub fn transform_resources(&self) -> Option<&TransformResources> {
        self.transform_resources.as_ref()
    }

    /// Replaces the value of `TransformResources`, clearing it when `None`.
    pub fn set_transform_resources(&mut self, value: Option<TransformResources>) {
        self.transform_resources = value;
    }

    /// Sets `TransformResources`, returning the record for chaining.
    #[must_use]
    pub fn with_transform_resources(mut self, value: TransformResources) -> Self {
        self.transform_resources = Some(value);
        self
    }
}

impl fmt::Display for TransformJobDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxConcurrentTransforms", self.max_concurrent_transforms.as_ref())
            .field("MaxPayloadInMB", self.max_payload_in_mb.as_ref())
            .field("BatchStrategy", self.batch_strategy.as_deref())
            .field_map("Environment", self.environment.as_ref())
            .field("TransformInput", self.transform_input.as_ref())
            .field("TransformOutput", self.transform_output.as_ref())
            .field("TransformResources", self.transform_resources.as_ref())
            .finish()
    }
}

impl Hash for TransformJobDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.max_concurrent_transforms.hash(state);
        self.max_payload_in_mb.hash(state);
        self.batch_strategy.hash(state);
        match &self.environment {
            None => state.write_u8(0),
            Some(map) => {
                state.write_u8(1);
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                entries.hash(state);
            }
        }
        self.transform_input.hash(state);
        self.transform_output.hash(state);
        self.transform_resources.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagemaker_types::{BatchStrategy, JoinSource, SplitType};

    #[test]
    fn test_max_payload_keeps_service_casing() {
        let definition = TransformJobDefinition::new()
            .with_max_payload_in_mb(6)
            .with_max_concurrent_transforms(4);
        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["MaxPayloadInMB"], 6);
        assert_eq!(json["MaxConcurrentTransforms"], 4);
    }

    #[test]
    fn test_enum_setters_store_wire_strings() {
        let definition = TransformJobDefinition::new()
            .with_batch_strategy(BatchStrategy::MultiRecord)
            .with_transform_input(TransformInput::new().with_split_type(SplitType::RecordIo));
        assert_eq!(definition.batch_strategy(), Some("MultiRecord"));
        assert_eq!(
            definition.transform_input().unwrap().split_type(),
            Some("RecordIO"),
        );
    }

    #[test]
    fn test_join_source_accepts_raw_strings() {
        let typed = DataProcessing::new().with_join_source(JoinSource::Input);
        let raw = DataProcessing::new().with_join_source("Input");
        assert_eq!(typed, raw);
    }

    #[test]
    fn test_clear_environment_resets_to_absent() {
        let mut definition = TransformJobDefinition::new();
        definition.add_environment_entry("THREADS", "8").unwrap();
        assert!(definition.environment().is_some());
        definition.clear_environment_entries();
        assert_eq!(definition.environment(), None);
    }
}
