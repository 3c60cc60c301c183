//! Shapes for model hosting: DescribeModel and endpoint production variants.

use crate::common::VpcConfig;
use chrono::{DateTime, Utc};
use sagemaker_types::{SageMakerError, ShapeFormatter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Container a hosted model runs in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    container_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_package_name: Option<String>,
}

impl ContainerDefinition {
    /// Creates a new `ContainerDefinition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn container_hostname(&self) -> Option<&str> {
        self.container_hostname.as_deref()
    }

    /// Replaces the value of `ContainerHostname`, clearing it when `None`.
    pub fn set_container_hostname(&mut self, value: Option<String>) {
        self.container_hostname = value;
    }

    /// Sets `ContainerHostname`, returning the record for chaining.
    #[must_use]
    pub fn with_container_hostname(mut self, value: impl Into<String>) -> Self {
        self.container_hostname = Some(value.into());
        self
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

    /// One of the `ContainerMode` values.
    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Replaces the value of `Mode`, clearing it when `None`.
    pub fn set_mode(&mut self, value: Option<String>) {
        self.mode = value;
    }

    /// Sets `Mode`, returning the record for chaining.
    #[must_use]
    pub fn with_mode(mut self, value: impl Into<String>) -> Self {
        self.mode = Some(value.into());
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

    /// Model package to use instead of a raw image.
    #[must_use]
    pub fn model_package_name(&self) -> Option<&str> {
        self.model_package_name.as_deref()
    }

    /// Replaces the value of `ModelPackageName`, clearing it when `None`.
    pub fn set_model_package_name(&mut self, value: Option<String>) {
        self.model_package_name = value;
    }

    /// Sets `ModelPackageName`, returning the record for chaining.
    #[must_use]
    pub fn with_model_package_name(mut self, value: impl Into<String>) -> Self {
        self.model_package_name = Some(value.into());
        self
    }
}

impl fmt::Display for ContainerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ContainerHostname", self.container_hostname.as_deref())
            .field("Image", self.image.as_deref())
            .field("Mode", self.mode.as_deref())
            .field("ModelDataUrl", self.model_data_url.as_deref())
            .field_map("Environment", self.environment.as_ref())
            .field("ModelPackageName", self.model_package_name.as_deref())
            .finish()
    }
}

impl Hash for ContainerDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.container_hostname.hash(state);
        self.image.hash(state);
        self.mode.hash(state);
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
        self.model_package_name.hash(state);
    }
}

/// Input for the DescribeModel operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model_name: Option<String>,
}

impl DescribeModelRequest {
    /// Creates a new `DescribeModelRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    /// Replaces the value of `ModelName`, clearing it when `None`.
    pub fn set_model_name(&mut self, value: Option<String>) {
        self.model_name = value;
    }

    /// Sets `ModelName`, returning the record for chaining.
    #[must_use]
    pub fn with_model_name(mut self, value: impl Into<String>) -> Self {
        self.model_name = Some(value.into());
        self
    }
}

impl fmt::Display for DescribeModelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ModelName", self.model_name.as_deref())
            .finish()
    }
}

/// Output of the DescribeModel operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeModelResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_container: Option<ContainerDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    containers: Option<Vec<ContainerDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vpc_config: Option<VpcConfig>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_network_isolation: Option<bool>,
}

impl DescribeModelResult {
    /// Creates a new `DescribeModelResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    /// Replaces the value of `ModelName`, clearing it when `None`.
    pub fn set_model_name(&mut self, value: Option<String>) {
        self.model_name = value;
    }

    /// Sets `ModelName`, returning the record for chaining.
    #[must_use]
    pub fn with_model_name(mut self, value: impl Into<String>) -> Self {
        self.model_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn primary_container(&self) -> Option<&ContainerDefinition> {
        self.primary_container.as_ref()
    }

    /// Replaces the value of `PrimaryContainer`, clearing it when `None`.
    pub fn set_primary_container(&mut self, value: Option<ContainerDefinition>) {
        self.primary_container = value;
    }

    /// Sets `PrimaryContainer`, returning the record for chaining.
    #[must_use]
    pub fn with_primary_container(mut self, value: ContainerDefinition) -> Self {
        self.primary_container = Some(value);
        self
    }

    /// Containers of an inference pipeline, in order.
    #[must_use]
    pub fn containers(&self) -> Option<&[ContainerDefinition]> {
        self.containers.as_deref()
    }

    /// Replaces the whole `Containers` sequence, clearing it when `None`.
    pub fn set_containers(&mut self, value: Option<Vec<ContainerDefinition>>) {
        self.containers = value;
    }

    /// Appends to `Containers`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_containers`](Self::set_containers) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_containers(mut self, items: impl IntoIterator<Item = ContainerDefinition>) -> Self {
        self.containers.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn execution_role_arn(&self) -> Option<&str> {
        self.execution_role_arn.as_deref()
    }

    /// Replaces the value of `ExecutionRoleArn`, clearing it when `None`.
    pub fn set_execution_role_arn(&mut self, value: Option<String>) {
        self.execution_role_arn = value;
    }

    /// Sets `ExecutionRoleArn`, returning the record for chaining.
    #[must_use]
    pub fn with_execution_role_arn(mut self, value: impl Into<String>) -> Self {
        self.execution_role_arn = Some(value.into());
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
    pub fn model_arn(&self) -> Option<&str> {
        self.model_arn.as_deref()
    }

    /// Replaces the value of `ModelArn`, clearing it when `None`.
    pub fn set_model_arn(&mut self, value: Option<String>) {
        self.model_arn = value;
    }

    /// Sets `ModelArn`, returning the record for chaining.
    #[must_use]
    pub fn with_model_arn(mut self, value: impl Into<String>) -> Self {
        self.model_arn = Some(value.into());
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
}

impl fmt::Display for DescribeModelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ModelName", self.model_name.as_deref())
            .field("PrimaryContainer", self.primary_container.as_ref())
            .field_list("Containers", self.containers.as_deref())
            .field("ExecutionRoleArn", self.execution_role_arn.as_deref())
            .field("VpcConfig", self.vpc_config.as_ref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("ModelArn", self.model_arn.as_deref())
            .field("EnableNetworkIsolation", self.enable_network_isolation.as_ref())
            .finish()
    }
}

/// One model variant behind an endpoint, with its share of traffic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductionVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    variant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_variant_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accelerator_type: Option<String>,
}

impl ProductionVariant {
    /// Creates a new `ProductionVariant` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant_name(&self) -> Option<&str> {
        self.variant_name.as_deref()
    }

    /// Replaces the value of `VariantName`, clearing it when `None`.
    pub fn set_variant_name(&mut self, value: Option<String>) {
        self.variant_name = value;
    }

    /// Sets `VariantName`, returning the record for chaining.
    #[must_use]
    pub fn with_variant_name(mut self, value: impl Into<String>) -> Self {
        self.variant_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    /// Replaces the value of `ModelName`, clearing it when `None`.
    pub fn set_model_name(&mut self, value: Option<String>) {
        self.model_name = value;
    }

    /// Sets `ModelName`, returning the record for chaining.
    #[must_use]
    pub fn with_model_name(mut self, value: impl Into<String>) -> Self {
        self.model_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn initial_instance_count(&self) -> Option<i32> {
        self.initial_instance_count
    }

    /// Replaces the value of `InitialInstanceCount`, clearing it when `None`.
    pub fn set_initial_instance_count(&mut self, value: Option<i32>) {
        self.initial_instance_count = value;
    }

    /// Sets `InitialInstanceCount`, returning the record for chaining.
    #[must_use]
    pub fn with_initial_instance_count(mut self, value: i32) -> Self {
        self.initial_instance_count = Some(value);
        self
    }

    /// One of the `ProductionVariantInstanceType` values.
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

    /// Relative share of traffic routed to this variant.
    #[must_use]
    pub fn initial_variant_weight(&self) -> Option<f32> {
        self.initial_variant_weight
    }

    /// Replaces the value of `InitialVariantWeight`, clearing it when `None`.
    pub fn set_initial_variant_weight(&mut self, value: Option<f32>) {
        self.initial_variant_weight = value;
    }

    /// Sets `InitialVariantWeight`, returning the record for chaining.
    #[must_use]
    pub fn with_initial_variant_weight(mut self, value: f32) -> Self {
        self.initial_variant_weight = Some(value);
        self
    }

    /// One of the `ProductionVariantAcceleratorType` values.
    #[must_use]
    pub fn accelerator_type(&self) -> Option<&str> {
        self.accelerator_type.as_deref()
    }

    /// Replaces the value of `AcceleratorType`, clearing it when `None`.
    pub fn set_accelerator_type(&mut self, value: Option<String>) {
        self.accelerator_type = value;
    }

    /// Sets `AcceleratorType`, returning the record for chaining.
    #[must_use]
    pub fn with_accelerator_type(mut self, value: impl Into<String>) -> Self {
        self.accelerator_type = Some(value.into());
        self
    }
}

impl fmt::Display for ProductionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("VariantName", self.variant_name.as_deref())
            .field("ModelName", self.model_name.as_deref())
            .field("InitialInstanceCount", self.initial_instance_count.as_ref())
            .field("InstanceType", self.instance_type.as_deref())
            .field("InitialVariantWeight", self.initial_variant_weight.as_ref())
            .field("AcceleratorType", self.accelerator_type.as_deref())
            .finish()
    }
}

impl Hash for ProductionVariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant_name.hash(state);
        self.model_name.hash(state);
        self.initial_instance_count.hash(state);
        self.instance_type.hash(state);
        self.initial_variant_weight.map(f32::to_bits).hash(state);
        self.accelerator_type.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagemaker_types::{ProductionVariantAcceleratorType, ProductionVariantInstanceType};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn sample_variant() -> ProductionVariant {
        ProductionVariant::new()
            .with_variant_name("blue")
            .with_model_name("churn-v1")
            .with_initial_instance_count(2)
            .with_instance_type(ProductionVariantInstanceType::MlC5Xlarge)
            .with_initial_variant_weight(0.5)
    }

    #[test]
    fn test_display_omits_absent_accelerator() {
        let rendered = sample_variant().to_string();
        assert_eq!(
            rendered,
            "{VariantName: blue, ModelName: churn-v1, InitialInstanceCount: 2, \
             InstanceType: ml.c5.xlarge, InitialVariantWeight: 0.5}",
        );
        assert!(!rendered.contains("AcceleratorType"));
    }

    #[test]
    fn test_variant_weight_participates_in_equality_and_hash() {
        let a = sample_variant();
        let b = sample_variant();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, b.clone().with_initial_variant_weight(0.75));
    }

    #[test]
    fn test_accelerator_enum_stores_wire_string() {
        let variant =
            sample_variant().with_accelerator_type(ProductionVariantAcceleratorType::MlEia1Medium);
        assert_eq!(variant.accelerator_type(), Some("ml.eia1.medium"));
    }

    #[test]
    fn test_describe_result_nests_containers_in_order() {
        let result = DescribeModelResult::new()
            .with_model_name("pipeline")
            .with_containers([
                ContainerDefinition::new().with_container_hostname("preprocess"),
                ContainerDefinition::new().with_container_hostname("predict"),
            ]);
        let containers = result.containers().unwrap();
        assert_eq!(containers[0].container_hostname(), Some("preprocess"));
        assert_eq!(containers[1].container_hostname(), Some("predict"));
    }
}
