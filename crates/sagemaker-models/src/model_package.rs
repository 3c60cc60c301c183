//! Shapes for the CreateModelPackage operation.

use crate::transform::TransformJobDefinition;
use sagemaker_types::ShapeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container image a model package serves inference from.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelPackageContainerDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    container_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<String>,
}

impl ModelPackageContainerDefinition {
    /// Creates a new `ModelPackageContainerDefinition` with every field absent.
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

    /// Digest pinning the exact image version.
    #[must_use]
    pub fn image_digest(&self) -> Option<&str> {
        self.image_digest.as_deref()
    }

    /// Replaces the value of `ImageDigest`, clearing it when `None`.
    pub fn set_image_digest(&mut self, value: Option<String>) {
        self.image_digest = value;
    }

    /// Sets `ImageDigest`, returning the record for chaining.
    #[must_use]
    pub fn with_image_digest(mut self, value: impl Into<String>) -> Self {
        self.image_digest = Some(value.into());
        self
    }

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

    /// Marketplace product the container belongs to.
    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    /// Replaces the value of `ProductId`, clearing it when `None`.
    pub fn set_product_id(&mut self, value: Option<String>) {
        self.product_id = value;
    }

    /// Sets `ProductId`, returning the record for chaining.
    #[must_use]
    pub fn with_product_id(mut self, value: impl Into<String>) -> Self {
        self.product_id = Some(value.into());
        self
    }
}

impl fmt::Display for ModelPackageContainerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ContainerHostname", self.container_hostname.as_deref())
            .field("Image", self.image.as_deref())
            .field("ImageDigest", self.image_digest.as_deref())
            .field("ModelDataUrl", self.model_data_url.as_deref())
            .field("ProductId", self.product_id.as_deref())
            .finish()
    }
}

/// How a packaged model is hosted for inference.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InferenceSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    containers: Option<Vec<ModelPackageContainerDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supported_transform_instance_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supported_realtime_inference_instance_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supported_content_types: Option<Vec<String>>,
    #[serde(rename = "SupportedResponseMIMETypes", skip_serializing_if = "Option::is_none")]
    supported_response_mime_types: Option<Vec<String>>,
}

impl InferenceSpecification {
    /// Creates a new `InferenceSpecification` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn containers(&self) -> Option<&[ModelPackageContainerDefinition]> {
        self.containers.as_deref()
    }

    /// Replaces the whole `Containers` sequence, clearing it when `None`.
    pub fn set_containers(&mut self, value: Option<Vec<ModelPackageContainerDefinition>>) {
        self.containers = value;
    }

    /// Appends to `Containers`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_containers`](Self::set_containers) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_containers(mut self, items: impl IntoIterator<Item = ModelPackageContainerDefinition>) -> Self {
        self.containers.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// `TransformInstanceType` values batch transform may use.
    #[must_use]
    pub fn supported_transform_instance_types(&self) -> Option<&[String]> {
        self.supported_transform_instance_types.as_deref()
    }

    /// Replaces the whole `SupportedTransformInstanceTypes` sequence, clearing it when `None`.
    pub fn set_supported_transform_instance_types(&mut self, value: Option<Vec<String>>) {
        self.supported_transform_instance_types = value;
    }

    /// Appends to `SupportedTransformInstanceTypes`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_supported_transform_instance_types`](Self::set_supported_transform_instance_types) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_supported_transform_instance_types<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_transform_instance_types
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// `ProductionVariantInstanceType` values endpoints may use.
    #[must_use]
    pub fn supported_realtime_inference_instance_types(&self) -> Option<&[String]> {
        self.supported_realtime_inference_instance_types.as_deref()
    }

    /// Replaces the whole `SupportedRealtimeInferenceInstanceTypes` sequence, clearing it when `None`.
    pub fn set_supported_realtime_inference_instance_types(&mut self, value: Option<Vec<String>>) {
        self.supported_realtime_inference_instance_types = value;
    }

    /// Appends to `SupportedRealtimeInferenceInstanceTypes`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_supported_realtime_inference_instance_types`](Self::set_supported_realtime_inference_instance_types) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_supported_realtime_inference_instance_types<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_realtime_inference_instance_types
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn supported_content_types(&self) -> Option<&[String]> {
        self.supported_content_types.as_deref()
    }

    /// Replaces the whole `SupportedContentTypes` sequence, clearing it when `None`.
    pub fn set_supported_content_types(&mut self, value: Option<Vec<String>>) {
        self.supported_content_types = value;
    }

    /// Appends to `SupportedContentTypes`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_supported_content_types`](Self::set_supported_content_types) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_supported_content_types<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_content_types
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn supported_response_mime_types(&self) -> Option<&[String]> {
        self.supported_response_mime_types.as_deref()
    }

    /// Replaces the whole `SupportedResponseMIMETypes` sequence, clearing it when `None`.
    pub fn set_supported_response_mime_types(&mut self, value: Option<Vec<String>>) {
        self.supported_response_mime_types = value;
    }

    /// Appends to `SupportedResponseMIMETypes`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_supported_response_mime_types`](Self::set_supported_response_mime_types) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_supported_response_mime_types<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_response_mime_types
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for InferenceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("Containers", self.containers.as_deref())
            .field_list("SupportedTransformInstanceTypes", self.supported_transform_instance_types.as_deref())
            .field_list("SupportedRealtimeInferenceInstanceTypes", self.supported_realtime_inference_instance_types.as_deref())
            .field_list("SupportedContentTypes", self.supported_content_types.as_deref())
            .field_list("SupportedResponseMIMETypes", self.supported_response_mime_types.as_deref())
            .finish()
    }
}

/// One validation run for a model package.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelPackageValidationProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform_job_definition: Option<TransformJobDefinition>,
}

impl ModelPackageValidationProfile {
    /// Creates a new `ModelPackageValidationProfile` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn profile_name(&self) -> Option<&str> {
        self.profile_name.as_deref()
    }

    /// Replaces the value of `ProfileName`, clearing it when `None`.
    pub fn set_profile_name(&mut self, value: Option<String>) {
        self.profile_name = value;
    }

    /// Sets `ProfileName`, returning the record for chaining.
    #[must_use]
    pub fn with_profile_name(mut self, value: impl Into<String>) -> Self {
        self.profile_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn transform_job_definition(&self) -> Option<&TransformJobDefinition> {
        self.transform_job_definition.as_ref()
    }

    /// Replaces the value of `TransformJobDefinition`, clearing it when `None`.
    pub fn set_transform_job_definition(&mut self, value: Option<TransformJobDefinition>) {
        self.transform_job_definition = value;
    }

    /// Sets `TransformJobDefinition`, returning the record for chaining.
    #[must_use]
    pub fn with_transform_job_definition(mut self, value: TransformJobDefinition) -> Self {
        self.transform_job_definition = Some(value);
        self
    }
}

impl fmt::Display for ModelPackageValidationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ProfileName", self.profile_name.as_deref())
            .field("TransformJobDefinition", self.transform_job_definition.as_ref())
            .finish()
    }
}

/// Validation runs executed before a package is listed.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelPackageValidationSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_profiles: Option<Vec<ModelPackageValidationProfile>>,
}

impl ModelPackageValidationSpecification {
    /// Creates a new `ModelPackageValidationSpecification` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Role the validation transform jobs assume.
    #[must_use]
    pub fn validation_role(&self) -> Option<&str> {
        self.validation_role.as_deref()
    }

    /// Replaces the value of `ValidationRole`, clearing it when `None`.
    pub fn set_validation_role(&mut self, value: Option<String>) {
        self.validation_role = value;
    }

    /// Sets `ValidationRole`, returning the record for chaining.
    #[must_use]
    pub fn with_validation_role(mut self, value: impl Into<String>) -> Self {
        self.validation_role = Some(value.into());
        self
    }

    #[must_use]
    pub fn validation_profiles(&self) -> Option<&[ModelPackageValidationProfile]> {
        self.validation_profiles.as_deref()
    }

    /// Replaces the whole `ValidationProfiles` sequence, clearing it when `None`.
    pub fn set_validation_profiles(&mut self, value: Option<Vec<ModelPackageValidationProfile>>) {
        self.validation_profiles = value;
    }

    /// Appends to `ValidationProfiles`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_validation_profiles`](Self::set_validation_profiles) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_validation_profiles(mut self, items: impl IntoIterator<Item = ModelPackageValidationProfile>) -> Self {
        self.validation_profiles.get_or_insert_with(Vec::new).extend(items);
        self
    }
}

impl fmt::Display for ModelPackageValidationSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ValidationRole", self.validation_role.as_deref())
            .field_list("ValidationProfiles", self.validation_profiles.as_deref())
            .finish()
    }
}

/// Algorithm resource a model package was trained with.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceAlgorithm {
    #[serde(skip_serializing_if = "Option::is_none")]
    model_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm_name: Option<String>,
}

impl SourceAlgorithm {
    /// Creates a new `SourceAlgorithm` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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
}

impl fmt::Display for SourceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ModelDataUrl", self.model_data_url.as_deref())
            .field("AlgorithmName", self.algorithm_name.as_deref())
            .finish()
    }
}

/// Algorithms backing a model package.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceAlgorithmSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    source_algorithms: Option<Vec<SourceAlgorithm>>,
}

impl SourceAlgorithmSpecification {
    /// Creates a new `SourceAlgorithmSpecification` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source_algorithms(&self) -> Option<&[SourceAlgorithm]> {
        self.source_algorithms.as_deref()
    }

    /// Replaces the whole `SourceAlgorithms` sequence, clearing it when `None`.
    pub fn set_source_algorithms(&mut self, value: Option<Vec<SourceAlgorithm>>) {
        self.source_algorithms = value;
    }

    /// Appends to `SourceAlgorithms`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_source_algorithms`](Self::set_source_algorithms) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_source_algorithms(mut self, items: impl IntoIterator<Item = SourceAlgorithm>) -> Self {
        self.source_algorithms.get_or_insert_with(Vec::new).extend(items);
        self
    }
}

impl fmt::Display for SourceAlgorithmSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("SourceAlgorithms", self.source_algorithms.as_deref())
            .finish()
    }
}

/// Input for the CreateModelPackage operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateModelPackageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model_package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_package_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inference_specification: Option<InferenceSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_specification: Option<ModelPackageValidationSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_algorithm_specification: Option<SourceAlgorithmSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    certify_for_marketplace: Option<bool>,
}

impl CreateModelPackageRequest {
    /// Creates a new `CreateModelPackageRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the package; must be unique per account and region.
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

    #[must_use]
    pub fn model_package_description(&self) -> Option<&str> {
        self.model_package_description.as_deref()
    }

    /// Replaces the value of `ModelPackageDescription`, clearing it when `None`.
    pub fn set_model_package_description(&mut self, value: Option<String>) {
        self.model_package_description = value;
    }

    /// Sets `ModelPackageDescription`, returning the record for chaining.
    #[must_use]
    pub fn with_model_package_description(mut self, value: impl Into<String>) -> Self {
        self.model_package_description = Some(value.into());
        self
    }

    #[must_use]
    pub fn inference_specification(&self) -> Option<&InferenceSpecification> {
        self.inference_specification.as_ref()
    }

    /// Replaces the value of `InferenceSpecification`, clearing it when `None`.
    pub fn set_inference_specification(&mut self, value: Option<InferenceSpecification>) {
        self.inference_specification = value;
    }

    /// Sets `InferenceSpecification`, returning the record for chaining.
    #[must_use]
    pub fn with_inference_specification(mut self, value: InferenceSpecification) -> Self {
        self.inference_specification = Some(value);
        self
    }

    #[must_use]
    pub fn validation_specification(&self) -> Option<&ModelPackageValidationSpecification> {
        self.validation_specification.as_ref()
    }

    /// Replaces the value of `ValidationSpecification`, clearing it when `None`.
    pub fn set_validation_specification(&mut self, value: Option<ModelPackageValidationSpecification>) {
        self.validation_specification = value;
    }

    /// Sets `ValidationSpecification`, returning the record for chaining.
    #[must_use]
    pub fn with_validation_specification(mut self, value: ModelPackageValidationSpecification) -> Self {
        self.validation_specification = Some(value);
        self
    }

    #[must_use]
    pub fn source_algorithm_specification(&self) -> Option<&SourceAlgorithmSpecification> {
        self.source_algorithm_specification.as_ref()
    }

    /// Replaces the value of `SourceAlgorithmSpecification`, clearing it when `None`.
    pub fn set_source_algorithm_specification(&mut self, value: Option<SourceAlgorithmSpecification>) {
        self.source_algorithm_specification = value;
    }

    /// Sets `SourceAlgorithmSpecification`, returning the record for chaining.
    #[must_use]
    pub fn with_source_algorithm_specification(mut self, value: SourceAlgorithmSpecification) -> Self {
        self.source_algorithm_specification = Some(value);
        self
    }

    /// Whether the package may be listed on the marketplace.
    #[must_use]
    pub fn certify_for_marketplace(&self) -> Option<bool> {
        self.certify_for_marketplace
    }

    /// Replaces the value of `CertifyForMarketplace`, clearing it when `None`.
    pub fn set_certify_for_marketplace(&mut self, value: Option<bool>) {
        self.certify_for_marketplace = value;
    }

    /// Sets `CertifyForMarketplace`, returning the record for chaining.
    #[must_use]
    pub fn with_certify_for_marketplace(mut self, value: bool) -> Self {
        self.certify_for_marketplace = Some(value);
        self
    }
}

impl fmt::Display for CreateModelPackageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ModelPackageName", self.model_package_name.as_deref())
            .field("ModelPackageDescription", self.model_package_description.as_deref())
            .field("InferenceSpecification", self.inference_specification.as_ref())
            .field("ValidationSpecification", self.validation_specification.as_ref())
            .field("SourceAlgorithmSpecification", self.source_algorithm_specification.as_ref())
            .field("CertifyForMarketplace", self.certify_for_marketplace.as_ref())
            .finish()
    }
}

/// Output of the CreateModelPackage operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateModelPackageResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    model_package_arn: Option<String>,
}

impl CreateModelPackageResult {
    /// Creates a new `CreateModelPackageResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn model_package_arn(&self) -> Option<&str> {
        self.model_package_arn.as_deref()
    }

    /// Replaces the value of `ModelPackageArn`, clearing it when `None`.
    pub fn set_model_package_arn(&mut self, value: Option<String>) {
        self.model_package_arn = value;
    }

    /// Sets `ModelPackageArn`, returning the record for chaining.
    #[must_use]
    pub fn with_model_package_arn(mut self, value: impl Into<String>) -> Self {
        self.model_package_arn = Some(value.into());
        self
    }
}

impl fmt::Display for CreateModelPackageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ModelPackageArn", self.model_package_arn.as_deref())
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

    fn sample_spec() -> InferenceSpecification {
        InferenceSpecification::new()
            .with_containers([ModelPackageContainerDefinition::new()
                .with_image("123456789012.dkr.ecr.us-east-1.amazonaws.com/churn:1")])
            .with_supported_content_types(["text/csv"])
            .with_supported_response_mime_types(["application/json"])
    }

    #[test]
    fn test_mime_types_keep_service_casing() {
        let json = serde_json::to_value(sample_spec()).unwrap();
        assert_eq!(json["SupportedResponseMIMETypes"][0], "application/json");
        assert_eq!(json["SupportedContentTypes"][0], "text/csv");
    }

    #[test]
    fn test_nested_records_agree_on_equality_and_hash() {
        let a = CreateModelPackageRequest::new()
            .with_model_package_name("churn-v1")
            .with_inference_specification(sample_spec());
        let b = CreateModelPackageRequest::new()
            .with_model_package_name("churn-v1")
            .with_inference_specification(sample_spec());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, b.clone().with_certify_for_marketplace(true));
    }

    #[test]
    fn test_display_renders_nested_shapes() {
        let spec = SourceAlgorithmSpecification::new().with_source_algorithms([
            SourceAlgorithm::new().with_algorithm_name("xgboost-churn"),
        ]);
        assert_eq!(
            spec.to_string(),
            "{SourceAlgorithms: [{AlgorithmName: xgboost-churn}]}",
        );
    }
}
