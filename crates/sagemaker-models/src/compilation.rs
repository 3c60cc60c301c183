//! Shapes for the model compilation operations.

use crate::common::StoppingCondition;
use chrono::{DateTime, Utc};
use sagemaker_types::ShapeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Location and shape of the model artifacts to compile.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_input_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    framework: Option<String>,
}

impl InputConfig {
    /// Creates a new `InputConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// S3 path of the trained model artifacts.
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

    /// JSON dictionary naming the input tensors and their shapes.
    #[must_use]
    pub fn data_input_config(&self) -> Option<&str> {
        self.data_input_config.as_deref()
    }

    /// Replaces the value of `DataInputConfig`, clearing it when `None`.
    pub fn set_data_input_config(&mut self, value: Option<String>) {
        self.data_input_config = value;
    }

    /// Sets `DataInputConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_data_input_config(mut self, value: impl Into<String>) -> Self {
        self.data_input_config = Some(value.into());
        self
    }

    /// One of the `Framework` values.
    #[must_use]
    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    /// Replaces the value of `Framework`, clearing it when `None`.
    pub fn set_framework(&mut self, value: Option<String>) {
        self.framework = value;
    }

    /// Sets `Framework`, returning the record for chaining.
    #[must_use]
    pub fn with_framework(mut self, value: impl Into<String>) -> Self {
        self.framework = Some(value.into());
        self
    }
}

impl fmt::Display for InputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", self.s3_uri.as_deref())
            .field("DataInputConfig", self.data_input_config.as_deref())
            .field("Framework", self.framework.as_deref())
            .finish()
    }
}

/// Where and for which device compiled artifacts are produced.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_output_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_device: Option<String>,
}

impl OutputConfig {
    /// Creates a new `OutputConfig` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn s3_output_location(&self) -> Option<&str> {
        self.s3_output_location.as_deref()
    }

    /// Replaces the value of `S3OutputLocation`, clearing it when `None`.
    pub fn set_s3_output_location(&mut self, value: Option<String>) {
        self.s3_output_location = value;
    }

    /// Sets `S3OutputLocation`, returning the record for chaining.
    #[must_use]
    pub fn with_s3_output_location(mut self, value: impl Into<String>) -> Self {
        self.s3_output_location = Some(value.into());
        self
    }

    /// One of the `TargetDevice` values.
    #[must_use]
    pub fn target_device(&self) -> Option<&str> {
        self.target_device.as_deref()
    }

    /// Replaces the value of `TargetDevice`, clearing it when `None`.
    pub fn set_target_device(&mut self, value: Option<String>) {
        self.target_device = value;
    }

    /// Sets `TargetDevice`, returning the record for chaining.
    #[must_use]
    pub fn with_target_device(mut self, value: impl Into<String>) -> Self {
        self.target_device = Some(value.into());
        self
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3OutputLocation", self.s3_output_location.as_deref())
            .field("TargetDevice", self.target_device.as_deref())
            .finish()
    }
}

/// Input for the CreateCompilationJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCompilationJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    compilation_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_config: Option<InputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_config: Option<OutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopping_condition: Option<StoppingCondition>,
}

impl CreateCompilationJobRequest {
    /// Creates a new `CreateCompilationJobRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the job; must be unique per account and region.
    #[must_use]
    pub fn compilation_job_name(&self) -> Option<&str> {
        self.compilation_job_name.as_deref()
    }

    /// Replaces the value of `CompilationJobName`, clearing it when `None`.
    pub fn set_compilation_job_name(&mut self, value: Option<String>) {
        self.compilation_job_name = value;
    }

    /// Sets `CompilationJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_job_name(mut self, value: impl Into<String>) -> Self {
        self.compilation_job_name = Some(value.into());
        self
    }

    /// Role the service assumes to read and write the artifacts.
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
    pub fn input_config(&self) -> Option<&InputConfig> {
        self.input_config.as_ref()
    }

    /// Replaces the value of `InputConfig`, clearing it when `None`.
    pub fn set_input_config(&mut self, value: Option<InputConfig>) {
        self.input_config = value;
    }

    /// Sets `InputConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_input_config(mut self, value: InputConfig) -> Self {
        self.input_config = Some(value);
        self
    }

    #[must_use]
    pub fn output_config(&self) -> Option<&OutputConfig> {
        self.output_config.as_ref()
    }

    /// Replaces the value of `OutputConfig`, clearing it when `None`.
    pub fn set_output_config(&mut self, value: Option<OutputConfig>) {
        self.output_config = value;
    }

    /// Sets `OutputConfig`, returning the record for chaining.
    #[must_use]
    pub fn with_output_config(mut self, value: OutputConfig) -> Self {
        self.output_config = Some(value);
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
}

impl fmt::Display for CreateCompilationJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CompilationJobName", self.compilation_job_name.as_deref())
            .field("RoleArn", self.role_arn.as_deref())
            .field("InputConfig", self.input_config.as_ref())
            .field("OutputConfig", self.output_config.as_ref())
            .field("StoppingCondition", self.stopping_condition.as_ref())
            .finish()
    }
}

/// Output of the CreateCompilationJob operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCompilationJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    compilation_job_arn: Option<String>,
}

impl CreateCompilationJobResult {
    /// Creates a new `CreateCompilationJobResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn compilation_job_arn(&self) -> Option<&str> {
        self.compilation_job_arn.as_deref()
    }

    /// Replaces the value of `CompilationJobArn`, clearing it when `None`.
    pub fn set_compilation_job_arn(&mut self, value: Option<String>) {
        self.compilation_job_arn = value;
    }

    /// Sets `CompilationJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_job_arn(mut self, value: impl Into<String>) -> Self {
        self.compilation_job_arn = Some(value.into());
        self
    }
}

impl fmt::Display for CreateCompilationJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CompilationJobArn", self.compilation_job_arn.as_deref())
            .finish()
    }
}

/// Summary row returned by ListCompilationJobs.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompilationJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    compilation_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compilation_job_arn: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    compilation_start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    compilation_end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compilation_target_device: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compilation_job_status: Option<String>,
}

impl CompilationJobSummary {
    /// Creates a new `CompilationJobSummary` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn compilation_job_name(&self) -> Option<&str> {
        self.compilation_job_name.as_deref()
    }

    /// Replaces the value of `CompilationJobName`, clearing it when `None`.
    pub fn set_compilation_job_name(&mut self, value: Option<String>) {
        self.compilation_job_name = value;
    }

    /// Sets `CompilationJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_job_name(mut self, value: impl Into<String>) -> Self {
        self.compilation_job_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn compilation_job_arn(&self) -> Option<&str> {
        self.compilation_job_arn.as_deref()
    }

    /// Replaces the value of `CompilationJobArn`, clearing it when `None`.
    pub fn set_compilation_job_arn(&mut self, value: Option<String>) {
        self.compilation_job_arn = value;
    }

    /// Sets `CompilationJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_job_arn(mut self, value: impl Into<String>) -> Self {
        self.compilation_job_arn = Some(value.into());
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
    pub fn compilation_start_time(&self) -> Option<DateTime<Utc>> {
        self.compilation_start_time
    }

    /// Replaces the value of `CompilationStartTime`, clearing it when `None`.
    pub fn set_compilation_start_time(&mut self, value: Option<DateTime<Utc>>) {
        self.compilation_start_time = value;
    }

    /// Sets `CompilationStartTime`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_start_time(mut self, value: DateTime<Utc>) -> Self {
        self.compilation_start_time = Some(value);
        self
    }

    #[must_use]
    pub fn compilation_end_time(&self) -> Option<DateTime<Utc>> {
        self.compilation_end_time
    }

    /// Replaces the value of `CompilationEndTime`, clearing it when `None`.
    pub fn set_compilation_end_time(&mut self, value: Option<DateTime<Utc>>) {
        self.compilation_end_time = value;
    }

    /// Sets `CompilationEndTime`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_end_time(mut self, value: DateTime<Utc>) -> Self {
        self.compilation_end_time = Some(value);
        self
    }

    /// One of the `TargetDevice` values.
    #[must_use]
    pub fn compilation_target_device(&self) -> Option<&str> {
        self.compilation_target_device.as_deref()
    }

    /// Replaces the value of `CompilationTargetDevice`, clearing it when `None`.
    pub fn set_compilation_target_device(&mut self, value: Option<String>) {
        self.compilation_target_device = value;
    }

    /// Sets `CompilationTargetDevice`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_target_device(mut self, value: impl Into<String>) -> Self {
        self.compilation_target_device = Some(value.into());
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

    /// One of the `CompilationJobStatus` values.
    #[must_use]
    pub fn compilation_job_status(&self) -> Option<&str> {
        self.compilation_job_status.as_deref()
    }

    /// Replaces the value of `CompilationJobStatus`, clearing it when `None`.
    pub fn set_compilation_job_status(&mut self, value: Option<String>) {
        self.compilation_job_status = value;
    }

    /// Sets `CompilationJobStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_compilation_job_status(mut self, value: impl Into<String>) -> Self {
        self.compilation_job_status = Some(value.into());
        self
    }
}

impl fmt::Display for CompilationJobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CompilationJobName", self.compilation_job_name.as_deref())
            .field("CompilationJobArn", self.compilation_job_arn.as_deref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("CompilationStartTime", self.compilation_start_time.as_ref())
            .field("CompilationEndTime", self.compilation_end_time.as_ref())
            .field("CompilationTargetDevice", self.compilation_target_device.as_deref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .field("CompilationJobStatus", self.compilation_job_status.as_deref())
            .finish()
    }
}

/// Input for the ListCompilationJobs operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCompilationJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time_after: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time_before: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time_after: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_equals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<String>,
}

impl ListCompilationJobsRequest {
    /// Creates a new `ListCompilationJobsRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Keeps only jobs whose name contains this string.
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

    /// Keeps only jobs with this `CompilationJobStatus`.
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

    /// One of the `ListCompilationJobsSortBy` values.
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
}

impl fmt::Display for ListCompilationJobsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NextToken", self.next_token.as_deref())
            .field("MaxResults", self.max_results.as_ref())
            .field("CreationTimeAfter", self.creation_time_after.as_ref())
            .field("CreationTimeBefore", self.creation_time_before.as_ref())
            .field("LastModifiedTimeAfter", self.last_modified_time_after.as_ref())
            .field("LastModifiedTimeBefore", self.last_modified_time_before.as_ref())
            .field("NameContains", self.name_contains.as_deref())
            .field("StatusEquals", self.status_equals.as_deref())
            .field("SortBy", self.sort_by.as_deref())
            .field("SortOrder", self.sort_order.as_deref())
            .finish()
    }
}

/// Output of the ListCompilationJobs operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCompilationJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    compilation_job_summaries: Option<Vec<CompilationJobSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListCompilationJobsResult {
    /// Creates a new `ListCompilationJobsResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn compilation_job_summaries(&self) -> Option<&[CompilationJobSummary]> {
        self.compilation_job_summaries.as_deref()
    }

    /// Replaces the whole `CompilationJobSummaries` sequence, clearing it when `None`.
    pub fn set_compilation_job_summaries(&mut self, value: Option<Vec<CompilationJobSummary>>) {
        self.compilation_job_summaries = value;
    }

    /// Appends to `CompilationJobSummaries`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_compilation_job_summaries`](Self::set_compilation_job_summaries) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_compilation_job_summaries(mut self, items: impl IntoIterator<Item = CompilationJobSummary>) -> Self {
        self.compilation_job_summaries.get_or_insert_with(Vec::new).extend(items);
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

impl fmt::Display for ListCompilationJobsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("CompilationJobSummaries", self.compilation_job_summaries.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sagemaker_types::{CompilationJobStatus, Framework, TargetDevice};

    #[test]
    fn test_timestamps_serialize_as_epoch_seconds() {
        let summary = CompilationJobSummary::new()
            .with_compilation_job_name("resnet-edge")
            .with_creation_time(Utc.timestamp_opt(1_580_000_000, 0).unwrap());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["CreationTime"], 1_580_000_000);
        let back: CompilationJobSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_enum_setters_store_wire_strings() {
        let config = OutputConfig::new()
            .with_s3_output_location("s3://compiled/resnet")
            .with_target_device(TargetDevice::JetsonNano);
        assert_eq!(config.target_device(), Some("jetson_nano"));

        let input = InputConfig::new().with_framework(Framework::Pytorch);
        assert_eq!(input.framework(), Some("PYTORCH"));
    }

    #[test]
    fn test_empty_request_serializes_to_empty_object() {
        let json = serde_json::to_string(&ListCompilationJobsRequest::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_status_filter_round_trips_through_the_enum() {
        let request =
            ListCompilationJobsRequest::new().with_status_equals(CompilationJobStatus::InProgress);
        let parsed: CompilationJobStatus = request.status_equals().unwrap().parse().unwrap();
        assert_eq!(parsed, CompilationJobStatus::InProgress);
    }
}
