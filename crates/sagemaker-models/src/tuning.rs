//! Shapes for the hyperparameter tuning listing operations.

use chrono::{DateTime, Utc};
use sagemaker_types::ShapeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training jobs of a tuning job grouped by objective status.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectiveStatusCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    succeeded: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed: Option<i32>,
}

impl ObjectiveStatusCounters {
    /// Creates a new `ObjectiveStatusCounters` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn succeeded(&self) -> Option<i32> {
        self.succeeded
    }

    /// Replaces the value of `Succeeded`, clearing it when `None`.
    pub fn set_succeeded(&mut self, value: Option<i32>) {
        self.succeeded = value;
    }

    /// Sets `Succeeded`, returning the record for chaining.
    #[must_use]
    pub fn with_succeeded(mut self, value: i32) -> Self {
        self.succeeded = Some(value);
        self
    }

    #[must_use]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    /// Replaces the value of `Pending`, clearing it when `None`.
    pub fn set_pending(&mut self, value: Option<i32>) {
        self.pending = value;
    }

    /// Sets `Pending`, returning the record for chaining.
    #[must_use]
    pub fn with_pending(mut self, value: i32) -> Self {
        self.pending = Some(value);
        self
    }

    #[must_use]
    pub fn failed(&self) -> Option<i32> {
        self.failed
    }

    /// Replaces the value of `Failed`, clearing it when `None`.
    pub fn set_failed(&mut self, value: Option<i32>) {
        self.failed = value;
    }

    /// Sets `Failed`, returning the record for chaining.
    #[must_use]
    pub fn with_failed(mut self, value: i32) -> Self {
        self.failed = Some(value);
        self
    }
}

impl fmt::Display for ObjectiveStatusCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Succeeded", self.succeeded.as_ref())
            .field("Pending", self.pending.as_ref())
            .field("Failed", self.failed.as_ref())
            .finish()
    }
}

/// Training jobs of a tuning job grouped by training status.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingJobStatusCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    in_progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retryable_error: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    non_retryable_error: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopped: Option<i32>,
}

impl TrainingJobStatusCounters {
    /// Creates a new `TrainingJobStatusCounters` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn completed(&self) -> Option<i32> {
        self.completed
    }

    /// Replaces the value of `Completed`, clearing it when `None`.
    pub fn set_completed(&mut self, value: Option<i32>) {
        self.completed = value;
    }

    /// Sets `Completed`, returning the record for chaining.
    #[must_use]
    pub fn with_completed(mut self, value: i32) -> Self {
        self.completed = Some(value);
        self
    }

    #[must_use]
    pub fn in_progress(&self) -> Option<i32> {
        self.in_progress
    }

    /// Replaces the value of `InProgress`, clearing it when `None`.
    pub fn set_in_progress(&mut self, value: Option<i32>) {
        self.in_progress = value;
    }

    /// Sets `InProgress`, returning the record for chaining.
    #[must_use]
    pub fn with_in_progress(mut self, value: i32) -> Self {
        self.in_progress = Some(value);
        self
    }

    #[must_use]
    pub fn retryable_error(&self) -> Option<i32> {
        self.retryable_error
    }

    /// Replaces the value of `RetryableError`, clearing it when `None`.
    pub fn set_retryable_error(&mut self, value: Option<i32>) {
        self.retryable_error = value;
    }

    /// Sets `RetryableError`, returning the record for chaining.
    #[must_use]
    pub fn with_retryable_error(mut self, value: i32) -> Self {
        self.retryable_error = Some(value);
        self
    }

    #[must_use]
    pub fn non_retryable_error(&self) -> Option<i32> {
        self.non_retryable_error
    }

    /// Replaces the value of `NonRetryableError`, clearing it when `None`.
    pub fn set_non_retryable_error(&mut self, value: Option<i32>) {
        self.non_retryable_error = value;
    }

    /// Sets `NonRetryableError`, returning the record for chaining.
    #[must_use]
    pub fn with_non_retryable_error(mut self, value: i32) -> Self {
        self.non_retryable_error = Some(value);
        self
    }

    #[must_use]
    pub fn stopped(&self) -> Option<i32> {
        self.stopped
    }

    /// Replaces the value of `Stopped`, clearing it when `None`.
    pub fn set_stopped(&mut self, value: Option<i32>) {
        self.stopped = value;
    }

    /// Sets `Stopped`, returning the record for chaining.
    #[must_use]
    pub fn with_stopped(mut self, value: i32) -> Self {
        self.stopped = Some(value);
        self
    }
}

impl fmt::Display for TrainingJobStatusCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Completed", self.completed.as_ref())
            .field("InProgress", self.in_progress.as_ref())
            .field("RetryableError", self.retryable_error.as_ref())
            .field("NonRetryableError", self.non_retryable_error.as_ref())
            .field("Stopped", self.stopped.as_ref())
            .finish()
    }
}

/// Caps on how many training jobs a tuning job may launch.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_number_of_training_jobs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_parallel_training_jobs: Option<i32>,
}

impl ResourceLimits {
    /// Creates a new `ResourceLimits` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_number_of_training_jobs(&self) -> Option<i32> {
        self.max_number_of_training_jobs
    }

    /// Replaces the value of `MaxNumberOfTrainingJobs`, clearing it when `None`.
    pub fn set_max_number_of_training_jobs(&mut self, value: Option<i32>) {
        self.max_number_of_training_jobs = value;
    }

    /// Sets `MaxNumberOfTrainingJobs`, returning the record for chaining.
    #[must_use]
    pub fn with_max_number_of_training_jobs(mut self, value: i32) -> Self {
        self.max_number_of_training_jobs = Some(value);
        self
    }

    #[must_use]
    pub fn max_parallel_training_jobs(&self) -> Option<i32> {
        self.max_parallel_training_jobs
    }

    /// Replaces the value of `MaxParallelTrainingJobs`, clearing it when `None`.
    pub fn set_max_parallel_training_jobs(&mut self, value: Option<i32>) {
        self.max_parallel_training_jobs = value;
    }

    /// Sets `MaxParallelTrainingJobs`, returning the record for chaining.
    #[must_use]
    pub fn with_max_parallel_training_jobs(mut self, value: i32) -> Self {
        self.max_parallel_training_jobs = Some(value);
        self
    }
}

impl fmt::Display for ResourceLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxNumberOfTrainingJobs", self.max_number_of_training_jobs.as_ref())
            .field("MaxParallelTrainingJobs", self.max_parallel_training_jobs.as_ref())
            .finish()
    }
}

/// Summary row returned by ListHyperParameterTuningJobs.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HyperParameterTuningJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    hyper_parameter_tuning_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hyper_parameter_tuning_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hyper_parameter_tuning_job_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    hyper_parameter_tuning_end_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    training_job_status_counters: Option<TrainingJobStatusCounters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    objective_status_counters: Option<ObjectiveStatusCounters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_limits: Option<ResourceLimits>,
}

impl HyperParameterTuningJobSummary {
    /// Creates a new `HyperParameterTuningJobSummary` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hyper_parameter_tuning_job_name(&self) -> Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
    }

    /// Replaces the value of `HyperParameterTuningJobName`, clearing it when `None`.
    pub fn set_hyper_parameter_tuning_job_name(&mut self, value: Option<String>) {
        self.hyper_parameter_tuning_job_name = value;
    }

    /// Sets `HyperParameterTuningJobName`, returning the record for chaining.
    #[must_use]
    pub fn with_hyper_parameter_tuning_job_name(mut self, value: impl Into<String>) -> Self {
        self.hyper_parameter_tuning_job_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn hyper_parameter_tuning_job_arn(&self) -> Option<&str> {
        self.hyper_parameter_tuning_job_arn.as_deref()
    }

    /// Replaces the value of `HyperParameterTuningJobArn`, clearing it when `None`.
    pub fn set_hyper_parameter_tuning_job_arn(&mut self, value: Option<String>) {
        self.hyper_parameter_tuning_job_arn = value;
    }

    /// Sets `HyperParameterTuningJobArn`, returning the record for chaining.
    #[must_use]
    pub fn with_hyper_parameter_tuning_job_arn(mut self, value: impl Into<String>) -> Self {
        self.hyper_parameter_tuning_job_arn = Some(value.into());
        self
    }

    /// One of the `HyperParameterTuningJobStatus` values.
    #[must_use]
    pub fn hyper_parameter_tuning_job_status(&self) -> Option<&str> {
        self.hyper_parameter_tuning_job_status.as_deref()
    }

    /// Replaces the value of `HyperParameterTuningJobStatus`, clearing it when `None`.
    pub fn set_hyper_parameter_tuning_job_status(&mut self, value: Option<String>) {
        self.hyper_parameter_tuning_job_status = value;
    }

    /// Sets `HyperParameterTuningJobStatus`, returning the record for chaining.
    #[must_use]
    pub fn with_hyper_parameter_tuning_job_status(mut self, value: impl Into<String>) -> Self {
        self.hyper_parameter_tuning_job_status = Some(value.into());
        self
    }

    /// One of the `HyperParameterTuningJobStrategyType` values.
    #[must_use]
    pub fn strategy(&self) -> Option<&str> {
        self.strategy.as_deref()
    }

    /// Replaces the value of `Strategy`, clearing it when `None`.
    pub fn set_strategy(&mut self, value: Option<String>) {
        self.strategy = value;
    }

    /// Sets `Strategy`, returning the record for chaining.
    #[must_use]
    pub fn with_strategy(mut self, value: impl Into<String>) -> Self {
        self.strategy = Some(value.into());
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
    pub fn hyper_parameter_tuning_end_time(&self) -> Option<DateTime<Utc>> {
        self.hyper_parameter_tuning_end_time
    }

    /// Replaces the value of `HyperParameterTuningEndTime`, clearing it when `None`.
    pub fn set_hyper_parameter_tuning_end_time(&mut self, value: Option<DateTime<Utc>>) {
        self.hyper_parameter_tuning_end_time = value;
    }

    /// Sets `HyperParameterTuningEndTime`, returning the record for chaining.
    #[must_use]
    pub fn with_hyper_parameter_tuning_end_time(mut self, value: DateTime<Utc>) -> Self {
        self.hyper_parameter_tuning_end_time = Some(value);
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
    pub fn training_job_status_counters(&self) -> Option<&TrainingJobStatusCounters> {
        self.training_job_status_counters.as_ref()
    }

    /// Replaces the value of `TrainingJobStatusCounters`, clearing it when `None`.
    pub fn set_training_job_status_counters(&mut self, value: Option<TrainingJobStatusCounters>) {
        self.training_job_status_counters = value;
    }

    /// Sets `TrainingJobStatusCounters`, returning the record for chaining.
    #[must_use]
    pub fn with_training_job_status_counters(mut self, value: TrainingJobStatusCounters) -> Self {
        self.training_job_status_counters = Some(value);
        self
    }

    #[must_use]
    pub fn objective_status_counters(&self) -> Option<&ObjectiveStatusCounters> {
        self.objective_status_counters.as_ref()
    }

    /// Replaces the value of `ObjectiveStatusCounters`, clearing it when `None`.
    pub fn set_objective_status_counters(&mut self, value: Option<ObjectiveStatusCounters>) {
        self.objective_status_counters = value;
    }

    /// Sets `ObjectiveStatusCounters`, returning the record for chaining.
    #[must_use]
    pub fn with_objective_status_counters(mut self, value: ObjectiveStatusCounters) -> Self {
        self.objective_status_counters = Some(value);
        self
    }

    #[must_use]
    pub fn resource_limits(&self) -> Option<&ResourceLimits> {
        self.resource_limits.as_ref()
    }

    /// Replaces the value of `ResourceLimits`, clearing it when `None`.
    pub fn set_resource_limits(&mut self, value: Option<ResourceLimits>) {
        self.resource_limits = value;
    }

    /// Sets `ResourceLimits`, returning the record for chaining.
    #[must_use]
    pub fn with_resource_limits(mut self, value: ResourceLimits) -> Self {
        self.resource_limits = Some(value);
        self
    }
}

impl fmt::Display for HyperParameterTuningJobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("HyperParameterTuningJobName", self.hyper_parameter_tuning_job_name.as_deref())
            .field("HyperParameterTuningJobArn", self.hyper_parameter_tuning_job_arn.as_deref())
            .field("HyperParameterTuningJobStatus", self.hyper_parameter_tuning_job_status.as_deref())
            .field("Strategy", self.strategy.as_deref())
            .field("CreationTime", self.creation_time.as_ref())
            .field("HyperParameterTuningEndTime", self.hyper_parameter_tuning_end_time.as_ref())
            .field("LastModifiedTime", self.last_modified_time.as_ref())
            .field("TrainingJobStatusCounters", self.training_job_status_counters.as_ref())
            .field("ObjectiveStatusCounters", self.objective_status_counters.as_ref())
            .field("ResourceLimits", self.resource_limits.as_ref())
            .finish()
    }
}

/// Input for the ListHyperParameterTuningJobs operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHyperParameterTuningJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_contains: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time_after: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    creation_time_before: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time_after: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_modified_time_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_equals: Option<String>,
}

impl ListHyperParameterTuningJobsRequest {
    /// Creates a new `ListHyperParameterTuningJobsRequest` with every field absent.
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

    /// One of the `HyperParameterTuningJobSortByOptions` values.
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

    /// Keeps only jobs with this `HyperParameterTuningJobStatus`.
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

impl fmt::Display for ListHyperParameterTuningJobsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NextToken", self.next_token.as_deref())
            .field("MaxResults", self.max_results.as_ref())
            .field("SortBy", self.sort_by.as_deref())
            .field("SortOrder", self.sort_order.as_deref())
            .field("NameContains", self.name_contains.as_deref())
            .field("CreationTimeAfter", self.creation_time_after.as_ref())
            .field("CreationTimeBefore", self.creation_time_before.as_ref())
            .field("LastModifiedTimeAfter", self.last_modified_time_after.as_ref())
            .field("LastModifiedTimeBefore", self.last_modified_time_before.as_ref())
            .field("StatusEquals", self.status_equals.as_deref())
            .finish()
    }
}

/// Output of the ListHyperParameterTuningJobs operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHyperParameterTuningJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    hyper_parameter_tuning_job_summaries: Option<Vec<HyperParameterTuningJobSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListHyperParameterTuningJobsResult {
    /// Creates a new `ListHyperParameterTuningJobsResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hyper_parameter_tuning_job_summaries(&self) -> Option<&[HyperParameterTuningJobSummary]> {
        self.hyper_parameter_tuning_job_summaries.as_deref()
    }

    /// Replaces the whole `HyperParameterTuningJobSummaries` sequence, clearing it when `None`.
    pub fn set_hyper_parameter_tuning_job_summaries(&mut self, value: Option<Vec<HyperParameterTuningJobSummary>>) {
        self.hyper_parameter_tuning_job_summaries = value;
    }

    /// Appends to `HyperParameterTuningJobSummaries`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_hyper_parameter_tuning_job_summaries`](Self::set_hyper_parameter_tuning_job_summaries) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_hyper_parameter_tuning_job_summaries(mut self, items: impl IntoIterator<Item = HyperParameterTuningJobSummary>) -> Self {
        self.hyper_parameter_tuning_job_summaries.get_or_insert_with(Vec::new).extend(items);
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

impl fmt::Display for ListHyperParameterTuningJobsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("HyperParameterTuningJobSummaries", self.hyper_parameter_tuning_job_summaries.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagemaker_types::{HyperParameterTuningJobStatus, HyperParameterTuningJobStrategyType};

    #[test]
    fn test_counters_render_in_declaration_order() {
        let counters = TrainingJobStatusCounters::new()
            .with_completed(4)
            .with_in_progress(2)
            .with_stopped(1);
        assert_eq!(
            counters.to_string(),
            "{Completed: 4, InProgress: 2, Stopped: 1}",
        );
    }

    #[test]
    fn test_summary_carries_counters_and_limits() {
        let summary = HyperParameterTuningJobSummary::new()
            .with_hyper_parameter_tuning_job_name("tune-churn")
            .with_hyper_parameter_tuning_job_status(HyperParameterTuningJobStatus::Completed)
            .with_strategy(HyperParameterTuningJobStrategyType::Bayesian)
            .with_objective_status_counters(
                ObjectiveStatusCounters::new().with_succeeded(8).with_failed(2),
            )
            .with_resource_limits(
                ResourceLimits::new()
                    .with_max_number_of_training_jobs(10)
                    .with_max_parallel_training_jobs(2),
            );
        assert_eq!(summary.hyper_parameter_tuning_job_status(), Some("Completed"));
        assert_eq!(summary.strategy(), Some("Bayesian"));
        assert_eq!(summary.objective_status_counters().unwrap().succeeded(), Some(8));
        assert_eq!(
            summary.resource_limits().unwrap().max_parallel_training_jobs(),
            Some(2),
        );
    }

    #[test]
    fn test_list_result_json_uses_service_casing() {
        let result = ListHyperParameterTuningJobsResult::new()
            .with_hyper_parameter_tuning_job_summaries([HyperParameterTuningJobSummary::new()
                .with_hyper_parameter_tuning_job_name("tune-churn")])
            .with_next_token("page-2");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json["HyperParameterTuningJobSummaries"][0]["HyperParameterTuningJobName"],
            "tune-churn",
        );
        assert_eq!(json["NextToken"], "page-2");
    }
}
