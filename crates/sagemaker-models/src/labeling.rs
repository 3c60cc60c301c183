//! Shapes for the labeling job operations.

use sagemaker_types::ShapeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress counters of a labeling job.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    total_labeled: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    human_labeled: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    machine_labeled: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_non_retryable_error: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlabeled: Option<i32>,
}

impl LabelCounters {
    /// Creates a new `LabelCounters` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects labeled so far, human and machine combined.
    #[must_use]
    pub fn total_labeled(&self) -> Option<i32> {
        self.total_labeled
    }

    /// Replaces the value of `TotalLabeled`, clearing it when `None`.
    pub fn set_total_labeled(&mut self, value: Option<i32>) {
        self.total_labeled = value;
    }

    /// Sets `TotalLabeled`, returning the record for chaining.
    #[must_use]
    pub fn with_total_labeled(mut self, value: i32) -> Self {
        self.total_labeled = Some(value);
        self
    }

    #[must_use]
    pub fn human_labeled(&self) -> Option<i32> {
        self.human_labeled
    }

    /// Replaces the value of `HumanLabeled`, clearing it when `None`.
    pub fn set_human_labeled(&mut self, value: Option<i32>) {
        self.human_labeled = value;
    }

    /// Sets `HumanLabeled`, returning the record for chaining.
    #[must_use]
    pub fn with_human_labeled(mut self, value: i32) -> Self {
        self.human_labeled = Some(value);
        self
    }

    #[must_use]
    pub fn machine_labeled(&self) -> Option<i32> {
        self.machine_labeled
    }

    /// Replaces the value of `MachineLabeled`, clearing it when `None`.
    pub fn set_machine_labeled(&mut self, value: Option<i32>) {
        self.machine_labeled = value;
    }

    /// Sets `MachineLabeled`, returning the record for chaining.
    #[must_use]
    pub fn with_machine_labeled(mut self, value: i32) -> Self {
        self.machine_labeled = Some(value);
        self
    }

    #[must_use]
    pub fn failed_non_retryable_error(&self) -> Option<i32> {
        self.failed_non_retryable_error
    }

    /// Replaces the value of `FailedNonRetryableError`, clearing it when `None`.
    pub fn set_failed_non_retryable_error(&mut self, value: Option<i32>) {
        self.failed_non_retryable_error = value;
    }

    /// Sets `FailedNonRetryableError`, returning the record for chaining.
    #[must_use]
    pub fn with_failed_non_retryable_error(mut self, value: i32) -> Self {
        self.failed_non_retryable_error = Some(value);
        self
    }

    #[must_use]
    pub fn unlabeled(&self) -> Option<i32> {
        self.unlabeled
    }

    /// Replaces the value of `Unlabeled`, clearing it when `None`.
    pub fn set_unlabeled(&mut self, value: Option<i32>) {
        self.unlabeled = value;
    }

    /// Sets `Unlabeled`, returning the record for chaining.
    #[must_use]
    pub fn with_unlabeled(mut self, value: i32) -> Self {
        self.unlabeled = Some(value);
        self
    }
}

impl fmt::Display for LabelCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TotalLabeled", self.total_labeled.as_ref())
            .field("HumanLabeled", self.human_labeled.as_ref())
            .field("MachineLabeled", self.machine_labeled.as_ref())
            .field("FailedNonRetryableError", self.failed_non_retryable_error.as_ref())
            .field("Unlabeled", self.unlabeled.as_ref())
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

    fn sample_counters() -> LabelCounters {
        LabelCounters::new()
            .with_total_labeled(10)
            .with_human_labeled(6)
            .with_machine_labeled(4)
            .with_failed_non_retryable_error(0)
            .with_unlabeled(2)
    }

    #[test]
    fn test_all_five_counters_render() {
        assert_eq!(
            sample_counters().to_string(),
            "{TotalLabeled: 10, HumanLabeled: 6, MachineLabeled: 4, \
             FailedNonRetryableError: 0, Unlabeled: 2}",
        );
    }

    #[test]
    fn test_equality_distinguishes_zero_from_absent() {
        assert_ne!(
            LabelCounters::new().with_failed_non_retryable_error(0),
            LabelCounters::new(),
        );
        assert_eq!(sample_counters(), sample_counters());
        assert_eq!(hash_of(&sample_counters()), hash_of(&sample_counters()));
    }

    #[test]
    fn test_set_counter_to_none_clears_it() {
        let mut counters = sample_counters();
        counters.set_unlabeled(None);
        assert_eq!(counters.unlabeled(), None);
        assert!(!counters.to_string().contains("Unlabeled"));
    }
}
