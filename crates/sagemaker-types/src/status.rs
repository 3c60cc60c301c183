//! Status enumerations.
//!
//! Each enum mirrors a closed string set documented by the service. Records
//! store these as plain strings so values added by the service later are still
//! representable; the typed enums are a convenience for callers.

use crate::error::SageMakerError;
use std::fmt;
use std::str::FromStr;

/// Completion status of an objective metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectiveStatus {
    Succeeded,
    Pending,
    Failed,
}

impl ObjectiveStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for ObjectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ObjectiveStatus> for String {
    fn from(value: ObjectiveStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ObjectiveStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Succeeded" => Ok(Self::Succeeded),
            "Pending" => Ok(Self::Pending),
            "Failed" => Ok(Self::Failed),
            other => Err(SageMakerError::unknown_enum_value("ObjectiveStatus", other)),
        }
    }
}

/// Status of an AutoML candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateStatus {
    Completed,
    InProgress,
    Failed,
    Stopped,
    Stopping,
}

impl CandidateStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "InProgress",
            Self::Failed => "Failed",
            Self::Stopped => "Stopped",
            Self::Stopping => "Stopping",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CandidateStatus> for String {
    fn from(value: CandidateStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CandidateStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completed" => Ok(Self::Completed),
            "InProgress" => Ok(Self::InProgress),
            "Failed" => Ok(Self::Failed),
            "Stopped" => Ok(Self::Stopped),
            "Stopping" => Ok(Self::Stopping),
            other => Err(SageMakerError::unknown_enum_value("CandidateStatus", other)),
        }
    }
}

/// Status of a compilation job.
///
/// Unlike most status sets this one is spelled in upper case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilationJobStatus {
    InProgress,
    Completed,
    Failed,
    Starting,
    Stopping,
    Stopped,
}

impl CompilationJobStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "INPROGRESS",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Starting => "STARTING",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
        }
    }
}

impl fmt::Display for CompilationJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CompilationJobStatus> for String {
    fn from(value: CompilationJobStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CompilationJobStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INPROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            "STARTING" => Ok(Self::Starting),
            "STOPPING" => Ok(Self::Stopping),
            "STOPPED" => Ok(Self::Stopped),
            other => Err(SageMakerError::unknown_enum_value("CompilationJobStatus", other)),
        }
    }
}

/// Status of a monitoring schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleStatus {
    Pending,
    Failed,
    Scheduled,
    Stopped,
}

impl ScheduleStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Scheduled => "Scheduled",
            Self::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ScheduleStatus> for String {
    fn from(value: ScheduleStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ScheduleStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Failed" => Ok(Self::Failed),
            "Scheduled" => Ok(Self::Scheduled),
            "Stopped" => Ok(Self::Stopped),
            other => Err(SageMakerError::unknown_enum_value("ScheduleStatus", other)),
        }
    }
}

/// Status of a single monitoring execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionStatus {
    Pending,
    Completed,
    CompletedWithViolations,
    InProgress,
    Failed,
    Stopping,
    Stopped,
}

impl ExecutionStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::CompletedWithViolations => "CompletedWithViolations",
            Self::InProgress => "InProgress",
            Self::Failed => "Failed",
            Self::Stopping => "Stopping",
            Self::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExecutionStatus> for String {
    fn from(value: ExecutionStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ExecutionStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Completed" => Ok(Self::Completed),
            "CompletedWithViolations" => Ok(Self::CompletedWithViolations),
            "InProgress" => Ok(Self::InProgress),
            "Failed" => Ok(Self::Failed),
            "Stopping" => Ok(Self::Stopping),
            "Stopped" => Ok(Self::Stopped),
            other => Err(SageMakerError::unknown_enum_value("ExecutionStatus", other)),
        }
    }
}

/// Status of a hyperparameter tuning job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyperParameterTuningJobStatus {
    Completed,
    InProgress,
    Failed,
    Stopped,
    Stopping,
}

impl HyperParameterTuningJobStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "InProgress",
            Self::Failed => "Failed",
            Self::Stopped => "Stopped",
            Self::Stopping => "Stopping",
        }
    }
}

impl fmt::Display for HyperParameterTuningJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HyperParameterTuningJobStatus> for String {
    fn from(value: HyperParameterTuningJobStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for HyperParameterTuningJobStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completed" => Ok(Self::Completed),
            "InProgress" => Ok(Self::InProgress),
            "Failed" => Ok(Self::Failed),
            "Stopped" => Ok(Self::Stopped),
            "Stopping" => Ok(Self::Stopping),
            other => {
                Err(SageMakerError::unknown_enum_value("HyperParameterTuningJobStatus", other))
            }
        }
    }
}

/// Search strategy used by a hyperparameter tuning job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyperParameterTuningJobStrategyType {
    Bayesian,
    Random,
}

impl HyperParameterTuningJobStrategyType {
    /// The wire value for this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bayesian => "Bayesian",
            Self::Random => "Random",
        }
    }
}

impl fmt::Display for HyperParameterTuningJobStrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HyperParameterTuningJobStrategyType> for String {
    fn from(value: HyperParameterTuningJobStrategyType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for HyperParameterTuningJobStrategyType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bayesian" => Ok(Self::Bayesian),
            "Random" => Ok(Self::Random),
            other => Err(SageMakerError::unknown_enum_value(
                "HyperParameterTuningJobStrategyType",
                other,
            )),
        }
    }
}

/// Overall status of a training job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainingJobStatus {
    InProgress,
    Completed,
    Failed,
    Stopping,
    Stopped,
}

impl TrainingJobStatus {
    /// The wire value for this training job status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Stopping => "Stopping",
            Self::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for TrainingJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TrainingJobStatus> for String {
    fn from(value: TrainingJobStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for TrainingJobStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Failed" => Ok(Self::Failed),
            "Stopping" => Ok(Self::Stopping),
            "Stopped" => Ok(Self::Stopped),
            other => Err(SageMakerError::unknown_enum_value("TrainingJobStatus", other)),
        }
    }
}

/// Fine-grained phase a training job is in, refining `TrainingJobStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryStatus {
    Starting,
    LaunchingMLInstances,
    PreparingTrainingStack,
    Downloading,
    DownloadingTrainingImage,
    Training,
    Uploading,
    Stopping,
    Stopped,
    MaxRuntimeExceeded,
    Completed,
    Failed,
    Interrupted,
    MaxWaitTimeExceeded,
}

impl SecondaryStatus {
    /// The wire value for this secondary status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "Starting",
            Self::LaunchingMLInstances => "LaunchingMLInstances",
            Self::PreparingTrainingStack => "PreparingTrainingStack",
            Self::Downloading => "Downloading",
            Self::DownloadingTrainingImage => "DownloadingTrainingImage",
            Self::Training => "Training",
            Self::Uploading => "Uploading",
            Self::Stopping => "Stopping",
            Self::Stopped => "Stopped",
            Self::MaxRuntimeExceeded => "MaxRuntimeExceeded",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Interrupted => "Interrupted",
            Self::MaxWaitTimeExceeded => "MaxWaitTimeExceeded",
        }
    }
}

impl fmt::Display for SecondaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SecondaryStatus> for String {
    fn from(value: SecondaryStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for SecondaryStatus {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Starting" => Ok(Self::Starting),
            "LaunchingMLInstances" => Ok(Self::LaunchingMLInstances),
            "PreparingTrainingStack" => Ok(Self::PreparingTrainingStack),
            "Downloading" => Ok(Self::Downloading),
            "DownloadingTrainingImage" => Ok(Self::DownloadingTrainingImage),
            "Training" => Ok(Self::Training),
            "Uploading" => Ok(Self::Uploading),
            "Stopping" => Ok(Self::Stopping),
            "Stopped" => Ok(Self::Stopped),
            "MaxRuntimeExceeded" => Ok(Self::MaxRuntimeExceeded),
            "Completed" => Ok(Self::Completed),
            "Failed" => Ok(Self::Failed),
            "Interrupted" => Ok(Self::Interrupted),
            "MaxWaitTimeExceeded" => Ok(Self::MaxWaitTimeExceeded),
            other => Err(SageMakerError::unknown_enum_value("SecondaryStatus", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_job_status_wire_values_are_upper_case() {
        assert_eq!(CompilationJobStatus::InProgress.as_str(), "INPROGRESS");
        assert_eq!(CompilationJobStatus::Stopped.as_str(), "STOPPED");
        assert_eq!(
            "STARTING".parse::<CompilationJobStatus>().unwrap(),
            CompilationJobStatus::Starting
        );
    }

    #[test]
    fn test_candidate_status_round_trip() {
        for status in [
            CandidateStatus::Completed,
            CandidateStatus::InProgress,
            CandidateStatus::Failed,
            CandidateStatus::Stopped,
            CandidateStatus::Stopping,
        ] {
            assert_eq!(status.as_str().parse::<CandidateStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected_with_context() {
        let err = "Archived".parse::<ScheduleStatus>().unwrap_err();
        assert_eq!(
            err,
            SageMakerError::UnknownEnumValue {
                kind: "ScheduleStatus".to_string(),
                value: "Archived".to_string(),
            }
        );
    }

    #[test]
    fn test_string_conversion_matches_display() {
        let status = ObjectiveStatus::Succeeded;
        assert_eq!(String::from(status), status.to_string());
    }

    #[test]
    fn test_training_job_status_round_trip() {
        assert_eq!(TrainingJobStatus::InProgress.as_str(), "InProgress");
        assert_eq!(
            "Stopping".parse::<TrainingJobStatus>().unwrap(),
            TrainingJobStatus::Stopping,
        );
    }

    #[test]
    fn test_secondary_status_covers_spot_interruptions() {
        assert_eq!(
            "Interrupted".parse::<SecondaryStatus>().unwrap(),
            SecondaryStatus::Interrupted,
        );
        assert_eq!(SecondaryStatus::LaunchingMLInstances.as_str(), "LaunchingMLInstances");
        assert!("Resuming".parse::<SecondaryStatus>().is_err());
    }
}
