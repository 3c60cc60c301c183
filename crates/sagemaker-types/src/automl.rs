//! Enumerations used by the AutoML operations.

use crate::error::SageMakerError;
use std::fmt;
use std::str::FromStr;

/// Kind of job a candidate step ran as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateStepType {
    TrainingJob,
    TransformJob,
    ProcessingJob,
}

impl CandidateStepType {
    /// The wire value for this step type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrainingJob => "AWS::SageMaker::TrainingJob",
            Self::TransformJob => "AWS::SageMaker::TransformJob",
            Self::ProcessingJob => "AWS::SageMaker::ProcessingJob",
        }
    }
}

impl fmt::Display for CandidateStepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CandidateStepType> for String {
    fn from(value: CandidateStepType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CandidateStepType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AWS::SageMaker::TrainingJob" => Ok(Self::TrainingJob),
            "AWS::SageMaker::TransformJob" => Ok(Self::TransformJob),
            "AWS::SageMaker::ProcessingJob" => Ok(Self::ProcessingJob),
            other => Err(SageMakerError::unknown_enum_value("CandidateStepType", other)),
        }
    }
}

/// Whether the objective metric is maximized or minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoMlJobObjectiveType {
    Maximize,
    Minimize,
}

impl AutoMlJobObjectiveType {
    /// The wire value for this objective type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maximize => "Maximize",
            Self::Minimize => "Minimize",
        }
    }
}

impl fmt::Display for AutoMlJobObjectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AutoMlJobObjectiveType> for String {
    fn from(value: AutoMlJobObjectiveType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AutoMlJobObjectiveType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Maximize" => Ok(Self::Maximize),
            "Minimize" => Ok(Self::Minimize),
            other => Err(SageMakerError::unknown_enum_value("AutoMlJobObjectiveType", other)),
        }
    }
}

/// Objective metric optimized by an AutoML job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoMlMetricEnum {
    Accuracy,
    Mse,
    F1,
    F1Macro,
    Auc,
}

impl AutoMlMetricEnum {
    /// The wire value for this metric.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Mse => "MSE",
            Self::F1 => "F1",
            Self::F1Macro => "F1macro",
            Self::Auc => "AUC",
        }
    }
}

impl fmt::Display for AutoMlMetricEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AutoMlMetricEnum> for String {
    fn from(value: AutoMlMetricEnum) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AutoMlMetricEnum {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accuracy" => Ok(Self::Accuracy),
            "MSE" => Ok(Self::Mse),
            "F1" => Ok(Self::F1),
            "F1macro" => Ok(Self::F1Macro),
            "AUC" => Ok(Self::Auc),
            other => Err(SageMakerError::unknown_enum_value("AutoMlMetricEnum", other)),
        }
    }
}

/// Kind of supervised learning problem an AutoML job solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemType {
    BinaryClassification,
    MulticlassClassification,
    Regression,
}

impl ProblemType {
    /// The wire value for this problem type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BinaryClassification => "BinaryClassification",
            Self::MulticlassClassification => "MulticlassClassification",
            Self::Regression => "Regression",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProblemType> for String {
    fn from(value: ProblemType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProblemType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BinaryClassification" => Ok(Self::BinaryClassification),
            "MulticlassClassification" => Ok(Self::MulticlassClassification),
            "Regression" => Ok(Self::Regression),
            other => Err(SageMakerError::unknown_enum_value("ProblemType", other)),
        }
    }
}

/// How an AutoML input channel's S3 data is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoMlS3DataType {
    ManifestFile,
    S3Prefix,
}

impl AutoMlS3DataType {
    /// The wire value for this data type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ManifestFile => "ManifestFile",
            Self::S3Prefix => "S3Prefix",
        }
    }
}

impl fmt::Display for AutoMlS3DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AutoMlS3DataType> for String {
    fn from(value: AutoMlS3DataType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AutoMlS3DataType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ManifestFile" => Ok(Self::ManifestFile),
            "S3Prefix" => Ok(Self::S3Prefix),
            other => Err(SageMakerError::unknown_enum_value("AutoMlS3DataType", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_step_type_uses_namespaced_values() {
        assert_eq!(CandidateStepType::TrainingJob.as_str(), "AWS::SageMaker::TrainingJob");
        assert_eq!(
            "AWS::SageMaker::ProcessingJob".parse::<CandidateStepType>().unwrap(),
            CandidateStepType::ProcessingJob
        );
    }

    #[test]
    fn test_metric_enum_casing() {
        assert_eq!(AutoMlMetricEnum::Mse.as_str(), "MSE");
        assert_eq!(AutoMlMetricEnum::F1Macro.as_str(), "F1macro");
        assert_eq!("AUC".parse::<AutoMlMetricEnum>().unwrap(), AutoMlMetricEnum::Auc);
    }

    #[test]
    fn test_problem_type_rejects_unknown() {
        assert!("Clustering".parse::<ProblemType>().is_err());
    }
}
