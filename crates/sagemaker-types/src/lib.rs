//! Shared types for the SageMaker API bindings.
//!
//! This crate holds the pieces every shape depends on:
//!
//! - [`SageMakerError`] and the [`SageMakerResult`] alias
//! - [`ShapeFormatter`], the present-field diagnostic rendering used by every
//!   record's `Display` impl
//! - the closed string-set enumerations the service documents (statuses, sort
//!   keys, instance types, compilation targets, ...)
//!
//! Records store enum-backed fields as plain strings for forward
//! compatibility; the enums here convert to and from those wire strings.

pub mod automl;
pub mod data;
pub mod device;
pub mod error;
pub mod instance;
pub mod shape;
pub mod sort;
pub mod status;

pub use automl::{
    AutoMlJobObjectiveType, AutoMlMetricEnum, AutoMlS3DataType, CandidateStepType, ProblemType,
};
pub use data::{
    AssemblyType, BatchStrategy, CompressionType, ContainerMode, FileSystemAccessMode,
    FileSystemType, JoinSource, ProcessingS3CompressionType, ProcessingS3DataDistributionType,
    ProcessingS3DataType, ProcessingS3InputMode, ProcessingS3UploadMode, RecordWrapper,
    S3DataDistribution, S3DataType, SplitType, TrainingInputMode,
};
pub use device::{Framework, TargetDevice};
pub use error::{SageMakerError, SageMakerResult};
pub use instance::{
    ProcessingInstanceType, ProductionVariantAcceleratorType, ProductionVariantInstanceType,
    TrainingInstanceType, TransformInstanceType,
};
pub use shape::ShapeFormatter;
pub use sort::{
    CandidateSortBy, HyperParameterTuningJobSortByOptions, ListCompilationJobsSortBy,
    ListWorkteamsSortByOptions, MonitoringScheduleSortKey, SortOrder,
};
pub use status::{
    CandidateStatus, CompilationJobStatus, ExecutionStatus, HyperParameterTuningJobStatus,
    HyperParameterTuningJobStrategyType, ObjectiveStatus, ScheduleStatus, SecondaryStatus,
    TrainingJobStatus,
};
