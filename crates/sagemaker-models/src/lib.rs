//! Request, result, and nested shapes for the SageMaker API.
//!
//! Every shape follows the same record pattern:
//!
//! - all fields are optional and start absent ([`Default`] / `new()`)
//! - `field()` borrows, `set_field(Option<_>)` replaces (clearing on `None`),
//!   and `with_field(..)` chains
//! - `with_*` on a list field **appends**; `set_*` replaces the whole list
//! - map fields add entries through `add_*_entry`, which rejects duplicate
//!   keys, and reset through `clear_*_entries`
//! - `Display` renders only the present fields, `{Name: value, ...}` style
//! - `PartialEq` and `Hash` agree, with float fields hashed by bit pattern
//!
//! Enum-backed fields are stored as plain strings; the typed enums live in
//! [`sagemaker_types`] and convert both ways. The [`SageMakerService`] trait
//! ties the request shapes to their results without prescribing a transport.

pub mod automl;
pub mod common;
pub mod compilation;
pub mod labeling;
pub mod model;
pub mod model_package;
pub mod monitoring;
pub mod processing;
pub mod service;
pub mod training;
pub mod transform;
pub mod tuning;
pub mod workteam;

pub use automl::{
    AutoMlCandidate, AutoMlCandidateStep, AutoMlChannel, AutoMlContainerDefinition,
    AutoMlDataSource, AutoMlJobCompletionCriteria, AutoMlJobConfig, AutoMlJobObjective,
    AutoMlOutputDataConfig, AutoMlS3DataSource, AutoMlSecurityConfig, CreateAutoMlJobRequest,
    CreateAutoMlJobResult, FinalAutoMlJobObjectiveMetric, ListCandidatesForAutoMlJobRequest,
    ListCandidatesForAutoMlJobResult,
};
pub use common::{
    ExperimentConfig, NetworkConfig, OutputDataConfig, StoppingCondition, Tag, VpcConfig,
};
pub use compilation::{
    CompilationJobSummary, CreateCompilationJobRequest, CreateCompilationJobResult, InputConfig,
    ListCompilationJobsRequest, ListCompilationJobsResult, OutputConfig,
};
pub use labeling::LabelCounters;
pub use model::{
    ContainerDefinition, DescribeModelRequest, DescribeModelResult, ProductionVariant,
};
pub use model_package::{
    CreateModelPackageRequest, CreateModelPackageResult, InferenceSpecification,
    ModelPackageContainerDefinition, ModelPackageValidationProfile,
    ModelPackageValidationSpecification, SourceAlgorithm, SourceAlgorithmSpecification,
};
pub use monitoring::{
    DescribeMonitoringScheduleRequest, DescribeMonitoringScheduleResult, EndpointInput,
    ListMonitoringSchedulesRequest, ListMonitoringSchedulesResult, MonitoringAppSpecification,
    MonitoringBaselineConfig, MonitoringClusterConfig, MonitoringConstraintsResource,
    MonitoringExecutionSummary, MonitoringInput, MonitoringJobDefinition, MonitoringOutput,
    MonitoringOutputConfig, MonitoringResources, MonitoringS3Output, MonitoringScheduleConfig,
    MonitoringScheduleSummary, MonitoringStatisticsResource, MonitoringStoppingCondition,
    ScheduleConfig,
};
pub use processing::{
    AppSpecification, CreateProcessingJobRequest, CreateProcessingJobResult,
    ProcessingClusterConfig, ProcessingInput, ProcessingOutput, ProcessingOutputConfig,
    ProcessingResources, ProcessingS3Input, ProcessingS3Output, ProcessingStoppingCondition,
};
pub use service::SageMakerService;
pub use training::{
    AlgorithmSpecification, Channel, CheckpointConfig, CollectionConfiguration,
    CreateTrainingJobRequest, CreateTrainingJobResult, DataSource, DebugHookConfig,
    DebugRuleConfiguration, DebugRuleEvaluationStatus, FileSystemDataSource, MetricData,
    MetricDefinition, ModelArtifacts, ResourceConfig, S3DataSource, SecondaryStatusTransition,
    ShuffleConfig, TensorBoardOutputConfig, TrainingJob,
};
pub use transform::{
    DataProcessing, TransformDataSource, TransformInput, TransformJobDefinition, TransformOutput,
    TransformResources, TransformS3DataSource,
};
pub use tuning::{
    HyperParameterTuningJobSummary, ListHyperParameterTuningJobsRequest,
    ListHyperParameterTuningJobsResult, ObjectiveStatusCounters, ResourceLimits,
    TrainingJobStatusCounters,
};
pub use workteam::{
    CognitoMemberDefinition, DescribeWorkteamRequest, DescribeWorkteamResult, ListWorkteamsRequest,
    ListWorkteamsResult, MemberDefinition, NotificationConfiguration, Workteam,
};
