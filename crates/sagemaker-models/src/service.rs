//! The service interface the request and result shapes are exchanged over.
//!
//! Transports implement [`SageMakerService`]; callers build the request
//! records in this crate, hand them to an implementation, and get the
//! matching result records back.

use crate::automl::{
    CreateAutoMlJobRequest, CreateAutoMlJobResult, ListCandidatesForAutoMlJobRequest,
    ListCandidatesForAutoMlJobResult,
};
use crate::compilation::{
    CreateCompilationJobRequest, CreateCompilationJobResult, ListCompilationJobsRequest,
    ListCompilationJobsResult,
};
use crate::model::{DescribeModelRequest, DescribeModelResult};
use crate::model_package::{CreateModelPackageRequest, CreateModelPackageResult};
use crate::monitoring::{
    DescribeMonitoringScheduleRequest, DescribeMonitoringScheduleResult,
    ListMonitoringSchedulesRequest, ListMonitoringSchedulesResult,
};
use crate::processing::{CreateProcessingJobRequest, CreateProcessingJobResult};
use crate::training::{CreateTrainingJobRequest, CreateTrainingJobResult};
use crate::tuning::{ListHyperParameterTuningJobsRequest, ListHyperParameterTuningJobsResult};
use crate::workteam::{
    DescribeWorkteamRequest, DescribeWorkteamResult, ListWorkteamsRequest, ListWorkteamsResult,
};
use async_trait::async_trait;
use sagemaker_types::SageMakerResult;

/// The SageMaker operations this crate models, as an async interface.
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across tasks.
#[async_trait]
pub trait SageMakerService: Send + Sync {
    /// Starts an AutoML job that explores candidate models for a dataset.
    ///
    /// # Errors
    /// Returns a [`SageMakerError`](sagemaker_types::SageMakerError) when the
    /// request is rejected, for example `ResourceLimitExceeded` when the
    /// account's AutoML job quota is reached.
    async fn create_auto_ml_job(
        &self,
        request: CreateAutoMlJobRequest,
    ) -> SageMakerResult<CreateAutoMlJobResult>;

    /// Lists the candidates an AutoML job has produced, one page at a time.
    ///
    /// # Errors
    /// Returns `ResourceNotFound` when the named AutoML job does not exist.
    async fn list_candidates_for_auto_ml_job(
        &self,
        request: ListCandidatesForAutoMlJobRequest,
    ) -> SageMakerResult<ListCandidatesForAutoMlJobResult>;

    /// Compiles a trained model for a target device or platform.
    ///
    /// # Errors
    /// Returns `ResourceInUse` when a compilation job with the same name
    /// already exists.
    async fn create_compilation_job(
        &self,
        request: CreateCompilationJobRequest,
    ) -> SageMakerResult<CreateCompilationJobResult>;

    /// Lists compilation jobs, filtered and sorted per the request.
    async fn list_compilation_jobs(
        &self,
        request: ListCompilationJobsRequest,
    ) -> SageMakerResult<ListCompilationJobsResult>;

    /// Registers a model package that can back hosted models.
    async fn create_model_package(
        &self,
        request: CreateModelPackageRequest,
    ) -> SageMakerResult<CreateModelPackageResult>;

    /// Starts a processing job.
    ///
    /// # Errors
    /// Returns `ResourceInUse` when a processing job with the same name
    /// already exists.
    async fn create_processing_job(
        &self,
        request: CreateProcessingJobRequest,
    ) -> SageMakerResult<CreateProcessingJobResult>;

    /// Starts a training job.
    ///
    /// # Errors
    /// Returns `ResourceInUse` when a training job with the same name already
    /// exists, or `ResourceLimitExceeded` when the account's training
    /// instance quota is reached.
    async fn create_training_job(
        &self,
        request: CreateTrainingJobRequest,
    ) -> SageMakerResult<CreateTrainingJobResult>;

    /// Describes a hosted model.
    ///
    /// # Errors
    /// Returns `ResourceNotFound` when the named model does not exist.
    async fn describe_model(
        &self,
        request: DescribeModelRequest,
    ) -> SageMakerResult<DescribeModelResult>;

    /// Describes a monitoring schedule, including its last execution.
    async fn describe_monitoring_schedule(
        &self,
        request: DescribeMonitoringScheduleRequest,
    ) -> SageMakerResult<DescribeMonitoringScheduleResult>;

    /// Lists monitoring schedules, filtered and sorted per the request.
    async fn list_monitoring_schedules(
        &self,
        request: ListMonitoringSchedulesRequest,
    ) -> SageMakerResult<ListMonitoringSchedulesResult>;

    /// Lists hyperparameter tuning jobs, filtered and sorted per the request.
    async fn list_hyper_parameter_tuning_jobs(
        &self,
        request: ListHyperParameterTuningJobsRequest,
    ) -> SageMakerResult<ListHyperParameterTuningJobsResult>;

    /// Lists the work teams owned by the calling account.
    async fn list_workteams(
        &self,
        request: ListWorkteamsRequest,
    ) -> SageMakerResult<ListWorkteamsResult>;

    /// Describes a single work team.
    ///
    /// # Errors
    /// Returns `ResourceNotFound` when the named work team does not exist.
    async fn describe_workteam(
        &self,
        request: DescribeWorkteamRequest,
    ) -> SageMakerResult<DescribeWorkteamResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workteam::Workteam;
    use sagemaker_types::SageMakerError;

    /// In-memory implementation holding a fixed set of work teams. Only the
    /// operations the tests exercise return data; the rest answer
    /// `ResourceNotFound`.
    struct FixtureService {
        workteams: Vec<Workteam>,
    }

    #[async_trait]
    impl SageMakerService for FixtureService {
        async fn create_auto_ml_job(
            &self,
            request: CreateAutoMlJobRequest,
        ) -> SageMakerResult<CreateAutoMlJobResult> {
            let name = request.auto_ml_job_name().unwrap_or("unnamed");
            Ok(CreateAutoMlJobResult::new()
                .with_auto_ml_job_arn(format!("arn:aws:sagemaker:us-east-1:123456789012:automl-job/{name}")))
        }

        async fn list_candidates_for_auto_ml_job(
            &self,
            _request: ListCandidatesForAutoMlJobRequest,
        ) -> SageMakerResult<ListCandidatesForAutoMlJobResult> {
            Err(SageMakerError::ResourceNotFound(
                "no such AutoML job".to_string(),
            ))
        }

        async fn create_compilation_job(
            &self,
            _request: CreateCompilationJobRequest,
        ) -> SageMakerResult<CreateCompilationJobResult> {
            Err(SageMakerError::ResourceNotFound("unsupported".to_string()))
        }

        async fn list_compilation_jobs(
            &self,
            _request: ListCompilationJobsRequest,
        ) -> SageMakerResult<ListCompilationJobsResult> {
            Ok(ListCompilationJobsResult::new())
        }

        async fn create_model_package(
            &self,
            _request: CreateModelPackageRequest,
        ) -> SageMakerResult<CreateModelPackageResult> {
            Err(SageMakerError::ResourceNotFound("unsupported".to_string()))
        }

        async fn create_processing_job(
            &self,
            _request: CreateProcessingJobRequest,
        ) -> SageMakerResult<CreateProcessingJobResult> {
            Err(SageMakerError::ResourceNotFound("unsupported".to_string()))
        }

        async fn create_training_job(
            &self,
            request: CreateTrainingJobRequest,
        ) -> SageMakerResult<CreateTrainingJobResult> {
            let name = request.training_job_name().unwrap_or("unnamed");
            Ok(CreateTrainingJobResult::new().with_training_job_arn(format!(
                "arn:aws:sagemaker:us-east-1:123456789012:training-job/{name}"
            )))
        }

        async fn describe_model(
            &self,
            _request: DescribeModelRequest,
        ) -> SageMakerResult<DescribeModelResult> {
            Err(SageMakerError::ResourceNotFound("unsupported".to_string()))
        }

        async fn describe_monitoring_schedule(
            &self,
            _request: DescribeMonitoringScheduleRequest,
        ) -> SageMakerResult<DescribeMonitoringScheduleResult> {
            Err(SageMakerError::ResourceNotFound("unsupported".to_string()))
        }

        async fn list_monitoring_schedules(
            &self,
            _request: ListMonitoringSchedulesRequest,
        ) -> SageMakerResult<ListMonitoringSchedulesResult> {
            Ok(ListMonitoringSchedulesResult::new())
        }

        async fn list_hyper_parameter_tuning_jobs(
            &self,
            _request: ListHyperParameterTuningJobsRequest,
        ) -> SageMakerResult<ListHyperParameterTuningJobsResult> {
            Ok(ListHyperParameterTuningJobsResult::new())
        }

        async fn list_workteams(
            &self,
            request: ListWorkteamsRequest,
        ) -> SageMakerResult<ListWorkteamsResult> {
            let needle = request.name_contains().unwrap_or("");
            let matching = self
                .workteams
                .iter()
                .filter(|team| team.workteam_name().is_some_and(|n| n.contains(needle)))
                .cloned()
                .collect::<Vec<_>>();
            Ok(ListWorkteamsResult::new().with_workteams(matching))
        }

        async fn describe_workteam(
            &self,
            request: DescribeWorkteamRequest,
        ) -> SageMakerResult<DescribeWorkteamResult> {
            self.workteams
                .iter()
                .find(|team| team.workteam_name() == request.workteam_name())
                .map(|team| DescribeWorkteamResult::new().with_workteam(team.clone()))
                .ok_or_else(|| {
                    SageMakerError::ResourceNotFound(
                        request.workteam_name().unwrap_or_default().to_string(),
                    )
                })
        }
    }

    fn fixture() -> FixtureService {
        FixtureService {
            workteams: vec![
                Workteam::new()
                    .with_workteam_name("labelers-us")
                    .with_workteam_arn("arn:aws:sagemaker:us-east-1:123456789012:workteam/private-crowd/labelers-us"),
                Workteam::new()
                    .with_workteam_name("labelers-eu")
                    .with_workteam_arn("arn:aws:sagemaker:eu-west-1:123456789012:workteam/private-crowd/labelers-eu"),
            ],
        }
    }

    #[tokio::test]
    async fn test_create_auto_ml_job_returns_arn() {
        let service = fixture();
        let result = service
            .create_auto_ml_job(CreateAutoMlJobRequest::new().with_auto_ml_job_name("churn"))
            .await
            .unwrap();
        assert_eq!(
            result.auto_ml_job_arn(),
            Some("arn:aws:sagemaker:us-east-1:123456789012:automl-job/churn"),
        );
    }

    #[tokio::test]
    async fn test_create_training_job_returns_arn() {
        let service = fixture();
        let result = service
            .create_training_job(CreateTrainingJobRequest::new().with_training_job_name("churn-xgb"))
            .await
            .unwrap();
        assert_eq!(
            result.training_job_arn(),
            Some("arn:aws:sagemaker:us-east-1:123456789012:training-job/churn-xgb"),
        );
    }

    #[tokio::test]
    async fn test_list_workteams_filters_by_name() {
        let service = fixture();
        let result = service
            .list_workteams(ListWorkteamsRequest::new().with_name_contains("eu"))
            .await
            .unwrap();
        let teams = result.workteams().unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].workteam_name(), Some("labelers-eu"));
    }

    #[tokio::test]
    async fn test_describe_missing_workteam_is_not_found() {
        let service = fixture();
        let err = service
            .describe_workteam(DescribeWorkteamRequest::new().with_workteam_name("ghosts"))
            .await
            .unwrap_err();
        assert!(matches!(err, SageMakerError::ResourceNotFound(_)));
    }
}
