//! Exercises the `SageMakerService` trait end to end against an in-memory
//! implementation that records jobs and answers list requests with paging.

use async_trait::async_trait;
use sagemaker_models::{
    CompilationJobSummary, CreateAutoMlJobRequest, CreateAutoMlJobResult,
    CreateCompilationJobRequest, CreateCompilationJobResult, CreateModelPackageRequest,
    CreateModelPackageResult, CreateProcessingJobRequest, CreateProcessingJobResult,
    CreateTrainingJobRequest, CreateTrainingJobResult, DescribeModelRequest, DescribeModelResult,
    DescribeMonitoringScheduleRequest,
    DescribeMonitoringScheduleResult, DescribeWorkteamRequest, DescribeWorkteamResult,
    InputConfig, ListCandidatesForAutoMlJobRequest, ListCandidatesForAutoMlJobResult,
    ListCompilationJobsRequest, ListCompilationJobsResult, ListHyperParameterTuningJobsRequest,
    ListHyperParameterTuningJobsResult, ListMonitoringSchedulesRequest,
    ListMonitoringSchedulesResult, ListWorkteamsRequest, ListWorkteamsResult, OutputConfig,
    SageMakerService,
};
use sagemaker_types::{
    CompilationJobStatus, Framework, SageMakerError, SageMakerResult, TargetDevice,
};
use std::sync::Mutex;

const ACCOUNT_ARN_PREFIX: &str = "arn:aws:sagemaker:us-east-1:123456789012";

/// Stores compilation jobs in memory; the other operations are rejected so a
/// misrouted call fails loudly.
#[derive(Default)]
struct InMemorySageMaker {
    compilation_jobs: Mutex<Vec<CompilationJobSummary>>,
}

impl InMemorySageMaker {
    fn unsupported<T>(operation: &str) -> SageMakerResult<T> {
        Err(SageMakerError::Client(format!("{operation} is not wired up")))
    }
}

#[async_trait]
impl SageMakerService for InMemorySageMaker {
    async fn create_auto_ml_job(
        &self,
        _request: CreateAutoMlJobRequest,
    ) -> SageMakerResult<CreateAutoMlJobResult> {
        Self::unsupported("CreateAutoMLJob")
    }

    async fn list_candidates_for_auto_ml_job(
        &self,
        _request: ListCandidatesForAutoMlJobRequest,
    ) -> SageMakerResult<ListCandidatesForAutoMlJobResult> {
        Self::unsupported("ListCandidatesForAutoMLJob")
    }

    async fn create_compilation_job(
        &self,
        request: CreateCompilationJobRequest,
    ) -> SageMakerResult<CreateCompilationJobResult> {
        let name = request
            .compilation_job_name()
            .ok_or_else(|| SageMakerError::Client("CompilationJobName is required".to_string()))?;
        let mut jobs = self.compilation_jobs.lock().unwrap();
        if jobs.iter().any(|job| job.compilation_job_name() == Some(name)) {
            return Err(SageMakerError::ResourceInUse(name.to_string()));
        }
        let arn = format!("{ACCOUNT_ARN_PREFIX}:compilation-job/{name}");
        jobs.push(
            CompilationJobSummary::new()
                .with_compilation_job_name(name)
                .with_compilation_job_arn(arn.clone())
                .with_compilation_target_device(
                    request
                        .output_config()
                        .and_then(|config| config.target_device())
                        .unwrap_or_default(),
                )
                .with_compilation_job_status(CompilationJobStatus::Starting),
        );
        Ok(CreateCompilationJobResult::new().with_compilation_job_arn(arn))
    }

    async fn list_compilation_jobs(
        &self,
        request: ListCompilationJobsRequest,
    ) -> SageMakerResult<ListCompilationJobsResult> {
        let needle = request.name_contains().unwrap_or("").to_string();
        let jobs = self.compilation_jobs.lock().unwrap();
        let matching = jobs
            .iter()
            .filter(|job| {
                job.compilation_job_name()
                    .is_some_and(|name| name.contains(&needle))
            })
            .cloned()
            .collect::<Vec<_>>();
        let page_size = request.max_results().unwrap_or(10).max(1) as usize;
        let offset = request
            .next_token()
            .map_or(Ok(0), str::parse::<usize>)
            .map_err(|_| SageMakerError::Client("invalid NextToken".to_string()))?;
        let page: Vec<_> = matching.iter().skip(offset).take(page_size).cloned().collect();
        let mut result = ListCompilationJobsResult::new().with_compilation_job_summaries(page);
        if offset + page_size < matching.len() {
            result.set_next_token(Some((offset + page_size).to_string()));
        }
        Ok(result)
    }

    async fn create_model_package(
        &self,
        _request: CreateModelPackageRequest,
    ) -> SageMakerResult<CreateModelPackageResult> {
        Self::unsupported("CreateModelPackage")
    }

    async fn create_processing_job(
        &self,
        _request: CreateProcessingJobRequest,
    ) -> SageMakerResult<CreateProcessingJobResult> {
        Self::unsupported("CreateProcessingJob")
    }

    async fn create_training_job(
        &self,
        _request: CreateTrainingJobRequest,
    ) -> SageMakerResult<CreateTrainingJobResult> {
        Self::unsupported("CreateTrainingJob")
    }

    async fn describe_model(
        &self,
        _request: DescribeModelRequest,
    ) -> SageMakerResult<DescribeModelResult> {
        Self::unsupported("DescribeModel")
    }

    async fn describe_monitoring_schedule(
        &self,
        _request: DescribeMonitoringScheduleRequest,
    ) -> SageMakerResult<DescribeMonitoringScheduleResult> {
        Self::unsupported("DescribeMonitoringSchedule")
    }

    async fn list_monitoring_schedules(
        &self,
        _request: ListMonitoringSchedulesRequest,
    ) -> SageMakerResult<ListMonitoringSchedulesResult> {
        Self::unsupported("ListMonitoringSchedules")
    }

    async fn list_hyper_parameter_tuning_jobs(
        &self,
        _request: ListHyperParameterTuningJobsRequest,
    ) -> SageMakerResult<ListHyperParameterTuningJobsResult> {
        Self::unsupported("ListHyperParameterTuningJobs")
    }

    async fn list_workteams(
        &self,
        _request: ListWorkteamsRequest,
    ) -> SageMakerResult<ListWorkteamsResult> {
        Self::unsupported("ListWorkteams")
    }

    async fn describe_workteam(
        &self,
        _request: DescribeWorkteamRequest,
    ) -> SageMakerResult<DescribeWorkteamResult> {
        Self::unsupported("DescribeWorkteam")
    }
}

fn compilation_request(name: &str) -> CreateCompilationJobRequest {
    CreateCompilationJobRequest::new()
        .with_compilation_job_name(name)
        .with_role_arn("arn:aws:iam::123456789012:role/compilation")
        .with_input_config(
            InputConfig::new()
                .with_s3_uri(format!("s3://models/{name}/model.tar.gz"))
                .with_data_input_config(r#"{"data": [1, 3, 224, 224]}"#)
                .with_framework(Framework::Pytorch),
        )
        .with_output_config(
            OutputConfig::new()
                .with_s3_output_location(format!("s3://compiled/{name}/"))
                .with_target_device(TargetDevice::JetsonNano),
        )
}

#[tokio::test]
async fn test_create_then_list_compilation_jobs() {
    let service = InMemorySageMaker::default();
    let created = service
        .create_compilation_job(compilation_request("resnet-edge"))
        .await
        .unwrap();
    assert_eq!(
        created.compilation_job_arn(),
        Some("arn:aws:sagemaker:us-east-1:123456789012:compilation-job/resnet-edge"),
    );

    let listed = service
        .list_compilation_jobs(ListCompilationJobsRequest::new())
        .await
        .unwrap();
    let summaries = listed.compilation_job_summaries().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].compilation_target_device(), Some("jetson_nano"));
    assert_eq!(summaries[0].compilation_job_status(), Some("STARTING"));
}

#[tokio::test]
async fn test_duplicate_job_name_is_in_use() {
    let service = InMemorySageMaker::default();
    service
        .create_compilation_job(compilation_request("resnet-edge"))
        .await
        .unwrap();
    let err = service
        .create_compilation_job(compilation_request("resnet-edge"))
        .await
        .unwrap_err();
    assert!(matches!(err, SageMakerError::ResourceInUse(_)));
}

#[tokio::test]
async fn test_listing_pages_through_next_token() {
    let service = InMemorySageMaker::default();
    for index in 0..5 {
        service
            .create_compilation_job(compilation_request(&format!("job-{index}")))
            .await
            .unwrap();
    }

    let first = service
        .list_compilation_jobs(ListCompilationJobsRequest::new().with_max_results(2))
        .await
        .unwrap();
    assert_eq!(first.compilation_job_summaries().unwrap().len(), 2);
    let token = first.next_token().unwrap().to_string();

    let mut seen = 2;
    let mut token = Some(token);
    while let Some(current) = token.take() {
        let page = service
            .list_compilation_jobs(
                ListCompilationJobsRequest::new()
                    .with_max_results(2)
                    .with_next_token(current),
            )
            .await
            .unwrap();
        seen += page.compilation_job_summaries().unwrap().len();
        token = page.next_token().map(str::to_string);
    }
    assert_eq!(seen, 5);
}

#[tokio::test]
async fn test_name_filter_narrows_the_listing() {
    let service = InMemorySageMaker::default();
    for name in ["resnet-edge", "bert-edge", "resnet-cloud"] {
        service
            .create_compilation_job(compilation_request(name))
            .await
            .unwrap();
    }
    let listed = service
        .list_compilation_jobs(ListCompilationJobsRequest::new().with_name_contains("resnet"))
        .await
        .unwrap();
    assert_eq!(listed.compilation_job_summaries().unwrap().len(), 2);
}
