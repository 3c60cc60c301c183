//! Cross-module tests of the record contract: builders, equality, rendering,
//! and the JSON wire shape.

use chrono::{TimeZone, Utc};
use sagemaker_models::{
    AppSpecification, AutoMlChannel, AutoMlDataSource, AutoMlJobObjective, AutoMlOutputDataConfig,
    AutoMlS3DataSource, CreateAutoMlJobRequest, CreateProcessingJobRequest,
    ProcessingClusterConfig, ProcessingInput, ProcessingOutput, ProcessingOutputConfig,
    ProcessingResources, ProcessingS3Input, ProcessingS3Output, ProcessingStoppingCondition, Tag,
};
use sagemaker_types::{
    AutoMlMetricEnum, AutoMlS3DataType, ProcessingInstanceType, ProcessingS3DataType,
    ProcessingS3InputMode, ProcessingS3UploadMode, ProblemType, SageMakerError,
};

fn automl_request() -> CreateAutoMlJobRequest {
    CreateAutoMlJobRequest::new()
        .with_auto_ml_job_name("churn-automl")
        .with_input_data_config([AutoMlChannel::new()
            .with_data_source(AutoMlDataSource::new().with_s3_data_source(
                AutoMlS3DataSource::new()
                    .with_s3_data_type(AutoMlS3DataType::S3Prefix)
                    .with_s3_uri("s3://training-data/churn/"),
            ))
            .with_target_attribute_name("churned")])
        .with_output_data_config(
            AutoMlOutputDataConfig::new().with_s3_output_path("s3://training-output/churn/"),
        )
        .with_problem_type(ProblemType::BinaryClassification)
        .with_auto_ml_job_objective(
            AutoMlJobObjective::new().with_metric_name(AutoMlMetricEnum::F1),
        )
        .with_role_arn("arn:aws:iam::123456789012:role/automl")
        .with_tags([Tag::new().with_key("team").with_value("ml-platform")])
}

#[test]
fn test_identically_built_requests_are_equal() {
    assert_eq!(automl_request(), automl_request());
}

#[test]
fn test_mutating_a_nested_shape_breaks_equality() {
    let mut other = automl_request();
    other.set_problem_type(Some("MulticlassClassification".to_string()));
    assert_ne!(automl_request(), other);
}

#[test]
fn test_request_renders_present_fields_in_declaration_order() {
    let request = CreateAutoMlJobRequest::new()
        .with_auto_ml_job_name("churn-automl")
        .with_role_arn("arn:aws:iam::123456789012:role/automl");
    assert_eq!(
        request.to_string(),
        "{AutoMLJobName: churn-automl, RoleArn: arn:aws:iam::123456789012:role/automl}",
    );
}

#[test]
fn test_json_wire_shape_matches_the_service() {
    let json = serde_json::to_value(automl_request()).unwrap();
    assert_eq!(json["AutoMLJobName"], "churn-automl");
    assert_eq!(
        json["InputDataConfig"][0]["DataSource"]["S3DataSource"]["S3DataType"],
        "S3Prefix",
    );
    assert_eq!(json["AutoMLJobObjective"]["MetricName"], "F1");
    assert_eq!(json["Tags"][0]["Key"], "team");
    // Absent fields never reach the wire.
    assert!(json.get("GenerateCandidateDefinitionsOnly").is_none());
}

#[test]
fn test_processing_request_round_trips_through_json() {
    let mut request = CreateProcessingJobRequest::new()
        .with_processing_job_name("churn-preprocess")
        .with_processing_inputs([ProcessingInput::new()
            .with_input_name("raw")
            .with_s3_input(
                ProcessingS3Input::new()
                    .with_s3_uri("s3://raw-data/churn/")
                    .with_local_path("/opt/ml/processing/input")
                    .with_s3_data_type(ProcessingS3DataType::S3Prefix)
                    .with_s3_input_mode(ProcessingS3InputMode::File),
            )])
        .with_processing_output_config(ProcessingOutputConfig::new().with_outputs([
            ProcessingOutput::new().with_output_name("clean").with_s3_output(
                ProcessingS3Output::new()
                    .with_s3_uri("s3://clean-data/churn/")
                    .with_local_path("/opt/ml/processing/output")
                    .with_s3_upload_mode(ProcessingS3UploadMode::EndOfJob),
            ),
        ]))
        .with_processing_resources(ProcessingResources::new().with_cluster_config(
            ProcessingClusterConfig::new()
                .with_instance_count(1)
                .with_instance_type(ProcessingInstanceType::MlM5Xlarge)
                .with_volume_size_in_gb(30),
        ))
        .with_stopping_condition(
            ProcessingStoppingCondition::new().with_max_runtime_in_seconds(3600),
        )
        .with_app_specification(
            AppSpecification::new()
                .with_image_uri("123456789012.dkr.ecr.us-east-1.amazonaws.com/preprocess:3"),
        )
        .with_role_arn("arn:aws:iam::123456789012:role/processing");
    request.add_environment_entry("MODE", "full").unwrap();

    let json = serde_json::to_string(&request).unwrap();
    let back: CreateProcessingJobRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}

#[test]
fn test_processing_output_config_wire_field_is_outputs() {
    let config = ProcessingOutputConfig::new()
        .with_outputs([ProcessingOutput::new().with_output_name("clean")])
        .with_kms_key_id("alias/processing");
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["Outputs"][0]["OutputName"], "clean");
    assert_eq!(config.outputs().unwrap().len(), 1);
}

#[test]
fn test_duplicate_environment_key_reports_the_key() {
    let mut request = CreateProcessingJobRequest::new();
    request.add_environment_entry("MODE", "full").unwrap();
    let err = request.add_environment_entry("MODE", "sample").unwrap_err();
    assert_eq!(err, SageMakerError::duplicate_key("MODE"));
}

#[test]
fn test_timestamp_fields_round_trip_at_second_precision() {
    use sagemaker_models::CompilationJobSummary;

    let summary = CompilationJobSummary::new()
        .with_compilation_job_name("resnet-edge")
        .with_creation_time(Utc.timestamp_opt(1_580_515_200, 0).unwrap())
        .with_compilation_start_time(Utc.timestamp_opt(1_580_515_260, 0).unwrap());
    let json = serde_json::to_string(&summary).unwrap();
    let back: CompilationJobSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.creation_time(), summary.creation_time());
    assert_eq!(back.compilation_start_time(), summary.compilation_start_time());
    assert_eq!(back.compilation_end_time(), None);
}
