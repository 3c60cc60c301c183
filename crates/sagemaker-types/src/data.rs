//! Enumerations describing how job input and output data is handled.

use crate::error::SageMakerError;
use std::fmt;
use std::str::FromStr;

/// Which source batch-transform output is joined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinSource {
    Input,
    None,
}

impl JoinSource {
    /// The wire value for this join source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::None => "None",
        }
    }
}

impl fmt::Display for JoinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<JoinSource> for String {
    fn from(value: JoinSource) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for JoinSource {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Input" => Ok(Self::Input),
            "None" => Ok(Self::None),
            other => Err(SageMakerError::unknown_enum_value("JoinSource", other)),
        }
    }
}

/// Number of records a transform request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchStrategy {
    MultiRecord,
    SingleRecord,
}

impl BatchStrategy {
    /// The wire value for this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultiRecord => "MultiRecord",
            Self::SingleRecord => "SingleRecord",
        }
    }
}

impl fmt::Display for BatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BatchStrategy> for String {
    fn from(value: BatchStrategy) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for BatchStrategy {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MultiRecord" => Ok(Self::MultiRecord),
            "SingleRecord" => Ok(Self::SingleRecord),
            other => Err(SageMakerError::unknown_enum_value("BatchStrategy", other)),
        }
    }
}

/// Compression applied to channel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionType {
    None,
    Gzip,
}

impl CompressionType {
    /// The wire value for this compression type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Gzip => "Gzip",
        }
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CompressionType> for String {
    fn from(value: CompressionType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CompressionType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Gzip" => Ok(Self::Gzip),
            other => Err(SageMakerError::unknown_enum_value("CompressionType", other)),
        }
    }
}

/// How transform input objects are split into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitType {
    None,
    Line,
    RecordIo,
    TfRecord,
}

impl SplitType {
    /// The wire value for this split type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Line => "Line",
            Self::RecordIo => "RecordIO",
            Self::TfRecord => "TFRecord",
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SplitType> for String {
    fn from(value: SplitType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for SplitType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Line" => Ok(Self::Line),
            "RecordIO" => Ok(Self::RecordIo),
            "TFRecord" => Ok(Self::TfRecord),
            other => Err(SageMakerError::unknown_enum_value("SplitType", other)),
        }
    }
}

/// How transform output records are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyType {
    None,
    Line,
}

impl AssemblyType {
    /// The wire value for this assembly type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Line => "Line",
        }
    }
}

impl fmt::Display for AssemblyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AssemblyType> for String {
    fn from(value: AssemblyType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AssemblyType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Line" => Ok(Self::Line),
            other => Err(SageMakerError::unknown_enum_value("AssemblyType", other)),
        }
    }
}

/// Layout of transform input data in S3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3DataType {
    ManifestFile,
    S3Prefix,
    AugmentedManifestFile,
}

impl S3DataType {
    /// The wire value for this data type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ManifestFile => "ManifestFile",
            Self::S3Prefix => "S3Prefix",
            Self::AugmentedManifestFile => "AugmentedManifestFile",
        }
    }
}

impl fmt::Display for S3DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<S3DataType> for String {
    fn from(value: S3DataType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for S3DataType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ManifestFile" => Ok(Self::ManifestFile),
            "S3Prefix" => Ok(Self::S3Prefix),
            "AugmentedManifestFile" => Ok(Self::AugmentedManifestFile),
            other => Err(SageMakerError::unknown_enum_value("S3DataType", other)),
        }
    }
}

/// Layout of processing input data in S3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingS3DataType {
    ManifestFile,
    S3Prefix,
}

impl ProcessingS3DataType {
    /// The wire value for this data type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ManifestFile => "ManifestFile",
            Self::S3Prefix => "S3Prefix",
        }
    }
}

impl fmt::Display for ProcessingS3DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessingS3DataType> for String {
    fn from(value: ProcessingS3DataType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProcessingS3DataType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ManifestFile" => Ok(Self::ManifestFile),
            "S3Prefix" => Ok(Self::S3Prefix),
            other => Err(SageMakerError::unknown_enum_value("ProcessingS3DataType", other)),
        }
    }
}

/// Whether processing input is streamed or copied to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingS3InputMode {
    Pipe,
    File,
}

impl ProcessingS3InputMode {
    /// The wire value for this input mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pipe => "Pipe",
            Self::File => "File",
        }
    }
}

impl fmt::Display for ProcessingS3InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessingS3InputMode> for String {
    fn from(value: ProcessingS3InputMode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProcessingS3InputMode {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pipe" => Ok(Self::Pipe),
            "File" => Ok(Self::File),
            other => Err(SageMakerError::unknown_enum_value("ProcessingS3InputMode", other)),
        }
    }
}

/// How processing input is distributed across cluster instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingS3DataDistributionType {
    FullyReplicated,
    ShardedByS3Key,
}

impl ProcessingS3DataDistributionType {
    /// The wire value for this distribution type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullyReplicated => "FullyReplicated",
            Self::ShardedByS3Key => "ShardedByS3Key",
        }
    }
}

impl fmt::Display for ProcessingS3DataDistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessingS3DataDistributionType> for String {
    fn from(value: ProcessingS3DataDistributionType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProcessingS3DataDistributionType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FullyReplicated" => Ok(Self::FullyReplicated),
            "ShardedByS3Key" => Ok(Self::ShardedByS3Key),
            other => Err(SageMakerError::unknown_enum_value(
                "ProcessingS3DataDistributionType",
                other,
            )),
        }
    }
}

/// Compression applied to processing input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingS3CompressionType {
    None,
    Gzip,
}

impl ProcessingS3CompressionType {
    /// The wire value for this compression type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Gzip => "Gzip",
        }
    }
}

impl fmt::Display for ProcessingS3CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessingS3CompressionType> for String {
    fn from(value: ProcessingS3CompressionType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProcessingS3CompressionType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Gzip" => Ok(Self::Gzip),
            other => {
                Err(SageMakerError::unknown_enum_value("ProcessingS3CompressionType", other))
            }
        }
    }
}

/// When processing output is uploaded to S3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingS3UploadMode {
    Continuous,
    EndOfJob,
}

impl ProcessingS3UploadMode {
    /// The wire value for this upload mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continuous => "Continuous",
            Self::EndOfJob => "EndOfJob",
        }
    }
}

impl fmt::Display for ProcessingS3UploadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessingS3UploadMode> for String {
    fn from(value: ProcessingS3UploadMode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProcessingS3UploadMode {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Continuous" => Ok(Self::Continuous),
            "EndOfJob" => Ok(Self::EndOfJob),
            other => Err(SageMakerError::unknown_enum_value("ProcessingS3UploadMode", other)),
        }
    }
}

/// Whether a hosting container serves one model or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerMode {
    SingleModel,
    MultiModel,
}

impl ContainerMode {
    /// The wire value for this container mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleModel => "SingleModel",
            Self::MultiModel => "MultiModel",
        }
    }
}

impl fmt::Display for ContainerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContainerMode> for String {
    fn from(value: ContainerMode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ContainerMode {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SingleModel" => Ok(Self::SingleModel),
            "MultiModel" => Ok(Self::MultiModel),
            other => Err(SageMakerError::unknown_enum_value("ContainerMode", other)),
        }
    }
}

/// How training data is made available to the algorithm container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainingInputMode {
    Pipe,
    File,
}

impl TrainingInputMode {
    /// The wire value for this input mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pipe => "Pipe",
            Self::File => "File",
        }
    }
}

impl fmt::Display for TrainingInputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TrainingInputMode> for String {
    fn from(value: TrainingInputMode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for TrainingInputMode {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pipe" => Ok(Self::Pipe),
            "File" => Ok(Self::File),
            other => Err(SageMakerError::unknown_enum_value("TrainingInputMode", other)),
        }
    }
}

/// Whether training data records are wrapped in RecordIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordWrapper {
    None,
    RecordIo,
}

impl RecordWrapper {
    /// The wire value for this record wrapper.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::RecordIo => "RecordIO",
        }
    }
}

impl fmt::Display for RecordWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RecordWrapper> for String {
    fn from(value: RecordWrapper) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for RecordWrapper {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "RecordIO" => Ok(Self::RecordIo),
            other => Err(SageMakerError::unknown_enum_value("RecordWrapper", other)),
        }
    }
}

/// How S3 training data is distributed across training instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3DataDistribution {
    FullyReplicated,
    ShardedByS3Key,
}

impl S3DataDistribution {
    /// The wire value for this distribution strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullyReplicated => "FullyReplicated",
            Self::ShardedByS3Key => "ShardedByS3Key",
        }
    }
}

impl fmt::Display for S3DataDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<S3DataDistribution> for String {
    fn from(value: S3DataDistribution) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for S3DataDistribution {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FullyReplicated" => Ok(Self::FullyReplicated),
            "ShardedByS3Key" => Ok(Self::ShardedByS3Key),
            other => Err(SageMakerError::unknown_enum_value("S3DataDistribution", other)),
        }
    }
}

/// Access mode a training job mounts a file system with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSystemAccessMode {
    ReadWrite,
    ReadOnly,
}

impl FileSystemAccessMode {
    /// The wire value for this access mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadWrite => "rw",
            Self::ReadOnly => "ro",
        }
    }
}

impl fmt::Display for FileSystemAccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FileSystemAccessMode> for String {
    fn from(value: FileSystemAccessMode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for FileSystemAccessMode {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rw" => Ok(Self::ReadWrite),
            "ro" => Ok(Self::ReadOnly),
            other => Err(SageMakerError::unknown_enum_value("FileSystemAccessMode", other)),
        }
    }
}

/// Kind of file system a training channel reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSystemType {
    Efs,
    FsxLustre,
}

impl FileSystemType {
    /// The wire value for this file system type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Efs => "EFS",
            Self::FsxLustre => "FSxLustre",
        }
    }
}

impl fmt::Display for FileSystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FileSystemType> for String {
    fn from(value: FileSystemType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for FileSystemType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EFS" => Ok(Self::Efs),
            "FSxLustre" => Ok(Self::FsxLustre),
            other => Err(SageMakerError::unknown_enum_value("FileSystemType", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_source_round_trip() {
        assert_eq!("Input".parse::<JoinSource>().unwrap(), JoinSource::Input);
        assert_eq!(String::from(JoinSource::None), "None");
    }

    #[test]
    fn test_split_type_wire_casing() {
        assert_eq!(SplitType::RecordIo.as_str(), "RecordIO");
        assert_eq!(SplitType::TfRecord.as_str(), "TFRecord");
        assert_eq!("TFRecord".parse::<SplitType>().unwrap(), SplitType::TfRecord);
    }

    #[test]
    fn test_upload_mode_rejects_unknown() {
        assert!("Hourly".parse::<ProcessingS3UploadMode>().is_err());
    }

    #[test]
    fn test_record_wrapper_wire_values() {
        assert_eq!(RecordWrapper::RecordIo.as_str(), "RecordIO");
        assert_eq!("None".parse::<RecordWrapper>().unwrap(), RecordWrapper::None);
    }

    #[test]
    fn test_file_system_access_mode_is_lower_case_on_the_wire() {
        assert_eq!(FileSystemAccessMode::ReadWrite.as_str(), "rw");
        assert_eq!("ro".parse::<FileSystemAccessMode>().unwrap(), FileSystemAccessMode::ReadOnly);
    }

    #[test]
    fn test_s3_data_distribution_round_trip() {
        assert_eq!(
            "ShardedByS3Key".parse::<S3DataDistribution>().unwrap(),
            S3DataDistribution::ShardedByS3Key,
        );
        assert_eq!(String::from(TrainingInputMode::Pipe), "Pipe");
    }
}
