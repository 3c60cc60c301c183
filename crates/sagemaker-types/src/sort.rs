//! Sort keys and sort order for the paginated listing operations.

use crate::error::SageMakerError;
use std::fmt;
use std::str::FromStr;

/// Order in which listing results are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// The wire value for this order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SortOrder> for String {
    fn from(value: SortOrder) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for SortOrder {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ascending" => Ok(Self::Ascending),
            "Descending" => Ok(Self::Descending),
            other => Err(SageMakerError::unknown_enum_value("SortOrder", other)),
        }
    }
}

/// Sort key for `ListCandidatesForAutoMLJob`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSortBy {
    CreationTime,
    Status,
    FinalObjectiveMetricValue,
}

impl CandidateSortBy {
    /// The wire value for this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreationTime => "CreationTime",
            Self::Status => "Status",
            Self::FinalObjectiveMetricValue => "FinalObjectiveMetricValue",
        }
    }
}

impl fmt::Display for CandidateSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CandidateSortBy> for String {
    fn from(value: CandidateSortBy) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CandidateSortBy {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CreationTime" => Ok(Self::CreationTime),
            "Status" => Ok(Self::Status),
            "FinalObjectiveMetricValue" => Ok(Self::FinalObjectiveMetricValue),
            other => Err(SageMakerError::unknown_enum_value("CandidateSortBy", other)),
        }
    }
}

/// Sort key for `ListCompilationJobs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListCompilationJobsSortBy {
    Name,
    CreationTime,
    Status,
}

impl ListCompilationJobsSortBy {
    /// The wire value for this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CreationTime => "CreationTime",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for ListCompilationJobsSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ListCompilationJobsSortBy> for String {
    fn from(value: ListCompilationJobsSortBy) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ListCompilationJobsSortBy {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Name" => Ok(Self::Name),
            "CreationTime" => Ok(Self::CreationTime),
            "Status" => Ok(Self::Status),
            other => Err(SageMakerError::unknown_enum_value("ListCompilationJobsSortBy", other)),
        }
    }
}

/// Sort key for `ListMonitoringSchedules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitoringScheduleSortKey {
    Name,
    CreationTime,
    Status,
}

impl MonitoringScheduleSortKey {
    /// The wire value for this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CreationTime => "CreationTime",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for MonitoringScheduleSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MonitoringScheduleSortKey> for String {
    fn from(value: MonitoringScheduleSortKey) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for MonitoringScheduleSortKey {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Name" => Ok(Self::Name),
            "CreationTime" => Ok(Self::CreationTime),
            "Status" => Ok(Self::Status),
            other => Err(SageMakerError::unknown_enum_value("MonitoringScheduleSortKey", other)),
        }
    }
}

/// Sort key for `ListHyperParameterTuningJobs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyperParameterTuningJobSortByOptions {
    Name,
    Status,
    CreationTime,
}

impl HyperParameterTuningJobSortByOptions {
    /// The wire value for this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Status => "Status",
            Self::CreationTime => "CreationTime",
        }
    }
}

impl fmt::Display for HyperParameterTuningJobSortByOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HyperParameterTuningJobSortByOptions> for String {
    fn from(value: HyperParameterTuningJobSortByOptions) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for HyperParameterTuningJobSortByOptions {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Name" => Ok(Self::Name),
            "Status" => Ok(Self::Status),
            "CreationTime" => Ok(Self::CreationTime),
            other => Err(SageMakerError::unknown_enum_value(
                "HyperParameterTuningJobSortByOptions",
                other,
            )),
        }
    }
}

/// Sort key for `ListWorkteams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListWorkteamsSortByOptions {
    Name,
    CreateDate,
}

impl ListWorkteamsSortByOptions {
    /// The wire value for this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CreateDate => "CreateDate",
        }
    }
}

impl fmt::Display for ListWorkteamsSortByOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ListWorkteamsSortByOptions> for String {
    fn from(value: ListWorkteamsSortByOptions) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ListWorkteamsSortByOptions {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Name" => Ok(Self::Name),
            "CreateDate" => Ok(Self::CreateDate),
            other => Err(SageMakerError::unknown_enum_value("ListWorkteamsSortByOptions", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_round_trip() {
        assert_eq!("Ascending".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!(String::from(SortOrder::Descending), "Descending");
    }

    #[test]
    fn test_candidate_sort_by_metric_value() {
        assert_eq!(
            "FinalObjectiveMetricValue".parse::<CandidateSortBy>().unwrap(),
            CandidateSortBy::FinalObjectiveMetricValue
        );
    }

    #[test]
    fn test_workteam_sort_rejects_unknown_key() {
        assert!("LastModifiedTime".parse::<ListWorkteamsSortByOptions>().is_err());
    }
}
