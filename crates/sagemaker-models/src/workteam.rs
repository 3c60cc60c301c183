//! Shapes for the work team operations.

use chrono::{DateTime, Utc};
use sagemaker_types::ShapeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cognito user group whose members label data.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CognitoMemberDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
}

impl CognitoMemberDefinition {
    /// Creates a new `CognitoMemberDefinition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user_pool(&self) -> Option<&str> {
        self.user_pool.as_deref()
    }

    /// Replaces the value of `UserPool`, clearing it when `None`.
    pub fn set_user_pool(&mut self, value: Option<String>) {
        self.user_pool = value;
    }

    /// Sets `UserPool`, returning the record for chaining.
    #[must_use]
    pub fn with_user_pool(mut self, value: impl Into<String>) -> Self {
        self.user_pool = Some(value.into());
        self
    }

    #[must_use]
    pub fn user_group(&self) -> Option<&str> {
        self.user_group.as_deref()
    }

    /// Replaces the value of `UserGroup`, clearing it when `None`.
    pub fn set_user_group(&mut self, value: Option<String>) {
        self.user_group = value;
    }

    /// Sets `UserGroup`, returning the record for chaining.
    #[must_use]
    pub fn with_user_group(mut self, value: impl Into<String>) -> Self {
        self.user_group = Some(value.into());
        self
    }

    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Replaces the value of `ClientId`, clearing it when `None`.
    pub fn set_client_id(&mut self, value: Option<String>) {
        self.client_id = value;
    }

    /// Sets `ClientId`, returning the record for chaining.
    #[must_use]
    pub fn with_client_id(mut self, value: impl Into<String>) -> Self {
        self.client_id = Some(value.into());
        self
    }
}

impl fmt::Display for CognitoMemberDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("UserPool", self.user_pool.as_deref())
            .field("UserGroup", self.user_group.as_deref())
            .field("ClientId", self.client_id.as_deref())
            .finish()
    }
}

/// One group of workers in a work team.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemberDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    cognito_member_definition: Option<CognitoMemberDefinition>,
}

impl MemberDefinition {
    /// Creates a new `MemberDefinition` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cognito_member_definition(&self) -> Option<&CognitoMemberDefinition> {
        self.cognito_member_definition.as_ref()
    }

    /// Replaces the value of `CognitoMemberDefinition`, clearing it when `None`.
    pub fn set_cognito_member_definition(&mut self, value: Option<CognitoMemberDefinition>) {
        self.cognito_member_definition = value;
    }

    /// Sets `CognitoMemberDefinition`, returning the record for chaining.
    #[must_use]
    pub fn with_cognito_member_definition(mut self, value: CognitoMemberDefinition) -> Self {
        self.cognito_member_definition = Some(value);
        self
    }
}

impl fmt::Display for MemberDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CognitoMemberDefinition", self.cognito_member_definition.as_ref())
            .finish()
    }
}

/// Where workers are notified about new work items.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_topic_arn: Option<String>,
}

impl NotificationConfiguration {
    /// Creates a new `NotificationConfiguration` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SNS topic the notifications are published to.
    #[must_use]
    pub fn notification_topic_arn(&self) -> Option<&str> {
        self.notification_topic_arn.as_deref()
    }

    /// Replaces the value of `NotificationTopicArn`, clearing it when `None`.
    pub fn set_notification_topic_arn(&mut self, value: Option<String>) {
        self.notification_topic_arn = value;
    }

    /// Sets `NotificationTopicArn`, returning the record for chaining.
    #[must_use]
    pub fn with_notification_topic_arn(mut self, value: impl Into<String>) -> Self {
        self.notification_topic_arn = Some(value.into());
        self
    }
}

impl fmt::Display for NotificationConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NotificationTopicArn", self.notification_topic_arn.as_deref())
            .finish()
    }
}

/// A team of workers that labels data.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Workteam {
    #[serde(skip_serializing_if = "Option::is_none")]
    workteam_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    member_definitions: Option<Vec<MemberDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workteam_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_listing_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_domain: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    create_date: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    last_updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_configuration: Option<NotificationConfiguration>,
}

impl Workteam {
    /// Creates a new `Workteam` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn workteam_name(&self) -> Option<&str> {
        self.workteam_name.as_deref()
    }

    /// Replaces the value of `WorkteamName`, clearing it when `None`.
    pub fn set_workteam_name(&mut self, value: Option<String>) {
        self.workteam_name = value;
    }

    /// Sets `WorkteamName`, returning the record for chaining.
    #[must_use]
    pub fn with_workteam_name(mut self, value: impl Into<String>) -> Self {
        self.workteam_name = Some(value.into());
        self
    }

    /// Worker groups, in the order they were added.
    #[must_use]
    pub fn member_definitions(&self) -> Option<&[MemberDefinition]> {
        self.member_definitions.as_deref()
    }

    /// Replaces the whole `MemberDefinitions` sequence, clearing it when `None`.
    pub fn set_member_definitions(&mut self, value: Option<Vec<MemberDefinition>>) {
        self.member_definitions = value;
    }

    /// Appends to `MemberDefinitions`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_member_definitions`](Self::set_member_definitions) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_member_definitions(mut self, items: impl IntoIterator<Item = MemberDefinition>) -> Self {
        self.member_definitions.get_or_insert_with(Vec::new).extend(items);
        self
    }

    #[must_use]
    pub fn workteam_arn(&self) -> Option<&str> {
        self.workteam_arn.as_deref()
    }

    /// Replaces the value of `WorkteamArn`, clearing it when `None`.
    pub fn set_workteam_arn(&mut self, value: Option<String>) {
        self.workteam_arn = value;
    }

    /// Sets `WorkteamArn`, returning the record for chaining.
    #[must_use]
    pub fn with_workteam_arn(mut self, value: impl Into<String>) -> Self {
        self.workteam_arn = Some(value.into());
        self
    }

    /// Marketplace listings backed by this team.
    #[must_use]
    pub fn product_listing_ids(&self) -> Option<&[String]> {
        self.product_listing_ids.as_deref()
    }

    /// Replaces the whole `ProductListingIds` sequence, clearing it when `None`.
    pub fn set_product_listing_ids(&mut self, value: Option<Vec<String>>) {
        self.product_listing_ids = value;
    }

    /// Appends to `ProductListingIds`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_product_listing_ids`](Self::set_product_listing_ids) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_product_listing_ids<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.product_listing_ids
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replaces the value of `Description`, clearing it when `None`.
    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    /// Sets `Description`, returning the record for chaining.
    #[must_use]
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    /// Labeling portal the team signs in to.
    #[must_use]
    pub fn sub_domain(&self) -> Option<&str> {
        self.sub_domain.as_deref()
    }

    /// Replaces the value of `SubDomain`, clearing it when `None`.
    pub fn set_sub_domain(&mut self, value: Option<String>) {
        self.sub_domain = value;
    }

    /// Sets `SubDomain`, returning the record for chaining.
    #[must_use]
    pub fn with_sub_domain(mut self, value: impl Into<String>) -> Self {
        self.sub_domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn create_date(&self) -> Option<DateTime<Utc>> {
        self.create_date
    }

    /// Replaces the value of `CreateDate`, clearing it when `None`.
    pub fn set_create_date(&mut self, value: Option<DateTime<Utc>>) {
        self.create_date = value;
    }

    /// Sets `CreateDate`, returning the record for chaining.
    #[must_use]
    pub fn with_create_date(mut self, value: DateTime<Utc>) -> Self {
        self.create_date = Some(value);
        self
    }

    #[must_use]
    pub fn last_updated_date(&self) -> Option<DateTime<Utc>> {
        self.last_updated_date
    }

    /// Replaces the value of `LastUpdatedDate`, clearing it when `None`.
    pub fn set_last_updated_date(&mut self, value: Option<DateTime<Utc>>) {
        self.last_updated_date = value;
    }

    /// Sets `LastUpdatedDate`, returning the record for chaining.
    #[must_use]
    pub fn with_last_updated_date(mut self, value: DateTime<Utc>) -> Self {
        self.last_updated_date = Some(value);
        self
    }

    #[must_use]
    pub fn notification_configuration(&self) -> Option<&NotificationConfiguration> {
        self.notification_configuration.as_ref()
    }

    /// Replaces the value of `NotificationConfiguration`, clearing it when `None`.
    pub fn set_notification_configuration(&mut self, value: Option<NotificationConfiguration>) {
        self.notification_configuration = value;
    }

    /// Sets `NotificationConfiguration`, returning the record for chaining.
    #[must_use]
    pub fn with_notification_configuration(mut self, value: NotificationConfiguration) -> Self {
        self.notification_configuration = Some(value);
        self
    }
}

impl fmt::Display for Workteam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("WorkteamName", self.workteam_name.as_deref())
            .field_list("MemberDefinitions", self.member_definitions.as_deref())
            .field("WorkteamArn", self.workteam_arn.as_deref())
            .field_list("ProductListingIds", self.product_listing_ids.as_deref())
            .field("Description", self.description.as_deref())
            .field("SubDomain", self.sub_domain.as_deref())
            .field("CreateDate", self.create_date.as_ref())
            .field("LastUpdatedDate", self.last_updated_date.as_ref())
            .field("NotificationConfiguration", self.notification_configuration.as_ref())
            .finish()
    }
}

/// Input for the ListWorkteams operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListWorkteamsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListWorkteamsRequest {
    /// Creates a new `ListWorkteamsRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the `ListWorkteamsSortByOptions` values.
    #[must_use]
    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    /// Replaces the value of `SortBy`, clearing it when `None`.
    pub fn set_sort_by(&mut self, value: Option<String>) {
        self.sort_by = value;
    }

    /// Sets `SortBy`, returning the record for chaining.
    #[must_use]
    pub fn with_sort_by(mut self, value: impl Into<String>) -> Self {
        self.sort_by = Some(value.into());
        self
    }

    /// One of the `SortOrder` values.
    #[must_use]
    pub fn sort_order(&self) -> Option<&str> {
        self.sort_order.as_deref()
    }

    /// Replaces the value of `SortOrder`, clearing it when `None`.
    pub fn set_sort_order(&mut self, value: Option<String>) {
        self.sort_order = value;
    }

    /// Sets `SortOrder`, returning the record for chaining.
    #[must_use]
    pub fn with_sort_order(mut self, value: impl Into<String>) -> Self {
        self.sort_order = Some(value.into());
        self
    }

    #[must_use]
    pub fn name_contains(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }

    /// Replaces the value of `NameContains`, clearing it when `None`.
    pub fn set_name_contains(&mut self, value: Option<String>) {
        self.name_contains = value;
    }

    /// Sets `NameContains`, returning the record for chaining.
    #[must_use]
    pub fn with_name_contains(mut self, value: impl Into<String>) -> Self {
        self.name_contains = Some(value.into());
        self
    }

    /// Continuation token from a previous page.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Replaces the value of `NextToken`, clearing it when `None`.
    pub fn set_next_token(&mut self, value: Option<String>) {
        self.next_token = value;
    }

    /// Sets `NextToken`, returning the record for chaining.
    #[must_use]
    pub fn with_next_token(mut self, value: impl Into<String>) -> Self {
        self.next_token = Some(value.into());
        self
    }

    /// Page size, between 1 and 100.
    #[must_use]
    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    /// Replaces the value of `MaxResults`, clearing it when `None`.
    pub fn set_max_results(&mut self, value: Option<i32>) {
        self.max_results = value;
    }

    /// Sets `MaxResults`, returning the record for chaining.
    #[must_use]
    pub fn with_max_results(mut self, value: i32) -> Self {
        self.max_results = Some(value);
        self
    }
}

impl fmt::Display for ListWorkteamsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("SortBy", self.sort_by.as_deref())
            .field("SortOrder", self.sort_order.as_deref())
            .field("NameContains", self.name_contains.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .field("MaxResults", self.max_results.as_ref())
            .finish()
    }
}

/// Output of the ListWorkteams operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListWorkteamsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    workteams: Option<Vec<Workteam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListWorkteamsResult {
    /// Creates a new `ListWorkteamsResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn workteams(&self) -> Option<&[Workteam]> {
        self.workteams.as_deref()
    }

    /// Replaces the whole `Workteams` sequence, clearing it when `None`.
    pub fn set_workteams(&mut self, value: Option<Vec<Workteam>>) {
        self.workteams = value;
    }

    /// Appends to `Workteams`, initializing the sequence if absent.
    ///
    /// Repeated calls accumulate; use [`set_workteams`](Self::set_workteams) to
    /// replace the sequence wholesale.
    #[must_use]
    pub fn with_workteams(mut self, items: impl IntoIterator<Item = Workteam>) -> Self {
        self.workteams.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// Present when more results are available.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Replaces the value of `NextToken`, clearing it when `None`.
    pub fn set_next_token(&mut self, value: Option<String>) {
        self.next_token = value;
    }

    /// Sets `NextToken`, returning the record for chaining.
    #[must_use]
    pub fn with_next_token(mut self, value: impl Into<String>) -> Self {
        self.next_token = Some(value.into());
        self
    }
}

impl fmt::Display for ListWorkteamsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field_list("Workteams", self.workteams.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .finish()
    }
}

/// Input for the DescribeWorkteam operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeWorkteamRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    workteam_name: Option<String>,
}

impl DescribeWorkteamRequest {
    /// Creates a new `DescribeWorkteamRequest` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn workteam_name(&self) -> Option<&str> {
        self.workteam_name.as_deref()
    }

    /// Replaces the value of `WorkteamName`, clearing it when `None`.
    pub fn set_workteam_name(&mut self, value: Option<String>) {
        self.workteam_name = value;
    }

    /// Sets `WorkteamName`, returning the record for chaining.
    #[must_use]
    pub fn with_workteam_name(mut self, value: impl Into<String>) -> Self {
        self.workteam_name = Some(value.into());
        self
    }
}

impl fmt::Display for DescribeWorkteamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("WorkteamName", self.workteam_name.as_deref())
            .finish()
    }
}

/// Output of the DescribeWorkteam operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeWorkteamResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    workteam: Option<Workteam>,
}

impl DescribeWorkteamResult {
    /// Creates a new `DescribeWorkteamResult` with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn workteam(&self) -> Option<&Workteam> {
        self.workteam.as_ref()
    }

    /// Replaces the value of `Workteam`, clearing it when `None`.
    pub fn set_workteam(&mut self, value: Option<Workteam>) {
        self.workteam = value;
    }

    /// Sets `Workteam`, returning the record for chaining.
    #[must_use]
    pub fn with_workteam(mut self, value: Workteam) -> Self {
        self.workteam = Some(value);
        self
    }
}

impl fmt::Display for DescribeWorkteamResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Workteam", self.workteam.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagemaker_types::{ListWorkteamsSortByOptions, SortOrder};

    fn member(group: &str) -> MemberDefinition {
        MemberDefinition::new().with_cognito_member_definition(
            CognitoMemberDefinition::new()
                .with_user_pool("us-east-1_Example")
                .with_user_group(group)
                .with_client_id("abc123"),
        )
    }

    #[test]
    fn test_member_definitions_keep_insertion_order() {
        let team = Workteam::new()
            .with_workteam_name("labelers")
            .with_member_definitions([member("annotators")])
            .with_member_definitions([member("reviewers")]);
        let members = team.member_definitions().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(
            members[1].cognito_member_definition().unwrap().user_group(),
            Some("reviewers"),
        );
    }

    #[test]
    fn test_workteam_json_uses_service_casing() {
        let team = Workteam::new()
            .with_workteam_name("labelers")
            .with_sub_domain("labelers.labeling.us-east-1.sagemaker.aws");
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["WorkteamName"], "labelers");
        assert_eq!(json["SubDomain"], "labelers.labeling.us-east-1.sagemaker.aws");
        assert!(json.get("MemberDefinitions").is_none());
    }

    #[test]
    fn test_list_request_accepts_typed_sort_options() {
        let request = ListWorkteamsRequest::new()
            .with_sort_by(ListWorkteamsSortByOptions::CreateDate)
            .with_sort_order(SortOrder::Descending);
        assert_eq!(request.sort_by(), Some("CreateDate"));
        assert_eq!(request.sort_order(), Some("Descending"));
    }

    #[test]
    fn test_describe_result_wraps_the_team() {
        let result = DescribeWorkteamResult::new()
            .with_workteam(Workteam::new().with_workteam_name("labelers"));
        assert_eq!(result.workteam().unwrap().workteam_name(), Some("labelers"));
    }
}
