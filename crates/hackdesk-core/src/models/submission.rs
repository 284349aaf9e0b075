use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Submission payload as sent by the form. Every field is optional at this
/// stage; required-field rules are applied by `validation::validate_submission`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionForm {
    pub team_name: Option<String>,
    pub team_lead_name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub team_lead_email: Option<String>,
    pub team_lead_contact: Option<String>,
    pub project_title: Option<String>,
    pub project_description: Option<String>,
    pub git_link: Option<String>,
    pub project_url: Option<String>,
    pub project_logo_url: Option<String>,
    pub project_banner_url: Option<String>,
    pub video_demo_link: Option<String>,
    pub other_details: Option<String>,
}

/// Validated, normalized submission ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub team_name: String,
    pub team_lead_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_lead_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_lead_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_banner_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_details: Option<String>,
}

/// One team's persisted hackathon entry
///
/// `id` and `created_at` are assigned by the store at write time and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: String,
    #[serde(flatten)]
    pub submission: NewSubmission,
    pub created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn new(id: String, submission: NewSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            submission,
            created_at,
        }
    }
}
