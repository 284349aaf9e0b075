use validator::ValidateEmail;

use crate::config::SubmissionSchema;
use crate::constants::MAX_DESCRIPTION_WORDS;
use crate::error::AppError;
use crate::models::{NewSubmission, SubmissionForm};

impl SubmissionSchema {
    /// Wire names of the fields that must be present and non-empty
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            SubmissionSchema::Minimal => &["teamName", "teamLeadName", "email", "contact"],
            SubmissionSchema::Extended => &[
                "teamName",
                "teamLeadName",
                "teamLeadEmail",
                "teamLeadContact",
                "projectTitle",
                "projectDescription",
            ],
        }
    }
}

/// Number of whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize(form: SubmissionForm) -> SubmissionForm {
    SubmissionForm {
        team_name: clean(form.team_name),
        team_lead_name: clean(form.team_lead_name),
        email: clean(form.email),
        contact: clean(form.contact),
        team_lead_email: clean(form.team_lead_email),
        team_lead_contact: clean(form.team_lead_contact),
        project_title: clean(form.project_title),
        project_description: clean(form.project_description),
        git_link: clean(form.git_link),
        project_url: clean(form.project_url),
        project_logo_url: clean(form.project_logo_url),
        project_banner_url: clean(form.project_banner_url),
        video_demo_link: clean(form.video_demo_link),
        other_details: clean(form.other_details),
    }
}

fn field<'a>(form: &'a SubmissionForm, name: &str) -> Option<&'a str> {
    let value = match name {
        "teamName" => &form.team_name,
        "teamLeadName" => &form.team_lead_name,
        "email" => &form.email,
        "contact" => &form.contact,
        "teamLeadEmail" => &form.team_lead_email,
        "teamLeadContact" => &form.team_lead_contact,
        "projectTitle" => &form.project_title,
        "projectDescription" => &form.project_description,
        _ => return None,
    };
    value.as_deref()
}

/// Validate a submission against the configured required-field set.
///
/// Checks run in order: required fields, email shape, description word count.
/// Returns the normalized submission (trimmed, blank optionals dropped).
pub fn validate_submission(
    form: SubmissionForm,
    schema: SubmissionSchema,
) -> Result<NewSubmission, AppError> {
    let form = normalize(form);

    let missing: Vec<&str> = schema
        .required_fields()
        .iter()
        .copied()
        .filter(|name| field(&form, name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    for (name, value) in [("email", &form.email), ("teamLeadEmail", &form.team_lead_email)] {
        if let Some(address) = value {
            if !address.validate_email() {
                return Err(AppError::InvalidInput(format!(
                    "Invalid email address in {}",
                    name
                )));
            }
        }
    }

    if let Some(description) = &form.project_description {
        let words = count_words(description);
        if words > MAX_DESCRIPTION_WORDS {
            return Err(AppError::InvalidInput(format!(
                "Project description must be {} words or less (currently {} words)",
                MAX_DESCRIPTION_WORDS, words
            )));
        }
    }

    // Both variants require team and lead names, checked above.
    Ok(NewSubmission {
        team_name: form.team_name.unwrap_or_default(),
        team_lead_name: form.team_lead_name.unwrap_or_default(),
        email: form.email,
        contact: form.contact,
        team_lead_email: form.team_lead_email,
        team_lead_contact: form.team_lead_contact,
        project_title: form.project_title,
        project_description: form.project_description,
        git_link: form.git_link,
        project_url: form.project_url,
        project_logo_url: form.project_logo_url,
        project_banner_url: form.project_banner_url,
        video_demo_link: form.video_demo_link,
        other_details: form.other_details,
    })
}
