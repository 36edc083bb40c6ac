//! Project Submission
//!
//! Form buffer and its client-side validation.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::project::ProjectStatus;

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const CREATOR_MAX_LEN: usize = 50;

/// Submission form fields, posted as-is to the API route
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub title: String,
    pub project_url: String,
    #[serde(default)]
    pub repo_url: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub creator: String,
    #[serde(default)]
    pub creator_url: String,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl FormData {
    /// Update a field by its input `name` attribute. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "projectUrl" => self.project_url = value,
            "repoUrl" => self.repo_url = value,
            "description" => self.description = value,
            "imageUrl" => self.image_url = value,
            "creator" => self.creator = value,
            "creatorUrl" => self.creator_url = value,
            "status" => {
                if let Some(status) = ProjectStatus::parse(&value) {
                    self.status = status;
                }
            }
            _ => log::warn!("Ignoring unknown form field '{}'", name),
        }
    }

    /// All validation messages, in form order. Empty means the form can be sent.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Project name is required".to_string());
        }
        if self.project_url.trim().is_empty() {
            errors.push("Project link is required".to_string());
        }
        if self.description.trim().is_empty() {
            errors.push("Project description is required".to_string());
        }
        if self.creator.trim().is_empty() {
            errors.push("Creator name is required".to_string());
        }

        check_length(&mut errors, "Project name", &self.title, TITLE_MAX_LEN);
        check_length(&mut errors, "Project description", &self.description, DESCRIPTION_MAX_LEN);
        check_length(&mut errors, "Creator name", &self.creator, CREATOR_MAX_LEN);

        if !is_valid_url(&self.project_url) {
            errors.push("Project link must be a valid URL".to_string());
        }
        if !self.repo_url.trim().is_empty() && !is_valid_url(&self.repo_url) {
            errors.push("Repository link must be a valid URL".to_string());
        }
        if !self.creator_url.trim().is_empty() && !is_valid_url(&self.creator_url) {
            errors.push("Creator GitHub link must be a valid URL".to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn check_length(errors: &mut Vec<String>, label: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(format!("{} must be at most {} characters", label, max));
    }
}

fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Outcome of the last submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success(SubmitReceipt),
    Error(String),
}

/// Success body of the submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    #[serde(default)]
    pub commit_url: Option<String>,
}
