//! Project Entity
//!
//! A hackathon submission as listed in the static project data.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::DataError;

/// Lifecycle stage reported by the submitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Deployed and operational
    #[default]
    Live,
    /// Work in progress
    Development,
    /// Idea or prototype
    Concept,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [ProjectStatus::Live, ProjectStatus::Development, ProjectStatus::Concept];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "live",
            ProjectStatus::Development => "development",
            ProjectStatus::Concept => "concept",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "live" => Some(ProjectStatus::Live),
            "development" => Some(ProjectStatus::Development),
            "concept" => Some(ProjectStatus::Concept),
            _ => None,
        }
    }

    /// Terminal-style badge shown on the card header
    pub fn symbol(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "[ONLINE]",
            ProjectStatus::Development => "[DEV]",
            ProjectStatus::Concept => "[IDEA]",
        }
    }

    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

/// A showcased project (matches `data/projects.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub project_url: String,
    #[serde(default)]
    pub repo_url: String,
    pub status: ProjectStatus,
    pub creator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_url: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date_added: DateTime<Utc>,
}

impl Project {
    /// First character of every space-separated word in the title.
    pub fn initials(&self) -> String {
        self.title
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Whether the card should render the image instead of the generated tile.
    pub fn has_thumbnail(&self) -> bool {
        !self.image_url.is_empty() && !self.image_url.contains("placeholder")
    }

    pub fn creator_link(&self) -> Option<&str> {
        self.creator_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Parse `dateAdded`: RFC 3339, a naive timestamp, or a bare date.
///
/// Naive timestamps and bare dates are read as UTC, never the viewer's local
/// zone, so "newest first" ordering is the same for every visitor.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid dateAdded '{}'", raw)))
}

/// Parse the static project list. Ids must be unique.
pub fn load_projects(json: &str) -> Result<Vec<Project>, DataError> {
    let projects: Vec<Project> = serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))?;

    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.id.as_str()) {
            return Err(DataError::DuplicateId(project.id.clone()));
        }
    }

    log::debug!("Loaded {} projects", projects.len());
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": "1",
            "title": "Vibe Todo App",
            "description": "Todos on chain",
            "imageUrl": "/placeholder.png",
            "projectUrl": "https://todo.example.com",
            "repoUrl": "https://github.com/example/todo",
            "status": "live",
            "creator": "@alice",
            "dateAdded": "2025-07-24"
        },
        {
            "id": "2",
            "title": "Move Playground",
            "description": "Try Move in the browser",
            "imageUrl": "https://raw.githubusercontent.com/example/shot.png",
            "projectUrl": "https://play.example.com",
            "repoUrl": "",
            "status": "development",
            "creator": "Bob",
            "creatorUrl": "https://github.com/bob",
            "dateAdded": "2025-07-28T17:30:00.000Z"
        }
    ]"#;

    #[test]
    fn test_load_projects() {
        let projects = load_projects(SAMPLE).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].status, ProjectStatus::Live);
        assert_eq!(projects[1].creator_link(), Some("https://github.com/bob"));
        assert!(projects[0].date_added < projects[1].date_added);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id":"1","title":"A","description":"","projectUrl":"https://a","status":"live","creator":"x","dateAdded":"2025-07-24"},
            {"id":"1","title":"B","description":"","projectUrl":"https://b","status":"concept","creator":"y","dateAdded":"2025-07-25"}
        ]"#;
        assert_eq!(load_projects(json), Err(DataError::DuplicateId("1".into())));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let json = r#"[{"id":"1","title":"A","description":"","projectUrl":"https://a","status":"live","creator":"x","dateAdded":"yesterday"}]"#;
        assert!(matches!(load_projects(json), Err(DataError::Parse(_))));
    }

    #[test]
    fn test_card_helpers() {
        let projects = load_projects(SAMPLE).unwrap();
        assert_eq!(projects[0].initials(), "VTA");
        assert!(!projects[0].has_thumbnail());
        assert!(projects[1].has_thumbnail());
        assert_eq!(projects[0].creator_link(), None);
        assert_eq!(ProjectStatus::Development.symbol(), "[DEV]");
        assert_eq!(ProjectStatus::Concept.label(), "CONCEPT");
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2025-07-24").is_some());
        assert!(parse_date("2025-07-24T10:00:00").is_some());
        assert!(parse_date("2025-07-24T10:00:00+02:00").is_some());
        assert!(parse_date("07/24/2025").is_none());
    }

    #[test]
    fn test_naive_timestamps_read_as_utc() {
        let naive = parse_date("2025-07-24T10:00:00").unwrap();
        assert_eq!(naive, parse_date("2025-07-24T10:00:00Z").unwrap());
        assert_eq!(parse_date("2025-07-24").unwrap(), parse_date("2025-07-24T00:00:00Z").unwrap());
        // an explicit offset still wins
        assert!(parse_date("2025-07-24T10:00:00+02:00").unwrap() < naive);
    }
}
