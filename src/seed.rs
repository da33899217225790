//! Static seed document loaded into the stores at startup.
//!
//! The document may use the legacy project shape (a single `category`
//! string, `featured` as `"true"`/`"false"`, the same project repeated once
//! per category). Repeated records are folded into one project carrying
//! every category they were listed under.

use std::path::Path;

use serde::{de, Deserialize, Deserializer};
use tracing::{debug, info, warn};

use crate::profile::application::use_cases::create_profile::CreateProfileError;
use crate::profile::domain::Profile;
use crate::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::project::application::ports::outgoing::CreateProjectData;
use crate::project::domain::{Category, ProjectId, SearchLabels};
use crate::AppState;

pub const EMBEDDED_SEED: &str = include_str!("../seed/portfolio.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to seed project `{title}`: {source}")]
    Project {
        title: String,
        #[source]
        source: CreateProjectError,
    },

    #[error("failed to seed profile: {0}")]
    Profile(#[source] CreateProfileError),
}

//
// ──────────────────────────────────────────────────────────
// Document model
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub credits: SearchLabels,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub projects: Vec<SeedProject>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProject {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Legacy single-category field
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub featured: bool,
}

/// Accepts a JSON bool or the strings `"true"` / `"false"` (any case).
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(de::Error::custom(format!(
                "invalid featured flag `{other}`, expected true or false"
            ))),
        },
    }
}

fn link(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SeedProject {
    /// Everything except id, categories and the featured flag.
    fn same_content(&self, other: &SeedProject) -> bool {
        self.title.trim() == other.title.trim()
            && self.description == other.description
            && self.details == other.details
            && link(&self.image) == link(&other.image)
            && link(&self.video) == link(&other.video)
            && self.technologies == other.technologies
            && link(&self.live_url) == link(&other.live_url)
            && link(&self.github_url) == link(&other.github_url)
    }

    fn parsed_categories(&self) -> Vec<Category> {
        self.category
            .iter()
            .chain(self.categories.iter())
            .filter_map(|raw| match raw.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    warn!("Seed project `{}`: {}; ignoring", self.title, e);
                    None
                }
            })
            .collect()
    }

    fn into_create_data(self) -> CreateProjectData {
        let categories = self.parsed_categories();
        CreateProjectData {
            id: self.id.map(ProjectId::from),
            title: self.title,
            description: self.description,
            details: self.details,
            image: self.image,
            video: self.video,
            technologies: self.technologies,
            categories,
            live_url: self.live_url,
            github_url: self.github_url,
            featured: self.featured,
        }
    }
}

/// Folds records with identical content into one, keeping the first id and
/// the order of first appearance. Categories are unioned, `featured` is OR'd.
pub fn consolidate(projects: Vec<SeedProject>) -> Vec<CreateProjectData> {
    let mut firsts: Vec<SeedProject> = Vec::new();
    let mut merged: Vec<CreateProjectData> = Vec::new();

    for project in projects {
        match firsts.iter().position(|seen| seen.same_content(&project)) {
            Some(pos) => {
                debug!(
                    "Merging duplicate seed record `{}` (id {:?})",
                    project.title, project.id
                );
                let target = &mut merged[pos];
                for category in project.parsed_categories() {
                    if !target.categories.contains(&category) {
                        target.categories.push(category);
                    }
                }
                target.featured |= project.featured;
            }
            None => {
                firsts.push(project.clone());
                merged.push(project.into_create_data());
            }
        }
    }

    merged
}

impl SeedDocument {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(EMBEDDED_SEED)
    }
}

//
// ──────────────────────────────────────────────────────────
// Loading
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub records: usize,
    pub projects: usize,
    pub profile: bool,
}

/// Writes the document through the create use cases. Stops at the first
/// failure; whatever was inserted before it stays.
pub async fn apply_seed(document: SeedDocument, state: &AppState) -> Result<SeedSummary, SeedError> {
    let records = document.projects.len();
    let projects = consolidate(document.projects);
    let project_count = projects.len();

    for data in projects {
        let title = data.title.clone();
        state
            .project
            .create
            .execute(data)
            .await
            .map_err(|source| SeedError::Project { title, source })?;
    }

    let profile = match document.profile {
        Some(profile) => {
            state
                .profile
                .create
                .execute(profile)
                .await
                .map_err(SeedError::Profile)?;
            true
        }
        None => {
            warn!("Seed document has no profile; /api/profile will return 404");
            false
        }
    };

    let summary = SeedSummary {
        records,
        projects: project_count,
        profile,
    };
    info!(
        "Seeded {} projects from {} records (profile: {})",
        summary.projects, summary.records, summary.profile
    );

    Ok(summary)
}
