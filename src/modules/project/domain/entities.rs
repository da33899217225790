use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Category
// ──────────────────────────────────────────────────────────
//

/// Display group a project is listed under. A project may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Featured,
    Fulltime,
    Startup,
    Web,
    Freelance,
    Opensource,
}

impl Category {
    /// Rail declaration order.
    pub const ALL: [Category; 6] = [
        Category::Featured,
        Category::Fulltime,
        Category::Startup,
        Category::Web,
        Category::Freelance,
        Category::Opensource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Featured => "featured",
            Category::Fulltime => "fulltime",
            Category::Startup => "startup",
            Category::Web => "web",
            Category::Freelance => "freelance",
            Category::Opensource => "opensource",
        }
    }

    /// Matches the lowercase name byte for byte. `FromStr` is the lenient
    /// variant used for seed documents.
    pub fn from_exact(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(value_type = String, example = "ai-interview")]
    pub id: ProjectId,

    #[schema(example = "AI Interview Platform")]
    pub title: String,

    pub description: String,

    /// Long-form copy for the detail modal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    pub image: Option<String>,

    pub video: Option<String>,

    /// Display order matters
    pub technologies: Vec<String>,

    pub categories: Vec<Category>,

    pub live_url: Option<String>,

    pub github_url: Option<String>,

    pub featured: bool,
}

impl Project {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}
