use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::project::domain::{Category, Project};

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Outcome of loading one rail. Each rail is tracked on its own so a
/// failure stays local to its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RailState {
    Loaded { projects: Vec<Project> },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryRail {
    pub category: Category,
    #[serde(flatten)]
    pub state: RailState,
}

impl CategoryRail {
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, RailState::Loaded { .. })
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetCategoryRailsUseCase: Send + Sync {
    /// One rail per category, in declaration order. Never fails as a whole.
    async fn execute(&self) -> Vec<CategoryRail>;
}
