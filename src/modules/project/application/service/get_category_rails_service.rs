use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::warn;

use crate::modules::project::application::ports::incoming::use_cases::{
    CategoryRail, GetCategoryRailsUseCase, GetProjectsByCategoryUseCase, RailState,
};
use crate::modules::project::domain::Category;

// ============================================================================
// Rails Service (composes the per-category listing)
// ============================================================================

#[derive(Clone)]
pub struct GetCategoryRailsService {
    by_category: Arc<dyn GetProjectsByCategoryUseCase + Send + Sync>,
    categories: Vec<Category>,
}

impl GetCategoryRailsService {
    pub fn new(
        by_category: Arc<dyn GetProjectsByCategoryUseCase + Send + Sync>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            by_category,
            categories,
        }
    }

    async fn load_rail(&self, category: Category) -> CategoryRail {
        let state = match self.by_category.execute(category.as_str()).await {
            Ok(projects) => RailState::Loaded { projects },
            Err(e) => {
                warn!("Rail '{}' failed to load: {}", category, e);
                RailState::Failed {
                    message: format!("Failed to load {} projects", category),
                }
            }
        };

        CategoryRail { category, state }
    }
}

#[async_trait]
impl GetCategoryRailsUseCase for GetCategoryRailsService {
    async fn execute(&self) -> Vec<CategoryRail> {
        // Each rail loads independently; join_all keeps declaration order.
        join_all(self.categories.iter().map(|&c| self.load_rail(c))).await
    }
}
