use serde::Deserialize;

use super::entities::Project;

/// Credit lines shown on every project card. They take part in matching
/// exactly like a title or technology would.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchLabels {
    pub director: String,
    pub role: String,
}

impl SearchLabels {
    pub fn new(director: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            director: director.into(),
            role: role.into(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.director.to_lowercase().contains(needle) || self.role.to_lowercase().contains(needle)
    }
}

/// Filters `projects` down to those matching `query` and orders them:
/// title matches first, then shorter titles first. The sort is stable, so
/// equal keys keep catalogue order.
///
/// A blank query returns nothing rather than everything.
pub fn rank_projects(query: &str, projects: &[Project], labels: &SearchLabels) -> Vec<Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let labels_match = labels.matches(&needle);

    let mut hits: Vec<(bool, usize, &Project)> = projects
        .iter()
        .filter_map(|project| {
            let title_match = project.title.to_lowercase().contains(&needle);
            let matched = title_match
                || labels_match
                || project
                    .technologies
                    .iter()
                    .any(|tech| tech.to_lowercase().contains(&needle));

            matched.then(|| (title_match, project.title.chars().count(), project))
        })
        .collect();

    hits.sort_by_key(|(title_match, title_len, _)| (!*title_match, *title_len));

    hits.into_iter().map(|(_, _, project)| project.clone()).collect()
}
