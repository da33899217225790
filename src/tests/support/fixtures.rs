use crate::profile::domain::{Profile, Skills, SocialLinks};
use crate::project::domain::{Category, Project, ProjectId, SearchLabels};

pub fn sample_project(id: &str, title: &str) -> Project {
    Project {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: "desc".to_string(),
        details: None,
        image: None,
        video: None,
        technologies: vec!["Rust".to_string()],
        categories: vec![Category::Web],
        live_url: None,
        github_url: None,
        featured: false,
    }
}

fn project(
    id: &str,
    title: &str,
    technologies: &[&str],
    categories: &[Category],
    featured: bool,
) -> Project {
    Project {
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        categories: categories.to_vec(),
        featured,
        ..sample_project(id, title)
    }
}

/// Small catalogue covering every category. No title shorter than
/// "AI Interview Platform" contains "ai".
pub fn demo_catalog() -> Vec<Project> {
    vec![
        project(
            "ai-interview",
            "AI Interview Platform",
            &["Python", "FastAPI", "React & Next.js"],
            &[Category::Featured, Category::Startup],
            true,
        ),
        project(
            "trip-planner",
            "Trip Planner",
            &["React & Next.js", "Tailwind CSS", "Mapbox"],
            &[Category::Web, Category::Startup],
            true,
        ),
        project(
            "budget-tracker",
            "Budget Tracker",
            &["Rust", "Actix Web", "PostgreSQL"],
            &[Category::Fulltime],
            false,
        ),
        project(
            "dotfiles-cli",
            "Dotfiles CLI",
            &["Rust", "Clap"],
            &[Category::Opensource],
            false,
        ),
        project(
            "bakery-storefront",
            "Bakery Storefront",
            &["Shopify", "Liquid"],
            &[Category::Freelance],
            false,
        ),
    ]
}

pub fn demo_labels() -> SearchLabels {
    SearchLabels::new("Alex Rivera", "Full Stack Engineer")
}

pub fn sample_profile() -> Profile {
    Profile {
        name: "Alex Rivera".to_string(),
        title: "Full Stack Engineer".to_string(),
        subtitle: Some("Building products end to end".to_string()),
        bio: "Engineer who likes shipping.".to_string(),
        mission: None,
        image: None,
        email: "alex@example.com".to_string(),
        phone: None,
        location: Some("Lisbon".to_string()),
        resume_url: Some("/assets/resume.pdf".to_string()),
        skills: Skills {
            frontend: vec!["React".to_string(), "TypeScript".to_string()],
            backend: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        },
        social: SocialLinks {
            linkedin: None,
            github: Some("https://github.com/alexrivera".to_string()),
            twitter: None,
        },
    }
}
