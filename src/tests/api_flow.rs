//! Whole-app tests: real stores, real services, embedded seed, every route.

use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;

use crate::profile::adapter::outgoing::ProfileStoreMemory;
use crate::project::adapter::outgoing::ProjectStoreMemory;
use crate::project::domain::{Category, SearchLabels};
use crate::seed::{apply_seed, SeedDocument};
use crate::shared::api::custom_query_config;
use crate::{build_app_state, init_routes, AppState};

async fn seeded_state() -> AppState {
    let document = SeedDocument::embedded().unwrap();
    let labels = document.credits.clone();
    let state = build_app_state(ProjectStoreMemory::new(), ProfileStoreMemory::new(), labels);
    apply_seed(document, &state).await.unwrap();
    state
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(custom_query_config())
                .configure(init_routes),
        )
        .await
    };
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn list_and_lookup_agree() {
    let app = app!(seeded_state().await);

    let (status, all) = get_json!(app, "/api/projects");
    assert_eq!(status, StatusCode::OK);
    let first_id = all[0]["id"].as_str().unwrap().to_string();

    let (status, single) = get_json!(app, &format!("/api/projects/{first_id}"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(single, all[0]);

    let (status, missing) = get_json!(app, "/api/projects/nonexistent");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["code"], "PROJECT_NOT_FOUND");
}

#[actix_web::test]
async fn fixed_segments_win_over_id_lookup() {
    let app = app!(seeded_state().await);

    let (status, featured) = get_json!(app, "/api/projects/featured");
    assert_eq!(status, StatusCode::OK);
    assert!(featured
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["featured"] == true));

    let (status, rails) = get_json!(app, "/api/projects/rails");
    assert_eq!(status, StatusCode::OK);
    let rail_names: Vec<&str> = rails
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["category"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(rail_names, expected);
    assert!(rails
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["status"] == "loaded"));
}

#[actix_web::test]
async fn category_filter_is_ordered_subset_of_list() {
    let app = app!(seeded_state().await);

    let (_, all) = get_json!(app, "/api/projects");
    let (status, web_projects) = get_json!(app, "/api/projects/category/web");
    assert_eq!(status, StatusCode::OK);

    let expected: Vec<Value> = all
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| {
            p["categories"]
                .as_array()
                .unwrap()
                .iter()
                .any(|c| c == "web")
        })
        .cloned()
        .collect();
    assert_eq!(web_projects, Value::Array(expected));

    let (status, unknown) = get_json!(app, "/api/projects/category/underwater");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown, serde_json::json!([]));

    for path in ["/api/projects/category/WEB", "/api/projects/category/%20web%20"] {
        let (status, body) = get_json!(app, path);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }
}

#[actix_web::test]
async fn search_ranks_title_matches_first() {
    let app = app!(seeded_state().await);

    let (status, found) = get_json!(app, "/api/projects/search?q=AI");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&found)[0], "AI Interview Platform");

    let (_, lower) = get_json!(app, "/api/projects/search?q=react");
    let (_, upper) = get_json!(app, "/api/projects/search?q=REACT");
    assert!(!titles(&lower).is_empty());
    assert_eq!(lower, upper);

    let (_, empty) = get_json!(app, "/api/projects/search?q=");
    assert_eq!(empty, serde_json::json!([]));
}

#[actix_web::test]
async fn credit_labels_match_every_project() {
    let document = SeedDocument::embedded().unwrap();
    let total = document.projects.len();
    let state = build_app_state(
        ProjectStoreMemory::new(),
        ProfileStoreMemory::new(),
        SearchLabels::new("Jordan Blake", "Creative Technologist"),
    );
    let summary = apply_seed(document, &state).await.unwrap();
    assert!(summary.projects <= total);
    let app = app!(state);

    let (_, found) = get_json!(app, "/api/projects/search?q=jordan");

    assert_eq!(found.as_array().unwrap().len(), summary.projects);
}

#[actix_web::test]
async fn profile_and_resume_are_served() {
    let app = app!(seeded_state().await);

    let (status, profile) = get_json!(app, "/api/profile");
    assert_eq!(status, StatusCode::OK);
    assert!(profile["email"].as_str().unwrap().contains('@'));
    // Blank social links are dropped on load
    assert!(profile["social"]["twitter"].is_null());

    let (status, resume) = get_json!(app, "/api/download-resume");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resume["url"], profile["resumeUrl"]);
}

#[actix_web::test]
async fn unseeded_app_reports_not_ready() {
    let state = build_app_state(
        ProjectStoreMemory::new(),
        ProfileStoreMemory::new(),
        SearchLabels::default(),
    );
    let app = app!(state);

    let (status, _) = get_json!(app, "/ready");
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = get_json!(app, "/api/profile");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROFILE_NOT_FOUND");

    let (status, body) = get_json!(app, "/api/projects");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn seeded_app_reports_ready() {
    let app = app!(seeded_state().await);

    let (status, body) = get_json!(app, "/ready");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
