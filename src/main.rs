use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_api::api::openapi::ApiDoc;
use portfolio_api::config::{load_env_files, AppConfig};
use portfolio_api::keep_alive::KeepAlivePinger;
use portfolio_api::profile::adapter::outgoing::ProfileStoreMemory;
use portfolio_api::project::adapter::outgoing::ProjectStoreMemory;
use portfolio_api::project::domain::SearchLabels;
use portfolio_api::seed::{apply_seed, SeedDocument};
use portfolio_api::shared::api::custom_query_config;
use portfolio_api::{build_app_state, init_routes};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();
    let config = AppConfig::from_env().context("invalid configuration")?;

    let document = match &config.seed_path {
        Some(path) => {
            info!("Loading seed from {}", path.display());
            SeedDocument::from_path(path)
        }
        None => SeedDocument::embedded(),
    }
    .context("failed to load seed document")?;

    let labels = SearchLabels::new(
        config
            .director_label
            .clone()
            .unwrap_or_else(|| document.credits.director.clone()),
        config
            .role_label
            .clone()
            .unwrap_or_else(|| document.credits.role.clone()),
    );

    let project_store = ProjectStoreMemory::new();
    let profile_store = ProfileStoreMemory::new();
    let state = build_app_state(project_store, profile_store, labels);

    apply_seed(document, &state)
        .await
        .context("failed to seed stores")?;

    let keep_alive = match &config.keep_alive {
        Some(ka) => Some(
            KeepAlivePinger::new(&ka.url, ka.interval)
                .context("invalid keep-alive settings")?
                .spawn(),
        ),
        None => None,
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await;

    if let Some(handle) = keep_alive {
        handle.abort();
    }

    result.context("server error")
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
