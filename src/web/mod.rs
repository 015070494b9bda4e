// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::app_log;
use crate::config::SiteConfig;
use crate::locale::Locale;
use crate::store::DocumentStore;
use anyhow::Result;
use rocket::fs::{FileServer, Options};
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{catchers, get, routes, Build, Request, Rocket, State};
use std::path::{Path, PathBuf};

#[get("/")]
pub fn index(state: &State<ServerState>) -> Redirect {
    Redirect::to(state.context.locale_root(Locale::DEFAULT))
}

#[get("/<locale>/<page..>")]
pub async fn locale_page(
    locale: Locale,
    page: PathBuf,
    state: &State<ServerState>,
) -> Result<PageResponse, Status> {
    handlers::locale_page_handler(locale, &page, state).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[rocket::catch(404)]
pub fn not_found(req: &Request<'_>) -> PageResponse {
    handlers::not_found_handler(req)
}

fn mount_point(base_path: &str) -> &str {
    if base_path.is_empty() {
        "/"
    } else {
        base_path
    }
}

/// Pages, health and assets under the base path; the catcher covers everything.
pub fn build_rocket(state: ServerState, public_dir: &Path) -> Rocket<Build> {
    let mount = mount_point(&state.context.base_path).to_string();

    rocket::build()
        .register("/", catchers![not_found])
        .mount(mount.as_str(), routes![index, locale_page, health])
        .mount(
            mount.as_str(),
            FileServer::new(public_dir, Options::Index | Options::Missing).rank(10),
        )
        .manage(state)
}

// Main server start function
pub async fn start_web_server(config: SiteConfig) -> Result<()> {
    let store = DocumentStore::new(config.data_dir_absolute());
    let state = ServerState::new(store, config.page_context());
    let public_dir = config.public_dir_absolute();

    app_log!(info, "Starting CV site server");
    app_log!(info, "Data: {}", config.data_dir_absolute().display());
    app_log!(info, "Public assets: {}", public_dir.display());
    app_log!(
        info,
        "Server: http://0.0.0.0:{}{}/",
        config.port, state.context.base_path
    );

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    let _rocket = build_rocket(state, &public_dir)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
