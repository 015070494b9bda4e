// src/web/handlers/page_handlers.rs
use crate::app_log;
use crate::locale::Locale;
use crate::render::html::{document_page, not_found_page};
use crate::web::types::*;

use rocket::http::Status;
use rocket::Request;
use std::path::Path;

/// Only the locale root and its index.html are pages.
pub fn is_page_path(page: &Path) -> bool {
    page.as_os_str().is_empty() || page == Path::new("index.html")
}

pub async fn locale_page_handler(
    locale: Locale,
    page: &Path,
    state: &ServerState,
) -> Result<PageResponse, Status> {
    if !is_page_path(page) {
        return Err(Status::NotFound);
    }

    match state.store.load(locale).await {
        Ok(document) => {
            app_log!(info, "Serving {} page for {}", locale, document.name);
            Ok(PageResponse::ok(
                document_page(&document, locale, &state.context),
                locale,
            ))
        }
        // visitors see the same not-found page either way
        Err(e) => {
            app_log!(warn, "{}", e);
            Err(Status::NotFound)
        }
    }
}

pub fn not_found_handler(req: &Request<'_>) -> PageResponse {
    app_log!(info, "Not found: {}", req.uri());
    let html = match req.rocket().state::<ServerState>() {
        Some(state) => not_found_page(&state.context),
        None => not_found_page(&crate::config::SiteConfig::new().page_context()),
    };
    PageResponse::not_found(html)
}
