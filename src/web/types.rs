// src/web/types.rs

use crate::error::SiteError;
use crate::locale::Locale;
use crate::render::html::PageContext;
use crate::store::DocumentStore;
use rocket::http::{ContentType, Status};
use rocket::request::FromParam;
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};

/// Shared by every request: where documents live and how pages link.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub store: DocumentStore,
    pub context: PageContext,
}

impl ServerState {
    pub fn new(store: DocumentStore, context: PageContext) -> Self {
        Self { store, context }
    }
}

/// Unsupported segments fail here and the request forwards to the asset
/// routes, ending at the 404 catcher.
impl<'a> FromParam<'a> for Locale {
    type Error = SiteError;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        Locale::parse(param)
    }
}

pub struct PageResponse {
    pub html: String,
    pub status: Status,
    pub language: Option<Locale>,
}

impl PageResponse {
    pub fn ok(html: String, locale: Locale) -> Self {
        Self {
            html,
            status: Status::Ok,
            language: Some(locale),
        }
    }

    pub fn not_found(html: String) -> Self {
        Self {
            html,
            status: Status::NotFound,
            language: None,
        }
    }
}

impl<'r> Responder<'r, 'static> for PageResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut binding = Response::build();
        let mut response = binding
            .status(self.status)
            .header(ContentType::HTML)
            .sized_body(self.html.len(), std::io::Cursor::new(self.html));

        if let Some(locale) = self.language {
            response = response.raw_header("Content-Language", locale.code());
        }

        response.ok()
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub locales: Vec<&'static str>,
}
