//! Local preview server. Serves the site directory as static files; pages
//! render themselves in the browser.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::FileServer;
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, State};

use crate::config::SiteConfig;
use crate::dom::{html_escape, Element};

/// Data documents must be fetched fresh on every page view.
pub struct NoCacheData;

#[rocket::async_trait]
impl Fairing for NoCacheData {
    fn info(&self) -> Info {
        Info { name: "No-Cache Data Documents", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if req.uri().path().as_str().ends_with(".json") {
            res.set_header(Header::new("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"));
            res.set_header(Header::new("Pragma", "no-cache"));
        }
    }
}

/// The site config as the browser build reads it (`folio.json`).
#[rocket::get("/folio.json")]
fn page_config(config: &State<SiteConfig>) -> Json<SiteConfig> {
    Json(config.inner().clone())
}

#[rocket::catch(404)]
fn not_found(req: &Request<'_>) -> RawHtml<String> {
    let site_name = req
        .rocket()
        .state::<SiteConfig>()
        .map(|c| c.site_name.as_str())
        .unwrap_or("Portfolio");
    RawHtml(not_found_page(site_name))
}

/// Same look as a project page that failed to load.
fn not_found_page(site_name: &str) -> String {
    let body = Element::new("div")
        .class("project-container")
        .child(Element::new("h1").class("project-title").text("Page Not Found"))
        .child(
            Element::new("div")
                .class("project-description")
                .child(Element::new("p").text("Sorry, there is nothing at this address.")),
        )
        .child(
            Element::new("a")
                .attr("href", "/")
                .text(&format!("Back to {}", site_name)),
        );
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
        html_escape(&format!("Page Not Found - {}", site_name)),
        body.to_html()
    )
}

pub fn build(config: &SiteConfig) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.as_str()))
        .merge(("port", config.server.port));

    log::info!("Serving {} on {}:{}", config.site_dir, config.server.address, config.server.port);

    rocket::custom(figment)
        .manage(config.clone())
        .attach(NoCacheData)
        .mount("/", rocket::routes![page_config])
        .mount("/", FileServer::from(&config.site_dir))
        .register("/", rocket::catchers![not_found])
}
