//! Content loader: fetch one data document, then fill the page containers
//! from it, or put placeholders in them when the document can't be had.

pub mod fallback;
pub mod portfolio;
pub mod project;

use serde::de::DeserializeOwned;

use crate::config::{ContainerIds, SiteConfig};
use crate::dom::{Dom, Node};
use crate::error::LoadError;
use crate::fetch::Fetcher;
use crate::models::portfolio::PortfolioDocument;
use crate::models::project::ProjectDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    VideoGames,
    Illustrations,
    About,
    Project,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Self::VideoGames => "videogames",
            Self::Illustrations => "illustrations",
            Self::About => "about",
            Self::Project => "project",
        }
    }
}

/// Which sections made it onto the page and which had no container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    pub rendered: Vec<Section>,
    pub skipped: Vec<Section>,
}

/// Idle -> Loading -> Rendered | Fallback. Both outcomes are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Rendered(RenderReport),
    Fallback(LoadError),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Rendered(_) | LoadState::Fallback(_))
    }
}

/// One load-and-render pass per page view.
pub struct Loader<F> {
    fetcher: F,
    containers: ContainerIds,
    site_name: String,
    state: LoadState,
}

impl<F: Fetcher> Loader<F> {
    pub fn new(fetcher: F, config: &SiteConfig) -> Self {
        Loader {
            fetcher,
            containers: config.containers.clone(),
            site_name: config.site_name.clone(),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub async fn load_portfolio<D: Dom>(&mut self, dom: &mut D, resource: &str) -> &LoadState {
        if !self.begin() {
            return &self.state;
        }
        log::info!("Loading portfolio data from {}", resource);

        self.state = match self.fetch_document::<PortfolioDocument>(resource).await {
            Ok(doc) => LoadState::Rendered(portfolio::render(dom, &self.containers, &doc)),
            Err(e) => {
                log::error!("Error loading portfolio data: {}", e);
                fallback::portfolio(dom, &self.containers, resource);
                LoadState::Fallback(e)
            }
        };
        &self.state
    }

    pub async fn load_project<D: Dom>(&mut self, dom: &mut D, resource: &str) -> &LoadState {
        if !self.begin() {
            return &self.state;
        }
        log::info!("Loading project data from {}", resource);

        self.state = match self.fetch_document::<ProjectDocument>(resource).await {
            Ok(doc) => {
                LoadState::Rendered(project::render(dom, &self.containers, &doc, &self.site_name))
            }
            Err(e) => {
                log::error!("Error loading project data: {}", e);
                fallback::project(dom, &self.containers);
                LoadState::Fallback(e)
            }
        };
        &self.state
    }

    fn begin(&mut self) -> bool {
        if self.state != LoadState::Idle {
            log::warn!("Loader already ran this page view; ignoring repeat load");
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    async fn fetch_document<T: DeserializeOwned>(&self, resource: &str) -> Result<T, LoadError> {
        let body = self.fetcher.fetch_text(resource).await?;
        log::debug!("Received {} bytes from {}", body.len(), resource);
        Ok(serde_json::from_str(&body)?)
    }
}

/// Swap a section's container contents, or note it as skipped when the
/// container is missing.
fn place<D: Dom>(
    dom: &mut D,
    id: &str,
    section: Section,
    nodes: Vec<Node>,
    report: &mut RenderReport,
) {
    match dom.replace_children(id, nodes) {
        Ok(()) => report.rendered.push(section),
        Err(e) => {
            log::warn!("Skipping {} section: {}", section.name(), e);
            report.skipped.push(section);
        }
    }
}
