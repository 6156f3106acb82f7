use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::fetch::Fetcher;

/// Default config file looked up by the preview server.
pub const DEFAULT_CONFIG_PATH: &str = "folio.toml";

/// Where the preview server publishes the page-facing config as JSON.
pub const PAGE_CONFIG_RESOURCE: &str = "folio.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Appended to project page titles: "{project} - {site_name}".
    pub site_name: String,
    /// Directory holding index.html, the data documents and static assets.
    #[serde(skip_serializing)]
    pub site_dir: String,
    /// Data resource behind the portfolio page.
    pub portfolio_data: String,
    /// Fall back to "page.html -> page.json" for pages missing from `projects`.
    pub derive_project_data: bool,
    pub containers: ContainerIds,
    /// Project page name -> data resource.
    pub projects: BTreeMap<String, String>,
    #[serde(skip_serializing)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Portfolio".to_string(),
            site_dir: "site".to_string(),
            portfolio_data: "data.json".to_string(),
            derive_project_data: true,
            containers: ContainerIds::default(),
            projects: BTreeMap::new(),
            server: ServerConfig::default(),
        }
    }
}

/// Element ids the renderer targets, one per section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContainerIds {
    pub videogames: String,
    pub illustrations: String,
    pub about: String,
    pub project: String,
}

impl Default for ContainerIds {
    fn default() -> Self {
        ContainerIds {
            videogames: "videogames-grid".to_string(),
            illustrations: "illustrations-grid".to_string(),
            about: "about-content".to_string(),
            project: "project-content".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl SiteConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Data resource for a project page, by its path or file name.
    /// Declared pages win; undeclared ones are derived when allowed.
    pub fn project_data(&self, page: &str) -> Option<String> {
        let name = page_name(page);
        if let Some(resource) = self.projects.get(name) {
            return Some(resource.clone());
        }
        if self.derive_project_data {
            derive_data_resource(page)
        } else {
            None
        }
    }

    /// Config for one page view: the page's inline JSON when given, else the
    /// published `folio.json`, else defaults. Never fails; a page must render.
    pub async fn for_page<F: Fetcher>(fetcher: &F, inline: Option<&str>) -> Self {
        let parsed = match inline {
            Some(raw) => Self::from_json(raw),
            None => match fetcher.fetch_text(PAGE_CONFIG_RESOURCE).await {
                Ok(raw) => Self::from_json(&raw),
                Err(e) => {
                    log::info!("No published {} ({}), using defaults", PAGE_CONFIG_RESOURCE, e);
                    return Self::default();
                }
            },
        };
        parsed.unwrap_or_else(|e| {
            log::warn!("Ignoring page config: {}", e);
            Self::default()
        })
    }

    /// Data resource for a project page: the explicit one if the page passed
    /// it, otherwise resolved from the page path.
    pub fn project_resource(&self, explicit: Option<String>, path: Option<&str>) -> Option<String> {
        explicit.or_else(|| path.and_then(|p| self.project_data(p)))
    }
}

fn page_name(page: &str) -> &str {
    page.rsplit('/').next().unwrap_or(page)
}

/// Legacy convention: final path segment with `.html` swapped for `.json`.
/// e.g. "/work/aurora.html" => "aurora.json"
///      "aurora"            => "aurora.json"
///      "/work/"            => None
pub fn derive_data_resource(page: &str) -> Option<String> {
    let name = page_name(page);
    let stem = name.strip_suffix(".html").unwrap_or(name);
    if stem.is_empty() {
        None
    } else {
        Some(format!("{}.json", stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = SiteConfig::from_toml("").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.containers.videogames, "videogames-grid");
        assert_eq!(cfg.server.port, 8000);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = SiteConfig::from_toml(
            r#"
site_name = "Lili Ibrahim"

[containers]
about = "bio"

[projects]
"aurora.html" = "data/aurora.json"
"#,
        )
        .unwrap();
        assert_eq!(cfg.site_name, "Lili Ibrahim");
        assert_eq!(cfg.containers.about, "bio");
        assert_eq!(cfg.containers.project, "project-content");
        assert_eq!(cfg.portfolio_data, "data.json");
        assert_eq!(cfg.projects.len(), 1);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = SiteConfig::from_toml("site_name = [").unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn declared_project_wins_over_derivation() {
        let mut cfg = SiteConfig::default();
        cfg.projects
            .insert("aurora.html".to_string(), "data/aurora.json".to_string());
        assert_eq!(
            cfg.project_data("/work/aurora.html").as_deref(),
            Some("data/aurora.json")
        );
        assert_eq!(cfg.project_data("/work/ember.html").as_deref(), Some("ember.json"));
    }

    #[test]
    fn derivation_can_be_disabled() {
        let cfg = SiteConfig {
            derive_project_data: false,
            ..SiteConfig::default()
        };
        assert_eq!(cfg.project_data("ember.html"), None);
    }

    #[test]
    fn derive_data_resource_cases() {
        assert_eq!(derive_data_resource("/work/aurora.html").as_deref(), Some("aurora.json"));
        assert_eq!(derive_data_resource("aurora").as_deref(), Some("aurora.json"));
        assert_eq!(derive_data_resource("/work/"), None);
        assert_eq!(derive_data_resource(".html"), None);
    }

    #[test]
    fn json_round_trip_hides_server_settings() {
        let mut cfg = SiteConfig::default();
        cfg.site_dir = "/srv/private".into();
        cfg.containers.about = "bio".into();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("/srv/private"));
        assert!(!json.contains("\"server\""));

        let back = SiteConfig::from_json(&json).unwrap();
        assert_eq!(back.containers.about, "bio");
        assert_eq!(back.site_dir, "site");
    }

    #[test]
    fn project_resource_prefers_explicit() {
        let mut cfg = SiteConfig::default();
        cfg.projects
            .insert("aurora.html".to_string(), "data/aurora.json".to_string());
        assert_eq!(
            cfg.project_resource(Some("x.json".into()), Some("/aurora.html")).as_deref(),
            Some("x.json")
        );
        assert_eq!(
            cfg.project_resource(None, Some("/work/aurora.html")).as_deref(),
            Some("data/aurora.json")
        );
        assert_eq!(cfg.project_resource(None, None), None);
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SiteConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }
}
