use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::{derive_data_resource, SiteConfig};
use crate::models::portfolio::PortfolioDocument;
use crate::models::project::ProjectDocument;

/// Page shell the preview server cannot do without.
const INDEX_PAGE: &str = "index.html";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Aborts when the site directory is unusable; data problems only warn,
/// since the pages fall back to placeholders on their own.
pub fn run(config: &SiteConfig) {
    let report = check(config);
    if report.errors > 0 {
        error!(
            "Boot check failed: {} error(s), {} warning(s). Fix the errors above and restart.",
            report.errors, report.warnings
        );
        process::exit(1);
    }
    info!("Boot check passed with {} warning(s)", report.warnings);
}

pub fn check(config: &SiteConfig) -> BootReport {
    info!("Folio boot check starting...");
    let mut report = BootReport::default();
    let site = Path::new(&config.site_dir);

    // ── 1. Site directory ──────────────────────────────
    if !site.is_dir() {
        error!("  MISSING site directory: {}", site.display());
        report.errors += 1;
        return report;
    }

    // ── 2. Page shell ──────────────────────────────────
    if !site.join(INDEX_PAGE).is_file() {
        error!("  MISSING page shell: {}", site.join(INDEX_PAGE).display());
        report.errors += 1;
    }

    // ── 3. Portfolio data ──────────────────────────────
    check_document(
        &site.join(&config.portfolio_data),
        |raw| PortfolioDocument::from_json(raw).map(|_| ()),
        &mut report,
    );

    // ── 4. Declared project pages ──────────────────────
    for (page, resource) in &config.projects {
        if !site.join(page).is_file() {
            warn!("  Project page {} is declared but missing", page);
            report.warnings += 1;
        }
        check_document(
            &site.join(resource),
            |raw| ProjectDocument::from_json(raw).map(|_| ()),
            &mut report,
        );
    }

    // ── 5. Undeclared project pages ────────────────────
    if config.derive_project_data {
        for page in html_pages(site) {
            if page == INDEX_PAGE || config.projects.contains_key(&page) {
                continue;
            }
            if let Some(resource) = derive_data_resource(&page) {
                if !site.join(&resource).is_file() {
                    warn!("  Page {} has no {} (it will show a placeholder)", page, resource);
                    report.warnings += 1;
                }
            }
        }
    }

    report
}

fn check_document<F>(path: &Path, parse: F, report: &mut BootReport)
where
    F: Fn(&str) -> Result<(), serde_json::Error>,
{
    match fs::read_to_string(path) {
        Ok(raw) => {
            if let Err(e) = parse(&raw) {
                warn!("  Data file {} does not parse: {}", path.display(), e);
                report.warnings += 1;
            }
        }
        Err(e) => {
            warn!("  Data file {} unreadable: {}", path.display(), e);
            report.warnings += 1;
        }
    }
}

fn html_pages(site: &Path) -> Vec<String> {
    let mut pages: Vec<String> = fs::read_dir(site)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| {
                    e.path()
                        .extension()
                        .map(|ext| ext == "html")
                        .unwrap_or(false)
                })
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    pages.sort();
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_config(dir: &Path) -> SiteConfig {
        SiteConfig {
            site_dir: dir.to_string_lossy().into_owned(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn missing_site_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = site_config(&dir.path().join("nope"));
        assert_eq!(check(&cfg), BootReport { warnings: 0, errors: 1 });
    }

    #[test]
    fn healthy_site_passes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("data.json"), r#"{"videogames": []}"#).unwrap();
        fs::write(dir.path().join("aurora.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("aurora.json"), r#"{"title": "Aurora"}"#).unwrap();
        assert_eq!(check(&site_config(dir.path())), BootReport::default());
    }

    #[test]
    fn reports_missing_index_and_bad_data() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.json"), "{not json").unwrap();
        let report = check(&site_config(dir.path()));
        assert_eq!(report.errors, 1);
        assert_eq!(report.warnings, 1);
    }

    #[test]
    fn undeclared_page_without_data_warns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(dir.path().join("data.json"), "{}").unwrap();
        fs::write(dir.path().join("ember.html"), "").unwrap();

        let mut cfg = site_config(dir.path());
        assert_eq!(check(&cfg).warnings, 1);

        cfg.derive_project_data = false;
        assert_eq!(check(&cfg).warnings, 0);
    }

    #[test]
    fn declared_project_is_checked() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(dir.path().join("data.json"), "{}").unwrap();
        fs::write(dir.path().join("aurora.html"), "").unwrap();
        fs::write(dir.path().join("aurora-data.json"), r#"{"images": []}"#).unwrap();

        let mut cfg = site_config(dir.path());
        cfg.projects
            .insert("aurora.html".into(), "aurora-data.json".into());
        // Title missing, so the document does not parse.
        assert_eq!(check(&cfg).warnings, 1);
    }
}
