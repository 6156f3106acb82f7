#[cfg(not(target_arch = "wasm32"))]
#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    use folio::config::{SiteConfig, DEFAULT_CONFIG_PATH};
    use std::path::PathBuf;

    env_logger::init();

    let config_path = std::env::var("FOLIO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match SiteConfig::load_or_default(&config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };

    // Boot check: site directory, page shell, data documents
    folio::boot::run(&config);

    let _ = folio::server::build(&config).launch().await?;
    Ok(())
}

// The wasm build is a library; pages call its exports directly.
#[cfg(target_arch = "wasm32")]
fn main() {}
