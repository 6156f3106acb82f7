use reqwest::header::CACHE_CONTROL;
use url::Url;

use crate::error::LoadError;

/// Retrieves a data document as text. Resolution of `resource` is up to the
/// implementation; a non-success status must come back as `LoadError::Fetch`.
///
/// No `Send` bound: browser fetch futures live on the main thread.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError>;
}

/// Fetches resources over HTTP relative to a base URL (the page URL in the browser).
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: Url) -> Self {
        HttpFetcher {
            client: reqwest::Client::new(),
            base,
        }
    }

    pub fn from_base(base: &str) -> Result<Self, LoadError> {
        let base = Url::parse(base)
            .map_err(|e| LoadError::Fetch(format!("invalid base URL {}: {}", base, e)))?;
        Ok(Self::new(base))
    }

    pub fn resolve(&self, resource: &str) -> Result<Url, LoadError> {
        self.base
            .join(resource)
            .map_err(|e| LoadError::Fetch(format!("invalid resource {}: {}", resource, e)))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
        let url = self.resolve(resource)?;
        log::debug!("Fetching {}", url);

        let resp = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Fetch(format!("request to {} failed: {}", url, e)))?;

        if !resp.status().is_success() {
            return Err(LoadError::Fetch(format!(
                "HTTP error! status: {}",
                resp.status().as_u16()
            )));
        }

        resp.text()
            .await
            .map_err(|e| LoadError::Fetch(format!("reading {} failed: {}", url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_to_page() {
        let f = HttpFetcher::from_base("https://example.com/work/aurora.html").unwrap();
        assert_eq!(
            f.resolve("aurora.json").unwrap().as_str(),
            "https://example.com/work/aurora.json"
        );
        assert_eq!(
            f.resolve("/data.json").unwrap().as_str(),
            "https://example.com/data.json"
        );
    }

    #[test]
    fn rejects_bad_base() {
        match HttpFetcher::from_base("not a url") {
            Err(LoadError::Fetch(msg)) => assert!(msg.contains("invalid base URL")),
            _ => panic!("expected fetch error"),
        }
    }
}
