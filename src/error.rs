use std::fmt;

/// Everything that can go wrong between requesting a data document and
/// putting it on the page. None of these ever reach the page itself.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Transport failure or a non-success status.
    Fetch(String),
    /// Body is not well-formed JSON of the expected shape.
    Parse(String),
    /// Expected container is absent from the page.
    MissingContainer(String),
    /// The browser rejected a DOM operation.
    Dom(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(msg) => write!(f, "fetch failed: {}", msg),
            LoadError::Parse(msg) => write!(f, "parse failed: {}", msg),
            LoadError::MissingContainer(id) => write!(f, "container #{} not found", id),
            LoadError::Dom(msg) => write!(f, "dom operation failed: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Toml(e) => write!(f, "invalid config: {}", e),
            ConfigError::Json(e) => write!(f, "invalid page config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
