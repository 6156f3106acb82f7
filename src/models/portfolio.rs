use serde::{Deserialize, Serialize};

/// The multi-section document behind the portfolio page (`data.json`).
/// Every section is optional; a missing one is simply not rendered.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub videogames: Option<Vec<VideoGame>>,
    #[serde(default)]
    pub illustrations: Option<Vec<Illustration>>,
    #[serde(default)]
    pub about: Option<About>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGame {
    pub title: String,
    pub image: String,
    pub project_page: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Illustration {
    pub title: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct About {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.as_deref().map(str::is_empty).unwrap_or(true)
            && self.location.as_deref().map(str::is_empty).unwrap_or(true)
            && self.social.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl PortfolioDocument {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
