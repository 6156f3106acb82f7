use serde::{Deserialize, Serialize};

/// Document behind a single project page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectDocument {
    pub title: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
}

impl ProjectDocument {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_project() {
        let doc = ProjectDocument::from_json(
            r#"{"title": "Aurora", "description": ["p1"], "images": [{"src": "1.png", "alt": "one"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.title, "Aurora");
        assert_eq!(doc.images[0].alt, "one");
    }

    #[test]
    fn lists_default_to_empty() {
        let doc = ProjectDocument::from_json(r#"{"title": "Bare"}"#).unwrap();
        assert!(doc.description.is_empty());
        assert!(doc.images.is_empty());
    }

    #[test]
    fn title_is_required() {
        assert!(ProjectDocument::from_json(r#"{"images": []}"#).is_err());
    }
}
