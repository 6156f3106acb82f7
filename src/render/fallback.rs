//! Placeholder content for when the data document can't be fetched or parsed.

use crate::config::ContainerIds;
use crate::dom::{Dom, Element, Node};

/// Put a placeholder in every portfolio container the page has.
pub fn portfolio<D: Dom>(dom: &mut D, ids: &ContainerIds, resource: &str) {
    log::info!("Loading fallback content...");

    fill(
        dom,
        &ids.videogames,
        vec![message(&format!(
            "Error loading video games. Please check your {} file.",
            resource
        ))
        .into()],
    );
    fill(
        dom,
        &ids.illustrations,
        vec![message(&format!(
            "Error loading illustrations. Please check your {} file.",
            resource
        ))
        .into()],
    );
    fill(
        dom,
        &ids.about,
        vec![Element::new("div")
            .class("about-text")
            .child(Element::new("h2").text("About"))
            .child(message(&format!(
                "Error loading about section. Please check your {} file.",
                resource
            )))
            .into()],
    );
}

pub fn project<D: Dom>(dom: &mut D, ids: &ContainerIds) {
    let placeholder = Element::new("div")
        .class("project-container")
        .child(
            Element::new("h1")
                .class("project-title")
                .text("Project Not Found"),
        )
        .child(Element::new("div").class("project-description").child(message(
            "Sorry, this project page couldn't be loaded. \
             Please check that the corresponding JSON file exists.",
        )));
    fill(dom, &ids.project, vec![placeholder.into()]);
}

fn message(text: &str) -> Element {
    Element::new("p").text(text)
}

fn fill<D: Dom>(dom: &mut D, id: &str, nodes: Vec<Node>) {
    if !dom.has_container(id) {
        log::debug!("No #{} on this page, no placeholder needed", id);
        return;
    }
    if let Err(e) = dom.replace_children(id, nodes) {
        log::warn!("Could not place fallback content: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn portfolio_placeholders_name_the_resource() {
        let ids = ContainerIds::default();
        let mut dom = MemoryDom::with_containers(&["videogames-grid", "about-content"]);
        portfolio(&mut dom, &ids, "site.json");
        assert_eq!(
            dom.container_text("videogames-grid").unwrap(),
            "Error loading video games. Please check your site.json file."
        );
        assert!(dom
            .container_html("about-content")
            .unwrap()
            .starts_with("<div class=\"about-text\"><h2>About</h2>"));
        assert!(!dom.has_container("illustrations-grid"));
    }

    #[test]
    fn project_placeholder() {
        let mut dom = MemoryDom::with_containers(&["project-content"]);
        project(&mut dom, &ContainerIds::default());
        let text = dom.container_text("project-content").unwrap();
        assert!(text.starts_with("Project Not Found"));
        assert!(text.contains("corresponding JSON file exists"));
    }
}
