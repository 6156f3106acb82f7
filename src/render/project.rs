use super::{place, RenderReport, Section};
use crate::config::ContainerIds;
use crate::dom::{Dom, Element, Node};
use crate::models::project::ProjectDocument;

/// Render a project page into its container and retitle the document.
pub fn render<D: Dom>(
    dom: &mut D,
    ids: &ContainerIds,
    doc: &ProjectDocument,
    site_name: &str,
) -> RenderReport {
    let mut report = RenderReport::default();
    place(dom, &ids.project, Section::Project, project_nodes(doc), &mut report);
    dom.set_title(&format!("{} - {}", doc.title, site_name));
    if report.skipped.is_empty() {
        log::info!("Project content loaded: {} images", doc.images.len());
    }
    report
}

pub fn project_nodes(doc: &ProjectDocument) -> Vec<Node> {
    let title = Element::new("h1").class("project-title").text(&doc.title);

    let description = Element::new("div")
        .class("project-description")
        .children(doc.description.iter().map(|p| Element::new("p").text(p)));

    let images = Element::new("div")
        .class("project-images")
        .children(doc.images.iter().map(|img| {
            Element::new("div").class("project-image").child(
                Element::new("img")
                    .attr("src", &img.src)
                    .attr("alt", &img.alt)
                    .attr("loading", "lazy"),
            )
        }));

    vec![title.into(), description.into(), images.into()]
}
