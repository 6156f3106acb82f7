//! Portfolio page sections: video games grid, illustrations grid, about.

use super::{place, RenderReport, Section};
use crate::config::ContainerIds;
use crate::dom::{Dom, Element, Node};
use crate::models::portfolio::{About, Contact, Illustration, PortfolioDocument, VideoGame};

/// Render every section present in `doc`. Absent sections leave their
/// containers alone; missing containers only skip their own section.
pub fn render<D: Dom>(dom: &mut D, ids: &ContainerIds, doc: &PortfolioDocument) -> RenderReport {
    let mut report = RenderReport::default();

    if let Some(games) = &doc.videogames {
        let tiles: Vec<Node> = games.iter().map(|g| videogame_tile(g).into()).collect();
        place(dom, &ids.videogames, Section::VideoGames, tiles, &mut report);
        log::info!("Loaded {} video games", games.len());
    }

    if let Some(illustrations) = &doc.illustrations {
        let tiles: Vec<Node> = illustrations
            .iter()
            .map(|i| illustration_tile(i).into())
            .collect();
        place(dom, &ids.illustrations, Section::Illustrations, tiles, &mut report);
        log::info!("Loaded {} illustrations", illustrations.len());
    }

    if let Some(about) = &doc.about {
        place(dom, &ids.about, Section::About, about_nodes(about), &mut report);
        log::info!("Loaded about section");
    }

    report
}

pub fn videogame_tile(game: &VideoGame) -> Element {
    Element::new("div")
        .class("videogame-item")
        .child(
            Element::new("a")
                .class("portfolio-item clickable")
                .attr("href", &game.project_page)
                .child(lazy_img(&game.image, &game.title)),
        )
        .child(
            Element::new("div")
                .class("videogame-title")
                .child(Element::new("h3").text(&game.title)),
        )
}

pub fn illustration_tile(illustration: &Illustration) -> Element {
    Element::new("div")
        .class("illustration-item")
        .child(
            Element::new("div")
                .class("illustration-image")
                .child(lazy_img(&illustration.image, &illustration.title)),
        )
        .child(
            Element::new("div")
                .class("illustration-info")
                .child(Element::new("h3").text(&illustration.title)),
        )
}

pub fn about_nodes(about: &About) -> Vec<Node> {
    let text = Element::new("div")
        .class("about-text")
        .child(Element::new("h2").text(&about.title))
        .children(about.paragraphs.iter().map(|p| Element::new("p").text(p)));

    let mut nodes = vec![Node::from(text)];
    if let Some(contact) = about.contact.as_ref().filter(|c| !c.is_empty()) {
        nodes.push(contact_block(contact).into());
    }
    nodes
}

fn contact_block(contact: &Contact) -> Element {
    let mut block = Element::new("div").class("about-contact");

    if let Some(email) = contact.email.as_deref().filter(|e| !e.is_empty()) {
        block = block.child(
            Element::new("p").class("contact-email").child(
                Element::new("a")
                    .attr("href", &format!("mailto:{}", email))
                    .text(email),
            ),
        );
    }

    if let Some(location) = contact.location.as_deref().filter(|l| !l.is_empty()) {
        block = block.child(Element::new("p").class("contact-location").text(location));
    }

    if !contact.social.is_empty() {
        block = block.child(
            Element::new("ul").class("social-links").children(contact.social.iter().map(|s| {
                Element::new("li").child(
                    Element::new("a")
                        .attr("href", &s.url)
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .text(&s.name),
                )
            })),
        );
    }

    block
}

fn lazy_img(src: &str, alt: &str) -> Element {
    Element::new("img")
        .attr("src", src)
        .attr("alt", alt)
        .attr("loading", "lazy")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::SocialLink;

    fn about() -> About {
        About {
            title: "About".into(),
            paragraphs: vec!["One".into(), "Two".into()],
            contact: Some(Contact {
                email: Some("me@example.com".into()),
                location: None,
                social: vec![SocialLink {
                    name: "Site".into(),
                    url: "https://example.com".into(),
                }],
            }),
        }
    }

    #[test]
    fn videogame_tile_links_project_page() {
        let tile = videogame_tile(&VideoGame {
            title: "A".into(),
            image: "a.png".into(),
            project_page: "a.html".into(),
        });
        let link = tile.find("a").unwrap();
        assert_eq!(link.get_attr("href"), Some("a.html"));
        assert_eq!(link.find("img").unwrap().get_attr("src"), Some("a.png"));
        assert_eq!(tile.find("h3").unwrap().text_content(), "A");
    }

    #[test]
    fn illustration_tile_has_no_link() {
        let tile = illustration_tile(&Illustration {
            title: "Fox".into(),
            image: "fox.jpg".into(),
        });
        assert!(tile.find("a").is_none());
        assert_eq!(tile.find("img").unwrap().get_attr("alt"), Some("Fox"));
    }

    #[test]
    fn about_with_contact() {
        let nodes = about_nodes(&about());
        assert_eq!(nodes.len(), 2);
        let text = nodes[0].as_element().unwrap();
        assert_eq!(text.child_elements().filter(|e| e.tag == "p").count(), 2);

        let contact = nodes[1].as_element().unwrap();
        assert_eq!(
            contact.find("a").unwrap().get_attr("href"),
            Some("mailto:me@example.com")
        );
        assert!(contact.find_by_class("contact-location").is_empty());
        let social = contact.find_by_class("social-links");
        assert_eq!(social[0].child_elements().count(), 1);
    }

    #[test]
    fn about_without_contact() {
        let mut a = about();
        a.contact = Some(Contact::default());
        assert_eq!(about_nodes(&a).len(), 1);
        a.contact = None;
        assert_eq!(about_nodes(&a).len(), 1);
    }
}
