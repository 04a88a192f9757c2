use crate::attrs::Attributed;
use crate::builders::*;
use docpage_types::HeadingEntry;

// Semantic text elements
pub fn h1(text: &str) -> Heading {
    Heading::new(1).text(text)
}

pub fn h2(text: &str) -> Heading {
    Heading::new(2).text(text)
}

/// An `<h2>` carrying `id` whose text links back to its own anchor.
pub fn anchored_h2(id: &str, text: &str) -> Heading {
    Heading::new(2)
        .id(id)
        .child(Hyperlink::new(&format!("#{id}")).text(text))
}

/// A link that leaves the site and opens in a new browsing context.
pub fn outbound_link(href: &str) -> Hyperlink {
    Hyperlink::new(href).class("outbound").attr("target", "_blank")
}

/// The page navigation widget.
///
/// Fragment links (`#install`) are resolved against `basepath`; any other href
/// is used as given.
pub fn table_of_contents(links: &[HeadingEntry], basepath: &str) -> Component {
    let items = links.iter().map(|link| {
        let href = if link.is_fragment() {
            format!("{basepath}{}", link.href)
        } else {
            link.href.clone()
        };
        ListItem::new().child(Hyperlink::new(&href).text(&link.text))
    });

    Component::new("docs-table-of-contents")
        .attr("basepath", basepath)
        .child(Nav::new().child(UnorderedList::new().items(items)))
}

pub fn tabs() -> Component {
    Component::new("docs-tabs")
}

pub fn tab(label: &str) -> Component {
    Component::new("docs-tab").attr("tab", label)
}

pub fn command_line() -> Component {
    Component::new("command-line")
}

/// A single shell command, rendered verbatim.
pub fn command_prompt(command: &str) -> Component {
    Component::new("command-prompt").text(command)
}

pub fn shadow_card(header: &str, href: &str) -> Component {
    Component::new("docs-shadow-card")
        .attr("header", header)
        .attr("href", href)
}

pub fn button(href: &str) -> Component {
    Component::new("docs-button").attr("href", href)
}
