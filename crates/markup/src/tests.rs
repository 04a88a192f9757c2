use super::*;

fn sample() -> MarkupNode {
    let mut link = Element::new("a");
    link.set_attr("href", Some("#usage".into()));
    link.children.push(MarkupNode::text("Usage"));

    let mut heading = Element::new("h2");
    heading.set_attr("id", Some("usage".into()));
    heading.children.push(link.into());

    let mut section = Element::new("section");
    section.set_attr("hidden", None);
    section.children.push(heading.into());
    section.children.push(MarkupNode::raw("<b>raw</b>"));
    section.into()
}

#[test]
fn test_queries() {
    let tree = sample();
    assert_eq!(tree.tag(), Some("section"));
    assert_eq!(tree.find_by_id("usage").map(|e| e.tag.as_str()), Some("h2"));
    assert_eq!(tree.find_all("a").count(), 1);
    assert_eq!(tree.text_content(), "Usage");
    assert_eq!(
        tree.descendants().map(|e| e.tag.as_str()).collect::<Vec<_>>(),
        vec!["section", "h2", "a"]
    );
}

#[test]
fn test_boolean_attribute_and_set_attr_replaces() {
    let mut el = Element::new("section");
    el.set_attr("hidden", None);
    assert_eq!(el.attr("hidden"), Some(""));
    el.set_attr("class", Some("a".into()));
    el.set_attr("class", Some("a b".into()));
    assert_eq!(el.attrs.len(), 2);
    assert!(el.has_class("b"));
    assert!(!el.has_class("c"));
}

#[test]
fn test_html_output() {
    assert_eq!(
        to_html(&sample()),
        "<section hidden><h2 id=\"usage\"><a href=\"#usage\">Usage</a></h2><b>raw</b></section>"
    );
}

#[test]
fn test_html_escapes_text_and_attributes() {
    let mut el = Element::new("a");
    el.set_attr("title", Some("say \"hi\"".into()));
    el.children.push(MarkupNode::text("<script> & co"));
    let html = to_html(&el.into());
    assert_eq!(
        html,
        "<a title=\"say &quot;hi&quot;\">&lt;script&gt; &amp; co</a>"
    );
}

#[test]
fn test_void_elements_have_no_closing_tag() {
    let mut img = Element::new("img");
    img.set_attr("src", Some("/bot.png".into()));
    assert_eq!(to_html(&img.into()), "<img src=\"/bot.png\">");
}

#[test]
fn test_document_wrapper() {
    let doc = to_html_document(&MarkupNode::text("body"), "A & B");
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>A &amp; B</title>"));
    assert!(doc.contains("body"));
}

#[test]
fn test_json_shape() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["type"], "element");
    assert_eq!(value["tag"], "section");
    assert_eq!(value["attrs"][0], serde_json::json!({ "name": "hidden" }));
    assert_eq!(value["children"][1], serde_json::json!({ "type": "raw", "html": "<b>raw</b>" }));
}

#[test]
fn test_html_keeps_urls_readable_in_attributes() {
    let mut el = Element::new("a");
    el.set_attr("href", Some("/docs/native/camera#usage?a=1&b='2'".into()));
    assert_eq!(
        to_html(&el.into()),
        "<a href=\"/docs/native/camera#usage?a=1&amp;b=&#x27;2&#x27;\"></a>"
    );
}
