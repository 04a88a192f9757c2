use super::*;
use docpage_markup::to_html;

fn convert(md: &str) -> Vec<MarkupNode> {
    MarkdownConverter::default().convert(md).unwrap()
}

fn html(md: &str) -> String {
    convert(md).iter().map(to_html).collect()
}

#[test]
fn test_heading_gets_slug_id() {
    let nodes = convert("# Getting Started\n\nHello *world*.");
    assert_eq!(nodes.len(), 2);
    let heading = nodes[0].as_element().unwrap();
    assert_eq!(heading.tag, "h1");
    assert_eq!(heading.attr("id"), Some("getting-started"));
    assert_eq!(html("Hello *world*."), "<p>Hello <em>world</em>.</p>");
}

#[test]
fn test_explicit_heading_id_wins() {
    let nodes = convert("## Options {#opts}");
    assert_eq!(nodes[0].as_element().unwrap().attr("id"), Some("opts"));
}

#[test]
fn test_heading_anchors_can_be_disabled() {
    let converter = MarkdownConverter::new(MarkdownOptions {
        heading_anchors: false,
        ..Default::default()
    });
    let nodes = converter.convert("# Hi").unwrap();
    assert!(!nodes[0].as_element().unwrap().has_attr("id"));
}

#[test]
fn test_fenced_code_block() {
    assert_eq!(
        html("```typescript\nthis.camera.getPicture();\n```"),
        "<pre><code class=\"language-typescript\">this.camera.getPicture();\n</code></pre>"
    );
}

#[test]
fn test_lists() {
    assert_eq!(html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
    assert_eq!(html("3. x\n4. y"), "<ol start=\"3\"><li>x</li><li>y</li></ol>");
}

#[test]
fn test_links_images_and_inline_code() {
    assert_eq!(
        html("[docs](https://example.com \"Docs\") `npm i` ![bot](/bot.png)"),
        "<p><a href=\"https://example.com\" title=\"Docs\">docs</a> <code>npm i</code> <img src=\"/bot.png\" alt=\"bot\"></p>"
    );
}

#[test]
fn test_table_head_and_alignment() {
    let out = html("| A | B |\n|:--|--:|\n| 1 | 2 |");
    assert_eq!(
        out,
        "<table><thead><tr><th style=\"text-align: left\">A</th><th style=\"text-align: right\">B</th></tr></thead>\
         <tbody><tr><td style=\"text-align: left\">1</td><td style=\"text-align: right\">2</td></tr></tbody></table>"
    );
}

#[test]
fn test_raw_html_passes_through() {
    let nodes = convert("<div class=\"note\">hi</div>\n");
    assert!(matches!(&nodes[0], MarkupNode::Raw { html } if html.contains("class=\"note\"")));
}

#[test]
fn test_task_list_and_strikethrough() {
    let nodes = convert("- [x] done ~~old~~");
    let input = nodes[0].find_all("input").next().unwrap();
    assert_eq!(input.attr("type"), Some("checkbox"));
    assert!(input.has_attr("checked"));
    assert_eq!(
        nodes[0].find_all("del").next().map(|d| MarkupNode::Element(d.clone()).text_content()),
        Some("old".to_string())
    );
}

#[test]
fn test_empty_input() {
    assert!(convert("").is_empty());
}

fn heading_ids(nodes: &[MarkupNode]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(|n| n.as_element().and_then(|el| el.attr("id")).map(str::to_string))
        .collect()
}

#[test]
fn test_repeated_headings_get_suffixed_ids() {
    let nodes = convert("# Notes\n\n## Notes\n\n### Notes");
    assert_eq!(heading_ids(&nodes), vec!["notes", "notes-1", "notes-2"]);
}

#[test]
fn test_reserved_ids_are_not_reused() {
    let mut anchors = AnchorSet::with_reserved(["usage"]);
    let nodes = MarkdownConverter::default()
        .convert_with_anchors("# Usage\n\n# Other", &mut anchors)
        .unwrap();
    assert_eq!(heading_ids(&nodes), vec!["usage-1", "other"]);
    assert!(anchors.contains("usage-1"));
    assert!(anchors.contains("other"));
}

#[test]
fn test_explicit_ids_are_reserved_for_later_headings() {
    let mut anchors = AnchorSet::new();
    let converter = MarkdownConverter::default();
    converter.convert_with_anchors("# Intro {#setup}", &mut anchors).unwrap();
    let nodes = converter.convert_with_anchors("# Setup", &mut anchors).unwrap();
    assert_eq!(heading_ids(&nodes), vec!["setup-1"]);
}
