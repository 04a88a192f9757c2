//! Serializes a [`MarkupNode`] tree to HTML text.

use crate::{Element, MarkupNode};
use htmlescape::encode_minimal;
use std::fmt::Write;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Writes the tree as compact HTML.
pub fn to_html(node: &MarkupNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Wraps the tree in a minimal standalone HTML document.
pub fn to_html_document(node: &MarkupNode, title: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", encode_minimal(title));
    out.push_str("</head>\n<body>\n");
    write_node(node, &mut out);
    out.push_str("\n</body>\n</html>\n");
    out
}

fn write_node(node: &MarkupNode, out: &mut String) {
    match node {
        MarkupNode::Text { content } => out.push_str(&encode_minimal(content)),
        MarkupNode::Raw { html } => out.push_str(html),
        MarkupNode::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for attr in &el.attrs {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            let _ = write!(out, "=\"{}\"", encode_minimal(value));
        }
    }
    out.push('>');

    if is_void(&el.tag) {
        return;
    }

    for child in &el.children {
        write_node(child, out);
    }
    let _ = write!(out, "</{}>", el.tag);
}
