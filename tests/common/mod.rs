#![allow(dead_code)]

pub mod fixtures;

use docpage::{MarkupNode, Page, PageRenderer};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Render a page with the default renderer, initialising test logging.
pub fn render(page: &Page) -> Result<MarkupNode, docpage::RenderError> {
    let _ = env_logger::builder().is_test(true).try_init();
    PageRenderer::new().render(page)
}

/// The `href` of every link in the table of contents, in order.
pub fn toc_hrefs(tree: &MarkupNode) -> Vec<String> {
    toc(tree)
        .find_all("a")
        .filter_map(|a| a.attr("href").map(str::to_string))
        .collect()
}

/// The text of every link in the table of contents, in order.
pub fn toc_texts(tree: &MarkupNode) -> Vec<String> {
    toc(tree)
        .find_all("a")
        .map(|a| MarkupNode::Element(a.clone()).text_content())
        .collect()
}

fn toc(tree: &MarkupNode) -> MarkupNode {
    let el = tree
        .find_all("docs-table-of-contents")
        .next()
        .expect("page has a table of contents");
    MarkupNode::Element(el.clone())
}

/// Tags of the article's direct children.
pub fn article_children(tree: &MarkupNode) -> Vec<String> {
    tree.children()
        .iter()
        .filter_map(|c| c.tag().map(str::to_string))
        .collect()
}
