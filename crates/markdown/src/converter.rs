use crate::{AnchorSet, ConvertError, HypertextConverter, MarkdownOptions};
use docpage_markup::{Element, MarkupNode};
use log::debug;
use pulldown_cmark::{Alignment, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// The default [`HypertextConverter`], backed by `pulldown-cmark`.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: MarkdownOptions,
}

impl MarkdownConverter {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    fn parser_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.options.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.options.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.options.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.options.heading_anchors {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

impl HypertextConverter for MarkdownConverter {
    fn convert(&self, content: &str) -> Result<Vec<MarkupNode>, ConvertError> {
        self.convert_with_anchors(content, &mut AnchorSet::new())
    }

    fn convert_with_anchors(
        &self,
        content: &str,
        anchors: &mut AnchorSet,
    ) -> Result<Vec<MarkupNode>, ConvertError> {
        let mut builder = TreeBuilder::new(self.options, anchors);
        for event in Parser::new_ext(content, self.parser_options()) {
            builder.handle(event)?;
        }
        let nodes = builder.finish()?;
        debug!(
            "Converted {} bytes of markdown into {} top-level nodes",
            content.len(),
            nodes.len()
        );
        Ok(nodes)
    }
}

#[derive(Default)]
struct TableState {
    alignments: Vec<Alignment>,
    column: usize,
    in_head: bool,
    body_open: bool,
}

/// Turns the flat event stream into a tree using a stack of open elements.
struct TreeBuilder<'a> {
    options: MarkdownOptions,
    anchors: &'a mut AnchorSet,
    roots: Vec<MarkupNode>,
    stack: Vec<Element>,
    table: Option<TableState>,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: MarkdownOptions, anchors: &'a mut AnchorSet) -> Self {
        Self {
            options,
            anchors,
            roots: Vec::new(),
            stack: Vec::new(),
            table: None,
        }
    }

    fn open(&mut self, el: Element) {
        self.stack.push(el);
    }

    fn open_tag(&mut self, tag: &str) {
        self.open(Element::new(tag));
    }

    fn append(&mut self, node: MarkupNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn pop(&mut self, closing: &str) -> Result<Element, ConvertError> {
        self.stack
            .pop()
            .ok_or_else(|| ConvertError::Unbalanced(closing.to_string()))
    }

    fn close(&mut self, closing: &str) -> Result<(), ConvertError> {
        let el = self.pop(closing)?;
        self.append(el.into());
        Ok(())
    }

    fn handle(&mut self, event: Event<'_>) -> Result<(), ConvertError> {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag)?,
            Event::Text(text) => self.append(MarkupNode::text(&*text)),
            Event::Code(code) => {
                let mut el = Element::new("code");
                el.children.push(MarkupNode::text(&*code));
                self.append(el.into());
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                self.append(MarkupNode::raw(&*html))
            }
            Event::SoftBreak => self.append(MarkupNode::text("\n")),
            Event::HardBreak => self.append(Element::new("br").into()),
            Event::Rule => self.append(Element::new("hr").into()),
            Event::TaskListMarker(checked) => {
                let mut input = Element::new("input");
                input.set_attr("type", Some("checkbox".into()));
                input.set_attr("disabled", None);
                if checked {
                    input.set_attr("checked", None);
                }
                self.append(input.into());
            }
            Event::FootnoteReference(label) => {
                let mut link = Element::new("a");
                link.set_attr("href", Some(format!("#{}", &*label)));
                link.children.push(MarkupNode::text(&*label));
                let mut sup = Element::new("sup");
                sup.set_attr("class", Some("footnote-reference".into()));
                sup.children.push(link.into());
                self.append(sup.into());
            }
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.append(MarkupNode::text(&*math))
            }
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open_tag("p"),
            Tag::Heading {
                level, id, classes, ..
            } => {
                let mut el = Element::new(format!("h{}", level as u8));
                if let Some(id) = id {
                    el.set_attr("id", Some(id.to_string()));
                }
                if !classes.is_empty() {
                    let joined = classes.iter().map(|c| &**c).collect::<Vec<_>>().join(" ");
                    el.set_attr("class", Some(joined));
                }
                self.open(el);
            }
            Tag::BlockQuote(_) => self.open_tag("blockquote"),
            Tag::CodeBlock(kind) => {
                self.open_tag("pre");
                let mut code = Element::new("code");
                if let CodeBlockKind::Fenced(info) = kind {
                    if let Some(lang) = info.split_whitespace().next() {
                        code.set_attr("class", Some(format!("language-{lang}")));
                    }
                }
                self.open(code);
            }
            Tag::HtmlBlock => {}
            Tag::List(Some(start)) => {
                let mut el = Element::new("ol");
                if start != 1 {
                    el.set_attr("start", Some(start.to_string()));
                }
                self.open(el);
            }
            Tag::List(None) => self.open_tag("ul"),
            Tag::Item => self.open_tag("li"),
            Tag::FootnoteDefinition(label) => {
                let mut el = Element::new("div");
                el.set_attr("class", Some("footnote-definition".into()));
                el.set_attr("id", Some(label.to_string()));
                self.open(el);
            }
            Tag::Table(alignments) => {
                self.table = Some(TableState {
                    alignments,
                    ..Default::default()
                });
                self.open_tag("table");
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.in_head = true;
                    table.column = 0;
                }
                self.open_tag("thead");
                self.open_tag("tr");
            }
            Tag::TableRow => {
                let mut open_body = false;
                if let Some(table) = self.table.as_mut() {
                    table.column = 0;
                    open_body = !table.body_open;
                    table.body_open = true;
                }
                if open_body {
                    self.open_tag("tbody");
                }
                self.open_tag("tr");
            }
            Tag::TableCell => {
                let mut el = Element::new("td");
                if let Some(table) = self.table.as_mut() {
                    if table.in_head {
                        el.tag = "th".to_string();
                    }
                    let align = match table.alignments.get(table.column) {
                        Some(Alignment::Left) => Some("left"),
                        Some(Alignment::Center) => Some("center"),
                        Some(Alignment::Right) => Some("right"),
                        _ => None,
                    };
                    if let Some(align) = align {
                        el.set_attr("style", Some(format!("text-align: {align}")));
                    }
                    table.column += 1;
                }
                self.open(el);
            }
            Tag::Emphasis => self.open_tag("em"),
            Tag::Strong => self.open_tag("strong"),
            Tag::Strikethrough => self.open_tag("del"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut el = Element::new("a");
                el.set_attr("href", Some(dest_url.to_string()));
                if !title.is_empty() {
                    el.set_attr("title", Some(title.to_string()));
                }
                self.open(el);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                let mut el = Element::new("img");
                el.set_attr("src", Some(dest_url.to_string()));
                if !title.is_empty() {
                    el.set_attr("title", Some(title.to_string()));
                }
                self.open(el);
            }
            _ => self.open_tag("span"),
        }
    }

    fn end(&mut self, tag: TagEnd) -> Result<(), ConvertError> {
        match tag {
            TagEnd::HtmlBlock => Ok(()),
            TagEnd::CodeBlock => {
                self.close("code")?;
                self.close("pre")
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.in_head = false;
                }
                self.close("tr")?;
                self.close("thead")
            }
            TagEnd::Table => {
                if self.table.take().is_some_and(|t| t.body_open) {
                    self.close("tbody")?;
                }
                self.close("table")
            }
            TagEnd::Heading(_) => {
                let mut el = self.pop("heading")?;
                match el.attr("id").map(str::to_string) {
                    Some(explicit) => self.anchors.reserve(&explicit),
                    None if self.options.heading_anchors => {
                        let slug = slug::slugify(MarkupNode::Element(el.clone()).text_content());
                        if !slug.is_empty() {
                            el.set_attr("id", Some(self.anchors.claim(&slug)));
                        }
                    }
                    None => {}
                }
                self.append(el.into());
                Ok(())
            }
            TagEnd::Image => {
                let mut el = self.pop("img")?;
                let alt = MarkupNode::Element(el.clone()).text_content();
                el.children.clear();
                el.set_attr("alt", Some(alt));
                self.append(el.into());
                Ok(())
            }
            other => self.close(&format!("{other:?}")),
        }
    }

    fn finish(self) -> Result<Vec<MarkupNode>, ConvertError> {
        if !self.stack.is_empty() {
            return Err(ConvertError::Unclosed(self.stack.len()));
        }
        Ok(self.roots)
    }
}
