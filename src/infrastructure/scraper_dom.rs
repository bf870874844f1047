//! 基于 `scraper` 的文档树实现
//!
//! `HtmlDocument` 是唯一持有解析结果的对象，节点只是对它的借用

use scraper::{ElementRef, Html};

use super::html_node::HtmlNode;

/// 解析后的 HTML 文档
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// 解析完整的 HTML 文档（容错解析，不会失败）
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// 根元素（`<html>`）
    pub fn root(&self) -> DomNode<'_> {
        DomNode(self.html.root_element())
    }
}

/// 文档中的元素节点
#[derive(Debug, Clone, Copy)]
pub struct DomNode<'a>(ElementRef<'a>);

impl<'a> HtmlNode for DomNode<'a> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.0.next_siblings().find_map(ElementRef::wrap).map(DomNode)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(DomNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().filter_map(ElementRef::wrap).map(DomNode).collect()
    }

    fn descendants(&self) -> Vec<Self> {
        // descendants() 的第一个节点是自身
        self.0
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(DomNode)
            .collect()
    }
}
