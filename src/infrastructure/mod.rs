//! 基础设施层（Infrastructure）
//!
//! 持有解析后的文档树，只向上暴露遍历能力

pub mod html_node;
pub mod scraper_dom;

pub use html_node::{HtmlNode, NodeKind};
pub use scraper_dom::{DomNode, HtmlDocument};
