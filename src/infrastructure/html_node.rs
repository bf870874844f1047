//! 文档树能力抽象 - 基础设施层
//!
//! 提取逻辑只依赖这里定义的能力，不关心具体用哪个 HTML 解析库建树

/// 提取流程关心的节点类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `ul`（`ol` 不算选项列表）
    List,
    /// `li`
    ListItem,
    /// `p`
    Paragraph,
    /// `pre`
    Preformatted,
    /// `strong` / `b`
    Emphasis,
    /// 其他节点（div、img、span ……）
    Other,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "ul" => NodeKind::List,
            "li" => NodeKind::ListItem,
            "p" => NodeKind::Paragraph,
            "pre" => NodeKind::Preformatted,
            "strong" | "b" => NodeKind::Emphasis,
            _ => NodeKind::Other,
        }
    }
}

/// 文档树中的一个元素节点
///
/// 所有遍历方法只返回元素节点，文本节点被跳过
pub trait HtmlNode: Clone {
    /// 标签名（小写）
    fn tag_name(&self) -> &str;

    /// 节点及其所有后代的文本内容拼接（不做任何清洗）
    fn text(&self) -> String;

    /// 属性值
    fn attr(&self, name: &str) -> Option<&str>;

    /// 下一个元素兄弟节点
    fn next_sibling(&self) -> Option<Self>;

    /// 父元素
    fn parent(&self) -> Option<Self>;

    /// 直接子元素
    fn children(&self) -> Vec<Self>;

    /// 所有后代元素（文档顺序，不含自身）
    fn descendants(&self) -> Vec<Self>;

    fn kind(&self) -> NodeKind {
        NodeKind::from_tag(self.tag_name())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// 第一个满足条件的后代元素
    fn find_first<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Self) -> bool,
    {
        self.descendants().into_iter().find(|node| predicate(node))
    }

    /// 所有满足条件的后代元素
    fn find_all<P>(&self, predicate: P) -> Vec<Self>
    where
        P: Fn(&Self) -> bool,
    {
        self.descendants()
            .into_iter()
            .filter(|node| predicate(node))
            .collect()
    }

    /// 第一个指定标签的后代元素
    fn find_tag(&self, tag: &str) -> Option<Self> {
        self.find_first(|node| node.tag_name().eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_from_tag() {
        assert_eq!(NodeKind::from_tag("ul"), NodeKind::List);
        assert_eq!(NodeKind::from_tag("UL"), NodeKind::List);
        assert_eq!(NodeKind::from_tag("ol"), NodeKind::Other);
        assert_eq!(NodeKind::from_tag("li"), NodeKind::ListItem);
        assert_eq!(NodeKind::from_tag("p"), NodeKind::Paragraph);
        assert_eq!(NodeKind::from_tag("pre"), NodeKind::Preformatted);
        assert_eq!(NodeKind::from_tag("b"), NodeKind::Emphasis);
        assert_eq!(NodeKind::from_tag("strong"), NodeKind::Emphasis);
        assert_eq!(NodeKind::from_tag("div"), NodeKind::Other);
        assert_eq!(NodeKind::from_tag("img"), NodeKind::Other);
    }
}
