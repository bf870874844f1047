//! 题目锚点查找 - 业务能力层
//!
//! 锚点是文本以 `<数字>. ` 开头的加粗节点。导出页面的写法并不统一，
//! 所以分两遍查找：
//! 1. 所有 `strong` / `b` 节点
//! 2. 所有 `p` 节点中的第一个 `strong`（没有则取第一个 `b`）
//!
//! 同一个题号只保留最先找到的锚点，第一遍优先。最终按题号升序排列，与页面顺序无关。

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::infrastructure::{HtmlNode, NodeKind};

static ANCHOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s+").expect("anchor pattern is valid"));

/// 从节点文本中解析题号，不是锚点则返回 `None`
///
/// 题号只认 ASCII 数字，`٣.` 这类其他书写系统的数字不算锚点
pub fn anchor_index(text: &str) -> Option<u64> {
    let caps = ANCHOR_PATTERN.captures(text.trim())?;
    caps[1].parse().ok()
}

/// 段落中用于判断题目的加粗节点
pub fn paragraph_emphasis<N: HtmlNode>(paragraph: &N) -> Option<N> {
    paragraph
        .find_tag("strong")
        .or_else(|| paragraph.find_tag("b"))
}

/// 段落是否是一道新题的开头
pub fn starts_question<N: HtmlNode>(paragraph: &N) -> bool {
    paragraph_emphasis(paragraph)
        .map(|emphasis| anchor_index(&emphasis.text()).is_some())
        .unwrap_or(false)
}

/// 一道题的锚点
#[derive(Debug, Clone)]
pub struct QuestionAnchor<N> {
    /// 题号
    pub index: u64,
    /// 锚点节点
    pub node: N,
}

/// 锚点查找服务
#[derive(Debug, Default)]
pub struct AnchorFinder;

impl AnchorFinder {
    pub fn new() -> Self {
        Self
    }

    /// 查找、去重并按题号排序
    pub fn find<N: HtmlNode>(&self, root: &N) -> Vec<QuestionAnchor<N>> {
        let mut seen = HashSet::new();
        let mut anchors = Vec::new();

        // 第一遍：独立的加粗节点
        for node in root.find_all(|n| n.kind() == NodeKind::Emphasis) {
            Self::keep_first(&mut seen, &mut anchors, node);
        }
        let first_pass = anchors.len();

        // 第二遍：段落中的加粗节点
        for paragraph in root.find_all(|n| n.kind() == NodeKind::Paragraph) {
            if let Some(node) = paragraph_emphasis(&paragraph) {
                Self::keep_first(&mut seen, &mut anchors, node);
            }
        }

        debug!(
            "锚点查找: 第一遍 {} 个, 第二遍新增 {} 个",
            first_pass,
            anchors.len() - first_pass
        );

        anchors.sort_by_key(|anchor| anchor.index);
        anchors
    }

    fn keep_first<N: HtmlNode>(
        seen: &mut HashSet<u64>,
        anchors: &mut Vec<QuestionAnchor<N>>,
        node: N,
    ) {
        if let Some(index) = anchor_index(&node.text()) {
            if seen.insert(index) {
                anchors.push(QuestionAnchor { index, node });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::HtmlDocument;
    use rstest::rstest;

    #[rstest]
    #[case("12. What is OSPF?", Some(12))]
    #[case("  3.\nWhich two", Some(3))]
    #[case("3.What", None)]
    #[case("3.", None)]
    #[case("Q3. What", None)]
    #[case("Explanation: 3. is wrong", None)]
    #[case("99999999999999999999999. overflow", None)]
    #[case("٣. Which one?", None)]
    #[case("１２. Full-width digits", None)]
    fn test_anchor_index(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(anchor_index(text), expected);
    }

    #[test]
    fn test_anchors_sorted_by_index() {
        let html = r#"<body>
            <p><strong>3. Third</strong></p>
            <p><strong>1. First</strong></p>
            <p><b>2. Second</b></p>
            <p><strong>Note</strong></p>
        </body>"#;
        let doc = HtmlDocument::parse(html);
        let anchors = AnchorFinder::new().find(&doc.root());

        let indices: Vec<_> = anchors.iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(anchors[1].node.text(), "2. Second");
    }

    #[test]
    fn test_duplicate_index_keeps_first_found() {
        let html = r#"<body>
            <div><strong>5. Original wording</strong></div>
            <p><strong>5. Repeated wording</strong></p>
        </body>"#;
        let doc = HtmlDocument::parse(html);
        let anchors = AnchorFinder::new().find(&doc.root());

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].node.text(), "5. Original wording");
    }

    #[test]
    fn test_paragraph_prefers_strong_over_b() {
        let doc = HtmlDocument::parse(r#"<p><b>4. bold</b> <strong>not a question</strong></p>"#);
        let p = doc.root().find_tag("p").unwrap();

        assert_eq!(paragraph_emphasis(&p).unwrap().tag_name(), "strong");
        assert!(!starts_question(&p));
    }
}
