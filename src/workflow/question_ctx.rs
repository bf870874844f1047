//! 题目处理上下文
//!
//! 封装"我正在处理第几题、题干是什么"这一信息

use std::fmt::Display;

use crate::services::anchor_finder::QuestionAnchor;
use crate::services::text_normalizer::clean_text;
use crate::infrastructure::HtmlNode;

/// 题目处理上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 题号（锚点文本开头的数字）
    pub index: u64,

    /// 清洗后的题干
    pub question: String,
}

impl QuestionCtx {
    pub fn new(index: u64, question: String) -> Self {
        Self { index, question }
    }

    pub fn from_anchor<N: HtmlNode>(anchor: &QuestionAnchor<N>) -> Self {
        Self::new(anchor.index, clean_text(&anchor.node.text()))
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目#{}]", self.index)
    }
}
