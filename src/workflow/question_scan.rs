//! 单题扫描 - 流程层
//!
//! 从锚点之后的兄弟节点开始逐个向后看：
//!
//! ```text
//! ul     → 收集选项，结束
//! p      → 如果是下一题的开头，结束（不消费该节点）
//! pre    → 记录第一个代码块，继续
//! 其他   → 忽略，继续
//! 无兄弟 → 结束
//! ```

use tracing::debug;

use crate::infrastructure::{HtmlNode, NodeKind};
use crate::models::question::QuestionRecord;
use crate::services::anchor_finder::starts_question;
use crate::services::answer_marker::AnswerMarker;
use crate::services::text_normalizer::{clean_pre_block, clean_text};
use crate::workflow::question_ctx::QuestionCtx;

/// 扫描结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStop {
    /// 遇到选项列表
    ChoiceList,
    /// 遇到下一题
    NextQuestion,
    /// 兄弟节点耗尽
    #[default]
    Exhausted,
}

/// 扫描累积的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub choices: Vec<String>,
    /// 被标记为正确的选项，顺序与 `choices` 一致
    pub correct: Vec<String>,
    pub pre: Option<String>,
    pub stop: ScanStop,
}

enum Step {
    Continue,
    Stop(ScanStop),
}

/// 单题扫描器
pub struct QuestionScan<'a> {
    marker: &'a AnswerMarker,
}

impl<'a> QuestionScan<'a> {
    pub fn new(marker: &'a AnswerMarker) -> Self {
        Self { marker }
    }

    /// 扫描起点：锚点的下一个兄弟，没有则取父节点的下一个兄弟
    pub fn start_node<N: HtmlNode>(anchor: &N) -> Option<N> {
        anchor
            .next_sibling()
            .or_else(|| anchor.parent().and_then(|parent| parent.next_sibling()))
    }

    pub fn run<N: HtmlNode>(&self, start: Option<N>) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        let mut current = start;

        while let Some(node) = current {
            match self.step(&node, &mut outcome) {
                Step::Continue => current = node.next_sibling(),
                Step::Stop(stop) => {
                    outcome.stop = stop;
                    return outcome;
                }
            }
        }

        outcome.stop = ScanStop::Exhausted;
        outcome
    }

    fn step<N: HtmlNode>(&self, node: &N, outcome: &mut ScanOutcome) -> Step {
        match node.kind() {
            NodeKind::List => {
                self.collect_choices(node, outcome);
                Step::Stop(ScanStop::ChoiceList)
            }
            NodeKind::Paragraph if starts_question(node) => Step::Stop(ScanStop::NextQuestion),
            NodeKind::Preformatted => {
                if outcome.pre.is_none() {
                    let block = clean_pre_block(&node.text());
                    if !block.is_empty() {
                        outcome.pre = Some(block);
                    }
                }
                Step::Continue
            }
            _ => Step::Continue,
        }
    }

    fn collect_choices<N: HtmlNode>(&self, list: &N, outcome: &mut ScanOutcome) {
        for item in list.find_all(|n| n.kind() == NodeKind::ListItem) {
            let text = clean_text(&item.text());
            if text.is_empty() {
                continue;
            }

            if self.marker.is_correct(&item) {
                outcome.correct.push(text.clone());
            }
            outcome.choices.push(text);
        }
    }
}

/// 特殊题判定：题干（不区分大小写）包含任一关键字
pub fn is_special_question(question: &str, keywords: &[String]) -> bool {
    let lower = question.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
}

/// 根据扫描结果组装题目，无法归类的题目返回 `None`
pub fn assemble_record(
    ctx: &QuestionCtx,
    outcome: ScanOutcome,
    special_keywords: &[String],
) -> Option<QuestionRecord> {
    let ScanOutcome {
        choices,
        correct,
        pre,
        stop,
    } = outcome;

    if !choices.is_empty() {
        debug!(
            "{} 选项 {} 个, 正确 {} 个",
            ctx,
            choices.len(),
            correct.len()
        );
        return Some(
            QuestionRecord::multiple_choice(ctx.question.clone(), choices, correct).with_pre(pre),
        );
    }

    if is_special_question(&ctx.question, special_keywords) {
        debug!("{} 无选项, 归为特殊题", ctx);
        return Some(QuestionRecord::special(ctx.question.clone()).with_pre(pre));
    }

    debug!("{} 无选项且不是特殊题, 丢弃 (结束原因: {:?})", ctx, stop);
    None
}
