//! 单个文档处理器 - 编排层
//!
//! 文档树 → 排好序的锚点 → 逐题扫描 → 题目列表
//!
//! 每次调用只读取传入的文档，不保留任何跨调用状态

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{HtmlDocument, HtmlNode};
use crate::models::question::QuestionRecord;
use crate::services::{AnchorFinder, AnswerMarker};
use crate::workflow::{assemble_record, QuestionCtx, QuestionScan};

/// 题目提取统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
    /// 找到的锚点数
    pub anchors: usize,
    /// 普通选择题
    pub multiple_choice: usize,
    /// 特殊题
    pub special: usize,
    /// 被丢弃的题目
    pub dropped: usize,
}

/// 题目提取器
pub struct QuestionExtractor {
    finder: AnchorFinder,
    marker: AnswerMarker,
    special_keywords: Vec<String>,
}

impl QuestionExtractor {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            finder: AnchorFinder::new(),
            marker: AnswerMarker::new(config)?,
            special_keywords: config.special_keywords.clone(),
        })
    }

    /// 解析 HTML 文本并提取题目
    pub fn extract_from_html(&self, source: &str) -> Vec<QuestionRecord> {
        let doc = HtmlDocument::parse(source);
        self.extract(&doc.root()).0
    }

    /// 从任意文档树提取题目，同时返回统计
    pub fn extract<N: HtmlNode>(&self, root: &N) -> (Vec<QuestionRecord>, ExtractStats) {
        let anchors = self.finder.find(root);
        let scanner = QuestionScan::new(&self.marker);

        let mut stats = ExtractStats {
            anchors: anchors.len(),
            ..ExtractStats::default()
        };
        info!("📋 找到 {} 个题目锚点", anchors.len());

        let mut records = Vec::with_capacity(anchors.len());
        for anchor in &anchors {
            let ctx = QuestionCtx::from_anchor(anchor);
            let outcome = scanner.run(QuestionScan::start_node(&anchor.node));
            debug!("{} 扫描结束: {:?}", ctx, outcome.stop);

            match assemble_record(&ctx, outcome, &self.special_keywords) {
                Some(record) => {
                    if record.is_special() {
                        stats.special += 1;
                    } else {
                        stats.multiple_choice += 1;
                    }
                    records.push(record);
                }
                None => {
                    warn!("⚠️ {} 未找到选项, 已跳过: {}", ctx, truncate(&ctx.question));
                    stats.dropped += 1;
                }
            }
        }

        (records, stats)
    }
}

fn truncate(text: &str) -> String {
    crate::utils::logging::truncate_text(text, 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Answer;

    fn extractor() -> QuestionExtractor {
        QuestionExtractor::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_single_correct_answer() {
        let html = r#"<html><body>
            <p><strong>3. What is 2+2?</strong></p>
            <ul>
                <li>3</li>
                <li><span style='color:red'>4</span></li>
                <li>5</li>
            </ul>
        </body></html>"#;

        let records = extractor().extract_from_html(html);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            QuestionRecord::multiple_choice(
                "3. What is 2+2?".to_string(),
                vec!["3".into(), "4".into(), "5".into()],
                vec!["4".into()],
            )
        );
    }

    #[test]
    fn test_output_sorted_and_deduplicated() {
        let html = r#"<body>
            <p><strong>2. Second question here</strong></p>
            <ul><li class="correct_answer">b</li></ul>
            <p><strong>1. First question here</strong></p>
            <ul><li class="correct_answer">a</li></ul>
            <p><strong>2. Second question again</strong></p>
            <ul><li class="correct_answer">dup</li></ul>
        </body>"#;

        let records = extractor().extract_from_html(html);
        let questions: Vec<_> = records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(
            questions,
            vec!["1. First question here", "2. Second question here"]
        );
        assert_eq!(records[1].answer, Some(Answer::Single("b".into())));
    }

    #[test]
    fn test_special_and_dropped_questions() {
        let html = r#"<body>
            <p><strong>1. Refer to the exhibit. Which host is unreachable?</strong></p>
            <p><img src="exhibit.png"></p>
            <p><strong>2. Explain your answer in one sentence.</strong></p>
            <p>free text</p>
            <p><strong>3. Match the protocol to the layer.</strong></p>
            <div><img src="match.png"></div>
        </body>"#;

        let doc = HtmlDocument::parse(html);
        let (records, stats) = extractor().extract(&doc.root());

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(QuestionRecord::is_special));
        assert_eq!(records[0].answer, Some(Answer::SeeImage));
        assert!(records[1].question.starts_with("3."));
        assert_eq!(
            stats,
            ExtractStats {
                anchors: 3,
                multiple_choice: 0,
                special: 2,
                dropped: 1,
            }
        );
    }

    #[test]
    fn test_pre_block_between_anchor_and_choices() {
        let html = "<body>\
            <p><strong>4. Refer to the output. What is the hostname?</strong></p>\
            <pre>\n    Router# show running-config\n\n    hostname Branch1\n</pre>\
            <ul><li><span style=\"color: #ff0000;\">Branch1</span></li><li>Router</li></ul>\
        </body>";

        let records = extractor().extract_from_html(html);
        assert_eq!(
            records[0].pre.as_deref(),
            Some("Router# show running-config\nhostname Branch1")
        );
        assert_eq!(records[0].choice_list(), ["Branch1", "Router"]);
        assert_eq!(records[0].answer, Some(Answer::Single("Branch1".into())));
    }

    #[test]
    fn test_entities_and_whitespace_in_choices() {
        let html = "<body><p><strong>5.&nbsp;Which   command\n is used?</strong></p>\
            <ul><li>show&nbsp;ip\n   route</li><li>ping &amp; trace</li></ul></body>";

        let records = extractor().extract_from_html(html);
        assert_eq!(records[0].question, "5. Which command is used?");
        assert_eq!(records[0].choice_list(), ["show ip route", "ping & trace"]);
        assert_eq!(records[0].answer, Some(Answer::Unknown));
    }
}
