//! 质量校验服务 - 业务能力层
//!
//! 只读检查提取结果并输出报告，不修改任何题目

use tracing::{error, info};
use url::Url;

use crate::models::question::{Answer, QuestionRecord, SEE_IMAGE_ANSWER};

/// 题干最短长度（字符数，超过该值才算有效）
const MIN_QUESTION_CHARS: usize = 5;

/// 校验报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// 每条形如 `Q<序号>: 问题1; 问题2`
    pub errors: Vec<String>,
    /// 检查过的题目数
    pub checked: usize,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 质量校验服务
#[derive(Debug, Default)]
pub struct QualityValidator;

impl QualityValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, records: &[QuestionRecord]) -> ValidationReport {
        let mut report = ValidationReport {
            checked: records.len(),
            ..ValidationReport::default()
        };

        for (i, record) in records.iter().enumerate() {
            let problems = Self::check_record(record);
            if !problems.is_empty() {
                report.errors.push(format!("Q{}: {}", i + 1, problems.join("; ")));
            }
        }

        report
    }

    /// 校验并把结果写到日志
    pub fn validate_and_log(&self, records: &[QuestionRecord]) -> ValidationReport {
        info!("\n{}", "=".repeat(60));
        info!("🔍 QUALITY VALIDATION");
        info!("{}", "=".repeat(60));

        let report = self.validate(records);

        for msg in &report.errors {
            error!("❌ {}", msg);
        }

        if report.passed() {
            info!("✅ All validations passed!");
        } else {
            error!("❌ Found {} error(s)", report.errors.len());
        }

        report
    }

    fn check_record(record: &QuestionRecord) -> Vec<String> {
        let mut problems = Vec::new();

        let question_len = record.question.trim().chars().count();
        if question_len <= MIN_QUESTION_CHARS {
            problems.push(format!("Question too short ({} chars)", question_len));
        }

        let choices = record.choice_list();
        if !choices.is_empty() {
            match &record.answer {
                None => problems.push("Has choices but no answer key".to_string()),
                Some(answer) if answer.is_blank() => {
                    problems.push("Has choices but no answer key".to_string())
                }
                Some(Answer::Unknown) => problems.push("Answer is 'Unknown'".to_string()),
                Some(answer) if !record.is_special() => {
                    let values = match answer {
                        Answer::SeeImage => vec![SEE_IMAGE_ANSWER],
                        other => other.values(),
                    };
                    for value in values {
                        if !choices.iter().any(|choice| choice == value) {
                            problems.push("Answer not in choices".to_string());
                        }
                    }
                }
                Some(_) => {}
            }
        }

        if let Some(img) = &record.img {
            if !is_valid_url(img) {
                problems.push("Invalid image URL".to_string());
            }
        }

        problems
    }
}

/// 带协议和主机名的绝对 URL
fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.has_host() && url.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}
