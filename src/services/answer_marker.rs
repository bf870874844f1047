//! 正确选项识别 - 业务能力层
//!
//! 导出工具用两种方式标记正确选项：
//! - 选项里某个行内标签带有颜色样式（颜色值不限）
//! - `li` 自身带有约定的 class

use regex::Regex;

use crate::config::Config;
use crate::error::{AppResult, ConfigError};
use crate::infrastructure::HtmlNode;

/// 正确选项判定规则
#[derive(Debug, Clone)]
pub struct AnswerMarker {
    color_pattern: Regex,
    styled_tags: Vec<String>,
    correct_class: String,
}

impl AnswerMarker {
    pub fn new(config: &Config) -> AppResult<Self> {
        let color_pattern = Regex::new(&config.color_style_pattern).map_err(|source| {
            ConfigError::InvalidPattern {
                pattern: config.color_style_pattern.clone(),
                source,
            }
        })?;

        Ok(Self {
            color_pattern,
            styled_tags: config
                .styled_marker_tags
                .iter()
                .map(|tag| tag.to_ascii_lowercase())
                .collect(),
            correct_class: config.correct_answer_class.clone(),
        })
    }

    /// 选项节点是否被标记为正确答案
    pub fn is_correct<N: HtmlNode>(&self, item: &N) -> bool {
        self.has_colored_descendant(item) || item.has_class(&self.correct_class)
    }

    fn has_colored_descendant<N: HtmlNode>(&self, item: &N) -> bool {
        item.find_first(|node| {
            let tag = node.tag_name().to_ascii_lowercase();
            self.styled_tags.contains(&tag)
                && node
                    .attr("style")
                    .map(|style| self.color_pattern.is_match(style))
                    .unwrap_or(false)
        })
        .is_some()
    }
}
