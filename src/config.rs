use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

/// 指定 TOML 配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "QUIZ_EXTRACT_CONFIG";

/// 程序配置
///
/// 优先级：默认值 < TOML 文件 < 环境变量
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 标记正确选项的 `li` class
    pub correct_answer_class: String,
    /// 判断 style 属性是否带颜色声明的正则
    pub color_style_pattern: String,
    /// 可以携带颜色样式的行内标签
    pub styled_marker_tags: Vec<String>,
    /// 没有选项时判定为特殊题的关键字（小写）
    pub special_keywords: Vec<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            correct_answer_class: "correct_answer".to_string(),
            color_style_pattern: r"color\s*:".to_string(),
            styled_marker_tags: vec!["span".to_string(), "strong".to_string(), "b".to_string()],
            special_keywords: vec![
                "match".to_string(),
                "question as presented".to_string(),
                "refer to the exhibit".to_string(),
            ],
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 按给定的变量查找函数组装配置，便于测试时替换环境
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(CONFIG_FILE_ENV) {
            Some(path) => Self::from_toml_file(Path::new(&path))?,
            None => Self::default(),
        };

        Ok(Self {
            correct_answer_class: lookup("CORRECT_ANSWER_CLASS").unwrap_or(base.correct_answer_class),
            color_style_pattern: lookup("COLOR_STYLE_PATTERN").unwrap_or(base.color_style_pattern),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(base.verbose_logging),
            ..base
        })
    }

    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        toml::from_str(&content).map_err(|source| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })
        })
    }
}
