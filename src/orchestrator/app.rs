//! 应用入口 - 编排层
//!
//! 读取 HTML → 提取题目 → 写 JSON → 质量校验
//!
//! 校验不通过不算运行失败，但会体现在 `RunSummary::succeeded` 上，由 `main` 决定退出码

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::infrastructure::HtmlDocument;
use crate::orchestrator::document_processor::{ExtractStats, QuestionExtractor};
use crate::services::{output_path_for, JsonWriter, QualityValidator, ValidationReport};
use crate::utils::logging::{log_extraction_summary, log_startup};

/// 一次运行的结果
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub question_count: usize,
    pub stats: ExtractStats,
    pub report: ValidationReport,
}

impl RunSummary {
    /// 写出成功且校验无错误
    pub fn succeeded(&self) -> bool {
        self.report.passed()
    }
}

/// 解析命令行参数，只接受一个输入路径
pub fn parse_args<I>(args: I) -> AppResult<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "quiz_extract".to_string());
    let rest: Vec<String> = args.collect();

    match rest.as_slice() {
        [path] => Ok(PathBuf::from(path)),
        _ => Err(AppError::Cli(format!("Usage: {} <html_file_path>", program))),
    }
}

/// 应用主结构
pub struct App {
    extractor: QuestionExtractor,
    writer: JsonWriter,
    validator: QualityValidator,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let extractor = QuestionExtractor::new(config).context("无法初始化题目提取器")?;

        Ok(Self {
            extractor,
            writer: JsonWriter::new(),
            validator: QualityValidator::new(),
        })
    }

    /// 处理单个 HTML 文件
    pub fn run(&self, input: &Path) -> Result<RunSummary> {
        log_startup(input);

        if !input.exists() {
            return Err(AppError::File(FileError::NotFound {
                path: input.display().to_string(),
            })
            .into());
        }

        let html = fs::read_to_string(input)
            .map_err(|e| AppError::file_read_failed(input.display().to_string(), e))?;

        let doc = HtmlDocument::parse(&html);
        let (records, stats) = self.extractor.extract(&doc.root());

        let output = output_path_for(input);
        self.writer
            .write(&records, &output)
            .with_context(|| format!("无法写入JSON文件: {}", output.display()))?;

        info!("✅ Extracted {} questions", records.len());
        info!("📝 Saved to: {}", output.display());

        let report = self.validator.validate_and_log(&records);

        let summary = RunSummary {
            input: input.to_path_buf(),
            output,
            question_count: records.len(),
            stats,
            report,
        };
        log_extraction_summary(&summary);

        Ok(summary)
    }
}
