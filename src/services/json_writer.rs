//! JSON 写入服务 - 业务能力层
//!
//! 只负责"算出输出路径并写 JSON"，不关心题目从哪里来

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionRecord;

/// 根据输入路径推导输出路径
///
/// - 所在目录名包含 `html` 时，输出到把目录名中的 `html` 换成 `json` 的同级目录
/// - 否则输出到输入文件所在目录
/// - 文件名为 `<输入文件名去扩展名>.json`
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = input.parent().unwrap_or_else(|| Path::new(""));

    let output_dir = match parent.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.contains("html") => parent.with_file_name(name.replace("html", "json")),
        _ => parent.to_path_buf(),
    };

    output_dir.join(format!("{}.json", stem))
}

/// 序列化为两空格缩进、非 ASCII 字符不转义的 JSON
pub fn to_json(records: &[QuestionRecord]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// JSON 写入服务
#[derive(Debug, Default)]
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// 写入题目列表，目标目录不存在时自动创建
    pub fn write(&self, records: &[QuestionRecord], path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !dir.exists() {
                debug!("创建输出目录: {}", dir.display());
                fs::create_dir_all(dir).map_err(|source| {
                    AppError::File(FileError::CreateDirFailed {
                        path: dir.display().to_string(),
                        source,
                    })
                })?;
            }
        }

        let json = to_json(records)?;
        fs::write(path, json).map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        debug!("写入 {} 道题目到 {}", records.len(), path.display());
        Ok(())
    }
}
