//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::orchestrator::RunSummary;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则默认 `info`，详细模式下为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 已有全局订阅者时（例如同一进程中的多个测试）保留原订阅者
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

/// 记录程序启动信息
///
/// # 参数
/// - `input`: 输入的 HTML 文件
pub fn log_startup(input: &Path) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 开始提取题目 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 输入文件: {}", input.display());
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn log_extraction_summary(summary: &RunSummary) {
    let file_name = summary
        .output
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();

    info!("\n{}", "=".repeat(60));
    info!("📊 提取完成统计");
    info!("{}", "=".repeat(60));
    info!("✅ 选择题: {}", summary.stats.multiple_choice);
    info!("🖼️ 特殊题: {}", summary.stats.special);
    info!("⏭️ 跳过: {}", summary.stats.dropped);
    info!("{}", "=".repeat(60));

    if summary.succeeded() {
        info!("\n🎉 Done! {}", file_name);
    } else {
        info!("\n⚠️  Completed with issues: {}", file_name);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
