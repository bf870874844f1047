//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `document_processor` - 单个文档处理器
//! - 找出并排序所有题目锚点
//! - 对每个锚点运行 `workflow::QuestionScan`
//! - 汇总题目列表和统计信息
//!
//! ### `app` - 应用入口
//! - 读取输入文件
//! - 委托 `document_processor` 提取
//! - 写出 JSON 并运行质量校验
//!
//! ## 层次关系
//!
//! ```text
//! app (处理一个文件)
//!     ↓
//! document_processor (处理 Vec<Anchor>)
//!     ↓
//! workflow::QuestionScan (处理单个题目)
//!     ↓
//! services (能力层：normalize / marker / anchor / writer / validator)
//!     ↓
//! infrastructure (基础设施：HtmlDocument)
//! ```

pub mod app;
pub mod document_processor;

// 重新导出主要类型
pub use app::{parse_args, App, RunSummary};
pub use document_processor::{ExtractStats, QuestionExtractor};
