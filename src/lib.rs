//! # Quiz Extract
//!
//! 从题库导出工具生成的复习页面（HTML）中提取选择题，整理为 JSON
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有解析后的文档树，只暴露遍历能力
//! - `HtmlNode` - 提取逻辑依赖的节点能力
//! - `HtmlDocument` - 基于 scraper 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `text_normalizer` - 实体解码与空白压缩
//! - `AnswerMarker` - 正确选项识别
//! - `AnchorFinder` - 题目锚点查找与排序
//! - `JsonWriter` - 写 JSON 能力
//! - `QualityValidator` - 质量校验
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整扫描流程
//! - `QuestionCtx` - 上下文封装（题号 + 题干）
//! - `QuestionScan` - 兄弟节点扫描（选项 / 代码块 / 下一题）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/document_processor` - 单个文档的提取
//! - `orchestrator/app` - 读文件、写文件、校验
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{HtmlDocument, HtmlNode};
pub use models::{Answer, QuestionRecord, QuestionType};
pub use orchestrator::{App, QuestionExtractor, RunSummary};
pub use workflow::{QuestionCtx, QuestionScan};
