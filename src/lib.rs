//! # Pitch Deck Analyzer
//!
//! 读取上传的 PDF 路演材料，交给 LLM 按固定问题评估，并汇总成一份报告
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（打开的 PDF 文档），只暴露能力
//! - `PdfDocument` - 唯一的文档句柄 owner，提供按页取文本的能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文件
//! - `TextExtractor` - PDF 文本提取能力
//! - `build_prompt` - 评估提示词
//! - `LlmService` - 补全服务调用能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份材料"的完整处理流程
//! - `DeckCtx` - 上下文封装（文件序号 + 文件名）
//! - `DeckFlow` - 流程编排（extract → prompt → evaluate）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量评估，首错终止，输出 (报告, 诊断)
//!
//! `server` 是外层的 HTTP 上传界面，不包含业务逻辑。
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod server;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppResult, EvalError, ServiceError};
pub use infrastructure::PdfDocument;
pub use models::{BatchOutcome, DiagnosticRecord, EvaluationResult, UploadedFile};
pub use orchestrator::BatchProcessor;
pub use services::{build_prompt, CompletionClient, LlmService, PdfTextExtractor, TextExtractor};
pub use workflow::{DeckCtx, DeckFlow};
