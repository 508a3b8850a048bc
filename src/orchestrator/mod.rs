//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次批量评估的调度，是整个系统的"指挥中心"。
//!
//! ### `batch_processor` - 批量评估处理器
//! - 批次开始前检查凭证（缺失时直接返回，不处理任何文件）
//! - 按提交顺序逐个处理文件（不并发）
//! - 第一个失败即终止批次，保留已完成的部分报告
//! - 输出 (报告, 诊断) 两个字符串
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<UploadedFile>)
//!     ↓
//! workflow::DeckFlow (处理单个 UploadedFile)
//!     ↓
//! services (能力层：extract / prompt / llm)
//!     ↓
//! infrastructure (基础设施：PdfDocument)
//! ```

pub mod batch_processor;

pub use batch_processor::BatchProcessor;
