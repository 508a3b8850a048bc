//! 批次结果与诊断信息
//!
//! 批次只有两个状态：处理中（RUNNING）与终止（TERMINATED）。
//! 终止状态由 [`BatchOutcome`] 表示，渲染后总是得到 (报告, 诊断) 两个字符串。

use crate::models::EvaluationResult;
use std::fmt;

/// 缺少 API 密钥时返回给用户的提示
pub const MISSING_KEY_MESSAGE: &str =
    "❌ OpenAI API key not found. Please set the OPENAI_API_KEY environment variable.";

/// 缺少 API 密钥时的诊断标记
pub const MISSING_KEY_DIAGNOSTIC: &str = "Missing API key";

/// 全部成功时的诊断标记
pub const NO_ERRORS_MARKER: &str = "✅ No errors";

/// 诊断记录，每个批次恰好一条
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticRecord {
    NoErrors,
    MissingApiKey,
    /// 失败时捕获的完整错误链
    Failure { trace: String },
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticRecord::NoErrors => f.write_str(NO_ERRORS_MARKER),
            DiagnosticRecord::MissingApiKey => f.write_str(MISSING_KEY_DIAGNOSTIC),
            DiagnosticRecord::Failure { trace } => f.write_str(trace),
        }
    }
}

/// 批次终止状态
#[derive(Debug)]
pub enum BatchOutcome {
    /// 未配置密钥，没有处理任何文件
    MissingCredential,
    /// 全部文件处理成功
    Completed { results: Vec<EvaluationResult> },
    /// 在某个文件上失败，后续文件未处理
    Failed {
        /// 失败前已完成的结果
        results: Vec<EvaluationResult>,
        /// 一句话错误信息
        summary: String,
        /// 完整错误链
        trace: String,
    },
}

impl BatchOutcome {
    /// 已完成的评估结果
    pub fn results(&self) -> &[EvaluationResult] {
        match self {
            BatchOutcome::MissingCredential => &[],
            BatchOutcome::Completed { results } | BatchOutcome::Failed { results, .. } => results,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Completed { .. })
    }

    /// 诊断记录
    pub fn diagnostic(&self) -> DiagnosticRecord {
        match self {
            BatchOutcome::MissingCredential => DiagnosticRecord::MissingApiKey,
            BatchOutcome::Completed { .. } => DiagnosticRecord::NoErrors,
            BatchOutcome::Failed { trace, .. } => DiagnosticRecord::Failure {
                trace: trace.clone(),
            },
        }
    }

    /// 渲染为 (报告, 诊断)
    pub fn render(&self) -> (String, String) {
        let diagnostic = self.diagnostic().to_string();
        let report = match self {
            BatchOutcome::MissingCredential => MISSING_KEY_MESSAGE.to_string(),
            BatchOutcome::Completed { results } => render_sections(results),
            BatchOutcome::Failed {
                results, summary, ..
            } => format!(
                "❌ An error occurred: {}{}",
                summary,
                render_sections(results)
            ),
        };
        (report, diagnostic)
    }
}

fn render_sections(results: &[EvaluationResult]) -> String {
    results.iter().map(EvaluationResult::to_section).collect()
}
