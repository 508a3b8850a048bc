//! 批量评估处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是"评估路演材料"这一操作的唯一入口。
//!
//! ## 核心流程
//!
//! 1. **凭证检查**：没有 API 密钥时直接返回固定提示，不处理任何文件
//! 2. **顺序处理**：按提交顺序对每个文件执行 提取 → 提示词 → 评估
//! 3. **首错终止**：任一文件失败即停止，后续文件不再处理，已完成的结果保留在报告中
//! 4. **结果渲染**：总是返回 (报告, 诊断) 两个字符串，不会把错误抛给调用方
//!
//! ## 状态
//!
//! RUNNING（遍历文件）→ TERMINATED（COMPLETED 或 FAILED），批次不可恢复、不重试。

use tracing::{error, warn};

use crate::config::Config;
use crate::error::EvalError;
use crate::models::{BatchOutcome, EvaluationResult, UploadedFile};
use crate::services::{CompletionClient, LlmService, PdfTextExtractor, TextExtractor};
use crate::utils::logging::{log_batch_start, log_file_done, print_final_stats};
use crate::workflow::{DeckCtx, DeckFlow};

/// 批量评估处理器
///
/// 提取器和补全客户端都通过构造函数注入。
pub struct BatchProcessor<E, C> {
    flow: DeckFlow<E, C>,
}

impl BatchProcessor<PdfTextExtractor, LlmService> {
    /// 按配置创建默认的处理器（lopdf 提取 + async-openai 客户端）
    pub fn from_config(config: &Config) -> Self {
        let flow = DeckFlow::new(PdfTextExtractor::new(), LlmService::new(config))
            .with_verbose_logging(config.verbose_logging);
        Self::new(flow)
    }
}

impl<E: TextExtractor, C: CompletionClient> BatchProcessor<E, C> {
    pub fn new(flow: DeckFlow<E, C>) -> Self {
        Self { flow }
    }

    /// 从提取器和客户端直接创建
    pub fn with_parts(extractor: E, client: C) -> Self {
        Self::new(DeckFlow::new(extractor, client))
    }

    /// 评估一批路演材料
    ///
    /// # 返回
    /// (报告, 诊断)。成功与失败只通过诊断中的固定标记区分。
    pub async fn evaluate_pitch_decks(&self, files: &[UploadedFile]) -> (String, String) {
        self.run(files).await.render()
    }

    /// 处理整个批次，返回终止状态
    pub async fn run(&self, files: &[UploadedFile]) -> BatchOutcome {
        if !self.flow.client().has_credential() {
            warn!("⚠️ 未配置 API 密钥，跳过 {} 个文件", files.len());
            return BatchOutcome::MissingCredential;
        }

        let total = files.len();
        log_batch_start(total);

        let mut results = Vec::with_capacity(total);
        for (idx, file) in files.iter().enumerate() {
            let ctx = DeckCtx::new(idx + 1, total, &file.display_name);

            match self.flow.run(file, &ctx).await {
                Ok(result) => {
                    log_file_done(&ctx, result.answer.chars().count());
                    results.push(result);
                }
                Err(e) => {
                    error!("{} ❌ 处理失败，终止批次: {}", ctx, e);
                    print_final_stats(results.len(), total);
                    return failed_outcome(results, &ctx, e);
                }
            }
        }

        print_final_stats(results.len(), total);
        BatchOutcome::Completed { results }
    }
}

/// 把失败转换为 (一句话摘要, 完整错误链)
fn failed_outcome(
    results: Vec<EvaluationResult>,
    ctx: &DeckCtx,
    err: EvalError,
) -> BatchOutcome {
    let summary = err.to_string();
    let err = anyhow::Error::new(err).context(format!(
        "failed to evaluate '{}' (file {} of {}, {} completed before failure)",
        ctx.display_name,
        ctx.index,
        ctx.total,
        results.len()
    ));

    BatchOutcome::Failed {
        results,
        summary,
        // {:?} 输出完整的 Caused by 链；设置 RUST_BACKTRACE=1 时还会附带回溯
        trace: format!("{:?}", err),
    }
}
