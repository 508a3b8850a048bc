//! 路演材料处理流程 - 流程层
//!
//! 核心职责：定义"一份材料"的完整处理流程
//!
//! 流程顺序：
//! 1. 提取 PDF 文本
//! 2. 构建评估提示词
//! 3. 调用补全服务得到评估结果

use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::{EvaluationResult, UploadedFile};
use crate::services::{build_prompt, CompletionClient, TextExtractor};
use crate::utils::logging::truncate_text;
use crate::workflow::deck_ctx::DeckCtx;

/// 单份材料处理流程
///
/// - 编排 提取 → 提示词 → 评估
/// - 只依赖业务能力（services），通过构造函数注入
/// - 任何一步失败都原样向上返回，由编排层决定如何处理
pub struct DeckFlow<E, C> {
    extractor: E,
    client: C,
    verbose_logging: bool,
}

impl<E: TextExtractor, C: CompletionClient> DeckFlow<E, C> {
    pub fn new(extractor: E, client: C) -> Self {
        Self {
            extractor,
            client,
            verbose_logging: false,
        }
    }

    /// 打开详细日志（输出提取文本与答案的预览）
    pub fn with_verbose_logging(mut self, verbose: bool) -> Self {
        self.verbose_logging = verbose;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn run(&self, file: &UploadedFile, ctx: &DeckCtx) -> AppResult<EvaluationResult> {
        info!("{} 📖 正在提取文本...", ctx);
        let text = self.extractor.extract(file)?;

        if text.trim().is_empty() {
            // 纯图片材料不做 OCR，照常发送空文本
            info!("{} ⚠️ 未提取到文本（可能是扫描件）", ctx);
        } else if self.verbose_logging {
            info!("{} 文本预览: {}", ctx, truncate_text(&text, 80));
        }

        let prompt = build_prompt(&text);
        debug!("{} 提示词长度: {} 字符", ctx, prompt.len());

        info!("{} 🤖 正在请求评估...", ctx);
        let answer = self.client.complete(&prompt).await?;

        if self.verbose_logging {
            info!("{} 答案预览: {}", ctx, truncate_text(&answer, 80));
        }

        Ok(EvaluationResult {
            display_name: file.display_name.clone(),
            answer,
        })
    }
}
