//! 文本提取服务 - 业务能力层
//!
//! 只负责"从一份 PDF 中取出文本"能力，不关心批次

use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::PdfDocument;
use crate::models::{FileSource, UploadedFile};

/// 文本提取能力
///
/// 编排层通过这个 trait 调用提取，测试中可以替换为计数用的替身。
pub trait TextExtractor {
    /// 返回文档所有页面的文本（按页码顺序拼接）
    fn extract(&self, file: &UploadedFile) -> AppResult<String>;
}

/// 基于 lopdf 的 PDF 文本提取
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        let document = match &file.source {
            FileSource::Path(path) => PdfDocument::open(path)?,
            FileSource::Bytes(bytes) => PdfDocument::from_bytes(&file.display_name, bytes)?,
        };

        // 提取失败时 document 在 ? 返回前被 drop，句柄同样会释放
        let text = document.text()?;
        document.close();

        debug!("{} 提取到 {} 个字符", file.display_name, text.chars().count());
        Ok(text)
    }
}
