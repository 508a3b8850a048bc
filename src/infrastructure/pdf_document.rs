//! PDF 文档句柄 - 基础设施层
//!
//! 持有打开的文档资源，只暴露"按页读取文本"的能力

use crate::error::{AppResult, EvalError};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// PDF 文档句柄
///
/// 职责：
/// - 持有唯一的 `lopdf::Document`
/// - 按页码顺序提供每一页的文本层
/// - 不认识上传文件 / 报告
///
/// 句柄在 `close()` 或 `Drop` 时释放，无论提取成功与否都会释放。
pub struct PdfDocument {
    name: String,
    inner: Option<Document>,
}

impl PdfDocument {
    /// 从磁盘打开文档
    pub fn open(path: &Path) -> AppResult<Self> {
        let name = path.display().to_string();
        let document = Document::load(path).map_err(|e| EvalError::parse(&name, e))?;
        debug!("打开文档: {} ({} 页)", name, document.get_pages().len());
        Ok(Self {
            name,
            inner: Some(document),
        })
    }

    /// 从内存中的上传内容打开文档
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> AppResult<Self> {
        let name = name.into();
        let document = Document::load_mem(bytes).map_err(|e| EvalError::parse(&name, e))?;
        debug!("打开文档: {} ({} 页)", name, document.get_pages().len());
        Ok(Self {
            name,
            inner: Some(document),
        })
    }

    fn document(&self) -> AppResult<&Document> {
        self.inner
            .as_ref()
            .ok_or_else(|| EvalError::parse(&self.name, "document handle already closed"))
    }

    /// 页数
    pub fn page_count(&self) -> AppResult<usize> {
        Ok(self.document()?.get_pages().len())
    }

    /// 按页码顺序返回每一页的文本
    ///
    /// 纯图片页面返回空字符串（不做 OCR）。
    /// 单页文本层无法解码时（例如缺少 ToUnicode 的 CID 字体）记 warn 并按空白页处理，
    /// 只有文档本身无法读取才算解析失败。
    pub fn page_texts(&self) -> AppResult<Vec<String>> {
        let document = self.document()?;
        // get_pages 返回 BTreeMap，按页码升序遍历
        let texts = document
            .get_pages()
            .keys()
            .map(|&page_number| match document.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    warn!("{} 第 {} 页无法提取文本，按空白页处理: {}", self.name, page_number, e);
                    String::new()
                }
            })
            .collect();
        Ok(texts)
    }

    /// 所有页面文本按顺序拼接
    pub fn text(&self) -> AppResult<String> {
        Ok(self.page_texts()?.concat())
    }

    /// 显式释放文档句柄
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.inner.take().is_some() {
            debug!("释放文档句柄: {}", self.name);
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for PdfDocument {
    fn drop(&mut self) {
        self.release();
    }
}
