//! 上传文件与单份评估结果

use std::fmt;
use std::path::{Path, PathBuf};

/// 文件内容来源
#[derive(Clone)]
pub enum FileSource {
    /// 磁盘上的文件（命令行模式）
    Path(PathBuf),
    /// 内存中的上传内容（HTTP 模式）
    Bytes(Vec<u8>),
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            FileSource::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

/// 上传的 PDF 文件
///
/// 每次请求创建一次，处理完即丢弃
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 报告中显示的文件名
    pub display_name: String,
    pub source: FileSource,
}

impl UploadedFile {
    /// 从磁盘路径创建，显示名为路径本身
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            display_name: path.display().to_string(),
            source: FileSource::Path(path),
        }
    }

    /// 从上传内容创建
    pub fn from_bytes(display_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            display_name: display_name.into(),
            source: FileSource::Bytes(bytes),
        }
    }
}

/// 单份路演材料的评估结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub display_name: String,
    /// 模型返回的原始文本
    pub answer: String,
}

impl EvaluationResult {
    /// 渲染为报告中的一节
    pub fn to_section(&self) -> String {
        format!("\n\n---\n📄 **{}**:\n{}\n", self.display_name, self.answer)
    }
}

/// 判断文件名是否为 PDF（不区分大小写）
pub fn is_pdf_file(name: impl AsRef<Path>) -> bool {
    name.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
