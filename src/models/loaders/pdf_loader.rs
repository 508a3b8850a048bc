use crate::models::{is_pdf_file, UploadedFile};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 把命令行参数转换为上传文件列表
///
/// 文件按参数顺序加入；目录会展开为其中的 PDF 文件（按文件名排序）。
/// 非 PDF 文件会被跳过并记录警告。
pub async fn collect_uploads(paths: &[PathBuf]) -> Result<Vec<UploadedFile>> {
    let mut uploads = Vec::new();

    for path in paths {
        let metadata = fs::metadata(path)
            .await
            .with_context(|| format!("无法访问: {}", path.display()))?;

        if metadata.is_dir() {
            uploads.extend(load_pdf_folder(path).await?);
        } else if is_pdf_file(path) {
            uploads.push(UploadedFile::from_path(path));
        } else {
            tracing::warn!("跳过非 PDF 文件: {}", path.display());
        }
    }

    Ok(uploads)
}

/// 从文件夹中加载所有 PDF 文件
pub async fn load_pdf_folder(folder: &Path) -> Result<Vec<UploadedFile>> {
    let mut pdf_files = Vec::new();
    let mut entries = fs::read_dir(folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && is_pdf_file(&path) {
            pdf_files.push(path);
        }
    }

    if pdf_files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 PDF 文件", folder.display());
    }

    pdf_files.sort();
    for path in &pdf_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
    }

    Ok(pdf_files.into_iter().map(UploadedFile::from_path).collect())
}
