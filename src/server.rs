//! HTTP 上传界面
//!
//! 只是批量评估操作外面的一层壳：
//! - `GET /` - 上传表单
//! - `POST /evaluate` - multipart 上传（字段名 `files`，可重复），返回 `{ report, diagnostics }`
//! - `GET /health` - 健康检查

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::models::{is_pdf_file, UploadedFile};
use crate::orchestrator::BatchProcessor;
use crate::services::{CompletionClient, TextExtractor};

/// 上传大小上限
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// 评估响应
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateResponse {
    /// Evaluation Output
    pub report: String,
    /// Debug Output
    pub diagnostics: String,
}

/// 创建路由
pub fn create_router<E, C>(processor: Arc<BatchProcessor<E, C>>) -> Router
where
    E: TextExtractor + Send + Sync + 'static,
    C: CompletionClient + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/evaluate", post(evaluate::<E, C>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(processor)
}

/// 启动服务并阻塞到收到 Ctrl-C
pub async fn start_server<E, C>(processor: Arc<BatchProcessor<E, C>>, addr: &str) -> Result<()>
where
    E: TextExtractor + Send + Sync + 'static,
    C: CompletionClient + Send + Sync + 'static,
{
    let app = create_router(processor);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法监听地址: {}", addr))?;

    info!("🚀 服务已启动: http://{}", addr);
    info!("📄 上传页面: http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

async fn evaluate<E, C>(
    State(processor): State<Arc<BatchProcessor<E, C>>>,
    multipart: Multipart,
) -> Result<Json<EvaluateResponse>, (StatusCode, String)>
where
    E: TextExtractor + Send + Sync + 'static,
    C: CompletionClient + Send + Sync + 'static,
{
    let files = read_uploads(multipart).await?;
    info!("收到 {} 个上传文件", files.len());

    // 批次内逐个处理文件，lopdf 解析直接在请求任务上跑，不放到 spawn_blocking
    let (report, diagnostics) = processor.evaluate_pitch_decks(&files).await;
    Ok(Json(EvaluateResponse {
        report,
        diagnostics,
    }))
}

/// 读取 multipart 中的所有 `files` 字段；出现非 PDF 文件时整个请求被拒绝
async fn read_uploads(mut multipart: Multipart) -> Result<Vec<UploadedFile>, (StatusCode, String)> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (e.status(), e.body_text()))?
    {
        if field.name() != Some("files") {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        if !is_pdf_file(&name) {
            warn!("拒绝非 PDF 上传: {:?}", name);
            return Err((
                StatusCode::BAD_REQUEST,
                format!("Only .pdf files are accepted (got '{}')", name),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| (e.status(), e.body_text()))?;
        files.push(UploadedFile::from_bytes(name, bytes.to_vec()));
    }

    Ok(files)
}
