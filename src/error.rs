//! 错误类型
//!
//! 一次批量评估中可能出现的四类错误：
//!
//! - `Configuration` - 缺少 API 密钥（批次开始前检查）
//! - `Parse` - PDF 无法读取或解析
//! - `Service` - 补全服务的网络/限流/响应格式错误
//! - `Model` - 服务端拒绝生成内容（内容/安全策略）
//!
//! 所有错误都在批次边界被捕获，转换为 (报告, 诊断) 两个字符串，不会导致进程退出。

use async_openai::error::OpenAIError;
use thiserror::Error;

/// 评估错误
#[derive(Debug, Error)]
pub enum EvalError {
    /// 未配置 API 密钥
    #[error("OpenAI API key not found")]
    Configuration,

    /// PDF 解析失败
    #[error("could not read PDF '{file}': {reason}")]
    Parse { file: String, reason: String },

    /// 补全服务错误
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// 模型拒绝回答
    #[error("model '{model}' rejected the request: {reason}")]
    Model { model: String, reason: String },
}

/// 补全服务错误
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 网络或传输层失败（包括响应反序列化失败）
    #[error("completion request failed: {message}")]
    Transport { message: String },

    /// 请求频率或额度限制
    #[error("completion service rate limited the request: {message}")]
    RateLimited { message: String },

    /// 服务返回了错误响应
    #[error("completion service returned an error (code: {code:?}): {message}")]
    Rejected {
        code: Option<String>,
        message: String,
    },

    /// choices 列表为空
    #[error("completion service returned no choices (model: {model})")]
    EmptyChoices { model: String },

    /// 第一个 choice 没有文本内容
    #[error("completion service returned an empty message (model: {model})")]
    EmptyContent { model: String },
}

/// 服务端用来表示内容/安全拒绝的错误码
const CONTENT_REJECTION_CODES: &[&str] = &["content_filter", "content_policy_violation"];

/// 服务端用来表示限流/额度不足的错误码
const RATE_LIMIT_CODES: &[&str] = &["rate_limit_exceeded", "insufficient_quota"];

impl EvalError {
    /// 创建 PDF 解析错误
    pub fn parse(file: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        EvalError::Parse {
            file: file.into(),
            reason: reason.to_string(),
        }
    }

    /// 把 async-openai 的错误映射到本 crate 的错误分类
    ///
    /// # 参数
    /// - `model`: 本次请求使用的模型
    /// - `err`: 客户端返回的原始错误
    pub fn from_openai(model: &str, err: OpenAIError) -> Self {
        match err {
            OpenAIError::ApiError(api) => {
                let code = api.code.clone().or_else(|| api.r#type.clone());
                match code.as_deref() {
                    Some(c) if CONTENT_REJECTION_CODES.contains(&c) => EvalError::Model {
                        model: model.to_string(),
                        reason: api.message,
                    },
                    Some(c) if RATE_LIMIT_CODES.contains(&c) => {
                        ServiceError::RateLimited {
                            message: api.message,
                        }
                        .into()
                    }
                    _ => ServiceError::Rejected {
                        code,
                        message: api.message,
                    }
                    .into(),
                }
            }
            other => ServiceError::Transport {
                message: other.to_string(),
            }
            .into(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, EvalError>;
