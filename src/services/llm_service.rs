//! LLM 服务 - 业务能力层
//!
//! 只负责"把提示词发给补全服务并取回答案"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use std::future::Future;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse, FinishReason,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppResult, EvalError, ServiceError};

/// 补全能力
///
/// 编排层只依赖这个 trait，测试时可以注入替身而不必修改全局配置。
pub trait CompletionClient {
    /// 是否配置了可用的凭证
    fn has_credential(&self) -> bool;

    /// 发送提示词，返回第一个 choice 的文本
    fn complete(&self, prompt: &str) -> impl Future<Output = AppResult<String>> + Send;
}

/// 补全响应中编排层关心的部分
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionChoice {
    pub content: Option<String>,
    /// 模型给出的拒绝说明
    pub refusal: Option<String>,
    /// finish_reason 为 content_filter
    pub content_filtered: bool,
}

/// LLM 服务
///
/// 职责：
/// - 调用补全 API 评估单份材料
/// - 校验响应结构（choices 不能为空）
/// - 不出现 Vec<UploadedFile>
/// - 不关心批次顺序
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: f32,
    has_key: bool,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let mut openai_config = OpenAIConfig::new().with_api_base(&config.openai_api_base);
        if let Some(key) = &config.openai_api_key {
            openai_config = openai_config.with_api_key(key);
        }

        Self {
            client: Client::with_config(openai_config),
            model_name: config.model_name.clone(),
            temperature: config.temperature,
            has_key: config.has_api_key(),
        }
    }

    /// 发送一次补全请求
    ///
    /// # 参数
    /// - `prompt`: 完整的评估提示词，作为唯一的 user 消息发送
    ///
    /// # 返回
    /// 返回第一个 choice 的文本内容
    pub async fn send_to_llm(&self, prompt: &str) -> AppResult<String> {
        if !self.has_key {
            return Err(EvalError::Configuration);
        }

        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("提示词长度: {} 字符", prompt.len());

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| EvalError::from_openai(&self.model_name, e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(self.temperature)
            .build()
            .map_err(|e| EvalError::from_openai(&self.model_name, e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            EvalError::from_openai(&self.model_name, e)
        })?;

        debug!("LLM API 调用成功");

        answer_from_choices(&self.model_name, choices_of(response))
    }
}

impl CompletionClient for LlmService {
    fn has_credential(&self) -> bool {
        self.has_key
    }

    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.send_to_llm(prompt).await
    }
}

fn choices_of(response: CreateChatCompletionResponse) -> Vec<CompletionChoice> {
    response
        .choices
        .into_iter()
        .map(|choice| CompletionChoice {
            content_filtered: matches!(choice.finish_reason, Some(FinishReason::ContentFilter)),
            content: choice.message.content,
            refusal: choice.message.refusal,
        })
        .collect()
}

/// 从响应中取出第一个 choice 的答案
///
/// - choices 为空 → `ServiceError::EmptyChoices`
/// - 被内容过滤或模型拒绝 → `EvalError::Model`
/// - 没有文本 → `ServiceError::EmptyContent`
pub fn answer_from_choices(model: &str, choices: Vec<CompletionChoice>) -> AppResult<String> {
    let choice = choices
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::EmptyChoices {
            model: model.to_string(),
        })?;

    if let Some(refusal) = choice.refusal.filter(|r| !r.trim().is_empty()) {
        return Err(EvalError::Model {
            model: model.to_string(),
            reason: refusal,
        });
    }

    if choice.content_filtered {
        return Err(EvalError::Model {
            model: model.to_string(),
            reason: "response was blocked by the content filter".to_string(),
        });
    }

    let content = choice.content.ok_or_else(|| ServiceError::EmptyContent {
        model: model.to_string(),
    })?;

    Ok(content.trim().to_string())
}
