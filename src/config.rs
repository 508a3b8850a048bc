use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    /// API 密钥，缺失时批量评估直接返回提示，不会在启动时报错
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub model_name: String,
    /// 采样温度
    pub temperature: f32,
    // --- 服务配置 ---
    /// HTTP 上传界面的监听地址
    pub server_addr: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_api_base: "https://api.openai.com/v1".to_string(),
            model_name: "gpt-4".to_string(),
            temperature: 0.5,
            server_addr: "127.0.0.1:7860".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，再用环境变量覆盖
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config.with_env_overrides())
    }

    fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().or(self.openai_api_key),
            openai_api_base: std::env::var("OPENAI_API_BASE").unwrap_or(self.openai_api_base),
            model_name: std::env::var("ANALYZER_MODEL").unwrap_or(self.model_name),
            temperature: std::env::var("ANALYZER_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.temperature),
            server_addr: std::env::var("ANALYZER_ADDR").unwrap_or(self.server_addr),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 是否配置了可用的 API 密钥（空白字符串视为未配置）
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
