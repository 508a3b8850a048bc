//! 集成测试共用的替身与 PDF 生成工具

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pitch_deck_analyzer::{AppResult, CompletionClient, EvalError, TextExtractor, UploadedFile};

/// 按文件名返回预设文本的提取器，记录每次调用
#[derive(Clone, Default)]
pub struct FakeExtractor {
    texts: HashMap<String, String>,
    failing: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, text: &str) -> Self {
        self.texts.insert(name.to_string(), text.to_string());
        self
    }

    /// 对该文件返回解析错误
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextExtractor for FakeExtractor {
    fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        self.calls.lock().unwrap().push(file.display_name.clone());
        if self.failing.contains(&file.display_name) {
            return Err(EvalError::parse(&file.display_name, "invalid file header"));
        }
        Ok(self
            .texts
            .get(&file.display_name)
            .cloned()
            .unwrap_or_default())
    }
}

/// 记录提示词的补全客户端
///
/// 答案为 `answer for <提示词中的第一行原文>`；提示词包含 `failing_marker` 时返回模型拒绝
#[derive(Clone)]
pub struct FakeClient {
    has_key: bool,
    failing_marker: Option<String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            has_key: true,
            failing_marker: None,
            prompts: Arc::default(),
        }
    }

    pub fn without_key() -> Self {
        Self {
            has_key: false,
            ..Self::new()
        }
    }

    pub fn rejecting(marker: &str) -> Self {
        Self {
            failing_marker: Some(marker.to_string()),
            ..Self::new()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeClient {
    fn has_credential(&self) -> bool {
        self.has_key
    }

    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(marker) = &self.failing_marker {
            if prompt.contains(marker.as_str()) {
                return Err(EvalError::Model {
                    model: "gpt-4".to_string(),
                    reason: "content policy".to_string(),
                });
            }
        }

        let body = prompt
            .split("\"\"\"\n")
            .nth(1)
            .and_then(|rest| rest.lines().next())
            .unwrap_or_default();
        Ok(format!("answer for {}", body))
    }
}

/// 生成每页一段文字的 PDF；传入空列表得到 0 页文档
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 18.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

pub fn upload(name: &str) -> UploadedFile {
    UploadedFile::from_bytes(name, Vec::new())
}
