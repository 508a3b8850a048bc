//! 提示词构建 - 业务能力层
//!
//! 纯函数：同样的输入永远得到同样的提示词，任何输入（包括空字符串）都不会失败。

/// 要求模型从材料中提取的字段
pub const EVALUATION_FIELDS: [&str; 5] = [
    "All team member contact information",
    "Team member qualifications and team size",
    "Company name",
    "Location",
    "A short summary of the idea",
];

/// 固定的五个评估问题
pub const EVALUATION_QUESTIONS: [&str; 5] = [
    "What painful problem is this solving, and for whom?",
    "Why is this solution uniquely better than existing alternatives?",
    "How big is the market opportunity, and how fast is it growing?",
    "What evidence is there that this works (traction, users, pilots)?",
    "Why is this team the right one to win?",
];

/// 角色设定
pub const ROLE_FRAMING: &str = "You are a startup evaluator.";

/// 构建评估提示词
///
/// # 参数
/// - `pdf_text`: 从 PDF 中提取的文本（可以为空）
///
/// # 返回
/// 包含角色设定、五个提取字段、五个问题以及以 `"""` 包裹的原文的提示词
pub fn build_prompt(pdf_text: &str) -> String {
    let fields: String = EVALUATION_FIELDS
        .iter()
        .map(|field| format!("- {}\n", field))
        .collect();

    let questions: String = EVALUATION_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, question)| format!("{}. {}\n", i + 1, question))
        .collect();

    format!(
        r#"
{} From the provided PDF content, extract the following:
{}
Then answer the following five questions clearly:

{}
PDF Content:
"""
{}
"""
"#,
        ROLE_FRAMING, fields, questions, pdf_text
    )
}
