/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::config::Config;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Startup Pitch Deck Analyzer");
    info!("🤖 模型: {} (temperature {})", config.model_name, config.temperature);
    if !config.has_api_key() {
        info!("⚠️ 未配置 OPENAI_API_KEY，评估请求将直接返回提示");
    }
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
///
/// # 参数
/// - `total`: 本批文件总数
pub fn log_batch_start(total: usize) {
    info!("{}", "=".repeat(60));
    info!("📦 开始评估，共 {} 个文件", total);
    info!("{}", "=".repeat(60));
}

/// 记录单个文件完成信息
///
/// # 参数
/// - `prefix`: 日志前缀（通常是处理上下文）
/// - `answer_len`: 答案字符数
pub fn log_file_done(prefix: impl std::fmt::Display, answer_len: usize) {
    info!("{} ✓ 评估完成 ({} 字符)", prefix, answer_len);
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `total`: 总数
pub fn print_final_stats(success: usize, total: usize) {
    info!("{}", "─".repeat(60));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", success, total);
    if success < total {
        info!("⏭️ 未处理: {}", total - success);
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
