//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 默认级别为 info，`verbose` 时为 debug；设置了 `RUST_LOG` 时以环境变量为准。
/// 重复调用不会 panic（测试中可能多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pitch_deck_analyzer={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
