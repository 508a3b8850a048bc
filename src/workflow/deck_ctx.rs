//! 路演材料处理上下文
//!
//! 封装"我正在处理批次中的第几个文件"这一信息

use std::fmt::Display;

/// 单个文件的处理上下文
#[derive(Debug, Clone)]
pub struct DeckCtx {
    /// 文件在批次中的位置（从1开始）
    pub index: usize,

    /// 批次文件总数
    pub total: usize,

    /// 报告中显示的文件名
    pub display_name: String,
}

impl DeckCtx {
    pub fn new(index: usize, total: usize, display_name: impl Into<String>) -> Self {
        Self {
            index,
            total,
            display_name: display_name.into(),
        }
    }
}

impl Display for DeckCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 {}/{} {}]", self.index, self.total, self.display_name)
    }
}
