//! 题目处理上下文
//!
//! 封装"我正在处理第几道题"这一信息

use std::fmt::Display;

/// 题目处理上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 数据集中的题号
    pub question_number: u32,

    /// 在待评测列表中的位置（从1开始，仅用于日志显示）
    pub position: usize,

    /// 待评测题目总数
    pub total: usize,
}

impl QuestionCtx {
    pub fn new(question_number: u32, position: usize, total: usize) -> Self {
        Self {
            question_number,
            position,
            total,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[题目 {} ({}/{})]",
            self.question_number, self.position, self.total
        )
    }
}
