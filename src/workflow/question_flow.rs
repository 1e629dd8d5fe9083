//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 加载图片
//! 2. 构建多模态提示词
//! 3. 调用模型
//! 4. 解析回复 → 结果记录

use tracing::{debug, info, warn};

use crate::error::EvalError;
use crate::models::question::{Question, ResultEntry};
use crate::services::{build_prompt, parse_answer, ChatModel, ImageLoader};
use crate::workflow::question_ctx::QuestionCtx;

/// 题目处理结果
#[derive(Debug)]
pub enum ProcessResult {
    /// 模型给出了可解析的答案
    Answered(ResultEntry),
    /// 模型调用或回复解析失败，题目被跳过
    Skipped(EvalError),
}

impl ProcessResult {
    pub fn into_entry(self) -> Option<ResultEntry> {
        match self {
            ProcessResult::Answered(entry) => Some(entry),
            ProcessResult::Skipped(_) => None,
        }
    }
}

/// 题目处理流程
///
/// - 编排单道题的完整处理流程
/// - 模型客户端由外部注入，本身不创建任何连接
/// - 任何失败都收敛为 `ProcessResult::Skipped`，不会向上传播
pub struct QuestionFlow<'a, M: ChatModel> {
    model: &'a M,
    image_loader: ImageLoader,
    verbose_logging: bool,
}

impl<'a, M: ChatModel> QuestionFlow<'a, M> {
    pub fn new(model: &'a M, image_loader: ImageLoader, verbose_logging: bool) -> Self {
        Self {
            model,
            image_loader,
            verbose_logging,
        }
    }

    pub async fn run(&self, question: &Question, ctx: &QuestionCtx) -> ProcessResult {
        info!("{} 题干: {}", ctx, question.text_preview(80));

        // ========== 1. 加载图片 ==========
        let images = self.image_loader.load_all(&question.images).await;
        if images.len() < question.images.len() {
            warn!(
                "{} ⚠️ 仅加载了 {}/{} 张图片",
                ctx,
                images.len(),
                question.images.len()
            );
        }

        // ========== 2. 构建提示词 ==========
        let prompt = build_prompt(question, &images);

        // ========== 3. 调用模型 ==========
        info!("{} 🤖 正在调用模型 {}...", ctx, self.model.model_name());
        let reply = match self.model.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("{} ❌ 模型调用出错: {}", ctx, e);
                return ProcessResult::Skipped(e);
            }
        };

        if self.verbose_logging {
            info!("{} 模型原始回复:\n{}", ctx, reply);
        } else {
            debug!("{} 模型原始回复:\n{}", ctx, reply);
        }

        // ========== 4. 解析回复 ==========
        match parse_answer(&reply) {
            Ok(record) => {
                let entry = ResultEntry::new(question, record);
                info!(
                    "{} ✓ 模型答案: {} | 标准答案: {}",
                    ctx, entry.chat_answer, entry.correct_answer
                );
                ProcessResult::Answered(entry)
            }
            Err(e) => {
                warn!("{} ❌ 回复解析出错: {}", ctx, e);
                ProcessResult::Skipped(e)
            }
        }
    }
}
