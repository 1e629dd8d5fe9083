//! # Exam Vision Eval
//!
//! 把需要看图作答的技术类选择题逐题发送给多模态模型，解析模型给出的答案，
//! 并与标准答案一起写入结果文件
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、答案、结果记录，以及数据集加载与筛选
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Question
//! - `ImageLoader` - 读取并编码图片
//! - `prompt_builder` - 构建多模态提示词
//! - `LlmService` - 调用模型（`ChatModel` 的默认实现）
//! - `response_parser` - 解析模型回复
//! - `ResultWriter` - 写 results.json 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuestionCtx` - 上下文封装（题号 + 进度）
//! - `QuestionFlow` - 流程编排（image → prompt → LLM → parse）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 顺序处理全部题目并写出结果
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{EvalError, EvalResult};
pub use models::{AnswerRecord, Question, ResultEntry};
pub use orchestrator::{App, RunStats};
pub use services::{ChatModel, LlmService};
pub use workflow::{ProcessResult, QuestionCtx, QuestionFlow};
