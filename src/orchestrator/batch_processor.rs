//! 批量题目处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的评测运行。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：输出启动信息、创建唯一的 LLM 客户端
//! 2. **题目加载**：读取数据集并筛选待评测题目
//! 3. **顺序处理**：逐题执行 `QuestionFlow`，上一题结束后才开始下一题
//! 4. **结果汇总**：收集成功的结果，最后一次性写入输出文件
//! 5. **全局统计**：输出成功/跳过数量
//!
//! 任何单题失败都不会中断运行，即使全部题目都被跳过，也会写出空数组。

use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::load_eligible_questions;
use crate::models::question::{Question, ResultEntry};
use crate::services::{ChatModel, ImageLoader, LlmService, ResultWriter};
use crate::utils::logging::{log_questions_loaded, log_startup, print_final_stats};
use crate::workflow::{ProcessResult, QuestionCtx, QuestionFlow};

/// 应用主结构
pub struct App<M: ChatModel = LlmService> {
    config: Config,
    model: M,
}

impl App<LlmService> {
    /// 初始化应用，创建 LLM 客户端
    pub async fn initialize(config: Config) -> Result<Self> {
        if config.llm_api_key.is_empty() {
            warn!("⚠️ 未设置 OPENAI_API_KEY，模型调用可能会失败");
        }

        let model = LlmService::new(&config);
        Ok(Self::with_model(config, model))
    }
}

impl<M: ChatModel> App<M> {
    /// 使用外部提供的模型客户端创建应用
    pub fn with_model(config: Config, model: M) -> Self {
        Self { config, model }
    }

    /// 运行一次完整的评测
    pub async fn run(&self) -> Result<RunStats> {
        log_startup(&self.config);

        let questions = self.load_questions().await;
        if questions.is_empty() {
            warn!("⚠️ 没有需要评测的题目，将写出空结果");
        } else {
            log_questions_loaded(questions.len());
        }

        let (results, stats) = self.process_all_questions(&questions).await;

        let writer = ResultWriter::new(&self.config.output_path);
        if let Err(e) = writer.save(&results).await {
            error!("❌ 保存结果出错: {}", e);
        }
        info!("✅ 结果已保存至 {}", self.config.output_path);

        print_final_stats(&stats);

        Ok(stats)
    }

    /// 加载待评测题目
    async fn load_questions(&self) -> Vec<Question> {
        info!("📁 正在读取数据集: {}", self.config.dataset_path);
        load_eligible_questions(Path::new(&self.config.dataset_path)).await
    }

    /// 逐题处理，返回成功的结果（保持原顺序）
    async fn process_all_questions(&self, questions: &[Question]) -> (Vec<ResultEntry>, RunStats) {
        let flow = QuestionFlow::new(
            &self.model,
            ImageLoader::new(&self.config.image_base_dir),
            self.config.verbose_logging,
        );

        let total = questions.len();
        let mut results = Vec::with_capacity(total);
        let mut stats = RunStats {
            total,
            ..Default::default()
        };

        for (index, question) in questions.iter().enumerate() {
            let ctx = QuestionCtx::new(question.question, index + 1, total);

            match flow.run(question, &ctx).await {
                ProcessResult::Answered(entry) => {
                    stats.answered += 1;
                    results.push(entry);
                }
                ProcessResult::Skipped(e) => {
                    stats.skipped += 1;
                    warn!(
                        "❗ 题目 {} 处理失败（{}），将被忽略",
                        question.question,
                        e.kind()
                    );
                }
            }
        }

        (results, stats)
    }
}

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub answered: usize,
    pub skipped: usize,
    pub total: usize,
}
