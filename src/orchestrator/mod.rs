//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次评测运行的调度，是整个系统的"指挥中心"。
//!
//! ### `batch_processor` - 批量题目处理器
//! - 管理应用生命周期（初始化、运行）
//! - 持有唯一的模型客户端，并注入到流程层
//! - 顺序处理所有待评测题目
//! - 写出结果文件，输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Question>)
//!     ↓
//! workflow::QuestionFlow (处理单个 Question)
//!     ↓
//! services (能力层：image / prompt / llm / parse / write)
//! ```

pub mod batch_processor;

pub use batch_processor::{App, RunStats};
