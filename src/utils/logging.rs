//! 日志工具模块
//!
//! 提供运行横幅和统计信息的输出

use tracing::info;

use crate::config::Config;
use crate::orchestrator::RunStats;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 图片类技术题评测");
    info!("🤖 模型: {} (temperature {})", config.llm_model_name, config.llm_temperature);
    info!("📄 数据集: {}", config.dataset_path);
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
pub fn log_questions_loaded(total: usize) {
    info!("✓ 找到 {} 道待评测的题目", total);
    info!("💡 逐题处理，上一题完成后再开始下一题\n");
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.answered, stats.total);
    info!("❌ 跳过: {}", stats.skipped);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
