//! 结果写入服务 - 业务能力层
//!
//! 只负责"写 results.json"能力，不关心流程

use std::path::PathBuf;
use tracing::debug;

use crate::error::{EvalError, EvalResult};
use crate::models::question::ResultEntry;

/// 结果写入服务
///
/// 每次写入都会覆盖已有文件
pub struct ResultWriter {
    output_path: PathBuf,
}

impl ResultWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &std::path::Path {
        &self.output_path
    }

    /// 以 2 空格缩进的 JSON 数组写入全部结果
    pub async fn save(&self, entries: &[ResultEntry]) -> EvalResult<()> {
        let path_display = self.output_path.display().to_string();

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| EvalError::output_write(&path_display, e))?;

        tokio::fs::write(&self.output_path, json)
            .await
            .map_err(|e| EvalError::output_write(&path_display, e))?;

        debug!("写入 {} 条结果到 {}", entries.len(), path_display);
        Ok(())
    }
}
