use crate::error::{EvalError, EvalResult};
use crate::models::question::Question;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// 从 JSON 数组文件加载全部原始记录
///
/// 这里只要求顶层是数组，单条记录的结构留到筛选之后再检查
pub async fn load_records(dataset_path: &Path) -> EvalResult<Vec<Value>> {
    let path_display = dataset_path.display().to_string();

    let content = fs::read_to_string(dataset_path)
        .await
        .map_err(|e| EvalError::dataset_load(&path_display, e))?;

    let records: Vec<Value> =
        serde_json::from_str(&content).map_err(|e| EvalError::dataset_load(&path_display, e))?;

    Ok(records)
}

/// 两个标记都为 JSON `true` 的记录才需要评测
pub fn is_eligible_record(record: &Value) -> bool {
    record.get("necessImage") == Some(&Value::Bool(true))
        && record.get("tecnicalQuestion") == Some(&Value::Bool(true))
}

/// 只保留需要图片且属于技术类的题目，保持原有顺序
///
/// 不参与评测的记录不做结构检查；参与评测但结构不完整的记录记录错误后跳过
pub fn filter_eligible(records: Vec<Value>) -> Vec<Question> {
    records
        .into_iter()
        .filter(is_eligible_record)
        .filter_map(|record| {
            let number = record.get("question").cloned().unwrap_or(Value::Null);
            match serde_json::from_value::<Question>(record) {
                Ok(question) => Some(question),
                Err(e) => {
                    error!("❌ 题目 {} 格式错误，将被忽略: {}", number, e);
                    None
                }
            }
        })
        .collect()
}

/// 加载并筛选待评测题目
///
/// 文件不存在或格式错误时记录错误并返回空列表，由调用方继续处理（输出空结果）
pub async fn load_eligible_questions(dataset_path: &Path) -> Vec<Question> {
    match load_records(dataset_path).await {
        Ok(records) => {
            let total = records.len();
            let eligible = filter_eligible(records);
            info!("✓ 数据集共 {} 道题，其中 {} 道需要评测", total, eligible.len());
            eligible
        }
        Err(e) => {
            error!("❌ 处理数据集文件出错: {}", e);
            Vec::new()
        }
    }
}
