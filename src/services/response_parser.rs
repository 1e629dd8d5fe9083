//! 模型回复解析 - 业务能力层
//!
//! 从模型的自由文本回复中提取 `{chatAnswer, chatReasoning}`

use regex::Regex;
use std::sync::OnceLock;

use crate::error::EvalResult;
use crate::models::question::AnswerRecord;

const FENCE: &str = "```";

fn fence_regex() -> &'static Regex {
    static FENCE_RE: OnceLock<Regex> = OnceLock::new();
    FENCE_RE.get_or_init(|| Regex::new(r"```(?:json)?\n?").expect("fence regex is valid"))
}

/// 去掉包裹回复的 ``` 代码块标记
///
/// 只有在回复以 ``` 开头时才处理：删除所有 ``` / ```json 标记（连同紧随的换行），
/// 再去掉结尾残留的 ```，最后去除首尾空白
pub fn strip_code_fence(reply: &str) -> String {
    let content = reply.trim();
    if !content.starts_with(FENCE) {
        return content.to_string();
    }

    let without_fences = fence_regex().replace_all(content, "");
    let stripped = without_fences
        .strip_suffix(FENCE)
        .unwrap_or(without_fences.as_ref());
    stripped.trim().to_string()
}

/// 解析模型回复
///
/// 除了去掉代码块标记外不做任何纠正：JSON 之外还有多余文字、或缺少字段都视为失败
pub fn parse_answer(reply: &str) -> EvalResult<AnswerRecord> {
    let content = strip_code_fence(reply);
    Ok(serde_json::from_str(&content)?)
}
