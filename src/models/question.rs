use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 数据集中的一道选择题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 题号
    pub question: u32,
    pub text: String,
    /// 选项字母 -> 选项内容，保持数据集中的顺序
    pub options: IndexMap<String, String>,
    /// 标准答案字母
    pub answer: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "necessImage", default)]
    pub necess_image: bool,
    #[serde(rename = "tecnicalQuestion", default)]
    pub tecnical_question: bool,
}

impl Question {
    /// 题干预览（日志用）
    pub fn text_preview(&self, max_len: usize) -> String {
        crate::utils::logging::truncate_text(&self.text, max_len)
    }
}

/// 从模型回复中解析出的答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(rename = "chatAnswer")]
    pub chat_answer: String,
    #[serde(rename = "chatReasoning")]
    pub chat_reasoning: String,
}

/// 结果文件中的一条记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(rename = "questionNumber")]
    pub question_number: u32,
    /// 模型答案（小写）
    #[serde(rename = "chatAnswer")]
    pub chat_answer: String,
    /// 标准答案（保持原样）
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    #[serde(rename = "chatReasoning")]
    pub chat_reasoning: String,
}

impl ResultEntry {
    pub fn new(question: &Question, record: AnswerRecord) -> Self {
        Self {
            question_number: question.question,
            chat_answer: record.chat_answer.to_lowercase(),
            correct_answer: question.answer.clone(),
            chat_reasoning: record.chat_reasoning,
        }
    }
}
