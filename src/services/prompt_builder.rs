//! 提示词构建 - 业务能力层
//!
//! 纯函数：题目 + 图片 -> 一条多模态用户消息，不做任何 IO

use crate::models::question::Question;
use crate::services::image_loader::EncodedImage;

/// 多模态消息中的一个片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    Image(EncodedImage),
}

/// 发送给模型的一条用户消息（与具体 SDK 无关）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub parts: Vec<ContentPart>,
}

impl PromptMessage {
    /// 文本部分
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            ContentPart::Text(text) => Some(text.as_str()),
            ContentPart::Image(_) => None,
        })
    }

    pub fn image_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, ContentPart::Image(_)))
            .count()
    }
}

/// 把选项格式化为 `A: 内容`，每行一个
pub fn format_options(question: &Question) -> String {
    question
        .options
        .iter()
        .map(|(letter, text)| format!("{}: {}", letter.to_uppercase(), text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 构建题目的文本部分
pub fn build_prompt_text(question: &Question) -> String {
    format!(
        "Você é um especialista em resolução de questões técnicas com imagens.\n\n\
         **Questão {}:**\n\
         {}\n\n\
         **Alternativas:**\n{}\n\n\
         Siga as instruções:\n\
         1. Descreva os elementos relevantes das imagens.\n\
         2. Resolva a questão com um raciocínio lógico passo a passo.\n\
         3. Justifique a alternativa escolhida e refute as demais.\n\n\
         Se nenhuma alternativa for correta, use a letra \"I\".\n\
         Retorne no seguinte formato JSON:\n\
         {{\n  \"chatAnswer\": \"letra\",\n  \"chatReasoning\": \"raciocínio completo\"\n}}",
        question.question,
        question.text,
        format_options(question)
    )
}

/// 构建完整的多模态消息：一个文本块 + 按顺序排列的图片块
pub fn build_prompt(question: &Question, images: &[EncodedImage]) -> PromptMessage {
    let mut parts = Vec::with_capacity(images.len() + 1);
    parts.push(ContentPart::Text(build_prompt_text(question)));
    parts.extend(images.iter().cloned().map(ContentPart::Image));
    PromptMessage { parts }
}
