//! LLM 服务 - 业务能力层
//!
//! 只负责"把一条多模态消息发给模型并拿回文本"，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrl,
    },
    Client,
};
use std::future::Future;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{EvalError, EvalResult};
use crate::services::prompt_builder::{ContentPart, PromptMessage};

/// 对话模型抽象
///
/// 流程层只依赖这个 trait，测试中可以替换为脚本化的实现
pub trait ChatModel {
    /// 发送一条用户消息，返回模型的原始文本回复
    fn complete(&self, prompt: &PromptMessage) -> impl Future<Output = EvalResult<String>> + Send;

    /// 模型名称（日志用）
    fn model_name(&self) -> &str;
}

/// LLM 服务
///
/// 职责：
/// - 把 `PromptMessage` 转换为 Chat Completions 请求
/// - 调用 API 并提取第一条回复
/// - 不解析回复内容，不重试
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: f32,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            temperature: config.llm_temperature,
        }
    }

    /// 把消息片段转换为 SDK 的内容片段
    fn to_content_parts(prompt: &PromptMessage) -> Vec<ChatCompletionRequestUserMessageContentPart> {
        prompt
            .parts
            .iter()
            .map(|part| match part {
                ContentPart::Text(text) => ChatCompletionRequestUserMessageContentPart::Text(
                    ChatCompletionRequestMessageContentPartText { text: text.clone() },
                ),
                ContentPart::Image(image) => {
                    ChatCompletionRequestUserMessageContentPart::ImageUrl(
                        ChatCompletionRequestMessageContentPartImage {
                            image_url: ImageUrl {
                                url: image.as_str().to_string(),
                                detail: Some(ImageDetail::Auto),
                            },
                        },
                    )
                }
            })
            .collect()
    }

    async fn send(&self, prompt: &PromptMessage) -> EvalResult<String> {
        debug!(
            "调用 LLM API，模型: {}，包含 {} 张图片",
            self.model_name,
            prompt.image_count()
        );

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(
                Self::to_content_parts(prompt),
            ))
            .build()
            .map_err(|e| EvalError::model_call(&self.model_name, e.to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(self.temperature)
            .build()
            .map_err(|e| EvalError::model_call(&self.model_name, e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            EvalError::model_call(&self.model_name, e.to_string())
        })?;

        debug!("LLM API 调用成功");

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| EvalError::model_call(&self.model_name, "LLM 返回内容为空"))
    }
}

impl ChatModel for LlmService {
    fn complete(&self, prompt: &PromptMessage) -> impl Future<Output = EvalResult<String>> + Send {
        self.send(prompt)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
