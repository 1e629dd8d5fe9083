pub mod image_loader;
pub mod llm_service;
pub mod prompt_builder;
pub mod response_parser;
pub mod result_writer;

pub use image_loader::{EncodedImage, ImageLoader};
pub use llm_service::{ChatModel, LlmService};
pub use prompt_builder::{build_prompt, ContentPart, PromptMessage};
pub use response_parser::{parse_answer, strip_code_fence};
pub use result_writer::ResultWriter;
