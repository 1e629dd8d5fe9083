use thiserror::Error;

/// 评测流程中的错误类型
///
/// 所有错误都只影响单道题（或单张图片），不会中断整个批次
#[derive(Debug, Error)]
pub enum EvalError {
    /// 数据集文件不存在或无法解析
    #[error("数据集加载失败 ({path}): {source}")]
    DatasetLoad {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 单张图片读取失败
    #[error("图片加载失败 ({path}): {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 模型 API 调用失败，或返回内容为空
    #[error("模型调用失败 (模型: {model}): {message}")]
    ModelCall { model: String, message: String },

    /// 模型回复不是合法的答案 JSON
    #[error("模型回复解析失败: {source}")]
    ResponseParse {
        #[source]
        source: serde_json::Error,
    },

    /// 结果文件写入失败
    #[error("结果写入失败 ({path}): {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EvalError {
    /// 创建模型调用错误
    pub fn model_call(model: impl Into<String>, message: impl Into<String>) -> Self {
        EvalError::ModelCall {
            model: model.into(),
            message: message.into(),
        }
    }

    /// 创建数据集加载错误
    pub fn dataset_load(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        EvalError::DatasetLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 创建结果写入错误
    pub fn output_write(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        EvalError::OutputWrite {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 日志里使用的简短分类
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::DatasetLoad { .. } => "数据集",
            EvalError::ImageLoad { .. } => "图片",
            EvalError::ModelCall { .. } => "模型调用",
            EvalError::ResponseParse { .. } => "回复解析",
            EvalError::OutputWrite { .. } => "结果写入",
        }
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(source: serde_json::Error) -> Self {
        EvalError::ResponseParse { source }
    }
}

/// 评测结果类型
pub type EvalResult<T> = Result<T, EvalError>;
