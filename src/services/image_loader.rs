//! 图片加载服务 - 业务能力层
//!
//! 把题目引用的本地图片编码为 data URI，供多模态请求直接内联使用

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::error::{EvalError, EvalResult};

/// 编码后的图片：`data:<mime>;base64,<payload>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// 由文件路径和文件内容构造
    ///
    /// `.png` 结尾视为 `image/png`，其余一律按 `image/jpeg` 处理
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Self {
        let mime_type = if path.to_string_lossy().ends_with(".png") {
            "image/png"
        } else {
            "image/jpeg"
        };
        Self(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 图片加载服务
///
/// 职责：
/// - 将相对路径解析为绝对路径
/// - 并发读取同一道题的所有图片
/// - 单张图片失败只记录日志，不影响其他图片
pub struct ImageLoader {
    base_dir: PathBuf,
}

impl ImageLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 解析图片的绝对路径
    pub fn resolve(&self, image_path: &str) -> PathBuf {
        let joined = self.base_dir.join(image_path);
        std::path::absolute(&joined).unwrap_or(joined)
    }

    /// 读取并编码单张图片
    pub async fn load_one(&self, image_path: &str) -> EvalResult<EncodedImage> {
        let resolved = self.resolve(image_path);
        let bytes = tokio::fs::read(&resolved)
            .await
            .map_err(|source| EvalError::ImageLoad {
                path: resolved.display().to_string(),
                source,
            })?;
        Ok(EncodedImage::from_bytes(&resolved, &bytes))
    }

    /// 并发加载一组图片
    ///
    /// 返回顺序与输入一致，读取失败的图片被跳过
    pub async fn load_all(&self, image_paths: &[String]) -> Vec<EncodedImage> {
        let results = join_all(image_paths.iter().map(|p| self.load_one(p))).await;

        let images: Vec<EncodedImage> = results
            .into_iter()
            .zip(image_paths)
            .filter_map(|(result, path)| match result {
                Ok(image) => Some(image),
                Err(e) => {
                    error!("❌ 加载图片出错: {} ({})", path, e);
                    None
                }
            })
            .collect();

        debug!("图片加载完成: {}/{}", images.len(), image_paths.len());
        images
    }
}
