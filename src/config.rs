/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目数据集文件
    pub dataset_path: String,
    /// 图片所在的根目录（题目中的图片路径相对于此目录）
    pub image_base_dir: String,
    /// 结果输出文件
    pub output_path: String,
    /// 是否打印模型原始回复
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 采样温度，偏低以获得稳定输出
    pub llm_temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: "./Enade 2021 ADS/questions.json".to_string(),
            image_base_dir: "./Enade 2021 ADS".to_string(),
            output_path: "./results.json".to_string(),
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o".to_string(),
            llm_temperature: 0.3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            dataset_path: std::env::var("DATASET_PATH").unwrap_or(default.dataset_path),
            image_base_dir: std::env::var("IMAGE_BASE_DIR").unwrap_or(default.image_base_dir),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or(default.output_path),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("OPENAI_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("OPENAI_API_BASE").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_temperature: std::env::var("LLM_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_temperature),
        }
    }
}
