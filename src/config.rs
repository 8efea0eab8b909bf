/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 原型文章所在站点的基础 URL
    pub source_base_url: String,
    /// 卡牌数据库 API 的基础 URL
    pub card_api_base_url: String,
    /// 卡图存放目录
    pub images_dir: String,
    /// 生成页面存放目录
    pub sets_dir: String,
    /// 单次 HTTP 请求超时时间（秒）
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_base_url: "https://draftarchetypes.com".to_string(),
            card_api_base_url: "https://api.scryfall.com".to_string(),
            images_dir: "images".to_string(),
            sets_dir: "sets".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            source_base_url: std::env::var("SOURCE_BASE_URL").unwrap_or(default.source_base_url),
            card_api_base_url: std::env::var("CARD_API_BASE_URL").unwrap_or(default.card_api_base_url),
            images_dir: std::env::var("IMAGES_DIR").unwrap_or(default.images_dir),
            sets_dir: std::env::var("SETS_DIR").unwrap_or(default.sets_dir),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
        }
    }
}
