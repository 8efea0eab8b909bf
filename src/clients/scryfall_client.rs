/// 卡牌数据库 API 客户端
///
/// 封装所有与外部卡牌数据库相关的调用逻辑
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::NamedCard;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 卡牌数据库 API 客户端
pub struct ScryfallClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScryfallClient {
    /// 创建新的卡牌数据库客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("archetype_page_builder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.card_api_base_url.clone(),
        })
    }

    /// 模糊查询卡图地址
    ///
    /// # 参数
    /// - `query`: 已归一化的卡名（连续空白已折叠为单个空格），
    ///   百分号编码由请求构造时统一处理
    ///
    /// # 返回
    /// 找到卡图时返回 `Some(url)`，未找到（包括 404）返回 `None`
    pub async fn lookup_image_url(&self, query: &str) -> AppResult<Option<String>> {
        let url = format!("{}/cards/named", self.base_url);
        debug!("卡图查询: {} (fuzzy={})", url, query);

        let response = self
            .http
            .get(&url)
            .query(&[("fuzzy", query)])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&url, e))?;

        // 数据库用 404 表示"没有这张卡"，属于正常业务结果
        if !response.status().is_success() {
            debug!("卡图查询无结果: {} (状态码 {})", query, response.status());
            return Ok(None);
        }

        let card: NamedCard = response
            .json()
            .await
            .map_err(|e| AppError::api_request_failed(&url, e))?;

        Ok(card.normal_image_url())
    }

    /// 下载卡图并流式写入本地文件
    ///
    /// # 参数
    /// - `image_url`: 卡图地址
    /// - `dest`: 目标文件路径
    pub async fn download_image(&self, image_url: &str, dest: &Path) -> AppResult<()> {
        let mut response = self
            .http
            .get(image_url)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(image_url, e))?
            .error_for_status()
            .map_err(|e| AppError::api_request_failed(image_url, e))?;

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| AppError::file_write_failed(dest.display().to_string(), e))?;

        // 按块写入，不把整张图片读进内存
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AppError::api_request_failed(image_url, e))?
        {
            file.write_all(&chunk).await?;
        }

        file.flush().await?;

        debug!("卡图已写入: {}", dest.display());

        Ok(())
    }
}
