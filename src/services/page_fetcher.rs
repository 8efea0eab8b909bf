//! 页面抓取服务 - 业务能力层
//!
//! 只负责"把一个 URL 抓成文本"能力，不关心流程

use crate::config::Config;
use crate::error::{AppError, AppResult, FetchError};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// 页面抓取服务
///
/// 职责：
/// - 对单个 URL 发起一次 GET 请求，返回响应正文文本
/// - 不做重试，不做退避，失败原样上抛
pub struct PageFetcher {
    http: reqwest::Client,
}

impl PageFetcher {
    /// 创建新的页面抓取服务
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("archetype_page_builder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }

    /// 抓取 URL 的文本内容
    ///
    /// # 参数
    /// - `url`: 目标地址
    ///
    /// # 返回
    /// 返回响应正文文本；网络失败、非 2xx、正文读取失败均为错误
    pub async fn fetch(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch_request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(FetchError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch_body_failed(url, e))?;

        debug!("GET {} 完成，正文 {} 字节", url, body.len());

        Ok(body)
    }
}
