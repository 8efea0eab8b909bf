//! 卡图解析服务 - 业务能力层
//!
//! 只负责"逐个标签查图、下载、建路径映射"能力，不关心流程

use crate::clients::ScryfallClient;
use crate::models::ImagePathMap;
use anyhow::Result;
use regex::Regex;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, warn};

/// 卡图解析服务
///
/// 职责：
/// - 把图片标签归一化后交给卡牌数据库做模糊查询
/// - 把查到的卡图流式下载到每个系列独立的目录
/// - 单个标签的失败只记日志、跳过，绝不中断后续标签
pub struct ImageResolver {
    images_dir: String,
    whitespace: Regex,
}

impl ImageResolver {
    /// 创建新的卡图解析服务
    pub fn new(images_dir: impl Into<String>) -> Result<Self> {
        Ok(Self {
            images_dir: images_dir.into(),
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// 逐个标签解析卡图
    ///
    /// # 参数
    /// - `client`: 卡牌数据库客户端
    /// - `set_code`: 系列代码（决定下载目录）
    /// - `labels`: 图片标签列表，严格按顺序处理
    ///
    /// # 返回
    /// 返回 原始标签 → 页面相对路径 的映射；失败的标签不出现在映射中
    pub async fn resolve(
        &self,
        client: &ScryfallClient,
        set_code: &str,
        labels: &[String],
    ) -> Result<ImagePathMap> {
        let mut map = ImagePathMap::new();

        let set_dir = PathBuf::from(&self.images_dir).join(set_code);
        if let Err(e) = fs::create_dir_all(&set_dir).await {
            error!("❌ 创建卡图目录失败 ({}): {}", set_dir.display(), e);
            return Ok(map);
        }

        for label in labels {
            let query = self.normalize_query(label);

            let image_url = match client.lookup_image_url(&query).await {
                Ok(Some(url)) => url,
                Ok(None) => {
                    warn!("⚠️ 未找到卡图: {}", label);
                    continue;
                }
                Err(e) => {
                    warn!("⚠️ 卡图查询失败 ({}): {}", label, e);
                    continue;
                }
            };

            let file_name = format!("{}.jpg", sanitize_label(label));
            let dest = set_dir.join(&file_name);

            match client.download_image(&image_url, &dest).await {
                Ok(()) => {
                    info!("✓ 已下载卡图: {} -> {}", label, dest.display());
                    let relative_path =
                        format!("../{}/{}/{}", self.images_dir, set_code, file_name);
                    map.insert(label.clone(), relative_path);
                }
                Err(e) => {
                    warn!("⚠️ 下载卡图失败 ({}): {}", label, e);
                }
            }
        }

        Ok(map)
    }

    /// 归一化查询文本：连续空白折叠为单个空格
    ///
    /// 特殊字符的百分号编码由客户端在构造请求时处理
    fn normalize_query(&self, label: &str) -> String {
        self.whitespace.replace_all(label.trim(), " ").to_string()
    }
}

/// 从原始标签派生文件名：`[A-Za-z0-9_-]` 之外的字符一律替换为 `_`
fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_resolver() -> ImageResolver {
        ImageResolver::new("images").unwrap()
    }

    #[test]
    fn test_normalize_query_collapses_whitespace() {
        let resolver = create_test_resolver();

        assert_eq!(resolver.normalize_query("Fanatic of Rhonas"), "Fanatic of Rhonas");
        assert_eq!(resolver.normalize_query("  Wing   It \t"), "Wing It");
        assert_eq!(resolver.normalize_query("Tempo\n\nDeck"), "Tempo Deck");
        assert_eq!(resolver.normalize_query("Opt"), "Opt");
    }

    #[test]
    fn test_sanitize_label_replaces_special_chars() {
        assert_eq!(sanitize_label("Fanatic of Rhonas"), "Fanatic_of_Rhonas");
        assert_eq!(sanitize_label("Fire // Ice"), "Fire____Ice");
        assert_eq!(sanitize_label("Ajani's Pridemate!"), "Ajani_s_Pridemate_");
        assert_eq!(sanitize_label("well-formed_name1"), "well-formed_name1");
    }

    #[test]
    fn test_sanitize_label_is_deterministic() {
        let label = "Borborygmos, Enraged / Alt";
        assert_eq!(sanitize_label(label), sanitize_label(label));

        // 产出必须只含安全字符
        assert!(sanitize_label(label)
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }
}
