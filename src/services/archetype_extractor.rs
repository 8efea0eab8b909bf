//! 原型解析服务 - 业务能力层
//!
//! 只负责"把文章 HTML 解析成原型记录序列"能力，不做任何 I/O

use crate::models::{ArchetypeRecord, NO_DESCRIPTION, NO_IMAGE_TITLE, NO_TITLE};
use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// 原型标题对应的元素（一个标题 = 一个原型）
const HEADING_TAG: &str = "h2";
/// 配图说明元素的选择器
const CAPTION_SELECTOR: &str = "p.wp-caption-text";

/// 原型解析服务
///
/// 职责：
/// - 从文章 HTML 中按文档顺序提取 (标题, 描述, 图片标签) 记录
/// - 结构不符合预期时用占位文本降级，而不是报错
///
/// 注意：图片标签与标题是按序号对齐的，不是按内容匹配的。
/// 两个列表数量不一致时，多出的标题会拿到占位标签。
pub struct ArchetypeExtractor {
    heading_selector: Selector,
    caption_selector: Selector,
}

impl ArchetypeExtractor {
    /// 创建新的原型解析服务
    pub fn new() -> Result<Self> {
        let heading_selector = Selector::parse(HEADING_TAG)
            .map_err(|e| anyhow::anyhow!("无法解析标题选择器: {}", e))?;
        let caption_selector = Selector::parse(CAPTION_SELECTOR)
            .map_err(|e| anyhow::anyhow!("无法解析配图说明选择器: {}", e))?;

        Ok(Self {
            heading_selector,
            caption_selector,
        })
    }

    /// 从文章 HTML 中解析原型记录
    ///
    /// # 参数
    /// - `html`: 文章页面的完整 HTML
    ///
    /// # 返回
    /// 按文档顺序排列的原型记录；没有任何标题时返回空序列
    pub fn extract(&self, html: &str) -> Vec<ArchetypeRecord> {
        let document = Html::parse_document(html);

        // 第一步：收集配图说明，取第一个分号前的文本作为图片标签
        let labels: Vec<String> = document
            .select(&self.caption_selector)
            .map(|caption| {
                let text: String = caption.text().collect();
                text.split(';').next().unwrap_or("").trim().to_string()
            })
            .collect();

        debug!("找到 {} 条配图说明", labels.len());

        // 第二步：逐个标题构建记录，图片标签按序号对齐
        let mut records = Vec::new();
        for (index, heading) in document.select(&self.heading_selector).enumerate() {
            let title = {
                let text: String = heading.text().collect();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    NO_TITLE.to_string()
                } else {
                    trimmed.to_string()
                }
            };

            let description = self.collect_description(&heading);

            let image_label = labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| NO_IMAGE_TITLE.to_string());

            records.push(ArchetypeRecord {
                title,
                description,
                image_label,
            });
        }

        debug!("解析出 {} 条原型记录", records.len());

        records
    }

    /// 收集标题之后、下一个标题之前所有兄弟元素的文本
    ///
    /// 配图说明样式的兄弟元素不计入描述
    fn collect_description(&self, heading: &ElementRef<'_>) -> String {
        let mut fragments = Vec::new();

        for sibling in heading.next_siblings() {
            let Some(element) = ElementRef::wrap(sibling) else {
                continue;
            };

            if element.value().name() == HEADING_TAG {
                break;
            }

            if self.caption_selector.matches(&element) {
                continue;
            }

            let text: String = element.text().collect();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                fragments.push(trimmed.to_string());
            }
        }

        if fragments.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            fragments.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_extractor() -> ArchetypeExtractor {
        ArchetypeExtractor::new().unwrap()
    }

    #[test]
    fn test_extract_basic_page() {
        let extractor = create_test_extractor();

        let html = r#"
            <html><body>
            <p class="wp-caption-text">Fanatic of Rhonas; illustrated by someone</p>
            <p class="wp-caption-text">Wing It</p>
            <h2>GR Stompy</h2>
            <p>Big creatures.</p>
            <p>Curve out and attack.</p>
            <h2>UW Fliers</h2>
            <p>Evasive threats.</p>
            </body></html>
        "#;

        let records = extractor.extract(html);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "GR Stompy");
        assert_eq!(records[0].description, "Big creatures. Curve out and attack.");
        assert_eq!(records[0].image_label, "Fanatic of Rhonas");
        assert_eq!(records[1].title, "UW Fliers");
        assert_eq!(records[1].description, "Evasive threats.");
        assert_eq!(records[1].image_label, "Wing It");
    }

    #[test]
    fn test_more_headings_than_captions() {
        let extractor = create_test_extractor();

        // 3 个标题，2 条配图说明：第 3 条记录拿到占位标签
        let html = r#"
            <html><body>
            <p class="wp-caption-text">Alpha</p>
            <p class="wp-caption-text">Beta</p>
            <h2>One</h2><p>a</p>
            <h2>Two</h2><p>b</p>
            <h2>Three</h2><p>c</p>
            </body></html>
        "#;

        let records = extractor.extract(html);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].image_label, "Alpha");
        assert_eq!(records[1].image_label, "Beta");
        assert_eq!(records[2].image_label, NO_IMAGE_TITLE);
    }

    #[test]
    fn test_heading_without_description() {
        let extractor = create_test_extractor();

        let html = r#"
            <html><body>
            <h2>Lonely</h2>
            <h2>Next</h2>
            <p>text for next</p>
            </body></html>
        "#;

        let records = extractor.extract(html);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, NO_DESCRIPTION);
        assert_eq!(records[1].description, "text for next");
    }

    #[test]
    fn test_empty_heading_gets_sentinel_title() {
        let extractor = create_test_extractor();

        let html = "<html><body><h2>   </h2><p>desc</p></body></html>";
        let records = extractor.extract(html);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, NO_TITLE);
    }

    #[test]
    fn test_caption_sibling_excluded_from_description() {
        let extractor = create_test_extractor();

        let html = r#"
            <html><body>
            <h2>Deck</h2>
            <p>real description</p>
            <p class="wp-caption-text">Some Card; art credit</p>
            <p>more text</p>
            </body></html>
        "#;

        let records = extractor.extract(html);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "real description more text");
        assert_eq!(records[0].image_label, "Some Card");
    }

    #[test]
    fn test_no_headings_yields_empty_sequence() {
        let extractor = create_test_extractor();

        let html = "<html><body><p>just a paragraph</p></body></html>";
        let records = extractor.extract(html);

        assert!(records.is_empty());
    }

    #[test]
    fn test_caption_without_semicolon_used_whole() {
        let extractor = create_test_extractor();

        let html = r#"
            <html><body>
            <p class="wp-caption-text">  Plain Caption  </p>
            <h2>Deck</h2><p>d</p>
            </body></html>
        "#;

        let records = extractor.extract(html);

        assert_eq!(records[0].image_label, "Plain Caption");
    }
}
