//! 页面渲染服务 - 业务能力层
//!
//! 只负责"把原型记录和卡图路径拼成完整 HTML 文档"能力，
//! 纯函数，不做任何 I/O

use crate::models::{ArchetypeRecord, ImagePathMap};
use std::fmt::Write;

/// 每个分组容器里的原型数量
const GROUP_SIZE: usize = 5;

/// 页面渲染服务
///
/// 职责：
/// - 按记录顺序生成原型块（标题、可选卡图、描述）
/// - 每 5 条记录放进一个分组容器
/// - 所有插值文本先做 HTML 转义再写入文档
pub struct PageRenderer;

impl PageRenderer {
    /// 创建新的页面渲染服务
    pub fn new() -> Self {
        Self
    }

    /// 渲染完整 HTML 文档
    ///
    /// # 参数
    /// - `set_code`: 系列代码（用于页面标题）
    /// - `records`: 按文档顺序排列的原型记录
    /// - `images`: 图片标签 → 页面相对路径 的映射
    ///
    /// # 返回
    /// 返回完整 HTML 文档文本；标签不在映射中的记录不输出卡图
    pub fn render(
        &self,
        set_code: &str,
        records: &[ArchetypeRecord],
        images: &ImagePathMap,
    ) -> String {
        let page_title = format!("{} Archetypes", set_code.to_uppercase());

        let mut doc = String::new();
        doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(doc, "<title>{}</title>", escape_html(&page_title));
        doc.push_str(
            "<link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/css2?family=Spectral:wght@400;600&display=swap\">\n",
        );
        doc.push_str("<link rel=\"stylesheet\" href=\"/style.css\">\n</head>\n<body>\n");
        let _ = writeln!(doc, "<h1>{}</h1>", escape_html(&page_title));

        for (index, record) in records.iter().enumerate() {
            if index % GROUP_SIZE == 0 {
                doc.push_str("<div class=\"archetype-row\">\n");
            }

            doc.push_str("<div class=\"archetype\">\n");
            let _ = writeln!(doc, "<h2>{}</h2>", escape_html(&record.title));
            if let Some(path) = images.get(&record.image_label) {
                let _ = writeln!(
                    doc,
                    "<img src=\"{}\" alt=\"{}\">",
                    escape_html(path),
                    escape_html(&record.image_label)
                );
            }
            let _ = writeln!(doc, "<p>{}</p>", escape_html(&record.description));
            doc.push_str("</div>\n");

            // 第 5 条或最后一条记录之后关闭分组容器
            if index % GROUP_SIZE == GROUP_SIZE - 1 || index == records.len() - 1 {
                doc.push_str("</div>\n");
            }
        }

        doc.push_str("</body>\n</html>\n");
        doc
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// 转义插值文本中的 HTML 特殊字符
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str, image_label: &str) -> ArchetypeRecord {
        ArchetypeRecord {
            title: title.to_string(),
            description: description.to_string(),
            image_label: image_label.to_string(),
        }
    }

    #[test]
    fn test_twelve_records_make_three_groups() {
        let renderer = PageRenderer::new();
        let records: Vec<_> = (0..12)
            .map(|i| record(&format!("Deck {}", i), "desc", &format!("Card {}", i)))
            .collect();

        let doc = renderer.render("mh3", &records, &ImagePathMap::new());

        let opens = doc.matches("<div class=\"archetype-row\">").count();
        assert_eq!(opens, 3);

        // 每个打开的容器都必须关闭：archetype 块 12 个 + 分组 3 个
        let blocks = doc.matches("<div class=\"archetype\">").count();
        assert_eq!(blocks, 12);
        let closes = doc.matches("</div>").count();
        assert_eq!(closes, 15);
    }

    #[test]
    fn test_image_emitted_only_when_resolved() {
        let renderer = PageRenderer::new();
        let records = vec![
            record("Aggro Deck", "fast", "Aggro"),
            record("Control Deck", "slow", "Control"),
        ];

        let mut images = ImagePathMap::new();
        images.insert("Aggro".to_string(), "../images/mh3/Aggro.jpg".to_string());

        let doc = renderer.render("mh3", &records, &images);

        assert_eq!(doc.matches("<img ").count(), 1);
        assert!(doc.contains("src=\"../images/mh3/Aggro.jpg\""));
        assert!(doc.contains("<h2>Control Deck</h2>"));
    }

    #[test]
    fn test_interpolated_text_is_escaped() {
        let renderer = PageRenderer::new();
        let records = vec![record(
            "<script>alert(1)</script>",
            "a & b \"quoted\"",
            "Card",
        )];

        let doc = renderer.render("mh3", &records, &ImagePathMap::new());

        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(doc.contains("a &amp; b &quot;quoted&quot;"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = PageRenderer::new();
        let records = vec![record("Deck", "desc", "Card")];
        let mut images = ImagePathMap::new();
        images.insert("Card".to_string(), "../images/otj/Card.jpg".to_string());

        let first = renderer.render("otj", &records, &images);
        let second = renderer.render("otj", &records, &images);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_records_render_bare_document() {
        let renderer = PageRenderer::new();
        let doc = renderer.render("mh3", &[], &ImagePathMap::new());

        assert!(doc.contains("<title>MH3 Archetypes</title>"));
        assert!(!doc.contains("archetype-row"));
    }
}
