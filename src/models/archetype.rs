//! 原型数据模型
//!
//! 封装从文章页面解析出的一条原型记录

use std::collections::HashMap;

/// 标题缺失时的占位文本
pub const NO_TITLE: &str = "No title";
/// 描述缺失时的占位文本
pub const NO_DESCRIPTION: &str = "No description";
/// 图片标签缺失时的占位文本
pub const NO_IMAGE_TITLE: &str = "No image title";

/// 一条原型记录
///
/// 每个顶级标题对应一条记录，顺序与文档中出现的顺序一致。
/// 顺序是有意义的：它决定了渲染顺序和分组方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeRecord {
    /// 原型名称（标题文本）
    pub title: String,
    /// 原型描述（标题后所有兄弟段落的文本拼接）
    pub description: String,
    /// 用于查询卡图的标签（来自同序号的配图说明）
    pub image_label: String,
}

/// 图片标签 → 页面相对路径 的映射
///
/// 查图失败的标签不会出现在映射中，消费方必须把"键不存在"
/// 当作"没有图片"处理，而不是期望空值。
pub type ImagePathMap = HashMap<String, String>;
