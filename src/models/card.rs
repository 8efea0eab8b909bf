//! 卡牌数据库响应模型

use serde::Deserialize;

/// 模糊查询返回的卡牌信息
///
/// 只解析需要的字段，其余字段一律忽略。
/// `image_uris` 字段缺失表示没有找到对应卡图。
#[derive(Debug, Clone, Deserialize)]
pub struct NamedCard {
    /// 卡图地址集合
    pub image_uris: Option<CardImageUris>,
}

/// 卡图的各种尺寸地址
#[derive(Debug, Clone, Deserialize)]
pub struct CardImageUris {
    /// 标准尺寸卡图地址
    pub normal: Option<String>,
}

impl NamedCard {
    /// 提取标准尺寸卡图地址
    pub fn normal_image_url(self) -> Option<String> {
        self.image_uris.and_then(|uris| uris.normal)
    }
}
