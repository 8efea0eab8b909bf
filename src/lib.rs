//! # Archetype Page Builder
//!
//! 一个用于抓取套牌原型文章并生成静态页面的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装与外部卡牌数据库的交互
//! - `ScryfallClient` - 模糊查询卡图 URL、流式下载卡图
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `PageFetcher` - 抓取页面文本能力
//! - `ArchetypeExtractor` - 从 HTML 中解析原型记录能力
//! - `ImageResolver` - 逐个标签查图、下载、建路径映射能力
//! - `PageRenderer` - 纯函数式生成最终 HTML 文档能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - 单次运行的完整流程：抓取 → 解析 → 取图 → 渲染 → 落盘
//!
//! ## 数据流向
//!
//! ```text
//! PageFetcher (原型文章 HTML)
//!     ↓
//! ArchetypeExtractor (Vec<ArchetypeRecord>)
//!     ↓
//! ImageResolver (ImagePathMap，逐个标签顺序处理)
//!     ↓
//! PageRenderer (完整 HTML 文档)
//!     ↓
//! sets/<系列代码>.html
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;

// 重新导出常用类型
pub use clients::ScryfallClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ArchetypeRecord, ImagePathMap};
pub use orchestrator::App;
pub use services::{ArchetypeExtractor, ImageResolver, PageFetcher, PageRenderer};
