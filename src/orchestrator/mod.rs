//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责单次运行的完整流程调度：
//!
//! ```text
//! App (一次运行)
//!     ↓
//! PageFetcher (抓取原型文章，失败即终止)
//!     ↓
//! ArchetypeExtractor (解析原型记录)
//!     ↓
//! ImageResolver (逐个标签取图，单项失败只跳过)
//!     ↓
//! PageRenderer (生成 HTML 文档)
//!     ↓
//! sets/<系列代码>.html (写盘，失败即终止)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：只做调度和统计，不做具体业务判断
//! 2. **显式配置**：目录、基础 URL 全部来自 Config，组件之间不共享隐式状态
//! 3. **两级失败**：抓取和落盘失败终止整次运行；取图失败按标签隔离

use crate::clients::ScryfallClient;
use crate::config::Config;
use crate::error::AppError;
use crate::services::{ArchetypeExtractor, ImageResolver, PageFetcher, PageRenderer};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    set_code: String,
    fetcher: PageFetcher,
    extractor: ArchetypeExtractor,
    resolver: ImageResolver,
    renderer: PageRenderer,
    client: ScryfallClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, set_code: String) -> Result<Self> {
        let fetcher = PageFetcher::new(&config)?;
        let extractor = ArchetypeExtractor::new()?;
        let resolver = ImageResolver::new(config.images_dir.clone())?;
        let renderer = PageRenderer::new();
        let client = ScryfallClient::new(&config)?;

        Ok(Self {
            config,
            set_code,
            fetcher,
            extractor,
            resolver,
            renderer,
            client,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        log_startup(&self.set_code);

        // 抓取原型文章（致命：失败即终止）
        let source_url = format!(
            "{}/{}-archetypes.html",
            self.config.source_base_url, self.set_code
        );
        info!("📥 正在抓取原型文章: {}", source_url);
        let html = match self.fetcher.fetch(&source_url).await {
            Ok(html) => html,
            Err(e) => {
                error!("❌ 抓取原型文章失败: {}", e);
                return Err(e.into());
            }
        };

        // 解析原型记录
        let records = self.extractor.extract(&html);
        if records.is_empty() {
            warn!("⚠️ 文章中没有找到任何原型标题");
        }
        info!("✓ 解析出 {} 个原型", records.len());

        // 逐个标签取图（单项失败只跳过）
        let labels: Vec<String> = records.iter().map(|r| r.image_label.clone()).collect();
        let images = self
            .resolver
            .resolve(&self.client, &self.set_code, &labels)
            .await?;
        info!("✓ 成功取得 {}/{} 张卡图", images.len(), labels.len());

        // 渲染并落盘（致命：失败即终止）
        let document = self.renderer.render(&self.set_code, &records, &images);
        let output_path = self.save_document(&document).await?;

        print_final_stats(records.len(), images.len(), &output_path);

        Ok(())
    }

    /// 把渲染好的文档写入 sets/<系列代码>.html
    async fn save_document(&self, document: &str) -> Result<PathBuf> {
        let sets_dir = PathBuf::from(&self.config.sets_dir);
        if let Err(e) = fs::create_dir_all(&sets_dir).await {
            error!("❌ 创建输出目录失败 ({}): {}", sets_dir.display(), e);
            return Err(AppError::dir_create_failed(sets_dir.display().to_string(), e).into());
        }

        let output_path = sets_dir.join(format!("{}.html", self.set_code));
        if let Err(e) = fs::write(&output_path, document).await {
            error!("❌ 写入页面失败 ({}): {}", output_path.display(), e);
            return Err(AppError::file_write_failed(output_path.display().to_string(), e).into());
        }

        Ok(output_path)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(set_code: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 系列 {} 原型页面生成", set_code);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(archetypes: usize, images: usize, output_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 本次运行统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 原型: {} 个", archetypes);
    info!("🖼️ 卡图: {} 张", images);
    info!("{}", "=".repeat(60));
    info!("\n页面已保存至: {}", output_path.display());
}
