use anyhow::Result;
use archetype_page_builder::logger;
use archetype_page_builder::orchestrator::App;
use archetype_page_builder::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 读取系列代码（唯一的命令行参数）
    let set_code = match std::env::args().nth(1) {
        Some(code) => code,
        None => {
            eprintln!("用法: archetype_page_builder <系列代码>");
            eprintln!("示例: archetype_page_builder mh3");
            std::process::exit(1);
        }
    };

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config, set_code)?.run().await?;

    Ok(())
}
