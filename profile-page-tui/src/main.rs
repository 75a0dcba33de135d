//! Profile Page TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与导出 (`backend/`)
//!
//! 导航逻辑（激活节、提示计时、交叉处理）全部在 profile-page-core 中，
//! 这里只负责把终端事件翻译过去，并实现一个终端视口。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                // 命令行参数
//!     init_tracing()              // 日志写入文件
//!     LocalConfigService::load()  // 配置，命令行覆盖
//!     ProfileRecord::load()       // 个人资料
//!     NavigationGraph::build()    // 配置错误在这里中止，终端尚未初始化
//!
//!     --export DIR:
//!         ExportService::export() // 写出静态页面后退出
//!
//!     否则：
//!         model::App::new()       // 创建 APP 实例，激活个人资料节
//!         init_terminal()         // 原始模式、备用屏幕、鼠标捕获
//!         app::run()              // 运行 app.rs 主循环
//!         restore_terminal()      // 无论成功与否，都恢复终端
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use profile_page_core::{AssetCatalog, NavigationGraph, ProfileRecord};

use backend::{ConfigService, ExportService, LocalConfigService};
use util::{init_terminal, init_tracing, restore_terminal};
use view::layout::content_height;

/// 图标在导出页面中的引用前缀
const ASSET_PREFIX: &str = "assets/social";

/// Single-page personal profile with section navigation
#[derive(Parser, Debug)]
#[command(name = "profile-page", version, about)]
struct Cli {
    /// Profile JSON file (defaults to `profile_path` from the config)
    profile: Option<PathBuf>,

    /// Config file (defaults to <config_dir>/profile-page/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding account icons referenced by `icon`
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Write index.html, robots.txt and icons to DIR instead of starting the TUI
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Save the effective config and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    init_tracing();

    // 1. 加载配置，命令行参数优先
    let config_service = cli
        .config
        .map_or_else(LocalConfigService::default, LocalConfigService::new);
    let mut config = config_service.load()?;
    if let Some(profile) = cli.profile {
        config.profile_path = profile;
    }
    if let Some(assets) = cli.assets {
        config.assets_dir = Some(assets);
    }

    if cli.write_config {
        config_service.save(&config)?;
        println!("Wrote {}", config_service.path().display());
        return Ok(());
    }

    view::theme::set_theme(config.theme);

    // 2. 个人资料与导航图
    let record = ProfileRecord::load(&config.profile_path).with_context(|| {
        format!("failed to load profile {}", config.profile_path.display())
    })?;
    let graph = NavigationGraph::build(&record).context("invalid profile")?;
    let icons = match &config.assets_dir {
        Some(dir) => AssetCatalog::scan(dir, ASSET_PREFIX)
            .with_context(|| format!("failed to scan assets {}", dir.display()))?,
        None => AssetCatalog::empty(),
    };
    tracing::info!(
        sections = graph.len(),
        icons = icons.len(),
        "Profile loaded"
    );

    // 3. 静态导出
    if let Some(out_dir) = cli.export {
        let summary = ExportService::new(&record, &graph, &icons, config.avatar_size)
            .favicon(config.favicon.clone())
            .stylesheet(config.stylesheet.clone())
            .export(&out_dir)?;
        println!(
            "Wrote {} and {} ({} icon(s))",
            summary.index.display(),
            summary.robots.display(),
            summary.assets_copied
        );
        return Ok(());
    }

    // 4. 创建应用实例（在初始化终端之前，失败时终端保持原样）
    let (_, rows) = crossterm::terminal::size()?;
    let mut app = model::App::new(
        record,
        graph,
        config.navigation,
        config.avatar_size,
        content_height(rows),
        Instant::now(),
    )?;
    app.status_message = Some(config.profile_path.display().to_string());

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let result = app::run(&mut terminal, &mut app, tick_rate);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("TUI exited with error: {e:#}");
    }
    result
}
