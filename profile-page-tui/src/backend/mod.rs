//!
//! src/backend/mod.rs
//! Backend 层：与界面无关的服务
//!
//!     src/backend/mod.rs
//!         mod config_service;     // 读写 config.json
//!         mod export_service;     // 静态 HTML 导出
//!
//!
//!     main.rs 在进入主循环之前使用这一层：
//!
//!         LocalConfigService::load()          // 读取配置（文件缺失时使用默认值）
//!             ↓
//!         ProfileRecord::load()               // 核心库读取个人资料
//!         NavigationGraph::build()            // 配置错误在此中止，终端尚未初始化
//!             ↓
//!         --export DIR ?
//!             是 → ExportService::export()   // 写 index.html / robots.txt / 图标，然后退出
//!             否 → init_terminal() → app::run()
//!

mod config_service;
mod export_service;

pub use config_service::{ConfigService, LocalConfigService};
pub use export_service::ExportService;
