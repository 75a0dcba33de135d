//! 日志初始化
//!
//! TUI 占用整个终端，日志只写入 `<data_dir>/profile-page/profile-page.log`。
//! 文件打不开时不装载输出层，日志被丢弃。

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志文件名
const LOG_FILE_NAME: &str = "profile-page.log";

/// 获取日志目录路径（没有数据目录的平台退回临时目录）
fn get_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("profile-page")
}

/// 以追加方式打开 `dir` 下的日志文件，必要时创建目录
fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}

/// 初始化 tracing；核心库的 `log` 记录经由 tracing-log 桥接进来
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let dir = get_log_dir();

    match open_log_file(&dir) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::info!(dir = %dir.display(), "Logging to {LOG_FILE_NAME}");
        }
        Err(_) => tracing_subscriber::registry().with(filter).init(),
    }
}
