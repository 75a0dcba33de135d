//! 配置服务
//!
//! 配置保存在 `<config_dir>/profile-page/config.json`，所有字段都可省略。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use profile_page_core::dom::DEFAULT_AVATAR_SIZE;
use profile_page_core::NavigationSettings;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 默认刷新间隔（毫秒）
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("profile-page")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 个人资料 JSON 路径
    pub profile_path: PathBuf,
    /// 图标资源目录
    pub assets_dir: Option<PathBuf>,
    pub theme: Theme,
    pub navigation: NavigationSettings,
    /// 头像尺寸（像素）
    pub avatar_size: u32,
    /// 主循环刷新间隔（毫秒），同时决定平滑滚动的步频
    pub tick_rate_ms: u64,
    /// 导出页面的站点图标地址，未设置时不输出 `<link rel="icon">`
    pub favicon: Option<String>,
    /// 导出页面的样式表地址，未设置时不输出样式表链接
    pub stylesheet: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from("profile.json"),
            assets_dir: None,
            theme: Theme::Dark,
            navigation: NavigationSettings::default(),
            avatar_size: DEFAULT_AVATAR_SIZE,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            favicon: None,
            stylesheet: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置；文件不存在时返回默认值
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(get_config_dir().join("config.json"))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config {}", self.path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write config {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("config.json"));

        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.navigation.hint_hide_delay_ms, 5000);
        assert_eq!(config.favicon, None);
        assert_eq!(config.stylesheet, None);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "theme": "light", "navigation": { "hint_hide_delay_ms": 1500 } }"#,
        )
        .unwrap();

        let config = LocalConfigService::new(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.navigation.hint_hide_delay_ms, 1500);
        assert!((config.navigation.intersection_threshold - 0.4).abs() < f32::EPSILON);
        assert_eq!(config.avatar_size, 200);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            profile_path: PathBuf::from("/srv/me.json"),
            assets_dir: Some(PathBuf::from("/srv/icons")),
            favicon: Some("favicon.ico".to_string()),
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LocalConfigService::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }
}
