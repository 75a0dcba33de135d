//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub highlight: Color,
    pub accent: Color,
    pub link: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            highlight: Color::Rgb(0, 122, 204),
            accent: Color::Rgb(78, 201, 176),
            link: Color::Rgb(156, 220, 254),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            highlight: Color::Rgb(0, 102, 204),
            accent: Color::Rgb(34, 134, 58),
            link: Color::Rgb(0, 92, 197),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 页面底色
    pub fn page() -> Style {
        let c = colors();
        Style::default().bg(c.bg).fg(c.fg)
    }

    /// 名字 / 节标题
    pub fn title() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// 次要文字（头像地址、描述）
    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 社交账号链接
    pub fn link() -> Style {
        Style::default()
            .fg(colors().link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// 导航提示
    pub fn nav_hint() -> Style {
        Style::default().fg(colors().accent)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(colors().highlight)
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
