use std::time::Instant;

use profile_page_core::dom::markup_to_lines;
use profile_page_core::{
    NavigationController, NavigationGraph, NavigationSettings, PageResult, ProfileRecord,
};

use super::viewport::TerminalViewport;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 个人资料
    pub record: ProfileRecord,

    /// 导航控制器（持有导航图、激活节与提示计时器）
    pub navigation: NavigationController<TerminalViewport>,

    /// 各内容节正文的纯文本行，与 `record.sections` 一一对应
    pub section_lines: Vec<Vec<String>>,

    /// 头像尺寸（像素）
    pub avatar_size: u32,

    /// 是否显示快捷键帮助
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建应用实例并激活个人资料节
    pub fn new(
        record: ProfileRecord,
        graph: NavigationGraph,
        settings: NavigationSettings,
        avatar_size: u32,
        page_height: u16,
        now: Instant,
    ) -> PageResult<Self> {
        let settings = settings.normalized();
        let viewport =
            TerminalViewport::new(graph.len(), page_height, settings.intersection_threshold);
        let mut navigation = NavigationController::new(graph, viewport, settings);
        navigation.initialize(now)?;

        let section_lines = record
            .sections
            .iter()
            .map(|section| markup_to_lines(&section.content))
            .collect();

        Ok(Self {
            should_quit: false,
            record,
            navigation,
            section_lines,
            avatar_size,
            show_help: false,
            status_message: None,
        })
    }

    pub fn viewport(&self) -> &TerminalViewport {
        self.navigation.viewport()
    }
}
