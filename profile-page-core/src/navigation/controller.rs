//! 导航控制器
//!
//! 持有唯一的“当前激活节”。点击提示、按键、交叉观察最终都汇入
//! `scroll_to_section` → `activate_section` 这一条路径，后到的事件生效。

use std::time::Instant;

use crate::config::NavigationSettings;
use crate::error::{PageError, PageResult};
use crate::graph::{NavigationGraph, SectionNode};
use crate::types::{HintDirection, SectionId};

use super::hints::{HintKey, HintTimers};
use super::input::{IntersectionEntry, KeyOutcome, NavKey};
use super::viewport::{ScrollBehavior, Viewport};

/// 导航控制器
pub struct NavigationController<V: Viewport> {
    graph: NavigationGraph,
    viewport: V,
    settings: NavigationSettings,
    /// 初始化完成前为 None
    active: Option<SectionId>,
    hints: HintTimers,
}

impl<V: Viewport> NavigationController<V> {
    pub fn new(graph: NavigationGraph, viewport: V, settings: NavigationSettings) -> Self {
        let settings = settings.normalized();
        let hints = HintTimers::new(&graph, settings.hint_hide_delay());
        Self {
            graph,
            viewport,
            settings,
            active: None,
            hints,
        }
    }

    /// 激活个人资料节，之后恰好有一个节处于激活状态
    pub fn initialize(&mut self, now: Instant) -> PageResult<()> {
        self.activate_section(&SectionId::profile(), now)
    }

    pub fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    /// 当前激活节
    pub fn active_section(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn active_node(&self) -> Option<&SectionNode> {
        self.active.as_ref().and_then(|id| self.graph.get(id))
    }

    /// 当前激活节在文档中的位置
    pub fn active_position(&self) -> Option<usize> {
        self.active.as_ref().and_then(|id| self.graph.position(id))
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// 将 `id` 设为唯一的激活节并刷新提示。
    /// `id` 不存在时返回 `SectionNotFound`，激活节保持不变。
    pub fn activate_section(&mut self, id: &SectionId, now: Instant) -> PageResult<()> {
        self.graph.require(id)?;

        if self.active.as_ref() != Some(id) {
            log::debug!(
                "Activate section: {} -> {}",
                self.active.as_ref().map_or("<none>", SectionId::as_str),
                id
            );
        }
        self.active = Some(id.clone());
        self.refresh_hints(now);
        Ok(())
    }

    /// 平滑滚动到 `id`，随即激活（不等待滚动完成）
    pub fn scroll_to_section(&mut self, id: &SectionId, now: Instant) -> PageResult<()> {
        let position = self
            .graph
            .position(id)
            .ok_or_else(|| PageError::SectionNotFound(id.to_string()))?;

        self.viewport
            .scroll_into_view(id, position, ScrollBehavior::Smooth);
        self.activate_section(id, now)
    }

    /// 滚动到下一节；已是最后一节或尚未初始化时返回 `false`
    pub fn scroll_to_next(&mut self, now: Instant) -> bool {
        let target = self
            .active
            .as_ref()
            .and_then(|id| self.graph.next_of(id))
            .map(|node| node.id.clone());
        self.scroll_to_sibling(target, now)
    }

    /// 滚动到上一节；已是第一节或尚未初始化时返回 `false`
    pub fn scroll_to_previous(&mut self, now: Instant) -> bool {
        let target = self
            .active
            .as_ref()
            .and_then(|id| self.graph.previous_of(id))
            .map(|node| node.id.clone());
        self.scroll_to_sibling(target, now)
    }

    fn scroll_to_sibling(&mut self, target: Option<SectionId>, now: Instant) -> bool {
        match target {
            Some(id) => dispatch(self.scroll_to_section(&id, now)).is_some(),
            None => false,
        }
    }

    /// 显示激活节的所有自动隐藏提示，并重新计时
    pub fn refresh_hints(&mut self, now: Instant) {
        let Some(node) = self.active.as_ref().and_then(|id| self.graph.get(id)) else {
            return;
        };

        for hint in node.auto_hide_hints() {
            self.hints
                .show(&HintKey::new(node.id.clone(), hint.direction), now);
        }
    }

    /// 隐藏到期的提示，返回被隐藏的提示
    pub fn tick(&mut self, now: Instant) -> Vec<HintKey> {
        self.hints.tick(now)
    }

    /// 最早的隐藏截止时间
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hints.next_deadline()
    }

    pub fn is_hint_visible(&self, section: &SectionId, direction: HintDirection) -> bool {
        self.hints
            .is_visible(&HintKey::new(section.clone(), direction))
    }

    pub fn hint_timers(&self) -> &HintTimers {
        &self.hints
    }

    /// 点击提示：跳转到构建时确定的目标
    pub fn click_hint(
        &mut self,
        section: &SectionId,
        direction: HintDirection,
        now: Instant,
    ) -> PageResult<()> {
        let target = self
            .graph
            .require(section)?
            .hint(direction)
            .map(|hint| hint.target.clone())
            .ok_or_else(|| {
                PageError::SectionNotFound(format!("{section}#{}", direction.class_name()))
            })?;

        self.scroll_to_section(&target, now)
    }

    /// 交叉观察：可见比例超过阈值时等同于 `scroll_to_section`
    pub fn handle_intersection(
        &mut self,
        entry: &IntersectionEntry,
        now: Instant,
    ) -> PageResult<bool> {
        if !entry.is_intersecting(self.settings.intersection_threshold) {
            return Ok(false);
        }
        self.scroll_to_section(&entry.target, now)?;
        Ok(true)
    }

    /// 键盘导航：↓ / PageDown 下一节，↑ / PageUp 上一节
    pub fn handle_key(&mut self, key: NavKey, now: Instant) -> KeyOutcome {
        match key {
            NavKey::ArrowDown | NavKey::PageDown => {
                log::debug!("down key pressed");
                self.scroll_to_next(now);
                KeyOutcome::PreventDefault
            }
            NavKey::ArrowUp | NavKey::PageUp => {
                log::debug!("up key pressed");
                self.scroll_to_previous(now);
                KeyOutcome::PreventDefault
            }
            NavKey::Other => KeyOutcome::Ignored,
        }
    }

    /// 鼠标移动或滚轮：保持激活节的提示可见
    pub fn pointer_activity(&mut self, now: Instant) {
        self.refresh_hints(now);
    }
}

/// 运行时的导航错误只记录日志并丢弃，不中断页面
pub fn dispatch<T>(result: PageResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            if e.is_expected() {
                log::warn!("Navigation dropped: {e}");
            } else {
                log::error!("Navigation dropped: {e}");
            }
            None
        }
    }
}
