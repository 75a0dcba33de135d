//! 终端视口
//!
//! 所有节纵向堆叠，每节恰好占满一屏（`page_height` 行）。视口记录当前
//! 滚动偏移，平滑滚动由主循环的每次 Tick 推进一步。
//!
//!     offset = 0           ┌───────────────┐ ─┐
//!                          │   profile     │  │ page_height
//!     offset = h           ├───────────────┤ ─┘
//!                          │   section a   │
//!     offset = 2h          ├───────────────┤
//!                          │   section b   │
//!                          └───────────────┘
//!
//! 每节的第一行是“上一节”提示，最后一行是“下一节”提示。

use profile_page_core::{HintDirection, ScrollBehavior, SectionId, Viewport};

/// 每步移动剩余距离的 1/SMOOTH_DIVISOR（至少一行）
const SMOOTH_DIVISOR: u32 = 3;

/// 终端视口
#[derive(Debug, Clone)]
pub struct TerminalViewport {
    section_count: usize,
    page_height: u16,
    /// 视口顶部所在的行（页面坐标）
    offset: u32,
    /// 平滑滚动的目标行
    target: Option<u32>,
    threshold: f32,
    /// 上一次检查时各节是否越过阈值
    intersecting: Vec<bool>,
}

impl TerminalViewport {
    pub fn new(section_count: usize, page_height: u16, threshold: f32) -> Self {
        let mut viewport = Self {
            section_count,
            page_height: page_height.max(1),
            offset: 0,
            target: None,
            threshold,
            intersecting: vec![false; section_count],
        };
        viewport.take_crossings();
        viewport
    }

    pub fn page_height(&self) -> u16 {
        self.page_height
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn is_scrolling(&self) -> bool {
        self.target().is_some()
    }

    /// 节 `position` 的顶部行
    pub fn section_top(&self, position: usize) -> u32 {
        u32::try_from(position)
            .unwrap_or(u32::MAX)
            .saturating_mul(u32::from(self.page_height))
    }

    fn max_offset(&self) -> u32 {
        self.section_top(self.section_count.saturating_sub(1))
    }

    /// 终端尺寸变化：保持当前所在的节，丢弃本次变化引起的交叉
    pub fn resize(&mut self, page_height: u16) {
        let page_height = page_height.max(1);
        if page_height == self.page_height {
            return;
        }

        let old = u32::from(self.page_height);
        let current = (self.offset + old / 2) / old;
        let pending = self.target.map(|target| target / old);

        self.page_height = page_height;
        let new = u32::from(page_height);
        self.offset = (current * new).min(self.max_offset());
        self.target = pending.map(|section| (section * new).min(self.max_offset()));
        self.take_crossings();
    }

    /// 滚轮：按方向吸附到下一个节边界（相当于强制 scroll-snap）
    pub fn scroll_by(&mut self, rows: i32) {
        if rows == 0 {
            return;
        }

        let h = u32::from(self.page_height);
        let distance = rows.unsigned_abs();
        let snapped = if rows > 0 {
            self.offset.saturating_add(distance).div_ceil(h) * h
        } else {
            self.offset.saturating_sub(distance) / h * h
        };
        self.target = Some(snapped.min(self.max_offset()));
    }

    /// 平滑滚动推进一步；返回是否移动
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let delta = self.offset.abs_diff(target).div_ceil(SMOOTH_DIVISOR);
        if target > self.offset {
            self.offset += delta;
        } else {
            self.offset -= delta;
        }

        if self.offset == target {
            self.target = None;
        }
        delta > 0
    }

    /// 节 `position` 在视口内的可见比例
    #[allow(clippy::cast_precision_loss)]
    pub fn visible_ratio(&self, position: usize) -> f32 {
        let h = u32::from(self.page_height);
        let top = self.section_top(position);
        let bottom = top.saturating_add(h);
        let view_bottom = self.offset.saturating_add(h);

        let visible = bottom.min(view_bottom).saturating_sub(top.max(self.offset));
        visible as f32 / h as f32
    }

    /// 自上次检查以来可见比例向上越过阈值的节
    ///
    /// 只报告从“未越过”到“越过”的变化，与浏览器交叉观察器的
    /// `isIntersecting` 翻转一致。平滑滚动途中只报告目标节，
    /// 途经的节不会把滚动拉回去。
    pub fn take_crossings(&mut self) -> Vec<(usize, f32)> {
        let h = u32::from(self.page_height);
        let heading_to = self
            .target
            .and_then(|target| usize::try_from(target / h).ok());

        let mut crossed = Vec::new();
        for position in 0..self.section_count {
            let ratio = self.visible_ratio(position);
            let intersecting = ratio > self.threshold;
            let reportable = !matches!(heading_to, Some(target) if target != position);
            if intersecting && !self.intersecting[position] && reportable {
                crossed.push((position, ratio));
            }
            self.intersecting[position] = intersecting;
        }
        crossed
    }

    /// 当前出现在视口中的节：`(position, 节顶部相对视口顶部的行偏移)`
    pub fn visible_sections(&self) -> Vec<(usize, i64)> {
        let first = self.offset / u32::from(self.page_height);
        let Ok(first) = usize::try_from(first) else {
            return Vec::new();
        };

        (first..self.section_count)
            .take(2)
            .filter(|&position| self.visible_ratio(position) > 0.0)
            .map(|position| {
                let top = i64::from(self.section_top(position)) - i64::from(self.offset);
                (position, top)
            })
            .collect()
    }

    /// 屏幕行 → `(position, 节内行号)`
    pub fn locate(&self, row: u16) -> Option<(usize, u16)> {
        if row >= self.page_height {
            return None;
        }
        let h = u32::from(self.page_height);
        let absolute = self.offset.checked_add(u32::from(row))?;
        let position = usize::try_from(absolute / h).ok()?;
        if position >= self.section_count {
            return None;
        }
        Some((position, u16::try_from(absolute % h).ok()?))
    }

    /// 屏幕行上的提示：节首行为上一节，末行为下一节
    pub fn hint_at(&self, row: u16) -> Option<(usize, HintDirection)> {
        let (position, line) = self.locate(row)?;
        if line + 1 == self.page_height {
            Some((position, HintDirection::Next))
        } else if line == 0 {
            Some((position, HintDirection::Prev))
        } else {
            None
        }
    }
}

impl Viewport for TerminalViewport {
    fn scroll_into_view(&mut self, id: &SectionId, position: usize, behavior: ScrollBehavior) {
        let top = self.section_top(position).min(self.max_offset());
        log::trace!("scrolling {id} into view at row {top}");
        match behavior {
            ScrollBehavior::Smooth => self.target = Some(top),
            ScrollBehavior::Instant => {
                self.offset = top;
                self.target = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> TerminalViewport {
        TerminalViewport::new(3, 20, 0.4)
    }

    fn settle(viewport: &mut TerminalViewport) -> Vec<(usize, f32)> {
        let mut crossings = Vec::new();
        while viewport.step() {
            crossings.extend(viewport.take_crossings());
        }
        crossings
    }

    #[test]
    fn starts_at_profile_without_pending_crossings() {
        let mut vp = viewport();
        assert_eq!(vp.offset(), 0);
        assert!((vp.visible_ratio(0) - 1.0).abs() < f32::EPSILON);
        assert!(vp.take_crossings().is_empty());
    }

    #[test]
    fn smooth_scroll_reports_only_the_target() {
        let mut vp = viewport();
        vp.scroll_into_view(&SectionId::new("b"), 2, ScrollBehavior::Smooth);
        assert!(vp.is_scrolling());

        let crossings = settle(&mut vp);
        assert_eq!(vp.offset(), 40);
        assert!(!vp.is_scrolling());

        // 途经的 a 不报告
        let positions: Vec<usize> = crossings.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, [2]);
        assert!(crossings[0].1 > 0.4);
    }

    #[test]
    fn instant_scroll_jumps() {
        let mut vp = viewport();
        vp.scroll_into_view(&SectionId::new("a"), 1, ScrollBehavior::Instant);
        assert_eq!(vp.offset(), 20);
        assert!(!vp.step());
    }

    #[test]
    fn wheel_snaps_to_neighbouring_section() {
        let mut vp = viewport();
        vp.scroll_by(3);
        assert_eq!(vp.target(), Some(20));
        settle(&mut vp);

        vp.scroll_by(-3);
        assert_eq!(vp.target(), Some(0));

        // 越界时停在最后一节
        let mut vp = viewport();
        vp.scroll_into_view(&SectionId::new("b"), 2, ScrollBehavior::Instant);
        vp.scroll_by(3);
        assert_eq!(vp.target(), Some(40));
    }

    #[test]
    fn visible_sections_between_pages() {
        let mut vp = viewport();
        vp.scroll_into_view(&SectionId::new("a"), 1, ScrollBehavior::Smooth);
        vp.step();
        let offset = i64::from(vp.offset());
        assert_eq!(vp.visible_sections(), [(0, -offset), (1, 20 - offset)]);
    }

    #[test]
    fn hint_rows_map_to_sections() {
        let mut vp = viewport();
        assert_eq!(vp.hint_at(0), Some((0, HintDirection::Prev)));
        assert_eq!(vp.hint_at(19), Some((0, HintDirection::Next)));
        assert_eq!(vp.hint_at(5), None);
        assert_eq!(vp.hint_at(20), None);

        vp.scroll_into_view(&SectionId::new("a"), 1, ScrollBehavior::Instant);
        assert_eq!(vp.hint_at(0), Some((1, HintDirection::Prev)));
    }

    #[test]
    fn resize_keeps_current_section() {
        let mut vp = viewport();
        vp.scroll_into_view(&SectionId::new("a"), 1, ScrollBehavior::Instant);
        vp.take_crossings();

        vp.resize(30);
        assert_eq!(vp.offset(), 30);
        assert!(vp.take_crossings().is_empty());
    }
}
