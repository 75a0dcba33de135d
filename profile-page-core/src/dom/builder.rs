//! 页面构建：导航图 → 元素树
//!
//! 输出 `<div id="content">`，依次包含个人资料节和各内容节。
//! 可选地把控制器状态（激活节、提示可见性）写入类名。

use crate::assets::IconResolver;
use crate::graph::{NavigationGraph, SectionKind, SectionNode};
use crate::navigation::{HintKey, HintTimers};
use crate::types::{Account, HintDirection, NavHint, ProfileRecord, SectionId};

use super::element::Element;

/// 默认头像尺寸（像素）
pub const DEFAULT_AVATAR_SIZE: u32 = 200;

/// 导航提示中的双箭头图标
pub const ARROW_SVG: &str = concat!(
    r#"<svg width="60" height="60" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
    r#"<path class="arrow-top" d="M7 8L12 13L17 8" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
    r#"<path class="arrow-bottom" d="M7 13L12 18L17 13" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
    "</svg>"
);

/// 页面构建器
pub struct PageBuilder<'a, R: IconResolver> {
    record: &'a ProfileRecord,
    graph: &'a NavigationGraph,
    icons: &'a R,
    avatar_size: u32,
    active: Option<&'a SectionId>,
    hints: Option<&'a HintTimers>,
}

impl<'a, R: IconResolver> PageBuilder<'a, R> {
    pub fn new(record: &'a ProfileRecord, graph: &'a NavigationGraph, icons: &'a R) -> Self {
        Self {
            record,
            graph,
            icons,
            avatar_size: DEFAULT_AVATAR_SIZE,
            active: None,
            hints: None,
        }
    }

    #[must_use]
    pub fn avatar_size(mut self, size: u32) -> Self {
        self.avatar_size = size;
        self
    }

    /// 给该节加上 `active` 类
    #[must_use]
    pub fn active(mut self, id: Option<&'a SectionId>) -> Self {
        self.active = id;
        self
    }

    /// 不可见的提示加上 `hidden` 类
    #[must_use]
    pub fn hint_visibility(mut self, hints: &'a HintTimers) -> Self {
        self.hints = Some(hints);
        self
    }

    /// 构建 `content` 容器
    pub fn build(&self) -> Element {
        let mut content = Element::new("div").with_id("content");
        for node in self.graph.sections() {
            let mut section = match node.kind {
                SectionKind::Profile => self.profile_section(node),
                SectionKind::Content { index } => self.content_section(index, node),
            };
            if self.active == Some(&node.id) {
                section.add_class("active");
            }
            content.push(section);
        }
        content
    }

    fn profile_section(&self, node: &SectionNode) -> Element {
        let mut section = Element::new("section")
            .with_id(node.id.as_str())
            .with_child(
                Element::new("img")
                    .with_class("profile-picture")
                    .with_attr("src", self.record.avatar_url(self.avatar_size))
                    .with_attr("alt", "profile picture"),
            )
            .with_child(Element::new("h1").with_text(&self.record.display_name))
            .with_child(Element::new("p").with_text(&self.record.description));

        let mut links = Element::new("div").with_class("social-links");
        for account in &self.record.accounts {
            links.push(self.account_link(account));
        }
        section.push(links);

        for hint in &node.hints {
            section.push(self.hint(&node.id, hint));
        }
        section
    }

    fn account_link(&self, account: &Account) -> Element {
        let mut img = Element::new("img");
        match self.icons.resolve(account) {
            Some(src) => img = img.with_attr("src", src),
            None => log::warn!("No icon found for account {}", account.name),
        }
        img = img.with_attr("alt", &account.name);

        Element::new("a")
            .with_attr("href", &account.url)
            .with_attr("target", "_blank")
            .with_child(img)
    }

    fn content_section(&self, index: usize, node: &SectionNode) -> Element {
        let source = &self.record.sections[index];

        let mut title = Element::new("div").with_class("section-title");
        for (i, line) in source.title.iter().enumerate() {
            if i > 0 {
                title.push(Element::new("br"));
            }
            title = title.with_text(line);
        }

        let mut section = Element::new("section")
            .with_id(node.id.as_str())
            .with_child(title)
            .with_child(
                Element::new("div")
                    .with_class("section-content")
                    .with_raw(&source.content),
            );

        for hint in &node.hints {
            section.push(self.hint(&node.id, hint));
        }
        section
    }

    fn hint(&self, section: &SectionId, hint: &NavHint) -> Element {
        let mut el = Element::new("div")
            .with_class("section-nav-hint")
            .with_class(hint.direction.class_name())
            .with_attr("data-target", hint.target.as_str());
        if hint.auto_hide {
            el.add_class("auto-hide");
        }
        if let Some(timers) = self.hints {
            if !timers.is_visible(&HintKey::new(section.clone(), hint.direction)) {
                el.add_class("hidden");
            }
        }

        let body = Element::new("div");
        let body = match hint.direction {
            HintDirection::Prev => body
                .with_raw(ARROW_SVG)
                .with_child(Element::new("br"))
                .with_text(&hint.label),
            HintDirection::Next => body
                .with_text(&hint.label)
                .with_child(Element::new("br"))
                .with_raw(ARROW_SVG),
        };
        el.with_child(body)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::assets::AssetCatalog;
    use crate::config::NavigationSettings;
    use crate::navigation::NavigationController;
    use crate::test_utils::{two_section_record, RecordingViewport};

    fn build(record: &ProfileRecord) -> Element {
        let graph = NavigationGraph::build(record).unwrap();
        let icons = AssetCatalog::empty();
        PageBuilder::new(record, &graph, &icons).build()
    }

    #[test]
    fn sections_follow_record_order() {
        let content = build(&two_section_record());
        assert_eq!(content.id(), Some("content"));
        let ids: Vec<_> = content.child_elements().filter_map(Element::id).collect();
        assert_eq!(ids, ["profile", "a", "b"]);
    }

    #[test]
    fn profile_section_shows_avatar_name_and_links() {
        let content = build(&two_section_record());
        let profile = content.find_by_id("profile").unwrap();

        let avatar = profile.find_all_by_class("profile-picture")[0];
        assert_eq!(
            avatar.attr("src"),
            Some("https://www.gravatar.com/avatar/0123abcd?s=200")
        );

        let links = profile.find_all_by_class("social-links")[0];
        let anchors: Vec<_> = links.child_elements().collect();
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].attr("href"), Some("https://github.com/jane"));
        assert_eq!(anchors[0].attr("target"), Some("_blank"));

        // github 只有资源键，空目录无法解析
        let gh_img = anchors[0].child_elements().next().unwrap();
        assert_eq!(gh_img.attr("src"), None);
        assert_eq!(gh_img.attr("alt"), Some("GitHub"));

        let mastodon_img = anchors[1].child_elements().next().unwrap();
        assert_eq!(
            mastodon_img.attr("src"),
            Some("https://cdn.example/mastodon.png")
        );
    }

    #[test]
    fn hints_carry_direction_target_and_auto_hide() {
        let content = build(&two_section_record());

        let profile_hint = content.find_by_id("profile").unwrap().find_all_by_class("section-nav-hint")[0];
        assert!(profile_hint.has_class("next"));
        assert!(!profile_hint.has_class("auto-hide"));
        assert_eq!(profile_hint.attr("data-target"), Some("a"));

        let a_hints = content.find_by_id("a").unwrap().find_all_by_class("section-nav-hint");
        assert_eq!(a_hints.len(), 2);
        assert!(a_hints[0].has_class("prev") && a_hints[0].has_class("auto-hide"));
        assert_eq!(a_hints[0].text_content(), "Profile");
        assert_eq!(a_hints[1].text_content(), "B");
        assert_eq!(a_hints[1].attr("data-target"), Some("b"));

        let b_hints = content.find_by_id("b").unwrap().find_all_by_class("section-nav-hint");
        assert_eq!(b_hints.len(), 1);
        assert_eq!(b_hints[0].text_content(), "A");
    }

    #[test]
    fn content_section_renders_title_lines_and_raw_markup() {
        let mut record = two_section_record();
        record.sections[0].title = vec!["Hello".to_string(), "World".to_string()];
        record.sections[0].content = "<p>raw <b>markup</b></p>".to_string();

        let html = build(&record).find_by_id("hello-world").unwrap().to_html();
        assert!(html.contains(
            "<div class=\"section-title\">Hello<br />World</div>\
             <div class=\"section-content\"><p>raw <b>markup</b></p></div>"
        ));
    }

    #[test]
    fn state_is_reflected_in_classes() {
        let record = two_section_record();
        let graph = NavigationGraph::build(&record).unwrap();
        let mut controller = NavigationController::new(
            graph.clone(),
            RecordingViewport::default(),
            NavigationSettings::default(),
        );
        let t0 = Instant::now();
        controller.initialize(t0).unwrap();
        controller.scroll_to_section(&SectionId::new("a"), t0).unwrap();
        controller.tick(t0 + Duration::from_millis(5000));

        let icons = AssetCatalog::empty();
        let content = PageBuilder::new(&record, &graph, &icons)
            .active(controller.active_section())
            .hint_visibility(controller.hint_timers())
            .build();

        let active = content.find_all_by_class("active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), Some("a"));

        let hidden = content.find_all_by_class("hidden");
        assert_eq!(hidden.len(), 2);
        assert!(content
            .find_by_id("b")
            .unwrap()
            .find_all_by_class("hidden")
            .is_empty());
    }
}
