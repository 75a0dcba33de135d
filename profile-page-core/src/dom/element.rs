//! 元素树

use std::fmt::Write;

use askama_escape::{escape, Html};

/// 无闭合标签的元素
const VOID_TAGS: &[&str] = &["br", "img", "link", "meta", "hr", "input"];

/// 树节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// 文本（序列化时转义）
    Text(String),
    /// 原始标记（原样输出）
    Raw(String),
}

/// 元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    // ===== 构建 =====

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    #[must_use]
    pub fn with_raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // ===== 查询 =====

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// 直接子元素
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// 深度优先查找 ID
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    /// 深度优先收集带有指定类名的元素（含自身）
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }

    /// 拼接所有文本节点（不含原始标记）
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Element(el) => text.push_str(&el.text_content()),
                Node::Text(t) => text.push_str(t),
                Node::Raw(_) => {}
            }
        }
        text
    }

    // ===== 序列化 =====

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape(id, Html));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" "), Html));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape(value, Html));
        }

        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push_str(" />");
            return;
        }

        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => {
                    let _ = write!(out, "{}", escape(text, Html));
                }
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_elements() {
        let el = Element::new("section")
            .with_id("about")
            .with_class("active")
            .with_child(Element::new("h1").with_text("Tom & Jerry"))
            .with_child(Element::new("img").with_attr("src", "a\"b.png"))
            .with_raw("<em>raw</em>");

        let html = el.to_html();
        assert!(html.starts_with("<section id=\"about\" class=\"active\"><h1>Tom &amp; Jerry</h1>"));
        assert!(html.ends_with(" /><em>raw</em></section>"));
        assert!(!html.contains("a\"b"));
    }

    #[test]
    fn text_and_attributes_cannot_inject_markup() {
        let el = Element::new("a")
            .with_attr("href", "x\" onclick=\"evil()")
            .with_text("<script>alert(1)</script>");

        let html = el.to_html();
        assert!(!html.contains("\" onclick"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn classes_are_unique_and_removable() {
        let mut el = Element::new("div").with_class("hint").with_class("hint");
        assert_eq!(el.classes(), ["hint"]);
        el.add_class("hidden");
        el.remove_class("hint");
        assert_eq!(el.classes(), ["hidden"]);
    }

    #[test]
    fn finds_descendants() {
        let tree = Element::new("div").with_child(
            Element::new("section")
                .with_id("a")
                .with_child(Element::new("div").with_class("x").with_text("one"))
                .with_child(Element::new("div").with_class("x").with_text("two")),
        );

        assert_eq!(tree.find_by_id("a").map(Element::tag), Some("section"));
        assert!(tree.find_by_id("b").is_none());
        assert_eq!(tree.find_all_by_class("x").len(), 2);
        assert_eq!(tree.text_content(), "onetwo");
    }
}
