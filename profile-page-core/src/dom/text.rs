//! 原始标记 → 纯文本行
//!
//! 供终端等非 HTML 前端显示节内容：块级元素和 `<br>` 换行，
//! 列表项加项目符号，其余标签只保留文字。

use scraper::{ElementRef, Html, Node};

const BLOCK_TAGS: &[&str] = &[
    "p",
    "div",
    "section",
    "article",
    "blockquote",
    "pre",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "table",
    "tr",
];

const SKIPPED_TAGS: &[&str] = &["script", "style", "template"];

const BULLET: &str = "• ";

/// 将原始标记转换为文本行（去掉首尾空行，连续空行合并为一行）
pub fn markup_to_lines(markup: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(markup);
    let mut collector = LineCollector::default();
    collect_children(fragment.root_element(), &mut collector);
    collector.finish()
}

#[derive(Default)]
struct LineCollector {
    lines: Vec<String>,
    current: String,
}

impl LineCollector {
    fn push_text(&mut self, text: &str) {
        let starts_with_space = text.starts_with(char::is_whitespace);
        let ends_with_space = text.ends_with(char::is_whitespace);
        let words: Vec<&str> = text.split_whitespace().collect();

        if words.is_empty() {
            if starts_with_space && !self.current.is_empty() && !self.current.ends_with(' ') {
                self.current.push(' ');
            }
            return;
        }

        if starts_with_space
            && !self.current.is_empty()
            && !self.current.ends_with(' ')
        {
            self.current.push(' ');
        }
        self.current.push_str(&words.join(" "));
        if ends_with_space {
            self.current.push(' ');
        }
    }

    fn push_raw(&mut self, text: &str) {
        self.current.push_str(text);
    }

    /// 结束当前行
    fn break_line(&mut self) {
        let line = self.current.trim_end().to_string();
        self.current.clear();
        self.lines.push(line);
    }

    /// 块级元素边界：当前行非空时换行，并保证有一个空行分隔
    fn block_boundary(&mut self) {
        if !self.current.trim().is_empty() {
            self.break_line();
        } else {
            self.current.clear();
        }
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.trim().is_empty() {
            self.break_line();
        }

        let mut lines: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            let line = line.trim_start().to_string();
            if line.is_empty() && lines.last().is_none_or(String::is_empty) {
                continue;
            }
            lines.push(line);
        }
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }
}

fn collect_children(element: ElementRef<'_>, out: &mut LineCollector) {
    for child in element.children() {
        match child.value() {
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    collect_element(el, out);
                }
            }
            Node::Text(text) => out.push_text(text),
            _ => {}
        }
    }
}

fn collect_element(element: ElementRef<'_>, out: &mut LineCollector) {
    let tag = element.value().name();

    if SKIPPED_TAGS.contains(&tag) {
        return;
    }

    match tag {
        "br" => out.break_line(),
        "li" => {
            if !out.current.trim().is_empty() {
                out.break_line();
            }
            out.current.clear();
            out.push_raw(BULLET);
            collect_children(element, out);
            out.break_line();
        }
        "img" => {
            if let Some(alt) = element.value().attr("alt").filter(|alt| !alt.is_empty()) {
                out.push_text(&format!("[{alt}]"));
            }
        }
        _ if BLOCK_TAGS.contains(&tag) => {
            out.block_boundary();
            collect_children(element, out);
            out.block_boundary();
        }
        _ => collect_children(element, out),
    }
}
