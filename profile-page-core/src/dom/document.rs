//! 完整 HTML 文档（静态导出使用）
//!
//! 文档外壳由 `templates/document.html` 提供，标题与链接由 askama 转义；
//! `div#content` 已由元素树序列化，以 `|safe` 原样嵌入。

use askama::Template;

use super::element::Element;
use crate::error::PageResult;

/// 默认 robots.txt
pub const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";

/// 文档选项
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// `<title>`
    pub title: String,
    /// 站点图标地址
    pub favicon: Option<String>,
    /// 样式表地址
    pub stylesheet: Option<String>,
    /// 语言代码
    pub lang: Option<String>,
}

#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    lang: &'a str,
    title: &'a str,
    favicon: Option<&'a str>,
    stylesheet: Option<&'a str>,
    body: String,
}

/// 把 `content` 容器包进完整的 HTML 文档
pub fn render_document(content: &Element, options: &DocumentOptions) -> PageResult<String> {
    let template = DocumentTemplate {
        lang: options.lang.as_deref().unwrap_or("en"),
        title: &options.title,
        favicon: options.favicon.as_deref(),
        stylesheet: options.stylesheet.as_deref(),
        body: content.to_html(),
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_content_with_head() {
        let content = Element::new("div").with_id("content");
        let html = render_document(
            &content,
            &DocumentOptions {
                title: "Jane <Doe>".to_string(),
                favicon: Some("favicon.ico".to_string()),
                stylesheet: None,
                lang: None,
            },
        )
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>Jane &lt;Doe&gt;</title>"));
        assert!(html.contains("<link rel=\"icon\" href=\"favicon.ico\" />"));
        assert!(!html.contains("stylesheet"));
        assert!(html.contains("<body><div id=\"content\"></div></body>"));
    }

    #[test]
    fn body_markup_is_embedded_unescaped_while_head_values_are_escaped() {
        let content = Element::new("div")
            .with_id("content")
            .with_child(Element::new("p").with_text("Tom & Jerry"));
        let html = render_document(
            &content,
            &DocumentOptions {
                title: "A & B".to_string(),
                favicon: None,
                stylesheet: Some("site.css?v=1&x=2".to_string()),
                lang: Some("de".to_string()),
            },
        )
        .unwrap();

        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("href=\"site.css?v=1&amp;x=2\""));
        assert!(!html.contains("rel=\"icon\""));
        assert!(html.contains("<div id=\"content\"><p>Tom &amp; Jerry</p></div>"));
        assert!(!html.contains("&lt;div"));
    }
}
