use pulldown_cmark::{html, Options, Parser};

/// 將靜態 Markdown 內容轉成 HTML 片段
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_lists_and_emphasis() {
        let html = render_markdown("I'm a **Software Engineer**\n\n- Machine Learning\n- Data Science\n");
        assert!(html.contains("<strong>Software Engineer</strong>"));
        assert!(html.contains("<li>Machine Learning</li>"));
        assert!(html.contains("<li>Data Science</li>"));
    }

    #[test]
    fn test_render_markdown_links() {
        let html = render_markdown("[Alex Rivera](https://linkedin.com/in/alexrivera)");
        assert!(html.contains(r#"<a href="https://linkedin.com/in/alexrivera">Alex Rivera</a>"#));
    }
}
