use pulldown_cmark::{Options, Parser, html};

/// Render markdown to raw HTML.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Wrap HTML in the font tags HelpView understands.
pub fn wrap_html_for_helpview(html: &str) -> String {
    format!("<font face=\"Helvetica\" size=\"4\">{}</font>", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading_and_emphasis() {
        let html = render_markdown("# Title\n\nSome *emphasis* here.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_render_list() {
        let html = render_markdown("- one\n- two\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_wrap_sets_helpview_font() {
        let wrapped = wrap_html_for_helpview("<p>x</p>");
        assert!(wrapped.starts_with("<font"));
        assert!(wrapped.ends_with("</font>"));
        assert!(wrapped.contains("<p>x</p>"));
    }
}
