//! Branding block: page header and logo.
//!
//! Stateless, takes nothing from the core, always rendered.

/// Render the header and logo markup.
pub fn render() -> String {
    format!("{}\n{}", page_header(), logo())
}

fn page_header() -> String {
    "<header class=\"page-header\"><h1>Yoga For First Responders</h1></header>".to_string()
}

fn logo() -> String {
    "<img class=\"yffr-logo\" src=\"/assets/yffr-logo.svg\" alt=\"YFFR\">".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_header_and_logo() {
        let html = render();
        assert_eq!(html.matches("page-header").count(), 1);
        assert_eq!(html.matches("yffr-logo").count(), 1);
    }
}
