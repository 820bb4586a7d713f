use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Wraps an SVG document in a CSS `url(...)` holding a base64 data URI.
pub fn svg_data_url(svg: &str) -> String {
    format!("url(\"data:image/svg+xml;base64,{}\")", STANDARD.encode(svg.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_data_url_is_base64() {
        let url = svg_data_url("<svg/>");
        assert_eq!(url, "url(\"data:image/svg+xml;base64,PHN2Zy8+\")");
    }

    #[test]
    fn test_svg_data_url_trims_whitespace() {
        assert_eq!(svg_data_url("\n  <svg/>\n"), svg_data_url("<svg/>"));
    }
}
