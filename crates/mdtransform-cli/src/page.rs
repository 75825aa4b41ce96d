use html_escape::encode_text;
use mdtransform_engine::Rendered;

/// Wraps a rendered document in a minimal HTML5 page: table of contents
/// first, then the body.
pub fn html_page(title: &str, rendered: &Rendered) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    out.push_str(&encode_text(title));
    out.push_str("</title>\n</head>\n<body>\n");
    if !rendered.toc.is_empty() {
        out.push_str("<nav>");
        out.push_str(&rendered.toc);
        out.push_str("</nav>\n");
    }
    out.push_str(&rendered.body);
    out.push_str("\n</body>\n</html>\n");
    out
}
