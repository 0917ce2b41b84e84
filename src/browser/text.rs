//! Reduce an HTML document to its visible text.

/// Strip markup the way a rendered page hides it: comments, `<script>` and
/// `<style>` subtrees disappear, block-level tags become line breaks, the
/// common entities are decoded, and whitespace runs collapse.
pub fn html_to_text(html: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with the original.
    let lower = html.to_ascii_lowercase();
    let mut text = String::with_capacity(html.len() / 2);
    let mut i = 0;

    while i < html.len() {
        if lower.as_bytes()[i] == b'<' {
            if lower[i..].starts_with("<!--") {
                i = lower[i..].find("-->").map(|p| i + p + 3).unwrap_or(html.len());
                continue;
            }
            if let Some(end) = raw_element_end(&lower, i) {
                text.push(' ');
                i = end;
                continue;
            }
            let end = lower[i..].find('>').map(|p| i + p + 1).unwrap_or(html.len());
            if is_block_boundary(&lower[i..end]) {
                text.push('\n');
            } else {
                text.push(' ');
            }
            i = end;
        } else {
            let end = lower[i..].find('<').map(|p| i + p).unwrap_or(html.len());
            text.push_str(&html[i..end]);
            i = end;
        }
    }

    collapse_whitespace(&decode_entities(&text))
}

/// End offset of a `<script>`/`<style>` element starting at `start`, or `None`
/// for any other tag.
fn raw_element_end(lower: &str, start: usize) -> Option<usize> {
    for (open, close) in [("<script", "</script"), ("<style", "</style")] {
        if lower[start..].starts_with(open) {
            return Some(match lower[start..].find(close) {
                Some(p) => {
                    let after = start + p;
                    lower[after..]
                        .find('>')
                        .map(|q| after + q + 1)
                        .unwrap_or(lower.len())
                }
                None => lower.len(),
            });
        }
    }
    None
}

fn is_block_boundary(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    matches!(
        name.as_str(),
        "p" | "br"
            | "div"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "li"
            | "ul"
            | "ol"
            | "tr"
            | "table"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "blockquote"
            | "pre"
    )
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapse whitespace runs to a single space, or a single newline when the
/// run crossed a line break. Leading and trailing whitespace is dropped.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    let mut run_has_newline = false;

    for c in text.chars() {
        if c.is_whitespace() {
            in_run = true;
            if c == '\n' {
                run_has_newline = true;
            }
        } else {
            if in_run && !out.is_empty() {
                out.push(if run_has_newline { '\n' } else { ' ' });
            }
            in_run = false;
            run_has_newline = false;
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_keeps_text() {
        assert_eq!(html_to_text("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_script_and_style_subtrees_disappear() {
        let html = "<head><style>body { color: red }</style></head>\
                    <body><script>var x = '<p>not text</p>';</script>Visible</body>";
        assert_eq!(html_to_text(html), "Visible");
    }

    #[test]
    fn test_block_tags_become_line_breaks() {
        let html = "<h1>Title</h1><p>First</p><p>Second</p>";
        assert_eq!(html_to_text(html), "Title\nFirst\nSecond");
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(html_to_text("a<!-- hidden <p>x</p> -->b"), "ab");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(
            html_to_text("Fish &amp; chips &lt;daily&gt;&nbsp;&quot;fresh&quot;"),
            "Fish & chips <daily> \"fresh\""
        );
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(html_to_text("  a   \n\n   b  "), "a\nb");
    }

    #[test]
    fn test_empty_document_yields_empty_text() {
        assert_eq!(html_to_text("<html><body></body></html>"), "");
    }

    #[test]
    fn test_unclosed_script_consumes_rest() {
        assert_eq!(html_to_text("before<script>var x = 1;"), "before");
    }

    #[test]
    fn test_multibyte_text_survives() {
        assert_eq!(html_to_text("<p>héllo wörld 你好</p>"), "héllo wörld 你好");
    }
}
