//! Minimal markdown-to-HTML conversion for agent text blocks
//!
//! Covers what the agent actually emits: headings, paragraphs, bullet and
//! numbered lists, fenced code, bold, italic and inline code. All text is
//! HTML-escaped before any markup is added.

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    const fn open(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    const fn close(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

/// Render markdown source into an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let mut html_output = String::new();
    let mut in_code_block = false;
    let mut code_content = String::new();
    let mut open_list: Option<ListKind> = None;

    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            close_list(&mut html_output, &mut open_list);
            if in_code_block {
                push_code_block(&mut html_output, &code_content);
                code_content.clear();
                in_code_block = false;
            } else {
                in_code_block = true;
            }
            continue;
        }

        if in_code_block {
            if !code_content.is_empty() {
                code_content.push('\n');
            }
            code_content.push_str(line);
            continue;
        }

        if let Some((kind, item)) = list_item(line) {
            if open_list != Some(kind) {
                close_list(&mut html_output, &mut open_list);
                html_output.push_str(kind.open());
                open_list = Some(kind);
            }
            html_output.push_str("<li>");
            html_output.push_str(&render_inline(item));
            html_output.push_str("</li>");
            continue;
        }

        close_list(&mut html_output, &mut open_list);

        if let Some(rest) = line.strip_prefix("### ") {
            html_output.push_str(&format!("<h3>{}</h3>", render_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("## ") {
            html_output.push_str(&format!("<h2>{}</h2>", render_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("# ") {
            html_output.push_str(&format!("<h1>{}</h1>", render_inline(rest)));
        } else if line.trim().is_empty() {
            if !html_output.is_empty()
                && !html_output.ends_with("</p>")
                && !html_output.ends_with("</pre>")
                && !html_output.ends_with("<br>")
            {
                html_output.push_str("<br>");
            }
        } else {
            html_output.push_str("<p>");
            html_output.push_str(&render_inline(line));
            html_output.push_str("</p>");
        }
    }

    close_list(&mut html_output, &mut open_list);

    // Unclosed fences still show their content
    if in_code_block {
        push_code_block(&mut html_output, &code_content);
    }

    html_output
}

fn push_code_block(out: &mut String, code: &str) {
    out.push_str("<pre><code>");
    out.push_str(&html_escape(code));
    out.push_str("</code></pre>");
}

fn close_list(out: &mut String, open_list: &mut Option<ListKind>) {
    if let Some(kind) = open_list.take() {
        out.push_str(kind.close());
    }
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| trimmed.strip_prefix("+ "))
    {
        return Some((ListKind::Unordered, rest));
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &trimmed[digits..];
        if let Some(item) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return Some((ListKind::Ordered, item));
        }
    }
    None
}

fn render_inline(text: &str) -> String {
    let escaped = html_escape(text);
    let parts: Vec<&str> = escaped.split('`').collect();
    let code_end = (parts.len() - 1) / 2 * 2;

    // Emphasis is only applied to the prose between code spans.
    let mut result = String::new();
    let mut prose = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 && i < code_end {
            result.push_str(&render_emphasis(&prose));
            prose.clear();
            result.push_str("<code>");
            result.push_str(part);
            result.push_str("</code>");
        } else {
            if i > code_end {
                prose.push('`');
            }
            prose.push_str(part);
        }
    }
    result.push_str(&render_emphasis(&prose));
    result
}

fn render_emphasis(text: &str) -> String {
    let with_bold = replace_pattern(text, "**", "<strong>", "</strong>");
    replace_pattern(&with_bold, "*", "<em>", "</em>")
}

fn replace_pattern(text: &str, delimiter: &str, open_tag: &str, close_tag: &str) -> String {
    let parts: Vec<&str> = text.split(delimiter).collect();
    if parts.len() < 3 {
        return text.to_string();
    }

    // An odd delimiter count leaves the last one literal.
    let pairs = (parts.len() - 1) / 2;
    let mut result = String::new();

    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            result.push_str(part);
        } else if i > pairs * 2 {
            result.push_str(delimiter);
            result.push_str(part);
        } else if i % 2 == 1 {
            result.push_str(open_tag);
            result.push_str(part);
        } else {
            result.push_str(close_tag);
            result.push_str(part);
        }
    }

    result
}

/// Escape the five HTML-significant characters.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
