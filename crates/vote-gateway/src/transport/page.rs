//! Voting page renderer.

use std::fmt::Write;

/// Everything the page shows.
#[derive(Debug)]
pub struct PageContext<'a> {
    pub option_a: &'a str,
    pub option_b: &'a str,
    pub hostname: &'a str,
    pub vote: Option<&'a str>,
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn option_button(out: &mut String, id: &str, label: &str, selected: bool) {
    let label = escape_html(label);
    if selected {
        let _ = writeln!(
            out,
            r#"      <button id="{id}" class="selected" type="submit" name="vote" value="{label}" disabled>{label} <i>&#10004;</i></button>"#
        );
    } else {
        let _ = writeln!(
            out,
            r#"      <button id="{id}" type="submit" name="vote" value="{label}">{label}</button>"#
        );
    }
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let a = escape_html(ctx.option_a);
    let b = escape_html(ctx.option_b);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(out, "  <title>{a} vs {b}!</title>");
    out.push_str("  <link rel=\"stylesheet\" href=\"/static/stylesheets/style.css\">\n");
    out.push_str("</head>\n<body>\n");
    out.push_str("  <div id=\"content-container\">\n");
    let _ = writeln!(out, "    <h3>{a} vs {b}!</h3>");
    out.push_str("    <form id=\"choice\" name=\"form\" method=\"POST\" action=\"/\">\n");
    option_button(&mut out, "a", ctx.option_a, ctx.vote == Some(ctx.option_a));
    option_button(&mut out, "b", ctx.option_b, ctx.vote == Some(ctx.option_b));
    out.push_str("    </form>\n");
    out.push_str("    <div id=\"tip\">(Tip: you can change your vote)</div>\n");
    let _ = writeln!(
        out,
        "    <div id=\"hostname\">Processed by container ID {}</div>",
        escape_html(ctx.hostname)
    );
    out.push_str("  </div>\n</body>\n</html>\n");
    out
}
