//! Iframe markup for an embed reference.

use crate::config::EmbedConfig;

/// Escapes text for use inside a double-quoted HTML attribute or element body.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the player iframe for `embed_url`, wrapped in a container div.
pub fn iframe_html(config: &EmbedConfig, embed_url: &str) -> String {
    let mut attrs = vec![
        format!("src=\"{}\"", escape_html(embed_url)),
        format!("title=\"{}\"", escape_html(&config.iframe_title)),
        format!("frameborder=\"{}\"", config.frameborder),
        format!("allow=\"{}\"", escape_html(&config.allow)),
        format!("referrerpolicy=\"{}\"", escape_html(&config.referrer_policy)),
    ];
    if config.allow_fullscreen {
        attrs.push("allowfullscreen".to_string());
    }

    let mut html = format!("<div class=\"{}\">\n  <iframe", escape_html(&config.wrapper_class));
    for attr in &attrs {
        html.push_str("\n    ");
        html.push_str(attr);
    }
    html.push_str(">\n  </iframe>\n</div>\n");
    html
}
