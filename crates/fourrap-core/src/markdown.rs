//! Line-oriented markdown subset used for post bodies.
//!
//! Each line maps to exactly one block through a fixed prefix table. There
//! is no multi-line structure: consecutive list items stay separate blocks.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// `![alt](url)`; `alt` doubles as the caption.
    Image { alt: String, url: String },
    Heading2 { text: String },
    Heading3 { text: String },
    BulletItem { text: String },
    NumberedItem { text: String },
    Quote { text: String },
    LineBreak,
    Paragraph { text: String },
}

/// Render a whole body, one block per `\n`-separated line.
pub fn render(content: &str) -> Vec<Block> {
    content.split('\n').map(render_line).collect()
}

/// Apply the rule table to a single line. First matching rule wins.
pub fn render_line(line: &str) -> Block {
    if line.trim().starts_with("![") && line.contains("](") {
        if let Some(caps) = IMAGE.captures(line) {
            return Block::Image {
                alt: caps[1].to_string(),
                url: caps[2].to_string(),
            };
        }
    }

    if let Some(rest) = line.strip_prefix("## ") {
        Block::Heading2 { text: rest.to_string() }
    } else if let Some(rest) = line.strip_prefix("### ") {
        Block::Heading3 { text: rest.to_string() }
    } else if let Some(rest) = line.strip_prefix("* ") {
        Block::BulletItem { text: rest.to_string() }
    } else if let Some(rest) = line.strip_prefix("1. ") {
        Block::NumberedItem { text: rest.to_string() }
    } else if let Some(rest) = line.strip_prefix("> ") {
        Block::Quote { text: rest.to_string() }
    } else if line.trim().is_empty() {
        Block::LineBreak
    } else {
        Block::Paragraph { text: line.to_string() }
    }
}

/// Render blocks as an HTML fragment, one element per block.
pub fn to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        let element = match block {
            Block::Image { alt, url } if alt.is_empty() => {
                format!("<figure><img src=\"{}\" alt=\"\"></figure>", escape(url))
            }
            Block::Image { alt, url } => format!(
                "<figure><img src=\"{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>",
                escape(url),
                escape(alt),
                escape(alt)
            ),
            Block::Heading2 { text } => format!("<h2>{}</h2>", escape(text)),
            Block::Heading3 { text } => format!("<h3>{}</h3>", escape(text)),
            Block::BulletItem { text } => format!("<li class=\"bullet\">{}</li>", escape(text)),
            Block::NumberedItem { text } => format!("<li class=\"numbered\">{}</li>", escape(text)),
            Block::Quote { text } => format!("<blockquote>{}</blockquote>", escape(text)),
            Block::LineBreak => "<br>".to_string(),
            Block::Paragraph { text } => format!("<p>{}</p>", escape(text)),
        };
        html.push_str(&element);
        html.push('\n');
    }
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
