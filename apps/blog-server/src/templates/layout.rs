//! Page shell and small fragments shared by every page.

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use blog_shared::FormErrors;

pub const SITE_TITLE: &str = "My blog";

const PAGE_CSS: &str = r#"
body{font-family:Georgia,serif;line-height:1.6;color:#222;max-width:760px;margin:0 auto;padding:1rem}
header a{color:#222;text-decoration:none}
a{color:#00abff}
.date,.info{color:#888;font-size:.9rem}
.comment{padding:.5rem 0;border-bottom:1px solid #eee}
.pagination{margin:2rem 0}
.errorlist{color:#c00;margin:.25rem 0;padding-left:1rem}
label{display:block;margin-top:.75rem}
input,textarea{width:100%;max-width:420px}
"#;

/// Full HTML document around `content`.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header {
                    h2 { a href="/" { (SITE_TITLE) } }
                }
                main { (content) }
            }
        }
    }
}

/// e.g. "May 1, 2023".
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Messages for one form field, if it has any.
pub fn field_errors(errors: &FormErrors, field: &str) -> Markup {
    let messages = errors.field(field);
    html! {
        @if !messages.is_empty() {
            ul class="errorlist" {
                @for message in messages {
                    li { (message) }
                }
            }
        }
    }
}

/// Blank-line separated blocks of `text` as paragraphs.
pub fn paragraphs(text: &str) -> Markup {
    html! {
        @for block in text.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
            p {
                @for (i, line) in block.lines().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
        }
    }
}

/// First `max_words` words of `text`, with an ellipsis when cut.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return words.join(" ");
    }
    format!("{} …", words[..max_words].join(" "))
}
