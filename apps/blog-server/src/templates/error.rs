use maud::{Markup, html};

use super::layout;

pub fn page(code: u16, title: &str, message: &str) -> Markup {
    layout::page(
        title,
        html! {
            h1 { (code) " " (title) }
            p { (message) }
            a href="/" { "Back to the blog" }
        },
    )
}
